use std::io;
use std::sync::Mutex;

use weather_core::{DeviceInfo, FeatureTarget};

/// Downstream publisher of routed values.
///
/// Delivery guarantees, encoding and retries belong to the implementation;
/// the scrape loop only hands values over in order.
pub trait PublishSink: Send + Sync {
    /// Registers a device before any of its features is published.
    fn announce(&self, device: &DeviceInfo) -> io::Result<()>;

    fn publish(&self, target: &FeatureTarget, value: &str);
}

/// A published value as recorded by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub topic: String,
    pub feature: &'static str,
    pub value: String,
}

/// Keeps everything in memory; useful for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    devices: Mutex<Vec<DeviceInfo>>,
    publications: Mutex<Vec<Publication>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> Vec<DeviceInfo> {
        self.devices.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn take(&self) -> Vec<Publication> {
        self.publications
            .lock()
            .map(|mut p| p.drain(..).collect())
            .unwrap_or_default()
    }
}

impl PublishSink for RecordingSink {
    fn announce(&self, device: &DeviceInfo) -> io::Result<()> {
        let mut devices = self
            .devices
            .lock()
            .map_err(|_| io::Error::other("recording sink poisoned"))?;
        devices.push(device.clone());
        Ok(())
    }

    fn publish(&self, target: &FeatureTarget, value: &str) {
        if let Ok(mut publications) = self.publications.lock() {
            publications.push(Publication {
                topic: target.topic.clone(),
                feature: target.feature,
                value: value.to_string(),
            });
        }
    }
}
