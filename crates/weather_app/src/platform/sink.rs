use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;
use serde::Serialize;
use weather_core::{DeviceInfo, FeatureTarget};
use weather_engine::PublishSink;
use weather_logging::scrape_warn;

#[derive(Serialize)]
struct Announcement<'a> {
    topic: &'a str,
    meta: &'a DeviceInfo,
}

#[derive(Serialize)]
struct Update<'a> {
    topic: &'a str,
    feature: &'a str,
    value: &'a str,
    at: String,
}

/// Publishes one JSON object per line to a writer (stdout in production).
pub struct JsonLinesSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_line<T: Serialize>(&self, record: &T) -> io::Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("sink writer poisoned"))?;
        out.write_all(&line)?;
        out.flush()
    }
}

impl PublishSink for JsonLinesSink {
    fn announce(&self, device: &DeviceInfo) -> io::Result<()> {
        self.write_line(&Announcement {
            topic: &device.topic,
            meta: device,
        })
    }

    fn publish(&self, target: &FeatureTarget, value: &str) {
        let update = Update {
            topic: &target.topic,
            feature: target.feature,
            value,
            at: Utc::now().to_rfc3339(),
        };
        if let Err(err) = self.write_line(&update) {
            scrape_warn!("failed to publish {}: {}", target, err);
        }
    }
}
