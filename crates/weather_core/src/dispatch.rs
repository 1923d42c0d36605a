use std::fmt;

use crate::{DeviceKind, Measurement};

/// Where a routed measurement value is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTarget {
    pub device: DeviceKind,
    pub topic: String,
    pub feature: &'static str,
}

impl fmt::Display for FeatureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.topic, self.feature)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Route {
    name: &'static str,
    unit: Option<&'static str>,
    device: DeviceKind,
    feature: &'static str,
}

impl Route {
    const fn new(name: &'static str, device: DeviceKind, feature: &'static str) -> Self {
        Self {
            name,
            unit: None,
            device,
            feature,
        }
    }

    const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    fn matches(&self, measurement: &Measurement) -> bool {
        self.name == measurement.name && self.unit.map_or(true, |unit| unit == measurement.unit)
    }
}

const ROUTES: &[Route] = &[
    Route::new("temperature", DeviceKind::Temperature, "currentTemperature"),
    Route::new("air humidity", DeviceKind::Humidity, "currentRelativeHumidity"),
    // Two rows share this name; only the disdrometer reading is published.
    Route::new("precipitation last hour", DeviceKind::Weather, "precipitation")
        .with_unit("mm (disdrometer)"),
    Route::new("wind speed", DeviceKind::Weather, "windSpeed"),
    Route::new("wind direction", DeviceKind::Weather, "windDirection"),
    Route::new("air pressure", DeviceKind::Weather, "airPressure"),
    Route::new("global radiation", DeviceKind::Weather, "globalRadiation"),
];

/// Static mapping from measurement names to downstream features.
///
/// Read-only once built; unmatched measurements route to `None`.
#[derive(Debug, Clone)]
pub struct DispatchMap {
    device_name: String,
    routes: &'static [Route],
}

impl DispatchMap {
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            routes: ROUTES,
        }
    }

    pub fn route(&self, measurement: &Measurement) -> Option<FeatureTarget> {
        self.routes
            .iter()
            .find(|route| route.matches(measurement))
            .map(|route| FeatureTarget {
                device: route.device,
                topic: route.device.topic(&self.device_name),
                feature: route.feature,
            })
    }
}
