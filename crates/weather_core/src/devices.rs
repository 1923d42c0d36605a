use serde::Serialize;

/// The logical devices the scraper publishes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceKind {
    Temperature,
    Humidity,
    Weather,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 3] = [
        DeviceKind::Temperature,
        DeviceKind::Humidity,
        DeviceKind::Weather,
    ];

    fn topic_segment(self) -> &'static str {
        match self {
            DeviceKind::Temperature => "temperature",
            DeviceKind::Humidity => "humidity",
            DeviceKind::Weather => "weather",
        }
    }

    fn display_suffix(self) -> &'static str {
        match self {
            DeviceKind::Temperature => "Temperature",
            DeviceKind::Humidity => "Relative Humidity",
            DeviceKind::Weather => "Weather",
        }
    }

    fn device_type(self) -> &'static str {
        match self {
            DeviceKind::Temperature => "temperatureSensor",
            DeviceKind::Humidity => "humiditySensor",
            DeviceKind::Weather => "weatherStation",
        }
    }

    fn features(self) -> Vec<FeatureInfo> {
        match self {
            DeviceKind::Temperature => vec![FeatureInfo::plain("currentTemperature")],
            DeviceKind::Humidity => vec![FeatureInfo::plain("currentRelativeHumidity")],
            DeviceKind::Weather => vec![
                FeatureInfo::plain("precipitation"),
                FeatureInfo::plain("airPressure"),
                FeatureInfo::plain("globalRadiation"),
                FeatureInfo::plain("windSpeed"),
                FeatureInfo {
                    name: "windDirection",
                    range: Some(FeatureRange {
                        min: 0,
                        max: 360,
                        step: 1,
                    }),
                },
            ],
        }
    }

    /// Topic under which this device lives for the given device name.
    pub fn topic(self, device_name: &str) -> String {
        format!("sensor/{}/{}", self.topic_segment(), device_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureInfo {
    pub name: &'static str,
    #[serde(flatten)]
    pub range: Option<FeatureRange>,
}

impl FeatureInfo {
    fn plain(name: &'static str) -> Self {
        Self { name, range: None }
    }
}

/// Metadata announced to the sink before any value is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub kind: DeviceKind,
    pub topic: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: &'static str,
    pub features: Vec<FeatureInfo>,
}

impl DeviceInfo {
    pub fn new(kind: DeviceKind, device_name: &str) -> Self {
        Self {
            kind,
            topic: kind.topic(device_name),
            name: format!("{} {}", device_name, kind.display_suffix()),
            device_type: kind.device_type(),
            features: kind.features(),
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.name == feature)
    }
}

/// All devices for one device name, in a stable order.
pub fn device_catalog(device_name: &str) -> Vec<DeviceInfo> {
    DeviceKind::ALL
        .iter()
        .map(|kind| DeviceInfo::new(*kind, device_name))
        .collect()
}
