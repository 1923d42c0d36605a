//! Weather core: measurement normalization, routing and the pure shutdown state machine.
mod config;
mod devices;
mod dispatch;
mod effect;
mod measurement;
mod msg;
mod state;
mod update;

pub use config::{
    ConfigError, ScrapeConfig, DEFAULT_DEVICE_NAME, DEFAULT_INTERVAL_SECS, DEFAULT_URL,
    MIN_INTERVAL_SECS,
};
pub use devices::{device_catalog, DeviceInfo, DeviceKind, FeatureInfo, FeatureRange};
pub use dispatch::{DispatchMap, FeatureTarget};
pub use effect::Effect;
pub use measurement::{Measurement, RawRow, RowNormalizer, ROW_CELLS};
pub use msg::Msg;
pub use state::SchedulerState;
pub use update::update;
