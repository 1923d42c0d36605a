use std::time::Duration;

use url::Url;

pub const DEFAULT_URL: &str = "http://celsius.met.uu.se/geocelsiuswww/obs_uppsala.htm";
pub const DEFAULT_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_DEVICE_NAME: &str = "outside";
pub const MIN_INTERVAL_SECS: u64 = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("scrape interval must be >= {MIN_INTERVAL_SECS} second(s), got {0}")]
    IntervalTooSmall(u64),
    #[error("invalid scrape url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("device name must not be empty")]
    EmptyDeviceName,
}

/// Validated settings for the scrape loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    url: Url,
    interval: Duration,
    device_name: String,
}

impl ScrapeConfig {
    pub fn new(url: &str, interval_secs: u64, device_name: &str) -> Result<Self, ConfigError> {
        if interval_secs < MIN_INTERVAL_SECS {
            return Err(ConfigError::IntervalTooSmall(interval_secs));
        }

        let url = parse_source_url(url)?;

        let device_name = device_name.trim();
        if device_name.is_empty() {
            return Err(ConfigError::EmptyDeviceName);
        }

        Ok(Self {
            url,
            interval: Duration::from_secs(interval_secs),
            device_name: device_name.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

fn parse_source_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
