use std::time::Duration;

use weather_core::{ConfigError, ScrapeConfig, DEFAULT_URL};

#[test]
fn accepts_defaults() {
    let config = ScrapeConfig::new(DEFAULT_URL, 600, "outside").unwrap();
    assert_eq!(config.url(), DEFAULT_URL);
    assert_eq!(config.interval(), Duration::from_secs(600));
    assert_eq!(config.device_name(), "outside");
}

#[test]
fn rejects_zero_interval() {
    let err = ScrapeConfig::new(DEFAULT_URL, 0, "outside").unwrap_err();
    assert_eq!(err, ConfigError::IntervalTooSmall(0));
}

#[test]
fn minimum_interval_is_one_second() {
    let config = ScrapeConfig::new(DEFAULT_URL, 1, "outside").unwrap();
    assert_eq!(config.interval(), Duration::from_secs(1));
}

#[test]
fn rejects_unparseable_and_non_http_urls() {
    assert!(matches!(
        ScrapeConfig::new("not a url", 10, "outside"),
        Err(ConfigError::InvalidUrl { .. })
    ));
    assert!(matches!(
        ScrapeConfig::new("ftp://example.com/obs.htm", 10, "outside"),
        Err(ConfigError::InvalidUrl { .. })
    ));
}

#[test]
fn trims_device_name_and_rejects_blank() {
    let config = ScrapeConfig::new(DEFAULT_URL, 10, "  porch ").unwrap();
    assert_eq!(config.device_name(), "porch");
    assert_eq!(
        ScrapeConfig::new(DEFAULT_URL, 10, "   ").unwrap_err(),
        ConfigError::EmptyDeviceName
    );
}
