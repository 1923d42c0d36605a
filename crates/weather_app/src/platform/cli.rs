use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use weather_core::{
    ConfigError, ScrapeConfig, DEFAULT_DEVICE_NAME, DEFAULT_INTERVAL_SECS, DEFAULT_URL,
};
use weather_engine::FetchSettings;
use weather_logging::LogDestination;

/// Scrapes a weather observation page and publishes selected readings.
#[derive(Debug, Parser)]
#[command(name = "weather-scraper", version, about)]
pub struct Cli {
    /// URL to scrape
    #[arg(long = "scrape.url", default_value = DEFAULT_URL)]
    pub url: String,

    /// Interval (in seconds) between scrapes
    #[arg(long = "scrape.interval", default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Device name (in topic)
    #[arg(long = "device.name", default_value = DEFAULT_DEVICE_NAME)]
    pub device_name: String,

    /// Abort a request that takes longer than this many seconds
    #[arg(long = "http.timeout")]
    pub http_timeout: Option<u64>,

    /// Also write logs to this file
    #[arg(long = "log.file")]
    pub log_file: Option<PathBuf>,

    /// Log only to the file given by --log.file, not the terminal
    #[arg(long = "log.file-only", requires = "log_file")]
    pub log_file_only: bool,

    #[arg(long = "log.level", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn scrape_config(&self) -> Result<ScrapeConfig, ConfigError> {
        ScrapeConfig::new(&self.url, self.interval, &self.device_name)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.http_timeout.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) if self.log_file_only => LogDestination::File(path.clone()),
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_uppsala_station() {
        let cli = Cli::try_parse_from(["weather-scraper"]).unwrap();
        let config = cli.scrape_config().unwrap();

        assert_eq!(config.url(), DEFAULT_URL);
        assert_eq!(config.interval(), Duration::from_secs(600));
        assert_eq!(config.device_name(), "outside");
        assert_eq!(cli.fetch_settings().request_timeout, None);
        assert_eq!(cli.log_destination(), LogDestination::Terminal);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Info);
    }

    #[test]
    fn dotted_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "weather-scraper",
            "--scrape.url",
            "https://example.com/obs.htm",
            "--scrape.interval",
            "60",
            "--device.name",
            "roof",
            "--http.timeout",
            "15",
            "--log.file",
            "scrape.log",
            "--log.level",
            "debug",
        ])
        .unwrap();

        let config = cli.scrape_config().unwrap();
        assert_eq!(config.url(), "https://example.com/obs.htm");
        assert_eq!(config.interval(), Duration::from_secs(60));
        assert_eq!(config.device_name(), "roof");
        assert_eq!(
            cli.fetch_settings().request_timeout,
            Some(Duration::from_secs(15))
        );
        assert_eq!(
            cli.log_destination(),
            LogDestination::Both(PathBuf::from("scrape.log"))
        );
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn zero_interval_is_a_config_error() {
        let cli = Cli::try_parse_from(["weather-scraper", "--scrape.interval", "0"]).unwrap();
        assert_eq!(cli.scrape_config(), Err(ConfigError::IntervalTooSmall(0)));
    }

    #[test]
    fn file_only_logging_needs_a_file() {
        let cli = Cli::try_parse_from([
            "weather-scraper",
            "--log.file",
            "scrape.log",
            "--log.file-only",
        ])
        .unwrap();
        assert_eq!(
            cli.log_destination(),
            LogDestination::File(PathBuf::from("scrape.log"))
        );

        assert!(Cli::try_parse_from(["weather-scraper", "--log.file-only"]).is_err());
    }
}
