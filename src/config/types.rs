//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_LISTEN_ADDR, DEFAULT_MAX_CONCURRENCY};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users and tests.
///
/// # Examples
///
/// ```no_run
/// use signal_detector::Config;
///
/// let config = Config {
///     listen: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "signal_detector",
    about = "Detects field-service vendors embedded in a domain's homepage"
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "SIGNAL_DETECTOR_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// JSON file with the vendor table (defaults to the built-in table)
    #[arg(long, env = "SIGNAL_DETECTOR_VENDORS")]
    pub vendors: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Domains classified at once in batch mode
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Domains to classify once and print as JSON lines instead of serving
    #[arg(value_name = "DOMAINS")]
    pub domains: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            vendors: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            domains: Vec::new(),
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what a valid value looks like
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_concurrency == 0 {
            return Err(ConfigValidationError {
                field: "max_concurrency",
                message: "must be greater than 0".to_string(),
            });
        }
        self.listen_addr()?;
        Ok(())
    }

    /// Parses `listen` into a socket address.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.listen
            .parse::<SocketAddr>()
            .map_err(|e| ConfigValidationError {
                field: "listen",
                message: format!(
                    "'{}' is not a socket address like 127.0.0.1:8000 ({})",
                    self.listen, e
                ),
            })
    }

    /// Batch mode runs when domains were given on the command line.
    pub fn is_batch(&self) -> bool {
        !self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.listen, "127.0.0.1:8000");
        assert_eq!(config.max_concurrency, 8);
        assert!(config.vendors.is_none());
        assert!(!config.is_batch());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = Config {
            max_concurrency: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_concurrency");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_bad_listen_addr() {
        let config = Config {
            listen: "localhost".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "listen");
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_parse_from_args() {
        let config = Config::parse_from([
            "signal_detector",
            "--listen",
            "0.0.0.0:9000",
            "--log-format",
            "json",
            "example.com",
            "acme.test",
        ]);
        assert_eq!(config.listen, "0.0.0.0:9000");
        assert!(matches!(config.log_format, LogFormat::Json));
        assert_eq!(config.domains, vec!["example.com", "acme.test"]);
        assert!(config.is_batch());
    }
}
