//! Run settings read from the environment.

use std::env;

use crate::EtlError;
use staging_etl_repository::config::DEFAULT_MYSQL_PORT;
use staging_etl_repository::{SourceConfig, TargetConfig};

/// Default MySQL host.
const DEFAULT_MYSQL_HOST: &str = "localhost";

/// Default source database.
const DEFAULT_MYSQL_DATABASE: &str = "sakila";

/// Default MongoDB URI.
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Default target database.
const DEFAULT_MONGO_DATABASE: &str = "sakila_staging";

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Everything a run needs, resolved before any connection is made.
#[derive(Debug, Clone)]
pub struct EtlSettings {
    pub source: SourceConfig,
    pub target: TargetConfig,
    pub report_after_load: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl EtlSettings {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MYSQL_HOST`: source host (default: localhost)
    /// - `MYSQL_PORT`: source port (default: 3306)
    /// - `MYSQL_USER`: source user (required)
    /// - `MYSQL_PASSWORD`: source password (required)
    /// - `MYSQL_DATABASE`: source database (default: sakila)
    /// - `MONGO_URI`: target URI (default: mongodb://localhost:27017)
    /// - `MONGO_DATABASE`: target database (default: sakila_staging)
    /// - `ETL_REPORT`: run the revenue report after loading (default: false)
    /// - `ETL_LOG_LEVEL`: log filter used when `RUST_LOG` is unset (default: info)
    /// - `ETL_LOG_FORMAT`: `json` or `pretty` (default: pretty)
    pub fn from_env() -> Result<Self, EtlError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EtlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let required = |name: &str| {
            lookup(name).ok_or_else(|| EtlError::config(format!("{} must be set", name)))
        };

        let port = match lookup("MYSQL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                EtlError::config(format!("MYSQL_PORT `{}` is not a valid port: {}", raw, e))
            })?,
            None => DEFAULT_MYSQL_PORT,
        };

        let source = SourceConfig::new(
            or_default("MYSQL_HOST", DEFAULT_MYSQL_HOST),
            required("MYSQL_USER")?,
            required("MYSQL_PASSWORD")?,
            or_default("MYSQL_DATABASE", DEFAULT_MYSQL_DATABASE),
        )
        .with_port(port);

        let target = TargetConfig::new(
            or_default("MONGO_URI", DEFAULT_MONGO_URI),
            or_default("MONGO_DATABASE", DEFAULT_MONGO_DATABASE),
        );

        let report_after_load = match lookup("ETL_REPORT") {
            Some(raw) => parse_flag("ETL_REPORT", &raw)?,
            None => false,
        };

        let log_format = match lookup("ETL_LOG_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "text" => LogFormat::Pretty,
                _ => {
                    return Err(EtlError::config(format!(
                        "ETL_LOG_FORMAT `{}` must be `json` or `pretty`",
                        raw
                    )))
                }
            },
            None => LogFormat::Pretty,
        };

        Ok(Self {
            source,
            target,
            report_after_load,
            log_level: or_default("ETL_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format,
        })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, EtlError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(EtlError::config(format!(
            "{} `{}` is not a boolean",
            name, raw
        ))),
    }
}
