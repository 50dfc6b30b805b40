use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not find environment variable {key:?}")]
    Missing { key: String },

    #[error("environment variable {key:?} is not a valid number: {value:?} ({source})")]
    InvalidNumber {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// | Env Var          | Default   |
    /// |------------------|-----------|
    /// | `HOST`           | `0.0.0.0` |
    /// | `PORT`           | `8000`    |
    /// | `MAX_BODY_BYTES` | `2097152` |
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparsable
    /// numbers fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = number_or_default(&lookup, "PORT", DEFAULT_PORT);
        let max_body_bytes = number_or_default(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES);

        Self {
            host,
            port,
            max_body_bytes,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn print_server_start_message(&self) {
        info!("Listening on {}", self.bind_addr());
        info!(
            "POST a show listing to: http://localhost:{}/",
            self.port
        );
    }
}

/// Read `key` from `lookup` and parse it as a number.
pub fn number_from<T, F>(lookup: F, key: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or_else(|| ConfigError::Missing {
        key: key.to_string(),
    })?;

    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
            source,
        })
}

fn number_or_default<T, F>(lookup: F, key: &str, default: T) -> T
where
    T: FromStr<Err = ParseIntError> + std::fmt::Display + Copy,
    F: Fn(&str) -> Option<String>,
{
    match number_from(lookup, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}, using default {} {}", e, key, default);
            default
        }
    }
}
