//! Server configuration loaded from environment variables.
//!
//! Both settings have defaults suitable for local use. Override them at
//! process startup – no config file required.
//!
//! | Variable       | Default              | Description                        |
//! |----------------|----------------------|------------------------------------|
//! | `PENDANT_DATA` | `data/pendants.json` | Dataset file (`.json` or `.csv`)   |
//! | `PENDANT_PORT` | `8080`               | HTTP listen port                   |

use std::path::PathBuf;

/// Runtime configuration for the pendant map server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset file re-read on every request.
    pub data_path: PathBuf,

    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables, applying defaults where
    /// a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            data_path: env_str("PENDANT_DATA", "data/pendants.json").into(),
            port: env_parse("PENDANT_PORT", 8080),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
