use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DATA_FILE_VAR: &str = "POKEDEX_DATA_FILE";
pub const BIND_ADDR_VAR: &str = "POKEDEX_BIND_ADDR";
pub const PRETTY_JSON_VAR: &str = "POKEDEX_PRETTY_JSON";

const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} must be true or false, got: {value}")]
    InvalidBool { var: &'static str, value: String },
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub pretty_json: bool,
}

impl ServerConfig {
    /// Read `POKEDEX_DATA_FILE`, `POKEDEX_BIND_ADDR` and `POKEDEX_PRETTY_JSON`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = lookup(DATA_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                var: BIND_ADDR_VAR,
                value: bind_addr.clone(),
            })?;

        let pretty_json = match lookup(PRETTY_JSON_VAR) {
            Some(value) => parse_bool(PRETTY_JSON_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            data_file,
            bind_addr,
            pretty_json,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            pretty_json: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
