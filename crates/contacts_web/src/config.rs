//! Server configuration from environment variables.
//!
//! | Variable             | Default                 |
//! |----------------------|-------------------------|
//! | `CONTACTS_BIND`      | `127.0.0.1:3000`        |
//! | `CONTACTS_DB`        | unset: in-memory store  |
//! | `CONTACTS_LOG_LEVEL` | `debug` / `info`        |
//! | `CONTACTS_LOG_DIR`   | `<tmp>/contacts-logs`   |
//! | `CONTACTS_SEED`      | `false`                 |

use contacts_core::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

pub const BIND_VAR: &str = "CONTACTS_BIND";
pub const DB_VAR: &str = "CONTACTS_DB";
pub const LOG_LEVEL_VAR: &str = "CONTACTS_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "CONTACTS_LOG_DIR";
pub const SEED_VAR: &str = "CONTACTS_SEED";

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_LOG_DIR_NAME: &str = "contacts-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps all contacts in memory for the life of the process.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: PathBuf,
    /// Insert sample contacts into an empty store at startup.
    pub seed: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },
    InvalidBool {
        key: &'static str,
        value: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, source } => {
                write!(f, "{BIND_VAR}=`{value}` is not a socket address: {source}")
            }
            Self::InvalidBool { key, value } => {
                write!(f, "{key}=`{value}` must be one of true|false|1|0")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBindAddr { source, .. } => Some(source),
            Self::InvalidBool { .. } => None,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind = get(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let seed = match get(SEED_VAR) {
            None => false,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                key: SEED_VAR,
                value,
            })?,
        };

        Ok(Self {
            bind_addr,
            db_path: get(DB_VAR).map(PathBuf::from),
            log_level: get(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: get(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            seed,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
