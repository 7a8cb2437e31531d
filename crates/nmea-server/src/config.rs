use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
    time::Duration,
};

use api::state::StreamSettings;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub tick_interval: Duration,
    pub drift_seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidTickInterval,
    InvalidDriftSeed,
    NonUnicodeListenAddr,
    NonUnicodeTickInterval,
    NonUnicodeDriftSeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "NMEA_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidTickInterval => {
                write!(
                    f,
                    "NMEA_TICK_INTERVAL_MS must be a positive integer number of milliseconds"
                )
            }
            Self::InvalidDriftSeed => {
                write!(f, "NMEA_DRIFT_SEED must be an unsigned 64-bit integer")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "NMEA_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodeTickInterval => {
                write!(f, "NMEA_TICK_INTERVAL_MS contains non-unicode data")
            }
            Self::NonUnicodeDriftSeed => {
                write!(f, "NMEA_DRIFT_SEED contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidTickInterval => None,
            Self::InvalidDriftSeed => None,
            Self::NonUnicodeListenAddr => None,
            Self::NonUnicodeTickInterval => None,
            Self::NonUnicodeDriftSeed => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("NMEA_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let tick_interval_ms = match env::var("NMEA_TICK_INTERVAL_MS") {
            Ok(value) => {
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTickInterval)?;
                if parsed == 0 {
                    return Err(ConfigError::InvalidTickInterval);
                }
                parsed
            }
            Err(env::VarError::NotPresent) => DEFAULT_TICK_INTERVAL_MS,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeTickInterval);
            }
        };

        let drift_seed = match env::var("NMEA_DRIFT_SEED") {
            Ok(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidDriftSeed)?,
            ),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeDriftSeed);
            }
        };

        Ok(Self {
            listen_addr,
            tick_interval: Duration::from_millis(tick_interval_ms),
            drift_seed,
        })
    }

    pub fn stream_settings(&self) -> StreamSettings {
        StreamSettings {
            tick_interval: self.tick_interval,
            drift_seed: self.drift_seed,
        }
    }
}
