use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub config_file: PathBuf,
    /// Static client assets. `None` disables static serving.
    pub public_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes `std::env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| eyre::eyre!("invalid PORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let bind = match lookup("WORKOUT_BIND") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| eyre::eyre!("invalid WORKOUT_BIND {raw:?}: {e}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let log_format = match lookup("WORKOUT_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") | None => LogFormat::Pretty,
            Some(other) => return Err(eyre::eyre!("invalid WORKOUT_LOG_FORMAT {other:?}")),
        };

        let public_dir = match lookup("WORKOUT_PUBLIC_DIR") {
            Some(raw) if raw.is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw)),
            None => Some(PathBuf::from("public")),
        };

        Ok(Self {
            bind,
            port,
            data_file: lookup("WORKOUT_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("workout-data.json")),
            config_file: lookup("WORKOUT_CONFIG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("config.json")),
            public_dir,
            log_format,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
