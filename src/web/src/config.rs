use log::warn;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Seed document on disk; the embedded seed is used when unset.
    pub data_path: Option<PathBuf>,
    pub snapshot_path: Option<PathBuf>,
    pub legacy_forfeits: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: None,
            snapshot_path: None,
            legacy_forfeits: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();

        ServerConfig {
            host: Self::parse(&lookup, "LEAGUE_HOST", defaults.host),
            port: Self::parse(&lookup, "LEAGUE_PORT", defaults.port),
            data_path: Self::path(&lookup, "LEAGUE_DATA_PATH"),
            snapshot_path: Self::path(&lookup, "LEAGUE_SNAPSHOT_PATH"),
            legacy_forfeits: Self::parse(&lookup, "LEAGUE_LEGACY_FORFEITS", defaults.legacy_forfeits),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
        match lookup(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("invalid {} value '{}', using default", key, raw);
                default
            }),
            None => default,
        }
    }

    fn path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
        lookup(key)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    }
}
