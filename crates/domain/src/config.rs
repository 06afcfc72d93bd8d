use super::{DomainError, SoaData};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// When present, the server answers from this fixed record set
    /// instead of the per-record store (legacy mode).
    pub static_zone: Option<StaticZoneConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Raw static-zone options as written in the config file. Validated
/// into a [`StaticRecordSet`] once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticZoneConfig {
    pub a: Option<String>,
    pub aaaa: Option<String>,
    pub mx: Option<String>,
    pub ns: Option<String>,
    pub soa: String,
    #[serde(default = "default_static_ttl")]
    pub ttl: u32,
}

/// Validated fixed answers for the legacy static backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRecordSet {
    pub a: Option<Ipv4Addr>,
    pub aaaa: Option<Ipv6Addr>,
    pub mx: Option<String>,
    pub ns: Option<String>,
    pub soa: SoaData,
    pub ttl: u32,
}

impl TryFrom<&StaticZoneConfig> for StaticRecordSet {
    type Error = DomainError;

    fn try_from(cfg: &StaticZoneConfig) -> Result<Self, Self::Error> {
        let a = cfg
            .a
            .as_deref()
            .map(|s| {
                s.parse::<Ipv4Addr>()
                    .map_err(|_| DomainError::ConfigError(format!("invalid static A address: {:?}", s)))
            })
            .transpose()?;

        let aaaa = cfg
            .aaaa
            .as_deref()
            .map(|s| {
                s.parse::<Ipv6Addr>()
                    .map_err(|_| DomainError::ConfigError(format!("invalid static AAAA address: {:?}", s)))
            })
            .transpose()?;

        let soa = SoaData::decode(&cfg.soa)
            .map_err(|e| DomainError::ConfigError(format!("invalid static SOA: {}", e)))?;

        Ok(Self {
            a,
            aaaa,
            mx: cfg.mx.clone(),
            ns: cfg.ns.clone(),
            soa,
            ttl: cfg.ttl,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_database_path() -> String {
    "sqlzone.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_static_ttl() -> u32 {
    3600
}
