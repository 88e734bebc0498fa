use serde::Deserialize;
use std::env;

use crate::cache::CacheConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8081 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProvidersConfig {
    /// Directory the simulated upstreams read their datasets from.
    pub data_dir: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            data_dir: "farelink-providers/fixtures".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides, defaulting to 'development'
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment (with a prefix of FARELINK)
            // E.g. `FARELINK_SERVER__PORT=9000` would set `server.port`
            .add_source(config::Environment::with_prefix("FARELINK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}
