//! Application configuration.
//!
//! Layered sources, later entries win:
//! 1. built-in defaults
//! 2. `config/default.toml`
//! 3. `config/{env}.toml` selected via `RUN_ENV` / `APP_ENV`
//! 4. environment variables with the `APP__` prefix (e.g. `APP__PORT=9090`)

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid host address: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    /// Populate the store with demo records on startup.
    pub seed_demo_data: bool,
    /// Table rows per page when the request does not pick one.
    pub default_page_size: u64,
}

impl AppConfig {
    pub fn server_addr(&self) -> Result<SocketAddr, AppConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: DEFAULT_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_demo_data: true,
            default_page_size: crate::table::DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("environment", DEFAULT_ENV)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("seed_demo_data", true)?
        .set_default("default_page_size", crate::table::DEFAULT_PAGE_SIZE)?
        .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
        .add_source(File::with_name(&format!("{CONFIG_DIR}/{run_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the configured
/// level when set.
pub fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directive = format!("warehouse_admin_api={level},tower_http=debug");
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive))
        .with(fmt::layer().with_target(true))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_serviceable() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_page_size, 10);
        let addr = config.server_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn bad_host_is_rejected() {
        let config = AppConfig {
            host: "not-an-ip".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.server_addr(),
            Err(AppConfigError::InvalidHost(_))
        ));
    }
}
