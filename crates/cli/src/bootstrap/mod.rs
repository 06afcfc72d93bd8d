mod database;

pub use database::init_database;

use sqlzone_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path, e))?;
            let config: Config = toml::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", path, e))?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(level = %config.logging.level, "Logging initialized");
}
