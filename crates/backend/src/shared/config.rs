use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Artificial latency of the mock data sources
    pub load_delay_ms: u64,
}

impl DataConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Ticket sales refresh simulation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RefreshConfig {
    pub enabled: bool,
    pub interval_secs: u64,
    /// Chance that a row changes on a tick
    pub update_probability: f64,
    pub delta_min: i64,
    pub delta_max: i64,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.update_probability) {
            anyhow::bail!(
                "refresh.update_probability must be within [0, 1], got {}",
                self.update_probability
            );
        }
        if self.delta_min > self.delta_max {
            anyhow::bail!(
                "refresh.delta_min ({}) is greater than refresh.delta_max ({})",
                self.delta_min,
                self.delta_max
            );
        }
        if self.interval_secs == 0 {
            anyhow::bail!("refresh.interval_secs must be positive");
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[data]
load_delay_ms = 800

[refresh]
enabled = true
interval_secs = 15
update_probability = 0.3
delta_min = -5
delta_max = 14
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.refresh.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.load_delay(), Duration::from_millis(800));
        assert!(config.refresh.enabled);
        assert_eq!(config.refresh.interval(), Duration::from_secs(15));
        assert_eq!(config.refresh.update_probability, 0.3);
        assert_eq!((config.refresh.delta_min, config.refresh.delta_max), (-5, 14));
    }

    #[test]
    fn test_refresh_validation() {
        let valid = parse_config(DEFAULT_CONFIG).unwrap().refresh;

        let mut bad = valid.clone();
        bad.update_probability = 1.5;
        assert!(bad.validate().is_err());

        let mut bad = valid.clone();
        bad.delta_min = 20;
        assert!(bad.validate().is_err());

        let mut bad = valid.clone();
        bad.interval_secs = 0;
        assert!(bad.validate().is_err());

        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let contents = DEFAULT_CONFIG.replace("update_probability = 0.3", "update_probability = -1");
        assert!(parse_config(&contents).is_err());
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"").is_err());
    }
}
