use anyhow::{Context, Result};
use consensus_core::NetworkId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network name, parsed by `NetworkId::from_str`
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { name: NetworkId::Main.name().to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) {
        if let Some(network) = &args.network {
            self.network.name = network.clone();
        }

        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[network]\nname = \"test\"\n").unwrap();
        assert_eq!(config.network.name, "test");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_wins_over_file() {
        let mut config: Config = toml::from_str("[network]\nname = \"test\"\n[logging]\nlevel = \"warn\"\n").unwrap();
        let args = Args { network: Some("regtest".to_string()), ..Default::default() };
        config.apply_cli_overrides(&args);
        assert_eq!(config.network.name, "regtest");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn missing_file_is_default() {
        let config = Config::load(Path::new("/nonexistent/mnsd.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.network.name, "main");
    }
}
