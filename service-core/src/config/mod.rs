use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

/// Settings shared by every service: listen port and default log level.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load `.env`, then an optional `configuration` file, then `APP__*`
    /// environment variables (later sources win).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_from(Environment::with_prefix("APP").separator("__"))
    }

    fn load_from(env: Environment) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(env)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("APP")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = Config::load_from(env_with(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn environment_overrides_port_and_level() {
        let config =
            Config::load_from(env_with(&[("APP__PORT", "0"), ("APP__LOG_LEVEL", "debug")]))
                .unwrap();
        assert_eq!(config.port, 0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = Config::load_from(env_with(&[("APP__PORT", "eighty")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
