use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{FinanceAiError, FinanceAiResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the assistant backend, without a trailing path.
    pub base_url: String,
    /// Log level spec for the file logger (`error`..`trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file, creating it with defaults on first run. The
/// `FINANCEAI_BASE_URL` environment variable (or `.env`) wins over the file.
pub fn initialize_config() -> FinanceAiResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).map_err(|e| {
            FinanceAiError::config_error(format!("failed to read config file: {e}"))
        })?;
        serde_json::from_str(&config_str)
            .map_err(|e| FinanceAiError::config_error(format!("failed to parse config: {e}")))?
    } else {
        let config = Config::default();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FinanceAiError::config_error(format!("failed to create config directory: {e}"))
            })?;
        }
        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| FinanceAiError::config_error(format!("failed to serialize config: {e}")))?;
        fs::write(&config_path, config_str).map_err(|e| {
            FinanceAiError::config_error(format!("failed to write config file: {e}"))
        })?;
        config
    };

    if let Ok(base_url) = env::var("FINANCEAI_BASE_URL") {
        config.base_url = base_url;
    }

    validate_config(&config)?;
    *CONFIG.write().unwrap() = config;
    Ok(())
}

fn get_config_path() -> FinanceAiResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| FinanceAiError::config_error("could not determine config directory"))?;
    Ok(config_dir.join("financeai").join("config.json"))
}

fn validate_config(config: &Config) -> FinanceAiResult<()> {
    if config.base_url.is_empty() {
        return Err(FinanceAiError::config_error("base_url is required"));
    }
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(FinanceAiError::config_error(format!(
            "base_url must be an http(s) URL, got '{}'",
            config.base_url
        )));
    }
    if config.log_level.is_empty() {
        return Err(FinanceAiError::config_error("log_level is required"));
    }
    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = Config {
            base_url: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = Config {
            base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            base_url: "http://10.0.0.2:9000".to_string(),
            log_level: "debug".to_string(),
        };

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded.base_url, config.base_url);
        assert_eq!(loaded.log_level, config.log_level);
    }
}
