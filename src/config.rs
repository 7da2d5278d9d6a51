use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .ok()
            .filter(|base| !base.is_empty());

        let pretty = env::var("ROUTES_PRETTY")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("ROUTES_PRETTY must be either 'true' or 'false'")?;

        Ok(Config {
            api_base_url,
            pretty,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}",
            self.api_base_url.as_deref().unwrap_or("none (relative paths)"));
        tracing::info!("  Pretty output: {}", self.pretty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests in this module share process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("API_BASE_URL");
            env::remove_var("ROUTES_PRETTY");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("API_BASE_URL", "https://api.example.com");
            env::set_var("ROUTES_PRETTY", "false");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_base_url, Some("https://api.example.com".to_string()));
        assert!(!config.pretty);
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_base_url, None);
        assert!(config.pretty);
    }

    #[test]
    fn test_empty_base_url_is_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("API_BASE_URL", "");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn test_invalid_pretty_flag() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("ROUTES_PRETTY", "yes");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("ROUTES_PRETTY"));

        clear_env_vars();
    }
}
