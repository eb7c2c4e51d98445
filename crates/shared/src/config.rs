//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Ledger backend configuration.
    pub api: ApiConfig,
}

/// Connection settings for the external ledger backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://192.168.1.10:3000`.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Page size used when walking paginated lists.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_page_size() -> u32 {
    50
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `DHEETO__`-prefixed environment variables (`DHEETO__API__BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    /// Deserializes an already-built configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or has the wrong type.
    pub fn from_config(config: config::Config) -> Result<Self, config::ConfigError> {
        config.try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("DHEETO").separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_env(vars: &[(&str, &str)]) -> Result<AppConfig, config::ConfigError> {
        let source = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<config::Map<String, String>>();
        let config = config::Config::builder()
            .add_source(environment().source(Some(source)))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn test_load_from_environment() {
        let config = from_env(&[("DHEETO__API__BASE_URL", "http://localhost:3000")]).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.page_size, 50);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = from_env(&[
            ("DHEETO__API__BASE_URL", "http://192.168.1.10:3000"),
            ("DHEETO__API__TIMEOUT_SECS", "10"),
            ("DHEETO__API__PAGE_SIZE", "20"),
        ])
        .unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.page_size, 20);
    }

    #[test]
    fn test_unprefixed_variables_ignored() {
        assert!(from_env(&[("API__BASE_URL", "http://localhost:3000")]).is_err());
    }

    #[test]
    fn test_missing_base_url_is_an_error() {
        assert!(from_env(&[]).is_err());
    }

    #[test]
    fn test_from_config_with_overrides() {
        let config = config::Config::builder()
            .set_override("api.base_url", "http://localhost:4000")
            .unwrap()
            .build()
            .unwrap();
        let config = AppConfig::from_config(config).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
    }
}
