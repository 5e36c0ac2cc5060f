use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog API key is not blank
/// - Catalog base URL parses
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.api_key cannot be empty".to_string(),
        ));
    }

    if let Err(e) = Url::parse(&config.catalog.base_url) {
        return Err(ConfigError::ValidationError(format!(
            "catalog.base_url '{}' is not a valid URL: {}",
            config.catalog.base_url, e
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, DatabaseConfig, StateConfig};

    fn config_with(api_key: &str, base_url: &str) -> Config {
        Config {
            catalog: CatalogConfig {
                api_key: api_key.to_string(),
                base_url: base_url.to_string(),
            },
            database: DatabaseConfig::default(),
            state: StateConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        let config = config_with("abc123", "https://www.omdbapi.com/");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_blank_api_key_fails() {
        let config = config_with("  ", "https://www.omdbapi.com/");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_bad_url_fails() {
        let config = config_with("abc123", "omdbapi");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
