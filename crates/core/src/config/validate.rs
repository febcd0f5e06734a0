use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - PokeAPI base URL is non-empty
/// - Catalog page size, detail concurrency and suggestion limit are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.pokeapi.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "pokeapi.base_url cannot be empty".to_string(),
        ));
    }

    if config.catalog.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.page_size cannot be 0".to_string(),
        ));
    }

    if config.catalog.detail_concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.detail_concurrency cannot be 0".to_string(),
        ));
    }

    if config.catalog.suggestion_limit == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.suggestion_limit cannot be 0".to_string(),
        ));
    }

    Ok(())
}
