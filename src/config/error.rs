//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid database pool size")]
    InvalidPoolSize,

    #[error("Invalid presentation service URL format")]
    InvalidUpstreamUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_names_the_variable() {
        let err = ValidationError::MissingRequired("DATABASE_URL");
        assert_eq!(err.to_string(), "Required configuration missing: DATABASE_URL");
    }
}
