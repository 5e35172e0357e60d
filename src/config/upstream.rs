//! External presentation service configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Presentation-creation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL create requests are forwarded to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl UpstreamConfig {
    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidUpstreamUrl);
        }
        Ok(())
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://infra.devskills.app/api/interactive-presentation/v4".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_service() {
        let config = UpstreamConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let config = UpstreamConfig {
            base_url: "ftp://example.com".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUpstreamUrl)
        ));
    }
}
