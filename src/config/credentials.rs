//! Credential resolution from configuration.
//!
//! This module provides secure handling of API keys and credentials
//! resolved from the config at runtime.

use super::types::{CatalogConfig, TrendingConfig};

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Key resolved successfully.
    Configured(SecureString),
    /// Key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    fn from_option(key: Option<&String>, setting: &str) -> Self {
        match key {
            Some(key) if !key.is_empty() => Self::Configured(SecureString::new(key.clone())),
            _ => Self::Unconfigured {
                reason: format!("{setting} is not set"),
            },
        }
    }

    /// The resolved key, if any.
    pub fn secret(&self) -> Option<&SecureString> {
        match self {
            Self::Configured(secret) => Some(secret),
            Self::Unconfigured { .. } => None,
        }
    }
}

impl CatalogConfig {
    /// Resolve the catalog bearer token.
    pub fn resolve_credential(&self) -> CredentialStatus {
        CredentialStatus::from_option(self.api_key.as_ref(), "catalog.api_key")
    }
}

impl TrendingConfig {
    /// Resolve the trending store API key.
    pub fn resolve_credential(&self) -> CredentialStatus {
        CredentialStatus::from_option(self.api_key.as_ref(), "trending.api_key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn test_catalog_credential_configured() {
        let config = CatalogConfig {
            api_key: Some("tmdb".to_string()),
            ..CatalogConfig::default()
        };
        let status = config.resolve_credential();
        assert_eq!(status.secret().map(SecureString::expose), Some("tmdb"));
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let config = TrendingConfig {
            api_key: Some(String::new()),
            ..TrendingConfig::default()
        };
        match config.resolve_credential() {
            CredentialStatus::Unconfigured { reason } => {
                assert!(reason.contains("trending.api_key"));
            }
            CredentialStatus::Configured(_) => panic!("expected Unconfigured"),
        }
    }
}
