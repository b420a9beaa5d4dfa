//! Configuration: TOML file, environment secrets, credential handling.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{appwrite_headers, bearer_header, AuthHeader};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::{ConfigError, CATALOG_KEY_ENV, TRENDING_KEY_ENV};
pub use types::{CatalogConfig, Config, SearchConfig, TrendingConfig};
