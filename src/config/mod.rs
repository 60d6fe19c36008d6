//! Configuration management for the storefront.

/// Catalog seed configuration loading from config.toml
pub mod catalog;

/// Database configuration and connection management
pub mod database;

/// Application settings loaded from environment variables.
///
/// The admin passphrase is a single shared demo secret, not a per-user
/// credential; the whole login layer is a simulated identity scheme and
/// must not be treated as a security boundary.
#[derive(Debug, Clone)]
pub struct Settings {
    /// SQLite connection URL
    pub database_url: String,
    /// Shared passphrase gating the admin role
    pub admin_passphrase: String,
    /// Path to the catalog seed file
    pub catalog_path: String,
}

impl Settings {
    /// Reads settings from the environment, falling back to the demo
    /// defaults the original storefront shipped with.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/celebumore.sqlite?mode=rwc".to_string()),
            admin_passphrase: std::env::var("ADMIN_PASSPHRASE")
                .unwrap_or_else(|_| "admin123".to_string()),
            catalog_path: std::env::var("CATALOG_CONFIG")
                .unwrap_or_else(|_| "config.toml".to_string()),
        }
    }
}
