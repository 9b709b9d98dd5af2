//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VELVET_BEAN_DATA_DIR` - Directory for on-device state blobs
//!   (default: `.velvet-bean` under the home directory)
//! - `VELVET_BEAN_LOG` - Log filter directive (default: `info`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Could not determine a home directory; set VELVET_BEAN_DATA_DIR")]
    NoDataDir,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart and session blobs
    pub data_dir: PathBuf,
    /// Log filter directive (tracing env-filter syntax)
    pub log_filter: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDataDir` if `VELVET_BEAN_DATA_DIR` is unset
    /// and no home directory can be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = match get_optional_env("VELVET_BEAN_DATA_DIR") {
            Some(dir) if dir.is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "VELVET_BEAN_DATA_DIR".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join(".velvet-bean"),
        };

        let log_filter = get_env_or_default("VELVET_BEAN_LOG", "info");

        Ok(Self {
            data_dir,
            log_filter,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("VELVET_BEAN_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_get_optional_env_absent() {
        assert!(get_optional_env("VELVET_BEAN_TEST_UNSET_VAR").is_none());
    }
}
