//! Application configuration with documented defaults
//!
//! Values are read from a TOML file when one is present; every field has a
//! default so a partial (or missing) file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_PAGE_SIZE;
use crate::core::error::{PokedexError, Result};

/// Environment variable overriding the remote API base URL
pub const API_BASE_URL_ENV: &str = "POKEAPI_BASE_URL";

/// Configuration for the catalog, fetcher and session storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    // === REMOTE API ===
    /// Base URL of the public creature API (no trailing slash)
    pub api_base_url: String,

    /// User-Agent header sent with every remote request
    pub user_agent: String,

    /// Per-request timeout in seconds
    ///
    /// A request that exceeds this is a failed fetch; there is no retry.
    pub request_timeout_secs: u64,

    // === STORAGE ===
    /// SQLite database file holding the catalog
    pub database_path: PathBuf,

    /// Directory holding one JSON file per session
    pub session_dir: PathBuf,

    // === LISTING ===
    /// Records per page in catalog listings
    pub page_size: usize,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            user_agent: "pokedex-app/1.0".to_string(),
            request_timeout_secs: 10,
            database_path: PathBuf::from("pokedex.sqlite3"),
            session_dir: PathBuf::from("sessions"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PokedexConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PokedexConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file, falling back to defaults if it does not exist
    ///
    /// The API base URL can be overridden with `POKEAPI_BASE_URL`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            tracing::debug!("Loading config from {:?}", path);
            Self::from_toml_str(&content)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };

        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            config.api_base_url = url;
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(PokedexError::Config("api_base_url must not be empty".into()));
        }

        if self.request_timeout_secs == 0 {
            return Err(PokedexError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }

        if self.page_size == 0 {
            return Err(PokedexError::Config("page_size must be positive".into()));
        }

        Ok(())
    }
}
