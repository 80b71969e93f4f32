//! Application configuration.
//!
//! Locates the pronunciation wordlist from environment variables and .env
//! files. The engine itself takes an injected [`crate::Dictionary`]; this
//! module only answers where the wordlist file lives.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for dictionary loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to the pronunciation-marked wordlist file, if one was found
    pub wordlist_path: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            wordlist_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Wordlist path: env var override, or default platform data directory
        config.wordlist_path = env::var("WORDLIST_PATH").ok().map_or_else(
            default_wordlist_path,
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                p.is_file().then_some(p)
            },
        );

        Ok(config)
    }

    /// The wordlist path, or a config error telling the user how to set one.
    pub fn require_wordlist_path(&self) -> Result<&PathBuf> {
        self.wordlist_path.as_ref().ok_or_else(|| {
            Error::config(
                "no wordlist file found",
                "Set WORDLIST_PATH to a pronunciation-marked wordlist file",
            )
        })
    }
}

/// Default wordlist location under the platform data directory.
fn default_wordlist_path() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("syllabize").join("wordlist.txt"))
        .filter(|p| p.is_file())
}
