//! Configuration file support for the hero renderer.
//!
//! Loads optional `.makhana/hero.toml` from a site root.

use std::path::Path;

use tracing::{debug, warn};

use crate::types::LandingConfig;

/// Directory holding the hero config, relative to the site root.
pub const CONFIG_DIR: &str = ".makhana";
pub const CONFIG_FILE: &str = "hero.toml";

impl LandingConfig {
    /// Load config from `.makhana/hero.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    ///
    /// Only parsing happens here; ranges and the safe zone are checked when
    /// the generator is built.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no hero config, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
