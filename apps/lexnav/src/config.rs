//! # Application Configuration
//!
//! Optional TOML configuration for the lexnav binary. CLI flags always
//! override config values.
//!
//! ```toml
//! lexicon = "words.json"
//!
//! [browse]
//! cycle = false
//! ```

use lexnav_core::LexiconError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default lexicon document to load when `--lexicon` is absent.
    pub lexicon: Option<PathBuf>,
    /// Browse REPL behavior.
    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Settings for the interactive browse loop.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseConfig {
    /// Whether cursor moves wrap around the suggestion list.
    #[serde(default = "default_cycle")]
    pub cycle: bool,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            cycle: default_cycle(),
        }
    }
}

fn default_cycle() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LexiconError::Io(format!("read config '{}': {}", path.display(), e)))?;
        toml::from_str(&text).map_err(|e| LexiconError::Parse(e.to_string()))
    }

    /// Load from a path when given, else defaults.
    pub fn load_or_default(path: Option<&PathBuf>) -> Result<Self, LexiconError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
