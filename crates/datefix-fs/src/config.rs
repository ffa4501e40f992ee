//! Token pair configuration loading
//!
//! Configuration is resolved from a hierarchy of optional TOML sources,
//! with later sources overriding earlier ones:
//!
//! 1. User config (`<config_dir>/datefix/config.toml`)
//! 2. Project config (`datefix.toml` in the working directory)
//!
//! CLI flags override both layers; that merge happens in the CLI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, NormalizedPath, Result, io};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "datefix.toml";

/// On-disk configuration for datefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Token substitution settings.
    #[serde(default)]
    pub tokens: TokenConfig,
}

/// The `[tokens]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Overrides the token searched for inside blocks.
    pub from: Option<String>,
    /// Overrides the replacement token.
    pub to: Option<String>,
}

/// Resolves configuration by merging the user and project layers.
///
/// Missing layers are silently skipped. Invalid TOML in a present layer
/// produces an error.
pub struct ConfigResolver {
    /// Directory holding the project config file
    root: NormalizedPath,

    /// Override for the user config directory (used for testing).
    /// When `None`, the platform directory is used via `dirs::config_dir()`.
    user_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver rooted at the given working directory.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            user_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom user config directory.
    ///
    /// Primarily useful for testing, where the real user config must not
    /// leak into the run.
    pub fn with_user_config_dir(root: NormalizedPath, user_config_dir: PathBuf) -> Self {
        Self {
            root,
            user_config_dir_override: Some(user_config_dir),
        }
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.user_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("datefix"))
    }

    /// Resolve the configuration by merging all sources.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(dir) = self.user_config_dir() {
            merge_layer(&mut config, &NormalizedPath::new(dir.join("config.toml")))?;
        }
        merge_layer(&mut config, &self.root.join(PROJECT_CONFIG_FILE))?;

        Ok(config)
    }
}

fn merge_layer(config: &mut Config, path: &NormalizedPath) -> Result<()> {
    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(Error::NotFound { .. }) => return Ok(()),
        Err(e) => return Err(e),
    };

    let layer: Config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        message: e.to_string(),
    })?;

    if let Some(from) = layer.tokens.from {
        config.tokens.from = Some(from);
    }
    if let Some(to) = layer.tokens.to {
        config.tokens.to = Some(to);
    }
    Ok(())
}
