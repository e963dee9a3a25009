//! Application configuration management.
//!
//! Settings are layered with figment, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. TOML config file (`--config PATH`, or the platform default location)
//! 3. Environment variables prefixed with `FINDDUPS_`
//! 4. CLI flags (applied by [`Config::apply_cli`])
//!
//! # Example
//!
//! ```toml
//! extensions = ["txt", ".md"]
//! follow_symlinks = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::{normalize_extensions, Cli};
use crate::scanner::WalkerConfig;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "FINDDUPS_";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default extension filter; `None` scans every file.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Follow symbolic links during the scan.
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Config {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` file must exist and parse. The default file
    /// is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any layer
    /// fails to deserialize.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let figment = match explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                log::debug!("Loading config from {}", path.display());
                Self::figment_from(Some(path))
            }
            None => {
                let default_path = Self::config_path().filter(|p| p.is_file());
                if let Some(ref path) = default_path {
                    log::debug!("Loading config from {}", path.display());
                }
                Self::figment_from(default_path.as_deref())
            }
        };

        figment
            .extract()
            .context("Failed to load configuration")
    }

    /// Build the layered figment: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment_from(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    /// Overlay CLI flags on top of the loaded configuration.
    ///
    /// `-e` replaces configured extensions entirely. Configured extensions
    /// are normalized the same way as CLI ones, and an empty list means no
    /// filter.
    #[must_use]
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(ref exts) = cli.extensions {
            self.extensions = Some(exts.clone());
        }
        self.extensions = self
            .extensions
            .filter(|exts| !exts.is_empty())
            .map(|exts| normalize_extensions(&exts));
        if cli.follow_symlinks {
            self.follow_symlinks = true;
        }
        self
    }

    /// Walker settings derived from this configuration.
    #[must_use]
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::new(self.extensions.clone(), self.follow_symlinks)
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "finddups").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
