//! # Generator Configuration
//!
//! Settings are read from an optional `routesynth.toml` that sits alongside
//! the controller manifest (or is given explicitly), then overridden by the
//! environment and finally by command-line flags.
//!
//! ```toml
//! # routesynth.toml
//! root_namespace = "App\\Http\\Controllers"
//! output_dir = "."
//! ```
//!
//! ## Environment Variables
//!
//! ### `ROUTESYNTH_ROOT_NAMESPACE`
//!
//! Root controller namespace of the host application. When set and non-empty,
//! routes reference controllers as strings relative to it; when set but
//! empty, class references are used regardless of the config file.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up next to the controller manifest.
pub const CONFIG_FILE_NAME: &str = "routesynth.toml";

/// Environment variable overriding the root namespace.
pub const ROOT_NAMESPACE_ENV: &str = "ROUTESYNTH_ROOT_NAMESPACE";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root namespace of the application's controllers
    pub root_namespace: Option<String>,
    /// Project root the routes files live under
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_namespace: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Load settings from a TOML file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read generator config: {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse generator config: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Resolve the config for a manifest: explicit path first, then
    /// `routesynth.toml` beside the manifest, then defaults.
    pub fn resolve(explicit: Option<&Path>, manifest_path: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Generator config not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => manifest_path
                .parent()
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        };
        let config = match path {
            Some(path) => Self::load(&path)?,
            None => None,
        };
        Ok(config.unwrap_or_default())
    }

    /// Apply `ROUTESYNTH_ROOT_NAMESPACE` if it is set.
    pub fn with_env(self) -> Self {
        self.with_env_value(std::env::var(ROOT_NAMESPACE_ENV).ok())
    }

    fn with_env_value(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.root_namespace = Some(value);
        }
        self
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, root_namespace: Option<&str>, output_dir: Option<&Path>) -> Self {
        if let Some(root) = root_namespace {
            self.root_namespace = Some(root.to_string());
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir.to_path_buf();
        }
        self
    }
}
