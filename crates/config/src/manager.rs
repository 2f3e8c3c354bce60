//! Locating, loading and saving the config file

use crate::persistence;
use crate::{Config, ConfigError, ConfigResult, ValidationError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Owns the location of `config.toml`
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses the platform config directory
    ///
    /// - Linux: `~/.config/crumbtrail/`
    /// - macOS: `~/Library/Application Support/crumbtrail/`
    /// - Windows: `%APPDATA%\crumbtrail\`
    pub fn new() -> ConfigResult<Self> {
        let dirs = ProjectDirs::from("", "", "crumbtrail").ok_or(ConfigError::NoConfigDir)?;
        Self::with_directory(dirs.config_dir().to_path_buf())
    }

    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file
    ///
    /// A missing file yields the defaults. Settings that fail validation are
    /// logged but still returned; [`ConfigManager::save`] refuses them.
    pub fn load(&self) -> ConfigResult<Config> {
        let Some(config) = persistence::read(&self.config_path)? else {
            log::info!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        };

        if let Err(errors) = config.validate() {
            for error in &errors {
                log::warn!("{}: {}", self.config_path.display(), error);
            }
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        persistence::write(&self.config_path, config)
    }

    /// Writes the defaults unless a config file exists
    ///
    /// Returns whether a file was written.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        self.save(&Config::default())?;
        Ok(true)
    }

    /// Replaces the config file with the defaults
    ///
    /// The replaced file stays available as `config.toml.backup`.
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Invalid settings of the config file; empty when it is valid
    pub fn validate(&self) -> ConfigResult<Vec<ValidationError>> {
        Ok(self.load()?.validate().err().unwrap_or_default())
    }

    /// Loads the config file, then applies `CRUMBTRAIL_SECTION_FIELD` variables
    ///
    /// e.g. `CRUMBTRAIL_SITE_APPLICATION_ROOT=https://example.org/viewer`.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |name| std::env::var(name).ok());

        if let Err(errors) = config.validate() {
            log::warn!(
                "{} invalid setting(s) after environment overrides",
                errors.len()
            );
        }

        Ok(config)
    }
}

/// Applies `CRUMBTRAIL_*` overrides read through `lookup`
fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup("CRUMBTRAIL_SITE_APPLICATION_ROOT") {
        config.site.application_root = root;
    }

    if let Some(language) = lookup("CRUMBTRAIL_SITE_DEFAULT_LANGUAGE") {
        config.site.default_language = language;
    }

    if let Some(field) = lookup("CRUMBTRAIL_COLLECTIONS_HIERARCHY_FIELD") {
        config.collections.hierarchy_field = field;
    }

    if let Some(split) = lookup("CRUMBTRAIL_COLLECTIONS_SPLIT_CHAR") {
        config.collections.split_char = split;
    }
}
