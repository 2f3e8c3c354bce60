//! crumbtrail configuration
//!
//! Settings the breadcrumb trail needs from its host application: where the
//! application lives, how collection names form a hierarchy, and which
//! canonical paths page identifiers map to.
//!
//! Each section implements `ConfigSection` and validates itself. Invalid
//! settings are reported on load and refused on save.
//!
//! # Example
//!
//! ```rust,no_run
//! use crumbtrail_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load_with_env_overrides().expect("Failed to load config");
//! println!("Application root: {}", config.site.application_root);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
mod collection_config;
mod pages_config;
mod site_config;

pub use error::{ConfigError, ConfigResult, FileAction, ValidationError};
pub use manager::ConfigManager;
pub use validation::{ConfigSection, Validator};

pub use collection_config::CollectionConfig;
pub use pages_config::PagesConfig;
pub use site_config::SiteConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application root and home crumb
    pub site: SiteConfig,

    /// Collection hierarchy settings
    pub collections: CollectionConfig,

    /// Page URL overrides
    pub pages: PagesConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.site.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.collections.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.pages.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            site: SiteConfig::default(),
            collections: CollectionConfig::default(),
            pages: PagesConfig::default(),
        }
    }
}
