//! Site-level configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Where the application lives and how its home crumb looks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Root URL of the application; relative crumb URLs are resolved against it
    pub application_root: String,

    /// Label (message key) of the home crumb
    pub home_label: String,

    /// Language used when a label has no text for the requested locale
    pub default_language: String,
}

impl SiteConfig {
    /// Root URL without a trailing slash
    pub fn root(&self) -> &str {
        self.application_root.trim_end_matches('/')
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            application_root: "http://localhost:8080/viewer".to_string(),
            home_label: "home".to_string(),
            default_language: "en".to_string(),
        }
    }
}

impl ConfigSection for SiteConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::not_empty(&self.application_root, "site.application_root"),
            Validator::url_or_path(&self.application_root, "site.application_root"),
            Validator::not_empty(&self.home_label, "site.home_label"),
            Validator::not_empty(&self.default_language, "site.default_language"),
            Validator::in_range(
                self.default_language.len(),
                2,
                8,
                "site.default_language",
            ),
        ])
    }
}
