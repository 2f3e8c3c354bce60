//! Collection hierarchy configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// How collection names are split into hierarchy levels
///
/// An empty `hierarchy_field` or `split_char` disables collection crumbs;
/// the trail rejects hierarchy requests until both are set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionConfig {
    /// Index field holding the collection names (e.g. "DC")
    pub hierarchy_field: String,

    /// Separator between hierarchy levels (e.g. ".")
    pub split_char: String,

    /// Label of the browse root crumb
    pub browse_label: String,

    /// Path of the browse page, relative to the application root
    pub browse_path: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            hierarchy_field: "DC".to_string(),
            split_char: ".".to_string(),
            browse_label: "browseCollection".to_string(),
            browse_path: "/browse/".to_string(),
        }
    }
}

impl ConfigSection for CollectionConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::not_empty(&self.browse_label, "collections.browse_label"),
            Validator::url_or_path(&self.browse_path, "collections.browse_path"),
            Validator::no_whitespace(&self.hierarchy_field, "collections.hierarchy_field"),
        ];

        if self.split_char.chars().any(char::is_whitespace) {
            results.push(Err(ValidationError::with_value(
                "collections.split_char",
                "must not contain whitespace",
                format!("{:?}", self.split_char),
            )));
        }

        Validator::collect_errors(results)
    }
}
