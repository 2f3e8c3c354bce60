//! Page URL overrides

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical paths for page identifiers, overriding the built-in table
///
/// Keys are page names as used in navigation requests (e.g. "search"),
/// values are paths relative to the application root (e.g. "/suche/").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesConfig {
    pub overrides: BTreeMap<String, String>,
}

impl ConfigSection for PagesConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();
        for (name, path) in &self.overrides {
            let field = format!("pages.overrides.{}", name);
            results.push(Validator::not_empty(name, "pages.overrides"));
            results.push(Validator::url_or_path(path, &field));
        }
        Validator::collect_errors(results)
    }
}
