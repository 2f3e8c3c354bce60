//! Display-ready crumbs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A crumb with its label resolved to text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCrumb {
    pub label: String,
    pub url: String,
    pub weight: i32,
}

impl fmt::Display for RenderedCrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.label, self.url)
    }
}

/// Joins crumbs into a single line, e.g. `Home > Search > Results`
pub fn format_trail(crumbs: &[RenderedCrumb], separator: &str) -> String {
    crumbs
        .iter()
        .map(|crumb| crumb.label.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
