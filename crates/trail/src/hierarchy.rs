//! Hierarchies that collapse into a single compound crumb

use crumbtrail_core::{Label, TrailError, TrailResult};
use std::collections::HashSet;

/// Splits a collection name into its cumulative hierarchy levels
///
/// `"a.b.c"` split on `"."` yields `["a", "a.b", "a.b.c"]`. Empty levels
/// (from doubled or trailing separators) are skipped.
pub fn collection_hierarchy(collection: &str, split: &str) -> Vec<String> {
    let mut levels = Vec::new();
    let mut current = String::new();

    for part in collection.trim().split(split).filter(|p| !p.is_empty()) {
        if !current.is_empty() {
            current.push_str(split);
        }
        current.push_str(part);
        levels.push(current.clone());
    }

    levels
}

/// A page that may sit below a parent page (e.g. a CMS page tree)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    pub id: String,
    pub label: Label,
    /// Page URL; relative URLs are resolved against the application root
    pub url: String,
    pub parent: Option<String>,
}

impl PageNode {
    pub fn new(id: impl Into<String>, label: impl Into<Label>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Walks the parent chain of `page`, returning ancestors first and `page` last
///
/// A parent id that `lookup` cannot find ends the chain there. A parent id
/// seen twice is a cycle.
pub fn page_chain<F>(page: &PageNode, lookup: F) -> TrailResult<Vec<PageNode>>
where
    F: Fn(&str) -> Option<PageNode>,
{
    let mut chain = vec![page.clone()];
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(page.id.clone());

    let mut next = page.parent.clone();
    while let Some(parent_id) = next {
        if !visited.insert(parent_id.clone()) {
            log::warn!(
                "Page '{}' has a cyclic parent chain at '{}'",
                page.id,
                parent_id
            );
            return Err(TrailError::HierarchyCycle { page_id: parent_id });
        }

        match lookup(&parent_id) {
            Some(parent) => {
                next = parent.parent.clone();
                chain.push(parent);
            }
            None => {
                log::debug!("Parent page '{}' of '{}' not found", parent_id, page.id);
                next = None;
            }
        }
    }

    chain.reverse();
    Ok(chain)
}
