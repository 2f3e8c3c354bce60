//! Navigation scripts replayed against a trail

use anyhow::{Context, Result};
use crumbtrail::{BreadcrumbTrail, Label, MapTranslator, PageType, TrailResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A recorded sequence of navigation events plus optional label translations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationScript {
    /// locale -> key -> text
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
    pub events: Vec<NavigationEvent>,
}

/// One page view or reset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum NavigationEvent {
    Link {
        label: Label,
        url: String,
        weight: i32,
    },
    Page {
        page: String,
    },
    Collection {
        path: String,
        field: Option<String>,
        split: Option<String>,
    },
    Reset {
        #[serde(default = "default_true")]
        home: bool,
    },
}

fn default_true() -> bool {
    true
}

impl NavigationEvent {
    /// Applies this event to `trail`
    pub fn apply(&self, trail: &BreadcrumbTrail) -> TrailResult<()> {
        match self {
            Self::Link { label, url, weight } => {
                trail.add_static_link(label.clone(), url, *weight)
            }
            Self::Page { page } => trail.add_page(page.parse::<PageType>()?),
            Self::Collection { path, field, split } => {
                let settings = trail.settings();
                let field = field.as_deref().unwrap_or(settings.hierarchy_field.as_str());
                let split = split.as_deref().unwrap_or(settings.split_char.as_str());
                trail.add_collection_hierarchy(path, field, split)
            }
            Self::Reset { home } => {
                trail.reset(*home);
                Ok(())
            }
        }
    }
}

impl NavigationScript {
    /// Reads a script from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Parses a script from JSON text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Applies every event in order, stopping at the first failure
    pub fn replay(&self, trail: &BreadcrumbTrail) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            log::debug!("Replaying event {}: {:?}", index, event);
            event
                .apply(trail)
                .with_context(|| format!("Event {} failed", index + 1))?;
        }
        Ok(())
    }

    pub fn translator(&self) -> MapTranslator {
        let mut translator = MapTranslator::new();
        for (locale, entries) in &self.translations {
            for (key, text) in entries {
                translator.insert(locale.as_str(), key.as_str(), text.as_str());
            }
        }
        translator
    }
}
