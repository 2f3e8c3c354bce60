//! Crumb labels and their translation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resolves message keys to display text for a locale
pub trait Translator {
    /// Returns the text for `key` in `locale`, or `None` if there is no entry
    fn translate(&self, key: &str, locale: &str) -> Option<String>;
}

/// Translator that knows no keys; labels render as their raw key
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, _key: &str, _locale: &str) -> Option<String> {
        None
    }
}

/// In-memory translator backed by `(locale, key) -> text` entries
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    entries: BTreeMap<(String, String), String>,
}

impl MapTranslator {
    /// Creates an empty translator
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous text for the same key and locale
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries.insert((locale.into(), key.into()), text.into());
    }

    /// Builder form of [`MapTranslator::insert`]
    pub fn with(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, text);
        self
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        self.entries
            .get(&(locale.to_string(), key.to_string()))
            .cloned()
    }
}

/// Text of a crumb
///
/// Either a message key resolved by a [`Translator`] at render time, or a
/// value that already carries its text per language (e.g. a collection or
/// page title stored in several languages).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Key(String),
    Translations(BTreeMap<String, String>),
}

impl Label {
    /// Creates a key label
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Creates a multi-language label from `(language, text)` pairs
    pub fn translations<I, L, T>(values: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        Self::Translations(
            values
                .into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }

    /// Returns true if there is no text to show
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Key(key) => key.trim().is_empty(),
            Self::Translations(values) => values.values().all(|v| v.trim().is_empty()),
        }
    }

    /// Resolves the text shown for `locale`
    ///
    /// Keys go through `translator` and fall back to the key itself.
    /// Multi-language values use `locale`, then `fallback_locale`, then
    /// whichever language sorts first.
    pub fn display(
        &self,
        translator: &dyn Translator,
        locale: &str,
        fallback_locale: &str,
    ) -> String {
        match self {
            Self::Key(key) => translator
                .translate(key, locale)
                .or_else(|| translator.translate(key, fallback_locale))
                .unwrap_or_else(|| key.clone()),
            Self::Translations(values) => values
                .get(locale)
                .or_else(|| values.get(fallback_locale))
                .or_else(|| values.values().next())
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for Label {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Label {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Translations(values) => {
                let joined = values
                    .iter()
                    .map(|(lang, text)| format!("{}={}", lang, text))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", joined)
            }
        }
    }
}
