//! Session breadcrumb trail
//!
//! The trail is an ordered list of entries, shallowest first, whose weights
//! never decrease from front to back. Adding an entry finds the first
//! existing entry at the same or a deeper weight, puts the new entry there
//! and drops everything behind it. Revisiting a shallow page therefore cuts
//! the trail back to that depth.

use crate::hierarchy::{collection_hierarchy, page_chain, PageNode};
use crate::pages::{PageResolver, PageType, StaticPageResolver};
use crate::render::RenderedCrumb;
use crumbtrail_config::Config;
use crumbtrail_core::{
    CompoundLink, Label, Link, Segment, TrailEntry, TrailError, TrailResult, Translator, Weight,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// Values the trail needs from the application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSettings {
    /// Application root without a trailing slash
    pub application_root: String,
    pub home_label: String,
    pub default_language: String,
    pub browse_label: String,
    pub browse_path: String,
    /// Index field of collection names; empty when unset
    pub hierarchy_field: String,
    /// Separator between collection levels; empty when unset
    pub split_char: String,
}

impl TrailSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            application_root: config.site.root().to_string(),
            home_label: config.site.home_label.clone(),
            default_language: config.site.default_language.clone(),
            browse_label: config.collections.browse_label.clone(),
            browse_path: config.collections.browse_path.clone(),
            hierarchy_field: config.collections.hierarchy_field.clone(),
            split_char: config.collections.split_char.clone(),
        }
    }

    /// Resolves `path` against the application root; absolute URLs pass through
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.application_root,
                path.trim_start_matches('/')
            )
        }
    }

    /// The weight-0 entry every fresh trail starts with
    pub fn home_link(&self) -> Link {
        Link::new(self.home_label.as_str(), self.url_for("/"), Weight::HOME)
    }
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Breadcrumb trail of one user session
///
/// Clones are handles to the same trail. Every operation takes the trail's
/// lock once, so concurrent requests of a session never observe a
/// half-applied update.
#[derive(Clone)]
pub struct BreadcrumbTrail {
    settings: Arc<TrailSettings>,
    resolver: Arc<dyn PageResolver>,
    entries: Arc<Mutex<Vec<TrailEntry>>>,
}

impl BreadcrumbTrail {
    /// Creates a trail holding only the home entry
    pub fn new(settings: TrailSettings) -> Self {
        let resolver = StaticPageResolver::new(settings.application_root.clone());
        let home = TrailEntry::from(settings.home_link());
        Self {
            settings: Arc::new(settings),
            resolver: Arc::new(resolver),
            entries: Arc::new(Mutex::new(vec![home])),
        }
    }

    /// Creates a trail using the site, collection and page settings of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(TrailSettings::from_config(config))
            .with_resolver(StaticPageResolver::from_config(config))
    }

    /// Replaces the page resolver used by [`BreadcrumbTrail::add_static_link`]
    pub fn with_resolver(mut self, resolver: impl PageResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn settings(&self) -> &TrailSettings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TrailEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            log::warn!("Breadcrumb trail lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Merges `entry` into the trail
    ///
    /// An empty trail is seeded with the home entry first. The entry is
    /// placed at the first position whose weight is at least its own, and
    /// every entry behind it is removed, whether or not it repeats a label.
    pub fn update(&self, entry: impl Into<TrailEntry>) -> TrailResult<()> {
        let entry = entry.into();
        check_entry(&entry)?;

        let mut entries = self.lock();
        self.merge(&mut entries, entry);
        Ok(())
    }

    fn merge(&self, entries: &mut Vec<TrailEntry>, entry: TrailEntry) {
        if entries.is_empty() {
            entries.push(self.settings.home_link().into());
        }

        let weight = entry.weight();
        let index = entries
            .iter()
            .position(|existing| existing.weight() >= weight)
            .unwrap_or(entries.len());

        entries.truncate(index);
        log::debug!(
            "Breadcrumb '{}' (weight {}) placed at {}",
            entry.label(),
            weight,
            index
        );
        entries.push(entry);
    }

    /// Empties the trail, keeping only a fresh home entry if `include_home`
    pub fn reset(&self, include_home: bool) {
        let mut entries = self.lock();
        entries.clear();
        if include_home {
            entries.push(self.settings.home_link().into());
        }
        log::debug!("Breadcrumb trail reset (home: {})", include_home);
    }

    /// Adds a link to a named page or URL
    ///
    /// A negative weight suppresses the crumb and leaves the trail untouched.
    /// Known page names resolve to their canonical URL; other relative URLs
    /// are resolved against the application root.
    pub fn add_static_link(
        &self,
        label: impl Into<Label>,
        url: &str,
        weight: impl Into<Weight>,
    ) -> TrailResult<()> {
        let label = label.into();
        let weight = weight.into();
        if weight.is_suppressed() {
            log::debug!("Suppressed breadcrumb '{}' (weight {})", label, weight);
            return Ok(());
        }

        let url = self.resolve_url(url);
        self.update(Link::new(label, url, weight))
    }

    /// Adds the crumb of a known page at its default weight
    pub fn add_page(&self, page: PageType) -> TrailResult<()> {
        self.add_static_link(page.name(), page.name(), page.default_weight())
    }

    fn resolve_url(&self, url: &str) -> String {
        match self.resolver.resolve(url) {
            Some(canonical) => canonical,
            None => self.settings.url_for(url),
        }
    }

    /// Adds the browse root and a compound crumb for `collection`
    ///
    /// `collection` is split on `split_char` into cumulative levels, each of
    /// which becomes one display crumb linking to the collection under
    /// `field`. A blank collection is ignored.
    pub fn add_collection_hierarchy(
        &self,
        collection: &str,
        field: &str,
        split_char: &str,
    ) -> TrailResult<()> {
        if field.trim().is_empty() {
            return Err(TrailError::invalid_argument(
                "hierarchy field",
                "must be set",
            ));
        }
        if split_char.is_empty() {
            return Err(TrailError::invalid_argument(
                "split character",
                "must be set",
            ));
        }
        let levels = collection_hierarchy(collection, split_char);
        if levels.is_empty() {
            log::debug!("Collection '{}' has no levels, ignoring", collection);
            return Ok(());
        }

        let browse_url = self.settings.url_for(&self.settings.browse_path);
        let browse = Link::new(
            self.settings.browse_label.as_str(),
            browse_url.clone(),
            Weight::BROWSE,
        );
        let compound = CompoundLink::collection(
            collection.trim(),
            browse_url,
            field.trim(),
            levels,
            Weight::ACTIVE_COLLECTION,
        );

        let mut entries = self.lock();
        self.merge(&mut entries, browse.into());
        self.merge(&mut entries, compound.into());
        Ok(())
    }

    /// [`BreadcrumbTrail::add_collection_hierarchy`] with the configured field and separator
    pub fn add_configured_collection(&self, collection: &str) -> TrailResult<()> {
        self.add_collection_hierarchy(
            collection,
            &self.settings.hierarchy_field,
            &self.settings.split_char,
        )
    }

    /// Adds `page` with all its ancestors as one compound crumb
    ///
    /// `lookup` is called outside the trail lock. A negative weight
    /// suppresses the crumb; a cyclic parent chain is an error and leaves the
    /// trail untouched.
    pub fn add_page_hierarchy<F>(
        &self,
        page: &PageNode,
        weight: Weight,
        lookup: F,
    ) -> TrailResult<()>
    where
        F: Fn(&str) -> Option<PageNode>,
    {
        if weight.is_suppressed() {
            log::debug!("Suppressed page hierarchy '{}'", page.id);
            return Ok(());
        }

        let segments = page_chain(page, lookup)?
            .into_iter()
            .map(|node| Segment::linked(node.label, self.settings.url_for(&node.url)))
            .collect();
        let compound = CompoundLink::from_segments(
            page.label.clone(),
            self.settings.url_for(&page.url),
            segments,
            weight,
        );

        self.update(compound)
    }

    /// Display sequence: compound entries expanded in place
    ///
    /// Returns a fresh snapshot; later changes to the trail do not affect it.
    pub fn flatten(&self) -> Vec<Link> {
        let entries = self.lock();
        let mut links = Vec::with_capacity(entries.len());
        for entry in entries.iter() {
            entry.expand_into(&mut links);
        }
        links
    }

    /// Flattened crumbs with their labels resolved for `locale`
    pub fn render(&self, translator: &dyn Translator, locale: &str) -> Vec<RenderedCrumb> {
        self.flatten()
            .into_iter()
            .map(|link| RenderedCrumb {
                label: link
                    .label
                    .display(translator, locale, &self.settings.default_language),
                url: link.url,
                weight: link.weight.value(),
            })
            .collect()
    }

    /// The deepest entry, if any
    pub fn last(&self) -> Option<TrailEntry> {
        self.lock().last().cloned()
    }

    /// Snapshot of the raw entries
    pub fn entries(&self) -> Vec<TrailEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for BreadcrumbTrail {
    fn default() -> Self {
        Self::new(TrailSettings::default())
    }
}

impl std::fmt::Debug for BreadcrumbTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreadcrumbTrail")
            .field("settings", &self.settings)
            .field("entries", &*self.lock())
            .finish()
    }
}

fn check_entry(entry: &TrailEntry) -> TrailResult<()> {
    if entry.weight().is_suppressed() {
        return Err(TrailError::InvalidWeight {
            label: entry.label().to_string(),
            weight: entry.weight().value(),
        });
    }
    if entry.label().is_blank() {
        return Err(TrailError::invalid_argument("label", "must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbtrail_core::IdentityTranslator;

    fn trail() -> BreadcrumbTrail {
        let settings = TrailSettings {
            application_root: "https://viewer.example.org".to_string(),
            ..TrailSettings::default()
        };
        BreadcrumbTrail::new(settings)
    }

    fn labels(trail: &BreadcrumbTrail) -> Vec<String> {
        trail
            .entries()
            .iter()
            .map(|e| e.label().to_string())
            .collect()
    }

    fn link(label: &str, weight: i32) -> Link {
        Link::new(label, format!("/{}/", label), Weight::new(weight))
    }

    #[test]
    fn test_new_trail_holds_home() {
        let trail = trail();
        assert_eq!(labels(&trail), vec!["home"]);
        assert_eq!(
            trail.last().map(|e| e.url().to_string()),
            Some("https://viewer.example.org/".to_string())
        );
    }

    #[test]
    fn test_update_seeds_home_on_empty_trail() {
        let trail = trail();
        trail.reset(false);
        assert!(trail.is_empty());

        trail.update(link("L", 5)).unwrap();
        assert_eq!(labels(&trail), vec!["home", "L"]);
        assert_eq!(trail.entries()[0].weight(), Weight::HOME);
    }

    #[test]
    fn test_update_truncates_deeper_entries() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();
        trail.update(link("w2", 2)).unwrap();
        trail.update(link("w3", 3)).unwrap();

        trail.update(link("L", 2)).unwrap();
        assert_eq!(labels(&trail), vec!["home", "w1", "L"]);
    }

    #[test]
    fn test_update_with_duplicate_label_still_truncates() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();
        trail.update(link("w2", 2)).unwrap();
        trail.update(link("w3", 3)).unwrap();

        trail.update(link("w2", 2)).unwrap();
        assert_eq!(labels(&trail), vec!["home", "w1", "w2"]);
    }

    #[test]
    fn test_weight_zero_replaces_home() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();
        trail.update(link("start", 0)).unwrap();
        assert_eq!(labels(&trail), vec!["start"]);
    }

    #[test]
    fn test_update_rejects_negative_weight() {
        let trail = trail();
        let err = trail.update(link("x", -1)).unwrap_err();
        assert!(matches!(err, TrailError::InvalidWeight { weight: -1, .. }));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_update_rejects_blank_label() {
        let trail = trail();
        let err = trail.update(link(" ", 1)).unwrap_err();
        assert!(matches!(err, TrailError::InvalidArgument { .. }));
    }

    #[test]
    fn test_reset_with_and_without_home() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();

        trail.reset(true);
        assert_eq!(labels(&trail), vec!["home"]);
        trail.reset(true);
        assert_eq!(labels(&trail), vec!["home"]);

        trail.reset(false);
        assert!(trail.last().is_none());
    }

    #[test]
    fn test_static_link_suppressed_by_negative_weight() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();
        let before = trail.entries();

        trail.add_static_link("x", "/x", -1).unwrap();
        assert_eq!(trail.entries(), before);
    }

    #[test]
    fn test_static_link_resolves_page_names_and_paths() {
        let trail = trail();
        trail.add_static_link("search", "search", Weight::SEARCH).unwrap();
        assert_eq!(
            trail.last().unwrap().url(),
            "https://viewer.example.org/search/"
        );

        trail.add_static_link("faq", "/cms/faq/", 2).unwrap();
        assert_eq!(
            trail.last().unwrap().url(),
            "https://viewer.example.org/cms/faq/"
        );

        trail
            .add_static_link("external", "https://other.example.org/x", 3)
            .unwrap();
        assert_eq!(trail.last().unwrap().url(), "https://other.example.org/x");
    }

    #[test]
    fn test_add_page_uses_default_weight() {
        let trail = trail();
        trail.add_page(PageType::Search).unwrap();
        trail.add_page(PageType::SearchList).unwrap();
        trail.add_page(PageType::Image).unwrap();
        assert_eq!(labels(&trail), vec!["home", "search", "searchlist", "image"]);

        trail.add_page(PageType::Browse).unwrap();
        assert_eq!(labels(&trail), vec!["home", "browse"]);
    }

    #[test]
    fn test_collection_hierarchy_requires_field_and_separator() {
        let trail = trail();
        assert!(matches!(
            trail.add_collection_hierarchy("a.b", "", ".").unwrap_err(),
            TrailError::InvalidArgument { .. }
        ));
        assert!(matches!(
            trail.add_collection_hierarchy("a.b", "DC", "").unwrap_err(),
            TrailError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_blank_collection_is_ignored() {
        let trail = trail();
        trail.add_collection_hierarchy("  ", "DC", ".").unwrap();
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_separator_only_collection_is_ignored() {
        let trail = trail();
        trail.add_static_link("openDoc", "/image/PPN1/1/", 3).unwrap();
        let before = trail.entries();

        trail.add_collection_hierarchy("...", "DC", ".").unwrap();
        trail.add_collection_hierarchy(".", "DC", ".").unwrap();
        trail.add_collection_hierarchy(" . ", "DC", ".").unwrap();

        assert_eq!(trail.entries(), before);
        assert_eq!(trail.last().unwrap().label(), &Label::key("openDoc"));
    }

    #[test]
    fn test_collection_hierarchy_entries() {
        let trail = trail();
        trail.add_static_link("openDoc", "/image/PPN1/1/", 3).unwrap();
        trail.add_collection_hierarchy("A.B.C", "DC", ".").unwrap();

        let entries = trail.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].label(), &Label::key("browseCollection"));
        assert_eq!(entries[1].url(), "https://viewer.example.org/browse/");
        assert_eq!(entries[2].weight(), Weight::ACTIVE_COLLECTION);

        let flat = trail.flatten();
        let urls: Vec<_> = flat.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://viewer.example.org/",
                "https://viewer.example.org/browse/",
                "https://viewer.example.org/browse/DC/A/",
                "https://viewer.example.org/browse/DC/A.B/",
                "https://viewer.example.org/browse/DC/A.B.C/",
            ]
        );
    }

    #[test]
    fn test_configured_collection_uses_settings() {
        let settings = TrailSettings {
            split_char: "/".to_string(),
            hierarchy_field: "MD_COLL".to_string(),
            ..TrailSettings::default()
        };
        let trail = BreadcrumbTrail::new(settings);
        trail.add_configured_collection("x/y").unwrap();

        let last = trail.flatten().pop().unwrap();
        assert_eq!(last.label, Label::key("x/y"));
        assert!(last.url.ends_with("/browse/MD_COLL/x%2Fy/"));
    }

    #[test]
    fn test_configured_collection_fails_when_unset() {
        let settings = TrailSettings {
            hierarchy_field: String::new(),
            ..TrailSettings::default()
        };
        let trail = BreadcrumbTrail::new(settings);
        assert!(trail.add_configured_collection("x").is_err());
    }

    #[test]
    fn test_page_hierarchy() {
        let parent = PageNode::new("1", "About", "/cms/1/");
        let child = PageNode::new("2", "Team", "/cms/2/").with_parent("1");

        let trail = trail();
        trail
            .add_page_hierarchy(&child, Weight::new(1), |id| {
                (id == "1").then(|| parent.clone())
            })
            .unwrap();

        assert_eq!(trail.len(), 2);
        let flat: Vec<_> = trail
            .flatten()
            .into_iter()
            .map(|l| l.label.to_string())
            .collect();
        assert_eq!(flat, vec!["home", "About", "Team"]);
    }

    #[test]
    fn test_page_hierarchy_cycle_leaves_trail_untouched() {
        let a = PageNode::new("a", "A", "/cms/a/").with_parent("b");
        let b = PageNode::new("b", "B", "/cms/b/").with_parent("a");

        let trail = trail();
        let result = trail.add_page_hierarchy(&a, Weight::new(1), |id| {
            (id == "b").then(|| b.clone())
        });
        assert!(matches!(result, Err(TrailError::HierarchyCycle { .. })));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_render_translates_labels() {
        let translator = crumbtrail_core::MapTranslator::new().with("de", "home", "Start");
        let trail = trail();
        trail.add_static_link("search", "search", 1).unwrap();

        let rendered = trail.render(&translator, "de");
        assert_eq!(rendered[0].label, "Start");
        assert_eq!(rendered[1].label, "search");

        let untranslated = trail.render(&IdentityTranslator, "de");
        assert_eq!(untranslated[0].label, "home");
    }

    #[test]
    fn test_clones_share_state() {
        let trail = trail();
        let handle = trail.clone();
        handle.update(link("w1", 1)).unwrap();
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let trail = trail();
        trail.update(link("w1", 1)).unwrap();

        let handle = trail.clone();
        let result = std::thread::spawn(move || {
            let _guard = handle.entries.lock().unwrap();
            panic!("request thread died while holding the trail");
        })
        .join();
        assert!(result.is_err());
        assert!(trail.entries.is_poisoned());

        assert_eq!(labels(&trail), vec!["home", "w1"]);
        trail.update(link("w2", 2)).unwrap();
        assert_eq!(trail.flatten().len(), 3);
        trail.add_collection_hierarchy("A.B", "DC", ".").unwrap();
        assert_eq!(labels(&trail), vec!["home", "browseCollection", "A.B"]);
        trail.reset(true);
        assert_eq!(labels(&trail), vec!["home"]);
    }
}
