//! Known page types and their canonical URLs

use crumbtrail_config::Config;
use crumbtrail_core::{TrailError, Weight};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Pages of the viewer that navigation requests may refer to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Index,
    Browse,
    Search,
    SearchAdvanced,
    SearchList,
    Image,
    Fulltext,
    Metadata,
    Toc,
    Tags,
    User,
    Campaigns,
    SiteLinks,
    TimeMatrix,
}

impl PageType {
    pub const ALL: [PageType; 14] = [
        Self::Index,
        Self::Browse,
        Self::Search,
        Self::SearchAdvanced,
        Self::SearchList,
        Self::Image,
        Self::Fulltext,
        Self::Metadata,
        Self::Toc,
        Self::Tags,
        Self::User,
        Self::Campaigns,
        Self::SiteLinks,
        Self::TimeMatrix,
    ];

    /// Identifier used in navigation requests
    pub fn name(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Browse => "browse",
            Self::Search => "search",
            Self::SearchAdvanced => "searchAdvanced",
            Self::SearchList => "searchlist",
            Self::Image => "image",
            Self::Fulltext => "fulltext",
            Self::Metadata => "metadata",
            Self::Toc => "toc",
            Self::Tags => "tags",
            Self::User => "user",
            Self::Campaigns => "campaigns",
            Self::SiteLinks => "sitelinks",
            Self::TimeMatrix => "timematrix",
        }
    }

    /// Path relative to the application root
    pub fn path(&self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Browse => "/browse/",
            Self::Search => "/search/",
            Self::SearchAdvanced => "/searchadvanced/",
            Self::SearchList => "/searchlist/",
            Self::Image => "/image/",
            Self::Fulltext => "/fulltext/",
            Self::Metadata => "/metadata/",
            Self::Toc => "/toc/",
            Self::Tags => "/tags/",
            Self::User => "/user/",
            Self::Campaigns => "/campaigns/",
            Self::SiteLinks => "/sitelinks/",
            Self::TimeMatrix => "/timematrix/",
        }
    }

    /// Weight a crumb for this page gets when added by page type
    pub fn default_weight(&self) -> Weight {
        match self {
            Self::Index => Weight::HOME,
            Self::Browse | Self::SiteLinks | Self::TimeMatrix => Weight::BROWSE,
            Self::Search | Self::SearchAdvanced => Weight::SEARCH,
            Self::Tags => Weight::TAG_MAIN_MENU,
            Self::User => Weight::USER_ACCOUNT,
            Self::Campaigns => Weight::CAMPAIGN_EDIT_OVERVIEW,
            Self::SearchList => Weight::SEARCH_RESULTS,
            Self::Image | Self::Fulltext | Self::Metadata | Self::Toc => Weight::OPEN_DOCUMENT,
        }
    }
}

impl FromStr for PageType {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Self::ALL
            .iter()
            .copied()
            .find(|page| page.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TrailError::UnknownPage {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps page identifiers to canonical URLs
pub trait PageResolver: Send + Sync {
    /// Returns the canonical URL for `name`, or `None` if it is not a known page
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolver over the built-in page table plus configured overrides
#[derive(Debug, Clone)]
pub struct StaticPageResolver {
    root: String,
    overrides: BTreeMap<String, String>,
}

impl StaticPageResolver {
    /// Creates a resolver for pages under `application_root`
    pub fn new(application_root: impl Into<String>) -> Self {
        let root: String = application_root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
            overrides: BTreeMap::new(),
        }
    }

    /// Creates a resolver from the site root and page overrides of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site.root()).with_overrides(config.pages.overrides.clone())
    }

    /// Replaces the path of individual pages
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.root, path.trim_start_matches('/'))
        }
    }
}

impl PageResolver for StaticPageResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(path) = self.overrides.get(name) {
            return Some(self.absolute(path));
        }
        name.parse::<PageType>()
            .ok()
            .map(|page| self.absolute(page.path()))
    }
}
