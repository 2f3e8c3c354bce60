//! Breadcrumb trails for viewer sessions
//!
//! A [`BreadcrumbTrail`] keeps the ordered list of crumbs showing how a user
//! got to the current page. Crumbs are merged by weight: adding a crumb cuts
//! off everything at the same depth or deeper.
//!
//! # Example
//!
//! ```rust
//! use crumbtrail::{BreadcrumbTrail, Weight};
//!
//! let trail = BreadcrumbTrail::default();
//! trail.add_static_link("search", "search", Weight::SEARCH).unwrap();
//! trail.add_static_link("searchResults", "/search/-/maps/1/", Weight::SEARCH_RESULTS).unwrap();
//! trail.add_static_link("search", "search", Weight::SEARCH).unwrap();
//!
//! let labels: Vec<String> = trail.flatten().iter().map(|l| l.label.to_string()).collect();
//! assert_eq!(labels, ["home", "search"]);
//! ```

mod hierarchy;
mod pages;
mod render;
mod trail;

pub use hierarchy::{collection_hierarchy, page_chain, PageNode};
pub use pages::{PageResolver, PageType, StaticPageResolver};
pub use render::{format_trail, RenderedCrumb};
pub use trail::{BreadcrumbTrail, TrailSettings};

pub use crumbtrail_core::{
    CompoundLink, IdentityTranslator, Label, Link, MapTranslator, Segment, TrailEntry,
    TrailError, TrailResult, Translator, Weight,
};
