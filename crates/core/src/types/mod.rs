//! Domain types for breadcrumb trails
//!
//! - `weight`: named crumb priorities
//! - `label`: crumb text and translation
//! - `link`: plain links, compound links and trail entries

mod label;
mod link;
mod weight;

pub use label::{IdentityTranslator, Label, MapTranslator, Translator};
pub use link::{CompoundLink, Link, Segment, TrailEntry};
pub use weight::Weight;
