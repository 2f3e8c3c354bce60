//! Core types for crumbtrail
//!
//! Links, compound links, weights and the error type shared by the trail,
//! configuration and CLI crates.

pub mod error;
pub mod types;

pub use error::{TrailError, TrailResult};
pub use types::{
    CompoundLink, IdentityTranslator, Label, Link, MapTranslator, Segment, TrailEntry,
    Translator, Weight,
};
