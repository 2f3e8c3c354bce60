//! Named breadcrumb weights

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a crumb. Lower weights sit closer to the front of the trail.
///
/// A negative weight marks a crumb that must not appear at all; the
/// convenience entry points silently drop such crumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(i32);

impl Weight {
    /// The home entry; always first
    pub const HOME: Self = Self(0);

    pub const BROWSE: Self = Self(1);
    pub const SEARCH: Self = Self(1);
    pub const TAG_MAIN_MENU: Self = Self(1);
    pub const USER_ACCOUNT: Self = Self(1);
    pub const CAMPAIGN_PARENT: Self = Self(1);
    pub const CAMPAIGN_EDIT_OVERVIEW: Self = Self(1);

    pub const SEARCH_RESULTS: Self = Self(2);
    pub const ACTIVE_COLLECTION: Self = Self(2);
    pub const CAMPAIGN: Self = Self(2);
    pub const CAMPAIGN_EDIT: Self = Self(2);

    pub const OPEN_DOCUMENT: Self = Self(3);
    pub const CAMPAIGN_OVERVIEW: Self = Self(3);
    pub const CAMPAIGN_ITEM: Self = Self(3);

    /// Marks a crumb as suppressed
    pub const SUPPRESSED: Self = Self(-1);

    /// Creates a weight from a raw value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw value
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns true if crumbs with this weight should be dropped
    pub const fn is_suppressed(&self) -> bool {
        self.0 < 0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::HOME
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
