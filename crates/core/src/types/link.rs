//! Trail entries: plain links and compound (hierarchical) links

use crate::types::{Label, Weight};
use serde::{Deserialize, Serialize};

/// One crumb in a trail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub label: Label,
    pub url: String,
    pub weight: Weight,
}

impl Link {
    /// Creates a new link
    pub fn new(label: impl Into<Label>, url: impl Into<String>, weight: Weight) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            weight,
        }
    }

    /// Returns true if both links carry the same label, regardless of URL
    pub fn same_label(&self, other: &Link) -> bool {
        self.label == other.label
    }
}

/// A single trail entry that expands into one link per hierarchy segment
///
/// The compound link merges into the trail as one weighted entry; only
/// [`CompoundLink::sub_links`] splits it up for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundLink {
    pub label: Label,
    /// Base URL the segment URLs are built from
    pub url: String,
    /// Index field the hierarchy belongs to; empty for prebuilt hierarchies
    pub field: String,
    pub segments: Vec<Segment>,
    pub weight: Weight,
}

/// One level of a compound link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub label: Label,
    /// Explicit target; when absent the URL is derived from the compound link
    pub url: Option<String>,
    /// Raw value used when deriving the URL
    pub value: String,
}

impl Segment {
    /// A segment whose URL is derived from the enclosing compound link
    pub fn derived(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: Label::Key(value.clone()),
            url: None,
            value,
        }
    }

    /// A segment with a fixed label and URL
    pub fn linked(label: impl Into<Label>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            value: String::new(),
        }
    }
}

impl CompoundLink {
    /// Creates a compound link over a collection hierarchy
    ///
    /// `hierarchy` holds the cumulative collection names, shallowest first
    /// (e.g. `["a", "a.b", "a.b.c"]`).
    pub fn collection<I, S>(
        label: impl Into<Label>,
        url: impl Into<String>,
        field: impl Into<String>,
        hierarchy: I,
        weight: Weight,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            url: url.into(),
            field: field.into(),
            segments: hierarchy.into_iter().map(Segment::derived).collect(),
            weight,
        }
    }

    /// Creates a compound link from prebuilt segments
    pub fn from_segments(
        label: impl Into<Label>,
        url: impl Into<String>,
        segments: Vec<Segment>,
        weight: Weight,
    ) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            field: String::new(),
            segments,
            weight,
        }
    }

    /// Expands into one link per segment, shallowest first
    ///
    /// Every sub-link carries the compound link's weight.
    pub fn sub_links(&self) -> Vec<Link> {
        self.segments
            .iter()
            .map(|segment| Link {
                label: segment.label.clone(),
                url: segment
                    .url
                    .clone()
                    .unwrap_or_else(|| self.segment_url(&segment.value)),
                weight: self.weight,
            })
            .collect()
    }

    fn segment_url(&self, value: &str) -> String {
        let base = self.url.trim_end_matches('/');
        if self.field.is_empty() {
            format!("{}/{}/", base, urlencoding::encode(value))
        } else {
            format!("{}/{}/{}/", base, self.field, urlencoding::encode(value))
        }
    }
}

/// An entry of a trail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrailEntry {
    Plain(Link),
    Compound(CompoundLink),
}

impl TrailEntry {
    pub fn label(&self) -> &Label {
        match self {
            Self::Plain(link) => &link.label,
            Self::Compound(link) => &link.label,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Plain(link) => &link.url,
            Self::Compound(link) => &link.url,
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            Self::Plain(link) => link.weight,
            Self::Compound(link) => link.weight,
        }
    }

    /// Appends the display links of this entry to `out`
    pub fn expand_into(&self, out: &mut Vec<Link>) {
        match self {
            Self::Plain(link) => out.push(link.clone()),
            Self::Compound(link) => out.extend(link.sub_links()),
        }
    }
}

impl From<Link> for TrailEntry {
    fn from(link: Link) -> Self {
        Self::Plain(link)
    }
}

impl From<CompoundLink> for TrailEntry {
    fn from(link: CompoundLink) -> Self {
        Self::Compound(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_label_ignores_url() {
        let a = Link::new("search", "/search/", Weight::SEARCH);
        let b = Link::new("search", "/search/-/foo/1/", Weight::SEARCH);
        assert!(a.same_label(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_collection_sub_links() {
        let link = CompoundLink::collection(
            "browseCollection",
            "https://viewer.example.org/browse/",
            "DC",
            ["maps", "maps.europe"],
            Weight::ACTIVE_COLLECTION,
        );
        let subs = link.sub_links();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].label, Label::key("maps"));
        assert_eq!(subs[0].url, "https://viewer.example.org/browse/DC/maps/");
        assert_eq!(subs[1].url, "https://viewer.example.org/browse/DC/maps.europe/");
        assert!(subs.iter().all(|l| l.weight == Weight::ACTIVE_COLLECTION));
    }

    #[test]
    fn test_segment_values_are_percent_encoded() {
        let link = CompoundLink::collection("c", "/browse", "DC", ["a b/c"], Weight::new(2));
        assert_eq!(link.sub_links()[0].url, "/browse/DC/a%20b%2Fc/");
    }

    #[test]
    fn test_linked_segments_keep_their_url() {
        let link = CompoundLink::from_segments(
            "page",
            "/cms/",
            vec![Segment::linked("Parent", "/cms/1/"), Segment::linked("Child", "/cms/2/")],
            Weight::new(4),
        );
        let urls: Vec<_> = link.sub_links().into_iter().map(|l| l.url).collect();
        assert_eq!(urls, vec!["/cms/1/", "/cms/2/"]);
    }

    #[test]
    fn test_entry_expand_into() {
        let mut out = Vec::new();
        TrailEntry::from(Link::new("home", "/", Weight::HOME)).expand_into(&mut out);
        TrailEntry::from(CompoundLink::collection(
            "coll",
            "/browse/",
            "DC",
            ["A", "A.B"],
            Weight::ACTIVE_COLLECTION,
        ))
        .expand_into(&mut out);
        let labels: Vec<_> = out.iter().map(|l| l.label.to_string()).collect();
        assert_eq!(labels, vec!["home", "A", "A.B"]);
    }

    #[test]
    fn test_entry_serde_is_tagged() {
        let entry = TrailEntry::from(Link::new("home", "/", Weight::HOME));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["weight"], 0);
    }
}
