//! Result types produced by an index build.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::download::DownloadStats;

/// One parsed table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalRecord {
    /// Trimmed, non-empty display name.
    pub canonical_name: String,
    /// Name this row refers to instead of defining its own. Never equal to
    /// `canonical_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym_target: Option<String>,
    /// Cleaned adjective tokens in source order, duplicates kept.
    pub adjectives: Vec<String>,
    /// Absolute info box image URL, when images were requested and found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One entry of an adjective bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// A bare canonical name.
    Name(String),
    /// Markup referencing the downloaded image for `name`.
    ImageRef {
        /// Canonical name the image belongs to.
        name: String,
        /// Local path the image is written to.
        path: String,
    },
}

impl IndexEntry {
    /// Creates an image reference for `name` stored at `path`.
    #[must_use]
    pub fn image_ref(name: impl Into<String>, path: &Path) -> Self {
        Self::ImageRef {
            name: name.into(),
            path: path.display().to_string(),
        }
    }

    /// Returns the canonical name this entry belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::ImageRef { name, .. } => name,
        }
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::ImageRef { name, path } => write!(f, r#"<img src="{path}" alt="{name}">"#),
        }
    }
}

impl Serialize for IndexEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Adjective token to its entries, in first-seen order.
pub type AdjectiveIndex = IndexMap<String, Vec<IndexEntry>>;

/// Referencing name to synonym target, in row order.
pub type SynonymMap = IndexMap<String, String>;

/// Everything one pipeline run produces.
#[derive(Debug, Default, Serialize)]
pub struct AnimalIndex {
    /// Adjective buckets.
    pub adjectives: AdjectiveIndex,
    /// Synonym references.
    pub synonyms: SynonymMap,
    /// Per-row records in table order.
    #[serde(skip)]
    pub records: Vec<AnimalRecord>,
    /// Image download counters, present when downloads ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_stats: Option<DownloadStats>,
}

impl AnimalIndex {
    /// Returns the bucket for `adjective`, if any row listed it.
    #[must_use]
    pub fn bucket(&self, adjective: &str) -> Option<&[IndexEntry]> {
        self.adjectives.get(adjective).map(Vec::as_slice)
    }
}
