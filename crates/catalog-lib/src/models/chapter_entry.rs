use serde::{Deserialize, Serialize};

/// Scanlator credited when a source names nobody
pub const UNKNOWN_SCANLATOR: &str = "Unknown";

/// A type represent chapter, normalized across source
///
/// Alternate releases of the same chapter are kept in `duplicates`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterEntry {
    pub url: String,
    pub name: String,
    /// epoch milliseconds, 0 when unknown
    pub date_upload: i64,
    pub scanlator: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<ChapterEntry>,
}

impl ChapterEntry {
    /// Number of releases of this chapter, counting itself
    pub fn release_count(&self) -> usize {
        1 + self
            .duplicates
            .iter()
            .map(ChapterEntry::release_count)
            .sum::<usize>()
    }
}
