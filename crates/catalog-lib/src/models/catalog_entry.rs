use serde::{Deserialize, Serialize};

use super::Status;

/// A type represent comic details, normalized across source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    /// canonical path and source identifier, see [`join_url`](super::join_url)
    pub url: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: String,
    pub genre: Option<String>,
    pub status: Status,
    pub initialized: bool,
}
