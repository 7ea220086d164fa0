// Resource model
// Static entries in the resource library.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Guide,
    Video,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Guide => "Guides",
            Self::Video => "Videos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    /// Size for downloads, duration for recordings.
    pub detail: String,
    pub updated: String,
    pub url: String,
}
