use serde::{Deserialize, Serialize};

/// What a metadata provider knows about one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Upload timestamp as reported by the provider (RFC 3339).
    pub published_at: String,
    pub thumbnail_url: Option<String>,
    /// ISO-8601 duration, e.g. `PT4M13S`.
    pub duration: String,
}
