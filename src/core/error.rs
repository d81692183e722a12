use thiserror::Error;

/// Errors raised while turning description text and durations into chapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `H:M:S` or `M:S` token that is not made of numeric components.
    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A duration that is not of the `PT#H#M#S` shape.
    #[error("malformed ISO-8601 duration: {0:?}")]
    MalformedDuration(String),

    /// A chapter start that is not after the previous one.
    #[error("chapter {index} starts at {start}s, not after the previous start at {previous}s")]
    OutOfOrder {
        index: usize,
        start: u32,
        previous: u32,
    },

    /// The last chapter starts at or after the end of the video.
    #[error("chapter starting at {start}s does not fit in the video duration of {duration}s")]
    ChapterPastEnd { start: u32, duration: u32 },
}

/// Errors raised by a metadata provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} for video {id}")]
    Status { id: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
