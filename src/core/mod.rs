pub mod chapters;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod provider;
pub mod time;
pub mod video_id;

pub use chapters::{parse_chapters, Chapter};
pub use error::{ParseError, ProviderError};
pub use generator::SchemaGenerator;
pub use metadata::VideoMetadata;
pub use provider::MetadataProvider;
pub use time::{hms_to_seconds, iso8601_to_hms, Hms};
pub use video_id::{extract_video_ids, find_video_urls, UrlShape, VideoIdMatch};
