pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod schema;
pub mod utils;

pub use crate::core::{
    extract_video_ids, hms_to_seconds, iso8601_to_hms, parse_chapters, Chapter, MetadataProvider,
    SchemaGenerator, VideoMetadata,
};
pub use providers::YouTubeDataApi;
pub use schema::{JsonLd, VideoObject};
