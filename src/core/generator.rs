use crate::core::{extract_video_ids, parse_chapters, MetadataProvider};
use crate::schema::{JsonLd, VideoObject};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Turns article text into a JSON-LD document, one `VideoObject` per video
/// the provider could describe.
pub struct SchemaGenerator {
    provider: Box<dyn MetadataProvider>,
    regions_allowed: String,
}

impl SchemaGenerator {
    pub fn new(provider: Box<dyn MetadataProvider>, regions_allowed: impl Into<String>) -> Self {
        Self {
            provider,
            regions_allowed: regions_allowed.into(),
        }
    }

    /// Builds the record for one video. Provider failures and unknown
    /// videos yield `None`; unusable chapter lists only drop `hasPart`.
    pub async fn video_object(&self, video_id: &str) -> Option<VideoObject> {
        let metadata = match self.provider.fetch(video_id).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                warn!("{} knows no video {}, skipping", self.provider.name(), video_id);
                return None;
            }
            Err(e) => {
                warn!("Fetching metadata for {} failed, skipping: {}", video_id, e);
                return None;
            }
        };

        let chapters = parse_chapters(video_id, &metadata.duration, &metadata.description)
            .unwrap_or_else(|e| {
                warn!("Ignoring chapters of {}: {}", video_id, e);
                Vec::new()
            });

        debug!("Video {}: {:?}, {} chapters", video_id, metadata.title, chapters.len());
        Some(VideoObject::from_metadata(&metadata, chapters, &self.regions_allowed))
    }

    /// `None` when the text references no videos or none could be described.
    pub async fn generate(&self, text: &str) -> Option<JsonLd> {
        let ids = extract_video_ids(text);
        if ids.is_empty() {
            debug!("No YouTube links found");
            return None;
        }

        info!("Found {} YouTube videos: {}", ids.len(), ids.join(", "));

        let videos: Vec<VideoObject> = join_all(ids.iter().map(|id| self.video_object(id)))
            .await
            .into_iter()
            .flatten()
            .collect();

        if videos.len() < ids.len() {
            warn!("{} of {} videos were skipped", ids.len() - videos.len(), ids.len());
        }

        JsonLd::from_videos(videos)
    }
}
