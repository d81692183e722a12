use crate::core::error::ProviderError;
use crate::core::VideoMetadata;
use async_trait::async_trait;

/// Source of video metadata.
///
/// `Ok(None)` means the provider answered but knows no such video.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, video_id: &str) -> Result<Option<VideoMetadata>, ProviderError>;
}
