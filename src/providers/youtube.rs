use crate::config::Config;
use crate::core::{MetadataProvider, ProviderError, VideoMetadata};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

const PARTS: &str = "snippet,contentDetails";
const FIELDS: &str =
    "items(contentDetails(duration),snippet(publishedAt,title,description,thumbnails))";

/// Thumbnail sizes in order of preference.
const THUMBNAIL_KEYS: [&str; 5] = ["default", "medium", "high", "standard", "maxres"];

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: Snippet,
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    published_at: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: HashMap<String, ThumbnailRef>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailRef {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

/// Client for the `videos` endpoint of the YouTube Data API v3.
pub struct YouTubeDataApi {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl YouTubeDataApi {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey)?;

        let endpoint = Url::parse(&format!(
            "{}/videos",
            config.api_base_url.trim_end_matches('/')
        ))?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    pub fn request_url(&self, video_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("id", video_id)
            .append_pair("key", &self.api_key)
            .append_pair("part", PARTS)
            .append_pair("fields", FIELDS);
        url
    }

    /// Decodes a `videos` response body. An empty `items` list is `None`.
    pub fn parse_response(video_id: &str, body: &str) -> Result<Option<VideoMetadata>, ProviderError> {
        let response: VideoListResponse = serde_json::from_str(body)?;

        let Some(item) = response.items.into_iter().next() else {
            return Ok(None);
        };

        let thumbnail_url = THUMBNAIL_KEYS
            .iter()
            .find_map(|key| item.snippet.thumbnails.get(*key))
            .map(|thumbnail| thumbnail.url.clone());

        Ok(Some(VideoMetadata {
            id: video_id.to_string(),
            title: item.snippet.title,
            description: item.snippet.description,
            published_at: item.snippet.published_at,
            thumbnail_url,
            duration: item.content_details.duration,
        }))
    }
}

#[async_trait]
impl MetadataProvider for YouTubeDataApi {
    fn name(&self) -> &'static str {
        "YouTube Data API"
    }

    async fn fetch(&self, video_id: &str) -> Result<Option<VideoMetadata>, ProviderError> {
        let response = self
            .client
            .get(self.request_url(video_id))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                id: video_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Metadata response for {}: {} bytes", video_id, body.len());

        Self::parse_response(video_id, &body)
    }
}
