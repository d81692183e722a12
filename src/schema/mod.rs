//! schema.org JSON-LD output.
//!
//! One video becomes a `VideoObject` at the top level; several become an
//! `ItemList` whose elements are the individual `VideoObject`s.

use crate::core::{Chapter, VideoMetadata};
use crate::utils::{escape_script_payload, watch_url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A chapter as it appears inside `hasPart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(flatten)]
    pub chapter: Chapter,
}

impl From<Chapter> for Clip {
    fn from(chapter: Chapter) -> Self {
        Self {
            kind: "Clip".to_string(),
            chapter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoObject {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub duration: String,
    pub upload_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub description: String,
    pub content_url: String,
    pub regions_allowed: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_part: Vec<Clip>,
}

impl VideoObject {
    /// `description` repeats the title; chapters become `hasPart` clips.
    pub fn from_metadata(
        metadata: &VideoMetadata,
        chapters: Vec<Chapter>,
        regions_allowed: &str,
    ) -> Self {
        Self {
            kind: "VideoObject".to_string(),
            name: metadata.title.clone(),
            duration: metadata.duration.clone(),
            upload_date: metadata.published_at.clone(),
            thumbnail_url: metadata.thumbnail_url.clone(),
            description: metadata.title.clone(),
            content_url: watch_url(&metadata.id, &[]),
            regions_allowed: regions_allowed.to_string(),
            has_part: chapters.into_iter().map(Clip::from).collect(),
        }
    }
}

/// A complete JSON-LD document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonLd {
    Video(VideoObject),
    ItemList(Vec<VideoObject>),
}

impl JsonLd {
    /// `None` when there is nothing to describe.
    pub fn from_videos(mut videos: Vec<VideoObject>) -> Option<Self> {
        match videos.len() {
            0 => None,
            1 => videos.pop().map(JsonLd::Video),
            _ => Some(JsonLd::ItemList(videos)),
        }
    }

    pub fn videos(&self) -> &[VideoObject] {
        match self {
            JsonLd::Video(video) => std::slice::from_ref(video),
            JsonLd::ItemList(videos) => videos,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        let mut document = match self {
            JsonLd::Video(video) => serde_json::to_value(video)?,
            JsonLd::ItemList(videos) => json!({
                "@type": "ItemList",
                "itemListElement": serde_json::to_value(videos)?,
            }),
        };
        if let Value::Object(map) = &mut document {
            map.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
        }
        Ok(document)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let value = self.to_value()?;
        if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
    }

    /// The document wrapped in a `<script type='application/ld+json'>` element.
    pub fn to_script_tag(&self, pretty: bool) -> serde_json::Result<String> {
        let json = escape_script_payload(&self.to_json(pretty)?);
        Ok(format!("<script type='application/ld+json'>{}</script>", json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(id: &str, title: &str) -> VideoMetadata {
        VideoMetadata {
            id: id.to_string(),
            title: title.to_string(),
            description: "0:00 Intro".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            thumbnail_url: Some(format!("https://i.ytimg.com/vi/{}/default.jpg", id)),
            duration: "PT2M0S".to_string(),
        }
    }

    fn chapter(title: &str, start: u32, end: u32) -> Chapter {
        let offset = format!("{}s", start);
        Chapter {
            title: title.to_string(),
            start_offset: start,
            end_offset: end,
            url: watch_url("abc", &[("t", offset.as_str())]),
        }
    }

    #[test]
    fn test_single_video_is_flattened() {
        let video = VideoObject::from_metadata(
            &metadata("abc", "My Video"),
            vec![chapter("Intro", 0, 90), chapter("Main", 90, 120)],
            "JPN",
        );
        let value = JsonLd::from_videos(vec![video]).unwrap().to_value().unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "VideoObject");
        assert_eq!(value["name"], "My Video");
        assert_eq!(value["description"], "My Video");
        assert_eq!(value["duration"], "PT2M0S");
        assert_eq!(value["uploadDate"], "2024-01-01T00:00:00Z");
        assert_eq!(value["contentUrl"], "https://www.youtube.com/watch?v=abc");
        assert_eq!(value["regionsAllowed"], "JPN");
        assert_eq!(value["hasPart"][0]["@type"], "Clip");
        assert_eq!(value["hasPart"][1]["name"], "Main");
        assert_eq!(value["hasPart"][1]["startOffset"], 90);
        assert_eq!(value["hasPart"][1]["endOffset"], 120);
        assert_eq!(
            value["hasPart"][1]["url"],
            "https://www.youtube.com/watch?v=abc&t=90s"
        );
    }

    #[test]
    fn test_has_part_omitted_without_chapters() {
        let video = VideoObject::from_metadata(&metadata("abc", "t"), vec![], "JPN");
        let value = serde_json::to_value(&video).unwrap();
        assert!(value.get("hasPart").is_none());
    }

    #[test]
    fn test_several_videos_become_item_list() {
        let videos = vec![
            VideoObject::from_metadata(&metadata("a", "First"), vec![], "JPN"),
            VideoObject::from_metadata(&metadata("b", "Second"), vec![], "JPN"),
        ];
        let document = JsonLd::from_videos(videos).unwrap();
        assert_eq!(document.videos().len(), 2);

        let value = document.to_value().unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "ItemList");
        assert_eq!(value["itemListElement"][0]["name"], "First");
        assert_eq!(value["itemListElement"][1]["@type"], "VideoObject");
    }

    #[test]
    fn test_no_videos_no_document() {
        assert!(JsonLd::from_videos(vec![]).is_none());
    }

    #[test]
    fn test_script_tag_cannot_be_closed_by_payload() {
        let video = VideoObject::from_metadata(&metadata("a", "</script><script>x"), vec![], "JPN");
        let tag = JsonLd::Video(video).to_script_tag(false).unwrap();
        assert!(tag.starts_with("<script type='application/ld+json'>{"));
        assert!(tag.ends_with("}</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);
    }
}
