//! Finds YouTube video IDs in article markup.
//!
//! Three URL shapes are recognised:
//! - `https://www.youtube.com/embed/<ID>`
//! - `https://www.youtube.com/watch?v=<ID>`
//! - `https://youtu.be/<ID>`
//!
//! IDs are reported grouped by shape (all embeds first, then watch links,
//! then short links) rather than in plain document order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One alternation, one capture group per shape, scanned left to right.
static VIDEO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"https://www\.youtube\.com/embed/([0-9a-zA-Z_-]+)",
        r"|https://www\.youtube\.com/watch\?v=([0-9a-zA-Z_-]+)",
        r"|https://youtu\.be/([0-9a-zA-Z_-]+)",
    ))
    .expect("valid video URL regex")
});

/// The URL shape an ID was found in. Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlShape {
    Embed,
    Watch,
    Short,
}

impl UrlShape {
    pub const ALL: [UrlShape; 3] = [UrlShape::Embed, UrlShape::Watch, UrlShape::Short];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlShape::Embed => "embed",
            UrlShape::Watch => "watch",
            UrlShape::Short => "short",
        }
    }

    fn capture_group(&self) -> usize {
        match self {
            UrlShape::Embed => 1,
            UrlShape::Watch => 2,
            UrlShape::Short => 3,
        }
    }
}

/// A single video URL found in the text, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoIdMatch {
    pub id: String,
    pub shape: UrlShape,
    /// Byte offset of the URL in the scanned text.
    pub offset: usize,
}

/// Every recognised video URL in `text`, in document order, duplicates kept.
pub fn find_video_urls(text: &str) -> Vec<VideoIdMatch> {
    VIDEO_URL_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            UrlShape::ALL.iter().find_map(|shape| {
                caps.get(shape.capture_group()).map(|m| VideoIdMatch {
                    id: m.as_str().to_string(),
                    shape: *shape,
                    offset: caps.get(0).map_or(m.start(), |whole| whole.start()),
                })
            })
        })
        .collect()
}

/// Extracts the unique video IDs referenced in `text`.
///
/// Matches are concatenated shape by shape (embed, watch, short) with
/// document order kept inside each shape, then deduplicated keeping the
/// first occurrence. Returns an empty vector when nothing matches.
pub fn extract_video_ids(text: &str) -> Vec<String> {
    let matches = find_video_urls(text);
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for shape in UrlShape::ALL {
        for found in matches.iter().filter(|m| m.shape == shape) {
            if found.id.is_empty() {
                continue;
            }
            if seen.insert(found.id.as_str()) {
                ids.push(found.id.clone());
            }
        }
    }

    tracing::debug!("Found {} video URLs, {} unique IDs", matches.len(), ids.len());
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_urls_gives_empty_result() {
        assert!(extract_video_ids("").is_empty());
        assert!(extract_video_ids("<p>No videos here, just https://example.com</p>").is_empty());
        assert!(extract_video_ids("https://vimeo.com/123456").is_empty());
    }

    #[test]
    fn test_each_shape_is_recognised() {
        assert_eq!(
            extract_video_ids(r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>"#),
            vec!["dQw4w9WgXcQ"]
        );
        assert_eq!(
            extract_video_ids("see https://www.youtube.com/watch?v=abc_DEF-123 now"),
            vec!["abc_DEF-123"]
        );
        assert_eq!(extract_video_ids("https://youtu.be/XyZ09"), vec!["XyZ09"]);
    }

    #[test]
    fn test_trailing_query_parameters_are_not_part_of_id() {
        let text = concat!(
            "https://www.youtube.com/watch?v=aaa111&t=42s\n",
            "https://youtu.be/bbb222?si=tracking\n",
            "https://www.youtube.com/embed/ccc333?start=10&autoplay=1",
        );
        assert_eq!(extract_video_ids(text), vec!["ccc333", "aaa111", "bbb222"]);
    }

    #[test]
    fn test_order_is_grouped_by_shape() {
        let text = concat!(
            "https://youtu.be/short1 ",
            "https://www.youtube.com/watch?v=watch1 ",
            "https://www.youtube.com/embed/embed1 ",
            "https://youtu.be/short2 ",
            "https://www.youtube.com/embed/embed2",
        );
        assert_eq!(
            extract_video_ids(text),
            vec!["embed1", "embed2", "watch1", "short1", "short2"]
        );
    }

    #[test]
    fn test_duplicates_across_shapes_keep_first_slot() {
        let text = concat!(
            "https://youtu.be/same ",
            "https://www.youtube.com/embed/same ",
            "https://www.youtube.com/watch?v=other ",
            "https://www.youtube.com/watch?v=same",
        );
        assert_eq!(extract_video_ids(text), vec!["same", "other"]);
    }

    #[test]
    fn test_find_video_urls_keeps_document_order_and_duplicates() {
        let text = "https://youtu.be/a1 x https://www.youtube.com/embed/b2 https://youtu.be/a1";
        let found = find_video_urls(text);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].shape, UrlShape::Short);
        assert_eq!(found[0].offset, 0);
        assert_eq!(found[1].id, "b2");
        assert_eq!(found[1].shape, UrlShape::Embed);
        assert_eq!(found[1].offset, 22);
        assert_eq!(found[2].id, "a1");
    }

    #[test]
    fn test_other_hosts_and_schemes_are_ignored() {
        let text = concat!(
            "http://www.youtube.com/watch?v=plainhttp ",
            "https://m.youtube.com/watch?v=mobile ",
            "https://www.youtube-nocookie.com/embed/nocookie",
        );
        assert!(extract_video_ids(text).is_empty());
    }
}
