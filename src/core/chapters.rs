//! Chapter markers from video descriptions.
//!
//! Descriptions commonly carry a table of contents such as:
//!
//! ```text
//! 0:00 Intro
//! 1:30 Main part
//! 1:02:03 Outro
//! ```
//!
//! Each such line becomes a [`Chapter`] that runs until the next one starts;
//! the last one runs until the end of the video.

use crate::core::error::ParseError;
use crate::core::time::{hms_to_seconds, iso8601_to_hms};
use crate::utils::watch_url;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A line starting with `(H:)?M:S` followed by anything but another digit.
/// The rest of the line is the heading, whatever separates it from the token.
static CHAPTER_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\S\r\n]*((?:[0-9]{1,2}:)?[0-9]{1,2}:[0-9]{1,2})([^0-9\r\n].*)$")
        .expect("valid chapter line regex")
});

/// Punctuation commonly put between a timestamp and its heading.
const HEADING_SEPARATORS: &[char] = &['-', '–', '—', ':', '|', '：', '｜'];

/// A named range of a video's timeline, serialized as a schema.org `Clip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "name")]
    pub title: String,
    pub start_offset: u32,
    pub end_offset: u32,
    pub url: String,
}

impl Chapter {
    pub fn length(&self) -> u32 {
        self.end_offset.saturating_sub(self.start_offset)
    }
}

/// A timestamp line found in a description, before end offsets are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterMarker {
    pub start: u32,
    pub heading: String,
}

/// Finds every timestamp line in `description`, in order.
///
/// Leading separators such as `-` or a full-width space are stripped from
/// the heading; a timestamp with nothing left after it is not a marker.
pub fn find_chapter_markers(description: &str) -> Result<Vec<ChapterMarker>, ParseError> {
    let mut markers = Vec::new();

    for caps in CHAPTER_LINE_REGEX.captures_iter(description) {
        let heading = caps[2]
            .trim()
            .trim_start_matches(HEADING_SEPARATORS)
            .trim();
        if heading.is_empty() {
            continue;
        }

        markers.push(ChapterMarker {
            start: hms_to_seconds(&caps[1])?,
            heading: heading.to_string(),
        });
    }

    Ok(markers)
}

/// Builds the chapter list for a video from its description.
///
/// Returns an empty list when the description has no timestamp lines; the
/// duration is only parsed when there is at least one chapter to close.
/// Starts must be strictly increasing and the last one must start before
/// the end of `duration`, so every chapter is at least one second long.
pub fn parse_chapters(
    video_id: &str,
    duration: &str,
    description: &str,
) -> Result<Vec<Chapter>, ParseError> {
    let markers = find_chapter_markers(description)?;
    if markers.is_empty() {
        return Ok(Vec::new());
    }

    let total = iso8601_to_hms(duration)?.total_seconds();
    validate_markers(&markers, total)?;

    let ends = markers
        .iter()
        .skip(1)
        .map(|next| next.start)
        .chain(std::iter::once(total));

    let chapters: Vec<Chapter> = markers
        .iter()
        .zip(ends)
        .map(|(marker, end)| {
            let offset = format!("{}s", marker.start);
            Chapter {
                title: marker.heading.clone(),
                start_offset: marker.start,
                end_offset: end,
                url: watch_url(video_id, &[("t", offset.as_str())]),
            }
        })
        .collect();

    tracing::debug!("Parsed {} chapters for video {}", chapters.len(), video_id);
    Ok(chapters)
}

fn validate_markers(markers: &[ChapterMarker], total: u32) -> Result<(), ParseError> {
    for (index, pair) in markers.windows(2).enumerate() {
        if pair[1].start <= pair[0].start {
            return Err(ParseError::OutOfOrder {
                index: index + 1,
                start: pair[1].start,
                previous: pair[0].start,
            });
        }
    }

    if let Some(last) = markers.last() {
        if last.start >= total {
            return Err(ParseError::ChapterPastEnd {
                start: last.start,
                duration: total,
            });
        }
    }

    Ok(())
}
