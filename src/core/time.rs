//! Conversions between timestamp tokens, ISO-8601 durations and seconds.

use crate::core::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// `P[nD]T[nH][nM][nS]` or the bare `P[nD]` form YouTube reports for live streams.
static ISO8601_DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:([0-9]+)D)?(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?)?$")
        .expect("valid duration regex")
});

/// A span of time split into hour, minute and second components.
///
/// Components are kept as given; nothing is carried over, so `0:75` stays
/// 75 seconds and still totals correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total length in seconds, or `None` when it does not fit in a `u32`.
    pub fn checked_total_seconds(&self) -> Option<u32> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }

    pub fn total_seconds(&self) -> u32 {
        self.checked_total_seconds().unwrap_or(u32::MAX)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for Hms {
    type Err = ParseError;

    /// Parses `H:M:S` or `M:S`. Two components are minutes and seconds.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedTimestamp(token.to_string());

        let parts = token
            .trim()
            .split(':')
            .map(|part| parse_component(part).ok_or_else(malformed))
            .collect::<Result<Vec<u32>, _>>()?;

        match parts.as_slice() {
            [minutes, seconds] => Ok(Hms::new(0, *minutes, *seconds)),
            [hours, minutes, seconds] => Ok(Hms::new(*hours, *minutes, *seconds)),
            _ => Err(malformed()),
        }
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Converts a `H:M:S` or `M:S` token into seconds.
///
/// Out-of-range components are summed as-is: `"1:75"` is 135 seconds.
pub fn hms_to_seconds(token: &str) -> Result<u32, ParseError> {
    let hms: Hms = token.parse()?;
    hms.checked_total_seconds()
        .ok_or_else(|| ParseError::MalformedTimestamp(token.to_string()))
}

/// Splits an ISO-8601 duration such as `PT1H11M11S` into its components.
///
/// Missing components default to zero and days are folded into hours.
/// `PT` on its own is rejected.
pub fn iso8601_to_hms(duration: &str) -> Result<Hms, ParseError> {
    let malformed = || ParseError::MalformedDuration(duration.to_string());
    let trimmed = duration.trim();

    if trimmed == "P" || trimmed.ends_with('T') {
        return Err(malformed());
    }

    let caps = ISO8601_DURATION_REGEX
        .captures(trimmed)
        .ok_or_else(malformed)?;

    let component = |index: usize| -> Result<u32, ParseError> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().map_err(|_| malformed()),
            None => Ok(0),
        }
    };

    let days = component(1)?;
    let hours = days
        .checked_mul(24)
        .and_then(|h| h.checked_add(component(2).ok()?))
        .ok_or_else(malformed)?;
    let hms = Hms::new(hours, component(3)?, component(4)?);

    if hms.checked_total_seconds().is_none() {
        return Err(malformed());
    }

    Ok(hms)
}
