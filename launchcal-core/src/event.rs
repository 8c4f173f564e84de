//! Launch event records as served by the events endpoint.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format of the per-day bucketing key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A promotional launch event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchEvent {
    pub title: String,
    pub summary: String,
    pub launch_date: LaunchDate,
    pub image_filename_thumb: String,
    pub image_filename_full: String,
    pub learn_more_link: String,
    pub purchase_link: String,
}

impl LaunchEvent {
    /// The `YYYY-MM-DD` key of the day this event belongs to.
    pub fn day_key(&self) -> String {
        self.launch_date.key()
    }
}

impl fmt::Display for LaunchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.launch_date)
    }
}

/// The calendar date of a launch.
///
/// Payloads carry either a bare date or a timestamp. Only the date is kept;
/// for timestamps with an offset it is the date written in that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LaunchDate(pub NaiveDate);

impl LaunchDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn key(&self) -> String {
        self.0.format(DAY_KEY_FORMAT).to_string()
    }

    /// Parse `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` timestamp.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, DAY_KEY_FORMAT) {
            return Some(LaunchDate(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(LaunchDate(dt.date_naive()));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(LaunchDate(dt.date()));
            }
        }

        None
    }
}

impl From<NaiveDate> for LaunchDate {
    fn from(date: NaiveDate) -> Self {
        LaunchDate(date)
    }
}

impl fmt::Display for LaunchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for LaunchDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for LaunchDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LaunchDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid launchDate '{}'", raw)))
    }
}

/// Parse a JSON events payload, keeping response order.
pub fn parse_events(body: &[u8]) -> Result<Vec<LaunchEvent>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
pub(crate) fn test_event(title: &str, date: &str) -> LaunchEvent {
    LaunchEvent {
        title: title.to_string(),
        summary: format!("{} summary", title),
        launch_date: LaunchDate::parse(date).unwrap(),
        image_filename_thumb: format!("https://img.example.com/{}-thumb.jpg", title),
        image_filename_full: format!("https://img.example.com/{}-full.jpg", title),
        learn_more_link: format!("https://example.com/{}", title),
        purchase_link: format!("https://shop.example.com/{}", title),
    }
}
