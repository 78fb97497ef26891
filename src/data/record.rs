//! Shared types for clock records.
//!
//! These types match the JSON documents served as static data assets.
//! They serve as the common data format between the upstream scrapers
//! that produce the files and this viewer.
//!
//! Deserialization is deliberately lenient: every field except
//! `last_incident` defaults to empty when absent, and unknown fields
//! are ignored, so a partially-populated record still renders (or
//! degrades to a placeholder) instead of failing the whole load.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single clock record as published by the data pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Display name of the clock (e.g. "Physical AI Safety Clock").
    #[serde(default)]
    pub clock_name: String,

    /// One-line description of what the clock tracks.
    #[serde(default)]
    pub description: String,

    /// The most recent incident, if any is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_incident: Option<LastIncident>,

    /// Where the incident data comes from.
    #[serde(default)]
    pub data_source: SourceInfo,
}

/// The most recent incident for a clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LastIncident {
    /// Incident timestamp, ISO-8601 (e.g. "2025-12-10T00:00:00Z").
    #[serde(default)]
    pub date: String,

    /// Short incident headline.
    #[serde(default)]
    pub title: String,
}

impl LastIncident {
    /// Parse the incident date into a UTC instant.
    ///
    /// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates
    /// (taken as midnight UTC, matching the upstream pipeline).
    /// Returns `None` when the date does not parse.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.date)
    }
}

/// Attribution for a clock's data feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Human-readable name of the upstream source.
    #[serde(default)]
    pub name: String,
}

/// Parse an ISO-8601 date string into a UTC instant.
///
/// Accepts RFC 3339 timestamps and bare dates (midnight UTC).
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn sample_json() -> &'static str {
        r#"{
            "clock_name": "Physical AI Safety Clock",
            "description": "Time since the last autonomous vehicle collision.",
            "last_incident": {
                "date": "2025-12-10T00:00:00Z",
                "title": "AV collision in test deployment"
            },
            "data_source": { "name": "AV Incident Tracker" }
        }"#
    }

    #[test]
    fn test_deserialize_full_record() {
        let record: IncidentRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.clock_name, "Physical AI Safety Clock");
        let incident = record.last_incident.unwrap();
        assert_eq!(incident.title, "AV collision in test deployment");
        assert!(incident.instant().is_some());
        assert_eq!(record.data_source.name, "AV Incident Tracker");
    }

    #[test]
    fn test_deserialize_missing_incident() {
        let record: IncidentRecord =
            serde_json::from_str(r#"{ "clock_name": "Empty Clock" }"#).unwrap();
        assert!(record.last_incident.is_none());
        assert_eq!(record.description, "");
        assert_eq!(record.data_source.name, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: IncidentRecord = serde_json::from_str(
            r#"{ "clock_id": "av_collisions", "last_incident": { "date": "2025-12-10" } }"#,
        )
        .unwrap();
        assert!(record.last_incident.is_some());
    }

    #[test]
    fn test_parse_instant_rfc3339() {
        let instant = parse_instant("2025-12-10T12:30:00Z").unwrap();
        assert_eq!(instant.hour(), 12);
        assert_eq!(instant.minute(), 30);
    }

    #[test]
    fn test_parse_instant_bare_date() {
        let instant = parse_instant("2025-12-10").unwrap();
        assert_eq!(instant.hour(), 0);
    }

    #[test]
    fn test_parse_instant_invalid() {
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("").is_none());
    }
}
