//! Schedule events and the canonical schedule.
//!
//! The canonical schedule is the single validation gate between
//! untrusted inference output and the rest of the application: raw
//! records are date-checked as a batch, stably sorted, and frozen.
//! Every projection and deep link downstream operates on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event record as returned by an inference provider.
///
/// Deliberately loose: every field defaults so a partially-typed
/// response deserializes instead of failing inside the HTTP layer.
/// Validation happens in [`CanonicalSchedule::from_raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScheduleEvent {
    /// Calendar date string, expected `YYYY-MM-DD`
    pub date: String,

    pub title: String,

    pub description: String,

    /// Category tag (e.g. "Design", "Review")
    #[serde(rename = "type")]
    pub event_type: String,

    /// Team member name; not validated against the roster
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// A validated, dated schedule event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEvent {
    /// Parsed calendar date
    pub date: NaiveDate,

    /// Date exactly as the provider wrote it, for display
    pub date_label: String,

    pub title: String,

    pub description: String,

    pub event_type: String,

    /// Assignee name as written by the provider; resolved against the
    /// roster only at display time, unknown names render as unassigned
    pub assigned_to: Option<String>,
}

/// Batch validation failure for an inference response.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleParseError {
    #[error("unparseable event date {date:?} in {title:?}")]
    BadDate { date: String, title: String },

    #[error("inference response contained no events")]
    Empty,
}

/// The validated, date-sorted event list for one generation.
///
/// Immutable once constructed; a new generation or a wizard reset
/// replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalSchedule {
    events: Vec<ScheduleEvent>,
}

impl CanonicalSchedule {
    /// Validate raw provider records into a canonical schedule.
    ///
    /// A single unparseable date rejects the entire batch: a partial
    /// schedule is never shown. Events are sorted ascending by date
    /// with a stable sort, so same-day events keep arrival order.
    pub fn from_raw(raw: Vec<RawScheduleEvent>) -> Result<Self, ScheduleParseError> {
        if raw.is_empty() {
            return Err(ScheduleParseError::Empty);
        }

        let mut events = Vec::with_capacity(raw.len());
        for record in raw {
            let date = parse_event_date(&record.date).ok_or_else(|| {
                ScheduleParseError::BadDate {
                    date: record.date.clone(),
                    title: record.title.clone(),
                }
            })?;

            events.push(ScheduleEvent {
                date,
                date_label: record.date,
                title: record.title,
                description: record.description,
                event_type: record.event_type,
                assigned_to: record.assigned_to,
            });
        }

        events.sort_by_key(|e| e.date);

        Ok(Self { events })
    }

    /// Events in canonical (date-ascending, arrival-stable) order.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First and last event dates, when any events exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.events.first()?.date, self.events.last()?.date))
    }
}

/// Parse a provider-supplied date string.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, and RFC 3339 timestamps
/// truncated to their date. Providers are asked for the first form,
/// but the boundary is loosely typed and drifts.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(date);
    }

    // RFC 3339 timestamp: take the date part before 'T'.
    let date_part = raw.split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, title: &str) -> RawScheduleEvent {
        RawScheduleEvent {
            date: date.to_string(),
            title: title.to_string(),
            description: String::new(),
            event_type: "Design".to_string(),
            assigned_to: None,
        }
    }

    #[test]
    fn test_sorts_ascending_by_date() {
        let schedule = CanonicalSchedule::from_raw(vec![
            raw("2024-03-05", "march"),
            raw("2024-01-10", "january"),
            raw("2024-02-20", "february"),
        ])
        .unwrap();

        let titles: Vec<_> = schedule.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["january", "february", "march"]);
    }

    #[test]
    fn test_sort_is_stable_for_same_day_events() {
        let schedule = CanonicalSchedule::from_raw(vec![
            raw("2024-01-10", "first"),
            raw("2024-01-10", "second"),
            raw("2024-01-05", "earlier"),
            raw("2024-01-10", "third"),
        ])
        .unwrap();

        let titles: Vec<_> = schedule.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["earlier", "first", "second", "third"]);
    }

    #[test]
    fn test_one_bad_date_rejects_whole_batch() {
        let result = CanonicalSchedule::from_raw(vec![
            raw("2024-01-10", "good"),
            raw("sometime soon", "bad"),
        ]);

        match result {
            Err(ScheduleParseError::BadDate { date, title }) => {
                assert_eq!(date, "sometime soon");
                assert_eq!(title, "bad");
            }
            other => panic!("expected BadDate, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        assert!(matches!(CanonicalSchedule::from_raw(vec![]), Err(ScheduleParseError::Empty)));
    }

    #[test]
    fn test_date_label_preserves_provider_text() {
        let schedule = CanonicalSchedule::from_raw(vec![raw("2024/01/10", "slash")]).unwrap();
        assert_eq!(schedule.events()[0].date_label, "2024/01/10");
        assert_eq!(schedule.events()[0].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_event_date_formats() {
        assert!(parse_event_date("2024-01-10").is_some());
        assert!(parse_event_date("2024/01/10").is_some());
        assert!(parse_event_date("2024-01-10T09:30:00Z").is_some());
        assert!(parse_event_date("Jan 10").is_none());
        assert!(parse_event_date("").is_none());
    }

    #[test]
    fn test_raw_event_tolerates_partial_json() {
        let event: RawScheduleEvent = serde_json::from_str(r#"{"date": "2024-01-10"}"#).unwrap();
        assert_eq!(event.date, "2024-01-10");
        assert!(event.title.is_empty());
        assert!(event.assigned_to.is_none());
    }

    #[test]
    fn test_date_range() {
        let schedule = CanonicalSchedule::from_raw(vec![
            raw("2024-03-05", "a"),
            raw("2024-01-10", "b"),
        ])
        .unwrap();
        let (first, last) = schedule.date_range().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }
}
