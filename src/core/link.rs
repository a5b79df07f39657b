//! Calendar deep-link generation.
//!
//! Builds Google Calendar event-creation URLs from schedule events so
//! a task can be imported into an external calendar with one click.

use chrono::{Duration, NaiveDate};

use super::roster::TeamRoster;
use super::schedule::{parse_event_date, ScheduleEvent};

/// Link returned when the event date cannot be parsed; renders as a
/// non-navigating anchor instead of a broken URL.
pub const PLACEHOLDER_LINK: &str = "#";

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Default event duration on the external calendar.
const EVENT_DURATION_MINUTES: i64 = 60;

/// Build a Google Calendar deep link for one schedule event.
///
/// Deterministic: the same event and roster always produce the same
/// URL. The event date becomes a one-hour slot starting at midnight
/// UTC; the resolved assignee's email (when any) is attached as a
/// guest.
pub fn google_calendar_link(event: &ScheduleEvent, roster: &TeamRoster) -> String {
    build_link(&event.date_label, event, roster)
}

fn build_link(raw_date: &str, event: &ScheduleEvent, roster: &TeamRoster) -> String {
    let Some(date) = parse_event_date(raw_date) else {
        return PLACEHOLDER_LINK.to_string();
    };

    let (start, end) = event_window(date);

    let details = format!("{} \n\nType: {}", event.description, event.event_type);
    let guests = event
        .assigned_to
        .as_deref()
        .and_then(|name| roster.resolve(name))
        .and_then(|member| member.email.as_deref())
        .unwrap_or("");

    format!(
        "{RENDER_URL}?action=TEMPLATE&text={}&dates={start}/{end}&details={}&add={}",
        urlencoding::encode(&event.title),
        urlencoding::encode(&details),
        urlencoding::encode(guests),
    )
}

/// Compact UTC timestamp pair (`YYYYMMDDTHHMMSSZ`) one hour apart.
fn event_window(date: NaiveDate) -> (String, String) {
    let start = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    let end = start + Duration::minutes(EVENT_DURATION_MINUTES);

    let fmt = "%Y%m%dT%H%M%SZ";
    (start.format(fmt).to_string(), end.format(fmt).to_string())
}
