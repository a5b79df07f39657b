//! Read-only projections of the canonical schedule.
//!
//! Three views are derived from the same event list: a chronological
//! timeline, a status-bucketed kanban board, and a month calendar
//! grid. Projections borrow from the schedule and roster and hold no
//! state of their own.

use chrono::{Datelike, NaiveDate};

use super::roster::{initials, MemberColor, TeamRoster};
use super::schedule::{parse_event_date, CanonicalSchedule, ScheduleEvent};

/// Fraction of events shown as already finished / in progress on the
/// kanban board.
const KANBAN_PHASE_RATIO: f64 = 0.2;

/// Display badge for an event's assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeBadge {
    /// Display name, `"Unassigned"` when no roster member matches
    pub name: String,

    /// Up to two uppercase initials
    pub initials: String,

    /// Avatar color; `None` renders as the neutral unassigned marker
    pub color: Option<MemberColor>,
}

impl AssigneeBadge {
    /// Badge for a schedule event's assignee.
    pub fn for_event(event: &ScheduleEvent, roster: &TeamRoster) -> Self {
        Self::resolve(event.assigned_to.as_deref(), roster)
    }

    /// Resolve an assignee name against the roster.
    ///
    /// Names the roster does not know keep their text but get the
    /// neutral color; that mirrors how the source system renders
    /// inference output that invents assignees.
    fn resolve(assigned_to: Option<&str>, roster: &TeamRoster) -> Self {
        match assigned_to {
            Some(name) if !name.trim().is_empty() => Self {
                name: name.to_string(),
                initials: initials(name),
                color: roster.resolve(name).map(|m| m.color),
            },
            _ => Self { name: "Unassigned".to_string(), initials: "??".to_string(), color: None },
        }
    }
}

/// One row of the timeline view.
#[derive(Debug, Clone)]
pub struct TimelineEntry<'a> {
    pub event: &'a ScheduleEvent,
    pub assignee: AssigneeBadge,
}

/// Timeline projection: canonical order, enriched with assignee badges.
pub fn timeline<'a>(
    schedule: &'a CanonicalSchedule,
    roster: &TeamRoster,
) -> Vec<TimelineEntry<'a>> {
    schedule
        .events()
        .iter()
        .map(|event| TimelineEntry {
            event,
            assignee: AssigneeBadge::resolve(event.assigned_to.as_deref(), roster),
        })
        .collect()
}

/// Kanban board: three disjoint buckets partitioning the schedule.
#[derive(Debug, Clone, Default)]
pub struct KanbanBoard<'a> {
    pub finished: Vec<&'a ScheduleEvent>,
    pub on_it: Vec<&'a ScheduleEvent>,
    pub to_do: Vec<&'a ScheduleEvent>,
}

impl KanbanBoard<'_> {
    /// Total events across all buckets.
    pub fn len(&self) -> usize {
        self.finished.len() + self.on_it.len() + self.to_do.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kanban projection.
///
/// Buckets are assigned purely by position in canonical order: the
/// first 20% of events count as finished, the next 20% as in
/// progress, the remainder as to-do. This is a display heuristic
/// inherited from the source system, not real status tracking; no
/// completion state exists anywhere in the data model.
pub fn kanban(schedule: &CanonicalSchedule) -> KanbanBoard<'_> {
    let events = schedule.events();
    let n = events.len();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let done_count = (n as f64 * KANBAN_PHASE_RATIO).floor() as usize;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let in_progress_count = (n as f64 * KANBAN_PHASE_RATIO).floor() as usize;

    KanbanBoard {
        finished: events[..done_count].iter().collect(),
        on_it: events[done_count..done_count + in_progress_count].iter().collect(),
        to_do: events[done_count + in_progress_count..].iter().collect(),
    }
}

/// One day cell of the calendar grid.
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    /// Day of month, 1-based
    pub day: u32,

    pub date: NaiveDate,

    /// Events whose date exactly matches this cell
    pub events: Vec<&'a ScheduleEvent>,
}

/// Month grid anchored on the project start date's month.
#[derive(Debug, Clone)]
pub struct CalendarGrid<'a> {
    /// Header label, e.g. "January 2024"
    pub label: String,

    /// Blank cells before day 1 (0 = month starts on Sunday)
    pub leading_blanks: usize,

    /// One cell per day of the month, in order
    pub cells: Vec<DayCell<'a>>,
}

/// Calendar projection.
///
/// Returns `None` when the start date is missing or unparseable; the
/// caller renders an explanatory empty state rather than an error.
pub fn calendar<'a>(
    schedule: &'a CanonicalSchedule,
    start_date: &str,
) -> Option<CalendarGrid<'a>> {
    let anchor = parse_event_date(start_date)?;
    let first = anchor.with_day(1)?;

    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(anchor.year(), anchor.month());

    let cells = (1..=days)
        .filter_map(|day| {
            let date = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), day)?;
            let events = schedule.events().iter().filter(|e| e.date == date).collect();
            Some(DayCell { day, date, events })
        })
        .collect();

    Some(CalendarGrid { label: first.format("%B %Y").to_string(), leading_blanks, cells })
}

/// Number of days in a month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}
