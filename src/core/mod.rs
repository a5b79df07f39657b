//! Core domain types for Studioplan.
//!
//! This module contains the fundamental data structures of the
//! planner: the team roster, project parameters, the canonical
//! schedule, its projections, calendar links, and configuration.

mod brief;
mod config;
mod link;
mod project;
mod projection;
mod roster;
mod schedule;

pub use brief::{BriefDeliverables, BriefMember, ProjectBrief};
pub use config::{Config, CustomColorsConfig, GeneralConfig, InferenceConfig, OllamaConfig, UiConfig};
pub use link::{google_calendar_link, PLACEHOLDER_LINK};
pub use project::{
    DeliverableSpec, ProjectContext, ProjectType, StyleSpec, FILE_TYPE_CHOICES, MAX_QUANTITY,
    MIN_QUANTITY, ROLE_CHOICES,
};
pub use projection::{
    calendar, kanban, timeline, AssigneeBadge, CalendarGrid, DayCell, KanbanBoard, TimelineEntry,
};
pub use roster::{initials, MemberColor, TeamMember, TeamRoster, PALETTE};
pub use schedule::{
    parse_event_date, CanonicalSchedule, RawScheduleEvent, ScheduleEvent, ScheduleParseError,
};

/// Rejected user input, surfaced inline before any external call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
