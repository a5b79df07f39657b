//! # Studioplan
//!
//! AI project planner for design studios - turn a creative brief into a
//! working schedule from your terminal.
//!
//! Studioplan walks a four-step wizard (scope, deliverables, design DNA,
//! schedule), sends the brief to an inference provider, and projects the
//! returned plan as a timeline, a kanban board, or a month calendar.
//! Every event carries a Google Calendar deep link.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install studioplan
//!
//! # Open the interactive planner
//! studioplan
//!
//! # Or plan headlessly from a TOML brief
//! studioplan plan brief.toml
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::use_self)]

pub mod app;
pub mod core;
pub mod infer;
pub mod tui;

pub use app::App;

/// Application version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const APP_NAME: &str = "studioplan";
