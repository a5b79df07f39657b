//! Terminal user interface for the planner.

mod app;
mod input;
pub mod theme;
mod ui;

pub use app::run_tui;
pub use input::handle_events;
pub use theme::Theme;
pub use ui::draw;
