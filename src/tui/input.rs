//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{
    DeliverableField, OutcomeState, ScopeField, StyleField, View, WizardStep,
};
use crate::core::{google_calendar_link, FILE_TYPE_CHOICES, ROLE_CHOICES};
use crate::App;

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    // Ctrl+C always quits, regardless of screen.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Any keystroke dismisses a lingering status message.
    app.clear_status();

    match app.view.clone() {
        View::ProjectList => handle_project_list(key, app),
        View::Wizard(WizardStep::Scope) => handle_scope_step(key, app),
        View::Wizard(WizardStep::Deliverables) => handle_deliverables_step(key, app),
        View::Wizard(WizardStep::DesignDna) => handle_design_dna_step(key, app),
        View::Wizard(WizardStep::Outcome(state)) => handle_outcome_step(key, app, &state),
    }
}

/// Handle input on the project list screen.
fn handle_project_list(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('n') | KeyCode::Enter => app.start_wizard(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Handle input on wizard step 1 (project scope and team).
fn handle_scope_step(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_wizard(),
        KeyCode::Tab => app.scope_focus = app.scope_focus.next(),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => app.next_step(),

        _ => match app.scope_focus {
            ScopeField::ProjectType => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right) {
                    app.project.project_type = app.project.project_type.next();
                }
            }
            ScopeField::Name => edit_text(key, &mut app.project.name),
            ScopeField::StartDate => edit_text(key, &mut app.project.start_date),
            ScopeField::EndDate => edit_text(key, &mut app.project.end_date),
            ScopeField::MemberName => {
                if key.code == KeyCode::Enter {
                    app.scope_focus = ScopeField::MemberRole;
                } else {
                    edit_text(key, &mut app.member_name_input);
                }
            }
            ScopeField::MemberRole => match key.code {
                KeyCode::Up => app.role_cursor = app.role_cursor.saturating_sub(1),
                KeyCode::Down => {
                    app.role_cursor = (app.role_cursor + 1).min(ROLE_CHOICES.len() - 1);
                }
                KeyCode::Enter => {
                    if app.member_role_input.is_empty() {
                        app.pick_suggested_role();
                    }
                    app.scope_focus = ScopeField::MemberEmail;
                }
                _ => edit_text(key, &mut app.member_role_input),
            },
            ScopeField::MemberEmail => {
                if key.code == KeyCode::Enter {
                    app.add_member_from_inputs();
                    if !app.roster.is_empty() && app.member_name_input.is_empty() {
                        app.scope_focus = ScopeField::MemberName;
                    }
                } else {
                    edit_text(key, &mut app.member_email_input);
                }
            }
            ScopeField::MemberList => match key.code {
                KeyCode::Up => app.member_selected = app.member_selected.saturating_sub(1),
                KeyCode::Down => {
                    let max = app.roster.len().saturating_sub(1);
                    app.member_selected = (app.member_selected + 1).min(max);
                }
                KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                    app.remove_selected_member();
                }
                _ => {}
            },
        },
    }
}

/// Handle input on wizard step 2 (deliverables).
fn handle_deliverables_step(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_wizard(),
        KeyCode::Tab => app.deliverable_focus = app.deliverable_focus.next(),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => app.next_step(),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => app.prev_step(),

        _ => match app.deliverable_focus {
            DeliverableField::Quantity => match key.code {
                KeyCode::Left | KeyCode::Char('-') => {
                    app.deliverables.set_quantity(app.deliverables.quantity.saturating_sub(1));
                }
                KeyCode::Right | KeyCode::Char('+' | '=') => {
                    app.deliverables.set_quantity(app.deliverables.quantity + 1);
                }
                _ => {}
            },
            DeliverableField::FileTypes => match key.code {
                KeyCode::Left => app.file_type_cursor = app.file_type_cursor.saturating_sub(1),
                KeyCode::Right => {
                    app.file_type_cursor =
                        (app.file_type_cursor + 1).min(FILE_TYPE_CHOICES.len() - 1);
                }
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_file_type_at_cursor(),
                _ => {}
            },
            DeliverableField::ContentBrief => edit_text(key, &mut app.deliverables.content_brief),
        },
    }
}

/// Handle input on wizard step 3 (design DNA).
///
/// Ctrl+Right here dispatches generation rather than advancing; step 4
/// is only reachable through a generation attempt.
fn handle_design_dna_step(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_wizard(),
        KeyCode::Tab => app.style_focus = app.style_focus.next(),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => app.prev_step(),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => app.start_generation(),
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.start_generation();
        }

        _ => match app.style_focus {
            StyleField::Palette => edit_text(key, &mut app.style.palette),
            StyleField::Typography => edit_text(key, &mut app.style.typography),
            StyleField::GraphicElements => edit_text(key, &mut app.style.graphic_elements),
        },
    }
}

/// Handle input on wizard step 4 (generation outcome).
fn handle_outcome_step(key: KeyEvent, app: &mut App, state: &OutcomeState) {
    match state {
        // While loading only cancellation is available; the response
        // will arrive stale and be discarded.
        OutcomeState::Loading => {
            if key.code == KeyCode::Esc {
                app.cancel_wizard();
            }
        }

        OutcomeState::Ready => match key.code {
            KeyCode::Esc => app.cancel_wizard(),
            KeyCode::Enter => app.save_and_close(),
            KeyCode::Char('v') => app.viz_mode = app.viz_mode.next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Char('l') => show_selected_event_link(app),
            _ => {}
        },

        OutcomeState::Failed(_) => match key.code {
            KeyCode::Esc => app.cancel_wizard(),
            KeyCode::Char('r') => app.start_generation(),
            KeyCode::Backspace | KeyCode::Left => app.prev_step(),
            _ => {}
        },
    }
}

/// Put the selected event's calendar deep link in the status bar.
fn show_selected_event_link(app: &mut App) {
    let link = app
        .schedule
        .as_ref()
        .and_then(|s| s.events().get(app.event_selected))
        .map(|event| google_calendar_link(event, &app.roster));
    if let Some(link) = link {
        app.set_status(link);
    }
}

/// Apply a key to a single-line text buffer.
fn edit_text(key: KeyEvent, buffer: &mut String) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}
