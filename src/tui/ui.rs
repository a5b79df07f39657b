//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui.
//! Supports customizable themes via the Theme struct.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{
    DeliverableField, OutcomeState, ProjectStatus, ScopeField, StyleField, View,
    VisualizationMode, WizardStep,
};
use crate::core::{
    calendar, kanban, timeline, AssigneeBadge, ScheduleEvent, FILE_TYPE_CHOICES, ROLE_CHOICES,
};
use crate::tui::theme::member_color;
use crate::App;

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match &app.view {
        View::ProjectList => draw_project_list(frame, app, chunks[1]),
        View::Wizard(step) => draw_wizard(frame, app, chunks[1], step),
    }

    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the top header with the app title and context line.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let context = match &app.view {
        View::ProjectList => "Projects".to_string(),
        View::Wizard(step) => format!("New Project · Step {} of 4", step.number()),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" studioplan ", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
        Span::styled(context, Style::default().fg(theme.text_dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );

    frame.render_widget(header, area);
}

/// Draw the project list screen.
fn draw_project_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .map(|project| {
            let status_color = match project.status {
                ProjectStatus::Planning => theme.warning,
                ProjectStatus::InProgress => theme.primary,
                ProjectStatus::Completed => theme.secondary,
            };

            let mut avatars = vec![Span::raw("  ")];
            for member in &project.members {
                avatars.push(Span::styled(
                    format!("[{member}]"),
                    Style::default().fg(theme.text_dim),
                ));
                avatars.push(Span::raw(" "));
            }

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        project.title.clone(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(project.status.label(), Style::default().fg(status_color)),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(project.date_range.clone(), Style::default().fg(theme.text_dim)),
                    Span::styled(
                        format!("  {}", progress_bar(project.progress)),
                        Style::default().fg(theme.secondary),
                    ),
                    Span::styled(
                        format!(" {}%", project.progress),
                        Style::default().fg(theme.text_dim),
                    ),
                ]),
                Line::from(avatars),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Projects ")
                .title_style(Style::default().fg(theme.text_dim))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().bg(theme.selected_bg));

    let mut state = ListState::default();
    state.select(Some(app.list_selected.min(app.projects.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Text progress bar for a project card.
fn progress_bar(percent: u8) -> String {
    const WIDTH: usize = 10;
    let filled = (usize::from(percent.min(100)) * WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

/// Draw the wizard: step indicator plus the current step's body.
fn draw_wizard(frame: &mut Frame, app: &App, area: Rect, step: &WizardStep) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);

    draw_step_indicator(frame, app, chunks[0], step);

    match step {
        WizardStep::Scope => draw_scope_step(frame, app, chunks[1]),
        WizardStep::Deliverables => draw_deliverables_step(frame, app, chunks[1]),
        WizardStep::DesignDna => draw_design_dna_step(frame, app, chunks[1]),
        WizardStep::Outcome(state) => draw_outcome_step(frame, app, chunks[1], state),
    }
}

/// Draw the 4-step progress indicator.
fn draw_step_indicator(frame: &mut Frame, app: &App, area: Rect, step: &WizardStep) {
    let theme = &app.theme;
    let labels = ["Scope", "Deliverables", "Design DNA", "Schedule"];
    let current = usize::from(step.number()) - 1;

    let mut spans = vec![Span::raw(" ")];
    for (i, label) in labels.iter().enumerate() {
        let style = if i == current {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else if i < current {
            Style::default().fg(theme.secondary)
        } else {
            Style::default().fg(theme.text_dim)
        };
        spans.push(Span::styled(format!("{} {label}", i + 1), style));
        if i + 1 < labels.len() {
            spans.push(Span::styled("  ›  ", Style::default().fg(theme.border)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Style for a form field's border depending on focus.
fn field_border(app: &App, focused: bool) -> Style {
    if focused {
        Style::default().fg(app.theme.primary)
    } else {
        Style::default().fg(app.theme.border)
    }
}

/// A single-line text input field.
fn text_field<'a>(app: &'a App, title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let cursor = if focused { "│" } else { "" };
    Paragraph::new(Line::from(vec![
        Span::styled(value, Style::default().fg(app.theme.text)),
        Span::styled(cursor, Style::default().fg(app.theme.primary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border(app, focused))
            .title(format!(" {title} ")),
    )
}

/// Draw wizard step 1: project scope and team roster.
fn draw_scope_step(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left column: project fields.
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    frame.render_widget(
        text_field(app, "Project Name", &app.project.name, app.scope_focus == ScopeField::Name),
        left[0],
    );

    let type_field = Paragraph::new(Line::from(vec![
        Span::styled(app.project.project_type.label(), Style::default().fg(theme.text)),
        Span::styled("  (Enter cycles)", Style::default().fg(theme.text_dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_border(app, app.scope_focus == ScopeField::ProjectType))
            .title(" Project Type "),
    );
    frame.render_widget(type_field, left[1]);

    frame.render_widget(
        text_field(
            app,
            "Start Date (YYYY-MM-DD)",
            &app.project.start_date,
            app.scope_focus == ScopeField::StartDate,
        ),
        left[2],
    );
    frame.render_widget(
        text_field(
            app,
            "End Date (YYYY-MM-DD)",
            &app.project.end_date,
            app.scope_focus == ScopeField::EndDate,
        ),
        left[3],
    );

    // Right column: member entry and roster.
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(columns[1]);

    frame.render_widget(
        text_field(
            app,
            "Member Name",
            &app.member_name_input,
            app.scope_focus == ScopeField::MemberName,
        ),
        right[0],
    );

    // Role input with inline suggestions while focused and empty.
    let role_focused = app.scope_focus == ScopeField::MemberRole;
    let role_line = if role_focused && app.member_role_input.is_empty() {
        let mut spans = Vec::new();
        for (i, role) in ROLE_CHOICES.iter().enumerate() {
            let style = if i == app.role_cursor {
                Style::default().fg(theme.primary).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_dim)
            };
            spans.push(Span::styled(*role, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    } else {
        Line::from(Span::styled(&app.member_role_input, Style::default().fg(theme.text)))
    };
    frame.render_widget(
        Paragraph::new(role_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(app, role_focused))
                .title(" Role "),
        ),
        right[1],
    );

    frame.render_widget(
        text_field(
            app,
            "Email (optional, Enter adds)",
            &app.member_email_input,
            app.scope_focus == ScopeField::MemberEmail,
        ),
        right[2],
    );

    // Roster list with colored avatar badges.
    let members: Vec<ListItem> = app
        .roster
        .members()
        .iter()
        .map(|member| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", crate::core::initials(&member.name)),
                    Style::default().fg(member_color(member.color)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(member.name.clone(), Style::default().fg(theme.text)),
                Span::styled(format!(" · {}", member.role), Style::default().fg(theme.text_dim)),
            ]))
        })
        .collect();

    let list_focused = app.scope_focus == ScopeField::MemberList;
    let roster_list = List::new(members)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(app, list_focused))
                .title(format!(" Team ({}) ", app.roster.len())),
        )
        .highlight_style(Style::default().bg(theme.selected_bg));

    let mut state = ListState::default();
    if list_focused && !app.roster.is_empty() {
        state.select(Some(app.member_selected.min(app.roster.len() - 1)));
    }
    frame.render_stateful_widget(roster_list, right[3], &mut state);
}

/// Draw wizard step 2: deliverables.
fn draw_deliverables_step(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let quantity = app.deliverables.quantity;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(app, app.deliverable_focus == DeliverableField::Quantity))
                .title(format!(" Number of Assets: {quantity} (←/→ adjusts) ")),
        )
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(f64::from(quantity) / f64::from(crate::core::MAX_QUANTITY))
        .label(quantity.to_string());
    frame.render_widget(gauge, rows[0]);

    // File-type chips.
    let chips_focused = app.deliverable_focus == DeliverableField::FileTypes;
    let mut chips = vec![Span::raw(" ")];
    for (i, file_type) in FILE_TYPE_CHOICES.iter().enumerate() {
        let selected = app.deliverables.has_file_type(file_type);
        let mut style = if selected {
            Style::default().fg(theme.background).bg(theme.primary)
        } else {
            Style::default().fg(theme.text_dim)
        };
        if chips_focused && i == app.file_type_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        chips.push(Span::styled(format!(" {file_type} "), style));
        chips.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(chips)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(app, chips_focused))
                .title(" File Types (Space toggles) "),
        ),
        rows[1],
    );

    let brief = Paragraph::new(app.deliverables.content_brief.as_str())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(
                    app,
                    app.deliverable_focus == DeliverableField::ContentBrief,
                ))
                .title(" Content Brief "),
        );
    frame.render_widget(brief, rows[2]);
}

/// Draw wizard step 3: design DNA.
fn draw_design_dna_step(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        text_field(
            app,
            "Color Palette",
            &app.style.palette,
            app.style_focus == StyleField::Palette,
        ),
        rows[0],
    );
    frame.render_widget(
        text_field(
            app,
            "Typography",
            &app.style.typography,
            app.style_focus == StyleField::Typography,
        ),
        rows[1],
    );
    frame.render_widget(
        text_field(
            app,
            "Graphic Elements",
            &app.style.graphic_elements,
            app.style_focus == StyleField::GraphicElements,
        ),
        rows[2],
    );

    let hint = Paragraph::new("Ctrl+G generates the schedule")
        .style(Style::default().fg(app.theme.text_dim))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[3]);
}

/// Draw wizard step 4: outcome (loading, failed, or the schedule).
fn draw_outcome_step(frame: &mut Frame, app: &App, area: Rect, state: &OutcomeState) {
    match state {
        OutcomeState::Loading => draw_loading(frame, app, area),
        OutcomeState::Failed(message) => draw_failure(frame, app, area, message),
        OutcomeState::Ready => draw_schedule(frame, app, area),
    }
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Generating schedule…",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "The plan is being drafted from your brief. Esc cancels.",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)));
    frame.render_widget(body, area);
}

fn draw_failure(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let theme = &app.theme;
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "r retries · ← returns to Design DNA · Esc closes the wizard",
            Style::default().fg(theme.text_dim),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.error)));
    frame.render_widget(body, area);
}

/// Draw the generated schedule in the active visualization.
fn draw_schedule(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    draw_viz_tabs(frame, app, chunks[0]);

    let Some(schedule) = &app.schedule else {
        // Ready without a schedule cannot normally happen; render an
        // empty frame rather than panicking mid-draw.
        return;
    };

    match app.viz_mode {
        VisualizationMode::Timeline => draw_timeline(frame, app, chunks[1], schedule),
        VisualizationMode::Kanban => draw_kanban(frame, app, chunks[1], schedule),
        VisualizationMode::Calendar => draw_calendar(frame, app, chunks[1], schedule),
    }
}

fn draw_viz_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];
    for mode in VisualizationMode::all() {
        let style = if mode == app.viz_mode {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_dim)
        };
        spans.push(Span::styled(mode.label(), style));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("(v switches)", Style::default().fg(theme.text_dim)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Assignee badge rendered as colored initials plus the display name.
fn badge_spans<'a>(badge: &AssigneeBadge, app: &'a App) -> Vec<Span<'a>> {
    let color = badge.color.map_or(app.theme.text_dim, member_color);
    vec![
        Span::styled(
            format!("[{}]", badge.initials),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", badge.name), Style::default().fg(app.theme.text_dim)),
    ]
}

fn draw_timeline(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    schedule: &crate::core::CanonicalSchedule,
) {
    let theme = &app.theme;
    let entries = timeline(schedule, &app.roster);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::styled(
                    format!("{}  ", entry.event.date.format("%b %d")),
                    Style::default().fg(theme.secondary),
                ),
                Span::styled(entry.event.title.clone(), Style::default().fg(theme.text)),
                Span::raw("  "),
            ];
            spans.extend(badge_spans(&entry.assignee, app));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Timeline ({} events) ", schedule.len())),
        )
        .highlight_style(Style::default().bg(theme.selected_bg));

    let mut state = ListState::default();
    state.select(Some(app.event_selected.min(schedule.len().saturating_sub(1))));
    frame.render_stateful_widget(list, columns[0], &mut state);

    draw_event_detail(frame, app, columns[1], schedule.events().get(app.event_selected));
}

/// Detail pane for the selected timeline event.
fn draw_event_detail(frame: &mut Frame, app: &App, area: Rect, event: Option<&ScheduleEvent>) {
    let theme = &app.theme;

    let lines = if let Some(event) = event {
        vec![
            Line::from(Span::styled(
                event.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(event.date_label.clone(), Style::default().fg(theme.secondary))),
            Line::raw(""),
            Line::from(Span::styled(event.description.clone(), Style::default().fg(theme.text))),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Type: ", Style::default().fg(theme.text_dim)),
                Span::styled(event.event_type.clone(), Style::default().fg(theme.text)),
            ]),
            Line::raw(""),
            Line::from(Span::styled(
                "Press l to copy the calendar link to the status bar",
                Style::default().fg(theme.text_dim),
            )),
        ]
    } else {
        vec![Line::from(Span::styled("No event selected", Style::default().fg(theme.text_dim)))]
    };

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Details ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(detail, area);
}

fn draw_kanban(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    schedule: &crate::core::CanonicalSchedule,
) {
    let theme = &app.theme;
    let board = kanban(schedule);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let buckets = [
        ("To Do", &board.to_do, theme.primary),
        ("On It", &board.on_it, theme.warning),
        ("Finished", &board.finished, theme.secondary),
    ];

    for ((title, events, accent), column) in buckets.into_iter().zip(columns.iter()) {
        let items: Vec<ListItem> = events
            .iter()
            .map(|event| {
                ListItem::new(vec![
                    Line::from(Span::styled(event.title.clone(), Style::default().fg(theme.text))),
                    Line::from(Span::styled(
                        format!("  {}", event.date.format("%b %d")),
                        Style::default().fg(theme.text_dim),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {title} ({}) ", events.len()))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(list, *column);
    }
}

fn draw_calendar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    schedule: &crate::core::CanonicalSchedule,
) {
    let theme = &app.theme;

    let Some(grid) = calendar(schedule, &app.project.start_date) else {
        let empty = Paragraph::new("No calendar to show: the project start date is not a valid date.")
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)));
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            grid.label.clone(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Su   Mo   Tu   We   Th   Fr   Sa",
            Style::default().fg(theme.text_dim),
        )),
    ];

    // Week rows: blanks first, then one slot per day cell.
    let mut week: Vec<Span> = Vec::new();
    for _ in 0..grid.leading_blanks {
        week.push(Span::raw("     "));
    }
    for cell in &grid.cells {
        let style = if cell.events.is_empty() {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.background).bg(theme.primary).add_modifier(Modifier::BOLD)
        };
        week.push(Span::styled(format!(" {:>2}  ", cell.day), style));

        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    // Legend of in-month events below the grid.
    lines.push(Line::raw(""));
    for cell in &grid.cells {
        for event in &cell.events {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>2} · ", cell.day),
                    Style::default().fg(theme.secondary),
                ),
                Span::styled(event.title.clone(), Style::default().fg(theme.text)),
            ]));
        }
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Calendar ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(body, area);
}

/// Draw the bottom status bar: a pending message or key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let (text, style) = if let Some(message) = &app.status_message {
        (message.clone(), Style::default().fg(theme.warning))
    } else {
        let hints = match &app.view {
            View::ProjectList => "n new project · ↑/↓ select · q quit",
            View::Wizard(WizardStep::Scope) => {
                "Tab fields · Ctrl+→ next · Esc cancel"
            }
            View::Wizard(WizardStep::Deliverables) => {
                "Tab fields · Ctrl+←/→ steps · Esc cancel"
            }
            View::Wizard(WizardStep::DesignDna) => {
                "Tab fields · Ctrl+G generate · Ctrl+← back · Esc cancel"
            }
            View::Wizard(WizardStep::Outcome(OutcomeState::Loading)) => "Esc cancel",
            View::Wizard(WizardStep::Outcome(OutcomeState::Ready)) => {
                "v view · ↑/↓ select · l link · Enter save · Esc discard"
            }
            View::Wizard(WizardStep::Outcome(OutcomeState::Failed(_))) => {
                "r retry · ← back · Esc cancel"
            }
        };
        (hints.to_string(), Style::default().fg(theme.text_dim))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
