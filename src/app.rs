//! Application state and lifecycle management.
//!
//! This module contains the core `App` struct that holds all
//! planning-session state and the wizard state machine driving it.
//! The TUI reads and mutates this state; nothing here draws anything.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::core::{
    initials, CanonicalSchedule, Config, DeliverableSpec, InferenceConfig, ProjectContext,
    RawScheduleEvent, StyleSpec, TeamRoster, FILE_TYPE_CHOICES, ROLE_CHOICES,
};
use crate::infer::{InferenceError, InferenceManager, InferenceRequest};
use crate::tui::Theme;

/// Top-level screen: the session's project list or the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Entry point; also reached by cancel and save/close
    ProjectList,
    /// The 4-step generation wizard
    Wizard(WizardStep),
}

/// Wizard steps. Step 4 carries its own outcome sub-state, so "step 5"
/// or a result without a generation attempt cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// Step 1: project scope and team roster
    Scope,
    /// Step 2: deliverables and content brief
    Deliverables,
    /// Step 3: design DNA (palette, typography, graphics)
    DesignDna,
    /// Step 4: generation outcome
    Outcome(OutcomeState),
}

/// Sub-state of the wizard's final step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeState {
    /// Inference call in flight; gates further generate actions
    Loading,
    /// Schedule generated and validated
    Ready,
    /// Inference or validation failed; non-terminal
    Failed(String),
}

impl WizardStep {
    /// 1-based step number for the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            Self::Scope => 1,
            Self::Deliverables => 2,
            Self::DesignDna => 3,
            Self::Outcome(_) => 4,
        }
    }
}

/// Which schedule visualization is active on the result screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualizationMode {
    #[default]
    Timeline,
    Kanban,
    Calendar,
}

impl VisualizationMode {
    pub fn all() -> [Self; 3] {
        [Self::Timeline, Self::Kanban, Self::Calendar]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Kanban => "Kanban",
            Self::Calendar => "Calendar",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Timeline => Self::Kanban,
            Self::Kanban => Self::Calendar,
            Self::Calendar => Self::Timeline,
        }
    }
}

/// Lifecycle tag shown on project list cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A card on the project list screen. Session-scoped display data.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub title: String,
    pub status: ProjectStatus,
    pub date_range: String,
    /// Percent complete for the card's progress bar
    pub progress: u8,
    /// Member initials for the avatar strip
    pub members: Vec<String>,
}

/// Sample projects shown on first launch, before anything is planned.
fn sample_projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            title: "Q3 Rebrand Identity".to_string(),
            status: ProjectStatus::InProgress,
            date_range: "Oct 01 - Dec 15".to_string(),
            progress: 65,
            members: vec!["JD".to_string(), "AL".to_string()],
        },
        ProjectSummary {
            title: "Social Media Jan".to_string(),
            status: ProjectStatus::Planning,
            date_range: "Jan 01 - Jan 31".to_string(),
            progress: 10,
            members: vec!["JD".to_string()],
        },
        ProjectSummary {
            title: "EcoStyle Launch".to_string(),
            status: ProjectStatus::Completed,
            date_range: "Aug 15 - Sep 30".to_string(),
            progress: 100,
            members: vec!["AL".to_string(), "MS".to_string(), "JD".to_string()],
        },
    ]
}

/// Focusable fields on the scope step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScopeField {
    #[default]
    Name,
    ProjectType,
    StartDate,
    EndDate,
    MemberName,
    MemberRole,
    MemberEmail,
    MemberList,
}

impl ScopeField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::ProjectType,
            Self::ProjectType => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::MemberName,
            Self::MemberName => Self::MemberRole,
            Self::MemberRole => Self::MemberEmail,
            Self::MemberEmail => Self::MemberList,
            Self::MemberList => Self::Name,
        }
    }
}

/// Focusable fields on the deliverables step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliverableField {
    #[default]
    Quantity,
    FileTypes,
    ContentBrief,
}

impl DeliverableField {
    pub fn next(self) -> Self {
        match self {
            Self::Quantity => Self::FileTypes,
            Self::FileTypes => Self::ContentBrief,
            Self::ContentBrief => Self::Quantity,
        }
    }
}

/// Focusable fields on the design-DNA step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleField {
    #[default]
    Palette,
    Typography,
    GraphicElements,
}

impl StyleField {
    pub fn next(self) -> Self {
        match self {
            Self::Palette => Self::Typography,
            Self::Typography => Self::GraphicElements,
            Self::GraphicElements => Self::Palette,
        }
    }
}

/// Message from the generation worker thread.
#[derive(Debug)]
struct GenerationMessage {
    /// Sequence number of the request this answers
    seq: u64,
    result: Result<Vec<RawScheduleEvent>, InferenceError>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Current screen
    pub view: View,

    /// Active visualization on the result screen
    pub viz_mode: VisualizationMode,

    /// Project scope collected in step 1
    pub project: ProjectContext,

    /// Team roster collected in step 1
    pub roster: TeamRoster,

    /// Deliverable parameters collected in step 2
    pub deliverables: DeliverableSpec,

    /// Style parameters collected in step 3
    pub style: StyleSpec,

    /// The validated schedule of the latest successful generation
    pub schedule: Option<CanonicalSchedule>,

    /// Session project list (entry screen cards)
    pub projects: Vec<ProjectSummary>,

    /// Selected card on the project list
    pub list_selected: usize,

    /// Selected event row on the timeline/result view
    pub event_selected: usize,

    /// Focused field per wizard step
    pub scope_focus: ScopeField,
    pub deliverable_focus: DeliverableField,
    pub style_focus: StyleField,

    /// Pending member-entry buffers on the scope step
    pub member_name_input: String,
    pub member_role_input: String,
    pub member_email_input: String,

    /// Selected row in the roster list (for removal)
    pub member_selected: usize,

    /// Cursor over the file-type chips
    pub file_type_cursor: usize,

    /// Cursor over the role suggestions
    pub role_cursor: usize,

    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Sequence number of the latest generation request; responses
    /// carrying an older number are stale and discarded
    generation_seq: u64,

    /// Receiver for the in-flight generation, if any
    generation_rx: Option<Receiver<GenerationMessage>>,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Create with explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let theme = Theme::resolve(&config.ui);
        let mut app = Self {
            view: View::ProjectList,
            viz_mode: VisualizationMode::default(),
            project: ProjectContext::default(),
            roster: TeamRoster::new(),
            deliverables: DeliverableSpec::default(),
            style: StyleSpec::default(),
            schedule: None,
            projects: sample_projects(),
            list_selected: 0,
            event_selected: 0,
            scope_focus: ScopeField::default(),
            deliverable_focus: DeliverableField::default(),
            style_focus: StyleField::default(),
            member_name_input: String::new(),
            member_role_input: String::new(),
            member_email_input: String::new(),
            member_selected: 0,
            file_type_cursor: 0,
            role_cursor: 0,
            config,
            theme,
            status_message: None,
            should_quit: false,
            generation_seq: 0,
            generation_rx: None,
        };
        app.apply_config_defaults();
        app
    }

    fn apply_config_defaults(&mut self) {
        self.project.project_type = self.config.general.default_project_type;
        self.deliverables.set_quantity(self.config.general.default_quantity);
    }

    // --- Mode queries ---

    /// Whether a generation request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Wizard(WizardStep::Outcome(OutcomeState::Loading)))
    }

    /// Current wizard step, if the wizard is open.
    pub fn step(&self) -> Option<&WizardStep> {
        match &self.view {
            View::Wizard(step) => Some(step),
            View::ProjectList => None,
        }
    }

    // --- Wizard lifecycle ---

    /// Open the wizard with a fresh session state.
    pub fn start_wizard(&mut self) {
        self.project = ProjectContext::default();
        self.roster = TeamRoster::new();
        self.deliverables = DeliverableSpec::default();
        self.style = StyleSpec::default();
        self.apply_config_defaults();
        self.schedule = None;
        self.viz_mode = VisualizationMode::default();
        self.scope_focus = ScopeField::default();
        self.deliverable_focus = DeliverableField::default();
        self.style_focus = StyleField::default();
        self.member_name_input.clear();
        self.member_role_input.clear();
        self.member_email_input.clear();
        self.member_selected = 0;
        self.file_type_cursor = 0;
        self.role_cursor = 0;
        self.event_selected = 0;
        self.status_message = None;
        self.view = View::Wizard(WizardStep::Scope);
    }

    /// Leave the wizard without saving. The schedule (if any) is
    /// discarded; an in-flight generation keeps running but its
    /// response will be stale on arrival.
    pub fn cancel_wizard(&mut self) {
        self.schedule = None;
        self.view = View::ProjectList;
    }

    /// Advance one step. Steps 1 and 2 advance permissively; their
    /// fields are only validated when a request is built. From steps
    /// 3 and 4 this is a no-op: generation leaves step 3 explicitly,
    /// and 4 is the maximum.
    pub fn next_step(&mut self) {
        let next = match &self.view {
            View::Wizard(WizardStep::Scope) => WizardStep::Deliverables,
            View::Wizard(WizardStep::DesignDna | WizardStep::Outcome(_)) | View::ProjectList => {
                return
            }
            View::Wizard(WizardStep::Deliverables) => WizardStep::DesignDna,
        };
        self.view = View::Wizard(next);
    }

    /// Go back one step, clamping at step 1. From a failed outcome
    /// this returns to step 3 (no automatic retry); from a loading or
    /// ready outcome it is a no-op.
    pub fn prev_step(&mut self) {
        let prev = match &self.view {
            View::Wizard(WizardStep::Deliverables) => WizardStep::Scope,
            View::Wizard(WizardStep::DesignDna) => WizardStep::Deliverables,
            View::Wizard(WizardStep::Outcome(OutcomeState::Failed(_))) => WizardStep::DesignDna,
            _ => return,
        };
        self.view = View::Wizard(prev);
    }

    // --- Roster actions ---

    /// Add a member from the pending input buffers.
    pub fn add_member_from_inputs(&mut self) {
        let email = if self.member_email_input.trim().is_empty() {
            None
        } else {
            Some(self.member_email_input.clone())
        };

        match self.roster.add(self.member_name_input.clone(), self.member_role_input.clone(), email)
        {
            Ok(member) => {
                let message = format!("Added {}", member.name);
                self.set_status(message);
                self.member_name_input.clear();
                self.member_role_input.clear();
                self.member_email_input.clear();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Remove the roster member currently selected in the list.
    pub fn remove_selected_member(&mut self) {
        if let Some(member) = self.roster.members().get(self.member_selected) {
            self.roster.remove(member.id);
            self.member_selected = self.member_selected.min(self.roster.len().saturating_sub(1));
        }
    }

    /// Fill the role buffer from the highlighted suggestion.
    pub fn pick_suggested_role(&mut self) {
        if let Some(role) = ROLE_CHOICES.get(self.role_cursor) {
            self.member_role_input = (*role).to_string();
        }
    }

    // --- Deliverable actions ---

    /// Toggle the file-type chip under the cursor.
    pub fn toggle_file_type_at_cursor(&mut self) {
        if let Some(file_type) = FILE_TYPE_CHOICES.get(self.file_type_cursor) {
            self.deliverables.toggle_file_type(file_type);
        }
    }

    // --- Generation ---

    /// Trigger a schedule generation from step 3 (or a retry from a
    /// failed outcome). Validation failures surface inline and keep
    /// the current step; a request already in flight blocks new ones.
    pub fn start_generation(&mut self) {
        if self.is_loading() {
            self.set_status("Generation already in progress");
            return;
        }

        match &self.view {
            View::Wizard(WizardStep::DesignDna | WizardStep::Outcome(OutcomeState::Failed(_))) => {}
            _ => return,
        }

        let request = match InferenceRequest::build(
            &self.project,
            &self.roster,
            &self.deliverables,
            &self.style,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };

        self.generation_seq += 1;
        self.generation_rx =
            Some(spawn_generation(request, self.config.inference.clone(), self.generation_seq));
        self.schedule = None;
        self.event_selected = 0;
        self.view = View::Wizard(WizardStep::Outcome(OutcomeState::Loading));
        tracing::debug!(seq = self.generation_seq, "Generation dispatched");
    }

    /// Poll for a finished generation. Called on every TUI tick.
    ///
    /// Responses are applied only when the app is still waiting for
    /// that exact request; anything else (user cancelled, a newer
    /// request was issued) is discarded.
    pub fn poll_generation(&mut self) {
        let Some(rx) = &self.generation_rx else { return };
        let Ok(message) = rx.try_recv() else { return };
        self.generation_rx = None;

        if message.seq != self.generation_seq || !self.is_loading() {
            tracing::debug!(seq = message.seq, "Discarding stale generation response");
            return;
        }

        let outcome = match message.result {
            Ok(raw) => match CanonicalSchedule::from_raw(raw) {
                Ok(schedule) => {
                    self.schedule = Some(schedule);
                    OutcomeState::Ready
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Inference response failed validation");
                    OutcomeState::Failed(format!(
                        "The generated schedule was unusable ({e}). Adjust your inputs and try again."
                    ))
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Inference call failed");
                OutcomeState::Failed(
                    "Failed to generate schedule. Please check your inputs.".to_string(),
                )
            }
        };

        self.view = View::Wizard(WizardStep::Outcome(outcome));
    }

    /// Save the generated plan as a project card and return to the
    /// list.
    pub fn save_and_close(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            let date_range = schedule
                .date_range()
                .map(|(first, last)| {
                    format!("{} - {}", first.format("%b %d"), last.format("%b %d"))
                })
                .unwrap_or_default();

            self.projects.push(ProjectSummary {
                title: self.project.name.clone(),
                status: ProjectStatus::Planning,
                date_range,
                progress: 0,
                members: self.roster.members().iter().map(|m| initials(&m.name)).collect(),
            });
        }
        self.view = View::ProjectList;
    }

    // --- Navigation helpers ---

    /// Move selection up in the current list.
    pub fn select_previous(&mut self) {
        match self.view {
            View::ProjectList => self.list_selected = self.list_selected.saturating_sub(1),
            View::Wizard(_) => self.event_selected = self.event_selected.saturating_sub(1),
        }
    }

    /// Move selection down in the current list.
    pub fn select_next(&mut self) {
        match self.view {
            View::ProjectList => {
                if !self.projects.is_empty() {
                    self.list_selected = (self.list_selected + 1).min(self.projects.len() - 1);
                }
            }
            View::Wizard(_) => {
                let max = self.schedule.as_ref().map_or(0, |s| s.len().saturating_sub(1));
                self.event_selected = (self.event_selected + 1).min(max);
            }
        }
    }

    /// Set a status message to display temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Perform periodic updates (called on tick).
    pub fn tick(&mut self) {
        self.poll_generation();
    }

    /// Inject a finished generation result directly (tests only).
    #[cfg(test)]
    pub fn inject_generation_result(
        &mut self,
        seq_offset: u64,
        result: Result<Vec<RawScheduleEvent>, InferenceError>,
    ) {
        let (tx, rx) = mpsc::channel();
        tx.send(GenerationMessage { seq: self.generation_seq - seq_offset, result }).unwrap();
        self.generation_rx = Some(rx);
        self.poll_generation();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

/// Run one inference request on a worker thread.
///
/// The TUI stays responsive while the provider call (unbounded
/// latency) runs on its own current-thread runtime; the result comes
/// back tagged with the request's sequence number.
fn spawn_generation(
    request: InferenceRequest,
    config: InferenceConfig,
    seq: u64,
) -> Receiver<GenerationMessage> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime.block_on(async {
                let manager = InferenceManager::from_config(&config).await;
                manager.generate(&request).await
            }),
            Err(e) => Err(InferenceError::ApiError(format!("failed to start runtime: {e}"))),
        };

        // The receiver may be gone if the app exited; nothing to do.
        let _ = tx.send(GenerationMessage { seq, result });
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_events() -> Vec<RawScheduleEvent> {
        vec![
            RawScheduleEvent {
                date: "2024-03-05".into(),
                title: "Delivery".into(),
                ..Default::default()
            },
            RawScheduleEvent {
                date: "2024-01-10".into(),
                title: "Kickoff".into(),
                ..Default::default()
            },
        ]
    }

    fn app_at_design_dna() -> App {
        let mut app = App::default();
        app.start_wizard();
        app.project.name = "Test Project".to_string();
        app.project.start_date = "2024-01-01".to_string();
        app.project.end_date = "2024-03-31".to_string();
        app.next_step();
        app.next_step();
        app
    }

    #[test]
    fn test_initial_view_is_project_list() {
        let app = App::default();
        assert_eq!(app.view, View::ProjectList);
        assert_eq!(app.projects.len(), 3);
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut app = App::default();
        app.start_wizard();
        assert_eq!(app.step().unwrap().number(), 1);

        // Back from step 1 stays at step 1.
        app.prev_step();
        assert_eq!(app.step().unwrap().number(), 1);

        app.next_step();
        app.next_step();
        assert_eq!(app.step().unwrap().number(), 3);

        // Next from step 3 does not advance; generation does.
        app.next_step();
        assert_eq!(app.step().unwrap().number(), 3);

        app.prev_step();
        assert_eq!(app.step().unwrap().number(), 2);
    }

    #[test]
    fn test_next_from_outcome_stays_at_step_four() {
        let mut app = App::default();
        app.view = View::Wizard(WizardStep::Outcome(OutcomeState::Ready));
        app.next_step();
        assert_eq!(app.step().unwrap().number(), 4);
    }

    #[test]
    fn test_generation_rejected_without_required_fields() {
        let mut app = App::default();
        app.start_wizard();
        app.next_step();
        app.next_step();

        app.start_generation();

        // Validation failed before any external call: still step 3.
        assert_eq!(app.view, View::Wizard(WizardStep::DesignDna));
        assert!(app.status_message.as_deref().unwrap().contains("project name"));
    }

    #[test]
    fn test_generation_moves_to_loading() {
        let mut app = app_at_design_dna();
        app.start_generation();
        assert!(app.is_loading());
    }

    #[test]
    fn test_second_generation_blocked_while_loading() {
        let mut app = app_at_design_dna();
        app.start_generation();
        let seq_before = app.generation_seq;

        app.start_generation();
        assert_eq!(app.generation_seq, seq_before);
        assert_eq!(app.status_message.as_deref(), Some("Generation already in progress"));
    }

    #[test]
    fn test_successful_generation_builds_canonical_schedule() {
        let mut app = app_at_design_dna();
        app.start_generation();
        app.inject_generation_result(0, Ok(raw_events()));

        assert_eq!(app.view, View::Wizard(WizardStep::Outcome(OutcomeState::Ready)));
        let schedule = app.schedule.as_ref().unwrap();
        assert_eq!(schedule.events()[0].title, "Kickoff");
        assert_eq!(schedule.events()[1].title, "Delivery");
    }

    #[test]
    fn test_failed_inference_reaches_error_state_without_mutating_inputs() {
        let mut app = app_at_design_dna();
        app.roster.add("Jane", "Lead Designer", None).unwrap();
        let project_before = app.project.clone();
        let roster_len_before = app.roster.len();

        app.start_generation();
        app.inject_generation_result(0, Err(InferenceError::NoResponse));

        assert!(matches!(
            app.view,
            View::Wizard(WizardStep::Outcome(OutcomeState::Failed(_)))
        ));
        assert!(app.schedule.is_none());
        assert_eq!(app.project, project_before);
        assert_eq!(app.roster.len(), roster_len_before);
    }

    #[test]
    fn test_unparseable_dates_reject_whole_batch() {
        let mut app = app_at_design_dna();
        app.start_generation();

        let mut events = raw_events();
        events.push(RawScheduleEvent { date: "eventually".into(), ..Default::default() });
        app.inject_generation_result(0, Ok(events));

        assert!(matches!(
            app.view,
            View::Wizard(WizardStep::Outcome(OutcomeState::Failed(_)))
        ));
        assert!(app.schedule.is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = app_at_design_dna();
        app.start_generation();
        app.generation_seq += 1; // pretend a newer request superseded this one

        app.inject_generation_result(1, Ok(raw_events()));

        // Still loading for the newer request; stale data not applied.
        assert!(app.is_loading());
        assert!(app.schedule.is_none());
    }

    #[test]
    fn test_response_after_cancel_is_discarded() {
        let mut app = app_at_design_dna();
        app.start_generation();
        app.cancel_wizard();

        app.inject_generation_result(0, Ok(raw_events()));

        assert_eq!(app.view, View::ProjectList);
        assert!(app.schedule.is_none());
    }

    #[test]
    fn test_failed_outcome_returns_to_design_dna() {
        let mut app = app_at_design_dna();
        app.start_generation();
        app.inject_generation_result(0, Err(InferenceError::NoResponse));

        app.prev_step();
        assert_eq!(app.view, View::Wizard(WizardStep::DesignDna));
    }

    #[test]
    fn test_save_and_close_appends_project_card() {
        let mut app = app_at_design_dna();
        app.roster.add("Jane Doe", "Lead Designer", None).unwrap();
        app.start_generation();
        app.inject_generation_result(0, Ok(raw_events()));

        let count_before = app.projects.len();
        app.save_and_close();

        assert_eq!(app.view, View::ProjectList);
        assert_eq!(app.projects.len(), count_before + 1);
        let card = app.projects.last().unwrap();
        assert_eq!(card.title, "Test Project");
        assert_eq!(card.date_range, "Jan 10 - Mar 05");
        assert_eq!(card.members, vec!["JD".to_string()]);
    }

    #[test]
    fn test_add_member_from_inputs_clears_buffers() {
        let mut app = App::default();
        app.start_wizard();
        app.member_name_input = "Jane Doe".to_string();
        app.member_role_input = "Lead Designer".to_string();

        app.add_member_from_inputs();

        assert_eq!(app.roster.len(), 1);
        assert!(app.member_name_input.is_empty());
        assert!(app.member_role_input.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Added Jane Doe"));
    }

    #[test]
    fn test_add_member_with_missing_role_sets_status() {
        let mut app = App::default();
        app.start_wizard();
        app.member_name_input = "Jane".to_string();

        app.add_member_from_inputs();

        assert!(app.roster.is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("role"));
    }

    #[test]
    fn test_start_wizard_resets_previous_session() {
        let mut app = App::default();
        app.start_wizard();
        app.project.name = "Old".to_string();
        app.roster.add("Jane", "Manager", None).unwrap();
        app.cancel_wizard();

        app.start_wizard();
        assert!(app.project.name.is_empty());
        assert!(app.roster.is_empty());
    }
}
