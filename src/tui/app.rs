//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration (evaluation, PDF export)

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::PdfRenderer;
use crate::application::{EvaluationService, ExportService};
use crate::domain::Assessment;

use super::ui::{
    assessment::render_assessment,
    chart::render_chart,
    dashboard::{render_dashboard, DashboardState},
    form::{render_vitals_form, VitalsFormState},
    render_disclaimer, StatusMessage,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    VitalsForm,
    Assessment,
    Chart,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Evaluation service (pure computation)
    evaluation: EvaluationService,

    /// PDF export service
    export: ExportService<PdfRenderer>,

    /// Dashboard state
    dashboard_state: DashboardState,

    /// Vitals form state
    form_state: VitalsFormState,

    /// Most recent assessment, if any
    assessment: Option<Assessment>,

    /// Interpretation lines for the current assessment
    interpretation: Vec<String>,

    /// Pending action outcome shown in the footer
    status: Option<StatusMessage>,
}

impl App {
    /// Create a new application instance using default adapters.
    ///
    /// This is a convenience method that reads the export configuration from
    /// the environment. For more control, use `with_dependencies()`.
    ///
    /// # Errors
    /// Returns error if services cannot be initialized.
    pub fn new() -> Result<Self> {
        let export_dir =
            std::env::var("VITALSCOPE_EXPORT_DIR").unwrap_or_else(|_| "reports".to_string());
        let export = ExportService::new(PdfRenderer::from_env(), export_dir);
        Ok(Self::with_dependencies(export))
    }

    /// Create application with an injected export service (Composition Root
    /// pattern), for `main.rs` and tests.
    #[must_use]
    pub fn with_dependencies(export: ExportService<PdfRenderer>) -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            evaluation: EvaluationService::new(),
            export,
            dashboard_state: DashboardState::default(),
            form_state: VitalsFormState::default(),
            assessment: None,
            interpretation: Vec::new(),
            status: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Draw current screen
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => render_dashboard(
                        f,
                        content_area,
                        &self.dashboard_state,
                        self.assessment.as_ref(),
                        self.status.as_ref(),
                    ),
                    Screen::VitalsForm => render_vitals_form(f, content_area, &self.form_state),
                    Screen::Assessment => {
                        if let Some(assessment) = &self.assessment {
                            render_assessment(
                                f,
                                content_area,
                                assessment,
                                &self.interpretation,
                                self.status.as_ref(),
                            );
                        }
                    }
                    Screen::Chart => {
                        if let Some(assessment) = &self.assessment {
                            render_chart(f, content_area, assessment, self.status.as_ref());
                        }
                    }
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::VitalsForm => self.handle_form_key(key),
            Screen::Assessment => self.handle_assessment_key(key),
            Screen::Chart => self.handle_chart_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_new_entry(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.assessment.is_some() {
                    self.switch_to(Screen::Assessment);
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                if self.assessment.is_some() {
                    self.switch_to(Screen::Chart);
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_report(),
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.switch_to(Screen::Dashboard),
            KeyCode::Up => self.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form_state.next_field(),
            KeyCode::Left | KeyCode::Right => self.form_state.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Char('D') => self.form_state.restore_defaults(),
            KeyCode::Char(c) => self.form_state.input_char(c),
            KeyCode::Backspace => self.form_state.delete_char(),
            KeyCode::Delete => self.form_state.clear_field(),
            KeyCode::Enter => self.submit_vitals_form(),
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.switch_to(Screen::Dashboard),
            KeyCode::Char('g') | KeyCode::Char('G') => self.switch_to(Screen::Chart),
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_new_entry(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_report(),
            _ => {}
        }
    }

    fn handle_chart_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('G') => {
                self.switch_to(Screen::Assessment);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_report(),
            _ => {}
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        self.status = None;
        self.screen = screen;
    }

    fn start_new_entry(&mut self) {
        self.form_state.restore_defaults();
        self.switch_to(Screen::VitalsForm);
    }

    fn submit_vitals_form(&mut self) {
        let vitals = match self.form_state.to_vitals() {
            Ok(vitals) => vitals,
            Err(message) => {
                self.form_state.error_message = Some(message);
                return;
            }
        };

        match self.evaluation.assess(vitals) {
            Ok(assessment) => {
                self.interpretation = self.evaluation.interpretation(&assessment);
                self.assessment = Some(assessment);
                self.dashboard_state.assessments_run += 1;
                self.switch_to(Screen::Assessment);
            }
            Err(e) => {
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }

    fn export_report(&mut self) {
        let Some(assessment) = &self.assessment else {
            self.status = Some(StatusMessage::error("No assessment to export"));
            return;
        };

        match self.export.export(assessment) {
            Ok(path) => {
                self.status = Some(StatusMessage::ok(format!(
                    "Report saved to {}",
                    path.display()
                )));
                self.dashboard_state.last_export = Some(path);
            }
            Err(e) => {
                tracing::error!("PDF export failed: {}", e);
                self.status = Some(StatusMessage::error(format!("Export failed: {e}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(dir: &std::path::Path) -> App {
        let export = ExportService::new(PdfRenderer::new("Test Author"), dir);
        App::with_dependencies(export)
    }

    #[test]
    fn test_submit_form_moves_to_assessment() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::VitalsForm);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Assessment);
        assert!(app.assessment.is_some());
        assert_eq!(app.dashboard_state.assessments_run, 1);
        assert_eq!(app.interpretation.len(), 4);
    }

    #[test]
    fn test_invalid_entry_stays_on_form() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        // Wipe the focused Age field, then submit with it empty.
        app.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.screen, Screen::VitalsForm);
        assert!(app.form_state.error_message.is_some());
        assert!(app.assessment.is_none());
    }

    #[test]
    fn test_export_without_assessment_sets_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);
        let status = app.status.expect("Should have status");
        assert!(status.is_error);
    }

    #[test]
    fn test_export_after_assessment_writes_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);

        let status = app.status.clone().expect("Should have status");
        assert!(!status.is_error, "unexpected error: {}", status.text);
        let path = app
            .dashboard_state
            .last_export
            .clone()
            .expect("Should record export");
        assert!(path.exists());
    }

    #[test]
    fn test_ctrl_q_quits_from_any_screen() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_chart_round_trip() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Chart);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Assessment);
    }
}
