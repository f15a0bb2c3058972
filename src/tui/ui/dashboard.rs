//! Dashboard view: Main overview screen.

use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{Assessment, DIASTOLIC, HEART_RATE, SYSTOLIC, TEMPERATURE};
use crate::tui::styles::MedicalTheme;

use super::{render_footer, render_header, StatusMessage};

/// Dashboard state for rendering.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Assessments computed this session
    pub assessments_run: usize,
    /// Path of the most recent PDF export, if any
    pub last_export: Option<PathBuf>,
}

/// Render the main dashboard view.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    current: Option<&Assessment>,
    status: Option<&StatusMessage>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Vitalscope", "Clinical Parameter Analyzer");
    render_main_content(f, chunks[1], state, current);
    render_dashboard_footer(f, chunks[2], current.is_some(), status);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &DashboardState, current: Option<&Assessment>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Reference ranges + session
            Constraint::Percentage(55), // Current assessment
        ])
        .split(area);

    render_info_panels(f, chunks[0], state);
    render_current_assessment(f, chunks[1], current);
}

fn render_info_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Reference ranges
            Constraint::Length(6), // Session
            Constraint::Min(0),    // Padding
        ])
        .margin(1)
        .split(area);

    // Reference ranges
    let mut range_lines = vec![range_line("BMI", "18.5 - 24.9", "")];
    for range in [SYSTOLIC, DIASTOLIC, HEART_RATE, TEMPERATURE] {
        range_lines.push(range_line(
            range.label,
            &format!("{} - {}", range.min, range.max),
            range.unit,
        ));
    }

    let ranges_block = Block::default()
        .title(Span::styled(" Reference Ranges ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());
    f.render_widget(Paragraph::new(range_lines).block(ranges_block), chunks[0]);

    // Session summary
    let last_export = state
        .last_export
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.display().to_string());

    let session_lines = vec![
        Line::from(vec![
            Span::styled("  Assessments: ", MedicalTheme::text_secondary()),
            Span::styled(state.assessments_run.to_string(), MedicalTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Last export: ", MedicalTheme::text_secondary()),
            Span::styled(last_export, MedicalTheme::text_muted()),
        ]),
        Line::from(vec![Span::styled(
            "  Nothing is stored between sessions.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let session_block = Block::default()
        .title(Span::styled(" Session ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());
    f.render_widget(Paragraph::new(session_lines).block(session_block), chunks[1]);
}

fn range_line(label: &str, band: &str, unit: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), MedicalTheme::text_secondary()),
        Span::styled(format!("{band} {unit}"), MedicalTheme::text()),
    ])
}

fn render_current_assessment(f: &mut Frame, area: Rect, current: Option<&Assessment>) {
    let block = Block::default()
        .title(Span::styled(" Current Assessment ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let Some(assessment) = current else {
        let empty_msg = Paragraph::new(Line::from(vec![Span::styled(
            "No assessment yet. Press [N] to enter vitals.",
            MedicalTheme::text_muted(),
        )]))
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let vitals = &assessment.vitals;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("BMI: ", MedicalTheme::text_secondary()),
            Span::styled(
                format!("{:.2}", assessment.bmi),
                MedicalTheme::bmi_category(assessment.category),
            ),
            Span::styled(
                format!(" ({})", assessment.category),
                MedicalTheme::bmi_category(assessment.category),
            ),
        ]),
        Line::from(vec![
            Span::styled("Blood Pressure: ", MedicalTheme::text_secondary()),
            Span::styled(
                format!("{}/{} mmHg", vitals.systolic, vitals.diastolic),
                MedicalTheme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Heart Rate: ", MedicalTheme::text_secondary()),
            Span::styled(format!("{} bpm", vitals.heart_rate), MedicalTheme::text()),
        ]),
        Line::from(""),
    ];

    for row in &assessment.evaluations {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", row.parameter), MedicalTheme::text_secondary()),
            Span::styled(row.verdict.to_string(), MedicalTheme::verdict(row.verdict)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!(
            "Computed at {}",
            assessment.created_at.format("%H:%M:%S UTC")
        ),
        MedicalTheme::text_muted(),
    )]));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_dashboard_footer(
    f: &mut Frame,
    area: Rect,
    has_assessment: bool,
    status: Option<&StatusMessage>,
) {
    let hints: &[(&str, &str)] = if has_assessment {
        &[
            ("N", "New Assessment"),
            ("R", "Results"),
            ("G", "BMI Gauge"),
            ("E", "Export PDF"),
            ("Q", "Quit"),
        ]
    } else {
        &[("N", "New Assessment"), ("Q", "Quit")]
    };

    render_footer(f, area, hints, status);
}
