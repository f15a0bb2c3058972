//! Assessment view: metric cards, evaluation table and interpretation.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::domain::Assessment;
use crate::tui::styles::MedicalTheme;

use super::{render_footer, render_header, StatusMessage};

/// Render the assessment view
pub fn render_assessment(
    f: &mut Frame,
    area: Rect,
    assessment: &Assessment,
    interpretation: &[String],
    status: Option<&StatusMessage>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Metric cards
            Constraint::Min(8),    // Evaluation table
            Constraint::Length(9), // Interpretation
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Assessment", "Clinical reference ranges");
    render_metric_cards(f, chunks[1], assessment);
    render_evaluation_table(f, chunks[2], assessment);
    render_interpretation(f, chunks[3], interpretation);
    render_footer(
        f,
        chunks[4],
        &[
            ("E", "Export PDF"),
            ("G", "BMI Gauge"),
            ("N", "New Entry"),
            ("Esc", "Dashboard"),
        ],
        status,
    );
}

fn render_metric_cards(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let vitals = &assessment.vitals;
    let category_style = MedicalTheme::bmi_category(assessment.category);

    render_card(
        f,
        columns[0],
        "BMI",
        Span::styled(
            format!("{:.2}", assessment.bmi),
            category_style.add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::styled(assessment.category.to_string(), category_style),
    );
    render_card(
        f,
        columns[1],
        "Blood Pressure",
        Span::styled(
            format!("{}/{} mmHg", vitals.systolic, vitals.diastolic),
            MedicalTheme::title(),
        ),
        Span::styled("systolic/diastolic", MedicalTheme::text_muted()),
    );
    render_card(
        f,
        columns[2],
        "Heart Rate",
        Span::styled(format!("{} bpm", vitals.heart_rate), MedicalTheme::title()),
        Span::styled("resting", MedicalTheme::text_muted()),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: Span<'_>, sub: Span<'_>) {
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let content = Paragraph::new(vec![Line::from(value), Line::from(sub)])
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(content, area);
}

fn render_evaluation_table(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let header = Row::new(["Parameter", "Value", "Evaluation"]).style(MedicalTheme::table_header());

    let rows: Vec<Row> = assessment
        .evaluations
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::styled(row.parameter, MedicalTheme::text()),
                Span::styled(row.value.clone(), MedicalTheme::text_secondary()),
                Span::styled(row.verdict.to_string(), MedicalTheme::verdict(row.verdict)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .title(Span::styled(" Parameter Evaluation ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_interpretation(f: &mut Frame, area: Rect, interpretation: &[String]) {
    let mut lines: Vec<Line> = interpretation
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled("• ", MedicalTheme::text_muted()),
                Span::styled(line.clone(), MedicalTheme::text()),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Values are compared against general clinical reference ranges. Any anomaly should be evaluated by a qualified professional.",
        MedicalTheme::text_muted(),
    )]));

    let block = Block::default()
        .title(Span::styled(" Interpretation ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
