//! BMI gauge view.
//!
//! Terminal analogue of a gauge indicator: a percent bar over the fixed
//! 0-40 axis plus a colored category band with a position marker.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::{Assessment, BmiCategory, BMI_SCALE_MAX};
use crate::tui::styles::MedicalTheme;

use super::{render_footer, render_header, StatusMessage};

/// Render the BMI gauge view
pub fn render_chart(
    f: &mut Frame,
    area: Rect,
    assessment: &Assessment,
    status: Option<&StatusMessage>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "BMI Distribution", "0-40 scale");
    render_gauge_content(f, chunks[1], assessment);
    render_footer(
        f,
        chunks[2],
        &[("E", "Export PDF"), ("Esc", "Back")],
        status,
    );
}

fn render_gauge_content(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Readout
            Constraint::Length(4), // Gauge
            Constraint::Length(3), // Category band + marker
            Constraint::Min(0),    // Legend
        ])
        .margin(2)
        .split(area);

    let category_style = MedicalTheme::bmi_category(assessment.category);

    // Readout
    let readout = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{:.2} │ {}", assessment.bmi, assessment.category),
            category_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            assessment.category.description(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(readout, chunks[0]);

    // Gauge over the fixed axis
    let ratio = (assessment.bmi / BMI_SCALE_MAX).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" BMI ", MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(category_style)
        .percent((ratio * 100.0) as u16)
        .label(format!("{:.2}", assessment.bmi));
    f.render_widget(gauge, chunks[1]);

    // Category band with marker
    let band_area = chunks[2];
    let width = band_area.width.max(1);
    let marker = marker_line(width, ratio);
    let band = band_line(width);
    f.render_widget(Paragraph::new(vec![marker, band]), band_area);

    // Legend
    let legend_lines = vec![
        legend_line(BmiCategory::Underweight, "< 18.5"),
        legend_line(BmiCategory::Normal, "18.5 - 24.9"),
        legend_line(BmiCategory::Overweight, "25.0 - 29.9"),
        legend_line(BmiCategory::Obese, "≥ 30.0"),
    ];
    f.render_widget(Paragraph::new(legend_lines), chunks[3]);
}

/// One colored cell per terminal column, colored by the BMI value at that
/// position on the axis.
fn band_line(width: u16) -> Line<'static> {
    let spans = (0..width)
        .map(|i| {
            let value = (f64::from(i) + 0.5) / f64::from(width) * BMI_SCALE_MAX;
            let category = BmiCategory::from_bmi(value);
            Span::styled("█", MedicalTheme::bmi_category(category))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn marker_line(width: u16, ratio: f64) -> Line<'static> {
    let position = (ratio * f64::from(width.saturating_sub(1))).round() as usize;
    Line::from(vec![
        Span::raw(" ".repeat(position)),
        Span::styled("▼", MedicalTheme::title()),
    ])
}

fn legend_line(category: BmiCategory, band: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ■ ", MedicalTheme::bmi_category(category)),
        Span::styled(format!("{category}"), MedicalTheme::text()),
        Span::styled(format!("  {band}"), MedicalTheme::text_muted()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_line_width() {
        let line = band_line(40);
        assert_eq!(line.spans.len(), 40);
    }

    #[test]
    fn test_marker_stays_in_bounds() {
        let line = marker_line(10, 1.0);
        // 9 spaces then the marker
        assert_eq!(line.spans[0].content.len(), 9);

        let line = marker_line(10, 0.0);
        assert!(line.spans[0].content.is_empty());
    }
}
