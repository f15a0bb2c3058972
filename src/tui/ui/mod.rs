//! UI module: View components for the TUI.

pub mod assessment;
pub mod chart;
pub mod dashboard;
pub mod form;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::MedicalTheme;

/// Outcome line shown in a view footer after an action (e.g. a PDF export).
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: This software is for informational and educational purposes only and does not replace professional medical evaluation.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Always consult a physician for official clinical interpretation.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Render a footer line: the status message if one is pending, the key
/// hints otherwise.
pub(crate) fn render_footer(
    f: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    status: Option<&StatusMessage>,
) {
    let content = match status {
        Some(status) => {
            let style = if status.is_error {
                MedicalTheme::danger()
            } else {
                MedicalTheme::success()
            };
            Line::from(vec![
                Span::styled(if status.is_error { "! " } else { "✓ " }, style),
                Span::styled(status.text.clone(), style),
            ])
        }
        None => {
            let mut spans = Vec::with_capacity(hints.len() * 2);
            for (key, desc) in hints {
                spans.push(Span::styled(format!("[{key}] "), MedicalTheme::key_hint()));
                spans.push(Span::styled(format!("{desc} "), MedicalTheme::key_desc()));
            }
            Line::from(spans)
        }
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

/// Render a one-line view header: title plus a muted tagline.
pub(crate) fn render_header(f: &mut Frame, area: Rect, title: &str, tagline: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled(title.to_string(), MedicalTheme::title()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
        Span::styled(tagline.to_string(), MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}
