//! PDF report adapter (printpdf).
//!
//! Renders an assessment into a single A4 page with a fixed layout:
//! title, author line, generation timestamp, parameter table, disclaimer
//! and footer. Builtin Helvetica fonts only, no embedded resources.

use std::io::BufWriter;

use chrono::{Datelike, Local};
use printpdf::*;

use crate::domain::Assessment;
use crate::ports::ReportRenderer;

// A4 portrait
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_RIGHT: f32 = 20.0;

// Colors (RGB 0-255)
const COLOR_TITLE: (u8, u8, u8) = (15, 118, 110); // Teal
const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);
const COLOR_LIGHT_GRAY: (u8, u8, u8) = (180, 180, 180);

// Table geometry (mm)
const TABLE_COL_SPLIT: f32 = 80.0;
const TABLE_ROW_HEIGHT: f32 = 7.0;

const REPORT_TITLE: &str = "Clinical Parameter Report";

const DISCLAIMER: &str =
    "Disclaimer: document generated for informational purposes. It does not \
     replace professional medical evaluation.";

/// Error type for PDF rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF write error: {0}")]
    Write(String),
}

/// Assessment renderer producing PDF bytes.
pub struct PdfRenderer {
    author: String,
}

impl PdfRenderer {
    /// Create a renderer with the given author line.
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }

    /// Create a renderer configured from the environment.
    ///
    /// Reads `VITALSCOPE_REPORT_AUTHOR`, defaulting to `Vitalscope`.
    #[must_use]
    pub fn from_env() -> Self {
        let author =
            std::env::var("VITALSCOPE_REPORT_AUTHOR").unwrap_or_else(|_| "Vitalscope".to_string());
        Self::new(author)
    }

    /// Rows of the parameter table, in the report's fixed order.
    fn table_rows(assessment: &Assessment) -> Vec<(String, String)> {
        let vitals = &assessment.vitals;
        vec![
            ("Age".to_string(), vitals.age.to_string()),
            ("Sex".to_string(), vitals.sex.to_string()),
            ("Weight (kg)".to_string(), format!("{:.1}", vitals.weight_kg)),
            ("Height (cm)".to_string(), format!("{:.1}", vitals.height_cm)),
            (
                "BMI".to_string(),
                format!("{:.2} ({})", assessment.bmi, assessment.category),
            ),
            (
                "Blood Pressure".to_string(),
                format!("{}/{} mmHg", vitals.systolic, vitals.diastolic),
            ),
            (
                "Heart Rate".to_string(),
                format!("{} bpm", vitals.heart_rate),
            ),
            (
                "Temperature".to_string(),
                format!("{:.1} °C", vitals.temperature_c),
            ),
        ]
    }
}

impl ReportRenderer for PdfRenderer {
    type Error = ReportError;

    fn render(&self, assessment: &Assessment) -> Result<Vec<u8>, ReportError> {
        let (doc, page1, layer1) =
            PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Font(e.to_string()))?;

        let layer = doc.get_page(page1).get_layer(layer1);

        let mut y = PAGE_HEIGHT - 25.0;

        // Title
        add_text(&layer, &bold, REPORT_TITLE, MARGIN_LEFT, y, 18.0, COLOR_TITLE);
        y -= 12.0;

        // Author and generation timestamp
        add_text(
            &layer,
            &font,
            &format!("Author: {}", self.author),
            MARGIN_LEFT,
            y,
            11.0,
            COLOR_BLACK,
        );
        y -= 6.0;
        add_text(
            &layer,
            &font,
            &format!("Generated: {}", Local::now().format("%d/%m/%Y %H:%M")),
            MARGIN_LEFT,
            y,
            11.0,
            COLOR_BLACK,
        );
        y -= 10.0;

        add_hline(&layer, MARGIN_LEFT, PAGE_WIDTH - MARGIN_RIGHT, y, COLOR_GRAY, 0.5);
        y -= 10.0;

        // Parameter table
        let rows = Self::table_rows(assessment);
        y = draw_table(&layer, &font, &bold, &rows, y);
        y -= 14.0;

        // Disclaimer (wrapped by hand; Helvetica has no layout engine)
        for line in wrap_text(DISCLAIMER, 95) {
            add_text(&layer, &font, &line, MARGIN_LEFT, y, 10.0, COLOR_BLACK);
            y -= 5.0;
        }
        y -= 10.0;

        // Footer
        add_text(
            &layer,
            &font,
            &format!(
                "© {} {} - Vitalscope Clinical Parameter Analyzer",
                Local::now().year(),
                self.author
            ),
            MARGIN_LEFT,
            y,
            9.0,
            COLOR_GRAY,
        );
        y -= 5.0;
        add_text(
            &layer,
            &font,
            &format!("Report {}", assessment.id),
            MARGIN_LEFT,
            y,
            8.0,
            COLOR_LIGHT_GRAY,
        );

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| ReportError::Write(e.to_string()))?;
        buf.into_inner()
            .map_err(|e| ReportError::Write(e.to_string()))
    }
}

// ---- drawing helpers ----

fn rgb_to_printpdf(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn add_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: (u8, u8, u8), width: f32) {
    add_line(layer, x1, y, x2, y, color, width);
}

fn add_line(
    layer: &PdfLayerReference,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    color: (u8, u8, u8),
    width: f32,
) {
    layer.set_outline_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Draw the two-column parameter table with a ruled grid. Returns the y
/// position below the table.
fn draw_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
    rows: &[(String, String)],
    top: f32,
) -> f32 {
    let right = PAGE_WIDTH - MARGIN_RIGHT;

    // Header row
    add_text(layer, bold, "Parameter", MARGIN_LEFT + 2.0, top - 5.0, 11.0, COLOR_BLACK);
    add_text(layer, bold, "Value", TABLE_COL_SPLIT + 2.0, top - 5.0, 11.0, COLOR_BLACK);

    let row_count = rows.len() + 1;
    let bottom = top - TABLE_ROW_HEIGHT * row_count as f32;

    // Data rows
    for (i, (parameter, value)) in rows.iter().enumerate() {
        let row_y = top - TABLE_ROW_HEIGHT * (i + 1) as f32 - 5.0;
        add_text(layer, font, parameter, MARGIN_LEFT + 2.0, row_y, 10.0, COLOR_BLACK);
        add_text(layer, font, value, TABLE_COL_SPLIT + 2.0, row_y, 10.0, COLOR_BLACK);
    }

    // Grid: horizontal rules
    for i in 0..=row_count {
        let line_y = top - TABLE_ROW_HEIGHT * i as f32;
        let (color, width) = if i <= 1 {
            (COLOR_GRAY, 0.6)
        } else {
            (COLOR_LIGHT_GRAY, 0.4)
        };
        add_hline(layer, MARGIN_LEFT, right, line_y, color, width);
    }

    // Grid: vertical rules
    for x in [MARGIN_LEFT, TABLE_COL_SPLIT, right] {
        add_line(layer, x, top, x, bottom, COLOR_LIGHT_GRAY, 0.4);
    }

    bottom
}

/// Naive word wrap on character count.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EvaluationService;
    use crate::domain::PatientVitals;

    fn sample_assessment() -> Assessment {
        EvaluationService::new()
            .assess(PatientVitals::default())
            .expect("Should assess")
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let renderer = PdfRenderer::new("Test Author");
        let bytes = renderer.render(&sample_assessment()).expect("Should render");

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_table_rows_fixed_order() {
        let rows = PdfRenderer::table_rows(&sample_assessment());
        let labels: Vec<&str> = rows.iter().map(|(p, _)| p.as_str()).collect();

        assert_eq!(
            labels,
            [
                "Age",
                "Sex",
                "Weight (kg)",
                "Height (cm)",
                "BMI",
                "Blood Pressure",
                "Heart Rate",
                "Temperature"
            ]
        );
        assert_eq!(rows[5].1, "120/80 mmHg");
        assert!(rows[4].1.contains("Normal weight"));
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, ["one two", "three", "four"]);

        assert!(wrap_text("", 10).is_empty());
    }
}
