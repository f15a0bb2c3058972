//! Vitals entry form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{PatientVitals, Sex};
use crate::tui::styles::MedicalTheme;

use super::{render_footer, render_header};

/// Entry widget behavior for one field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Integer { min: u32, max: u32 },
    Decimal { min: f64, max: f64 },
    Sex,
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

/// Vitals form state
pub struct VitalsFormState {
    pub fields: Vec<FormField>,
    pub sex: Sex,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

/// Index of the sex toggle within `fields`.
const SEX_FIELD: usize = 1;

impl Default for VitalsFormState {
    fn default() -> Self {
        let defaults = PatientVitals::default();
        Self {
            fields: vec![
                FormField {
                    label: "Age",
                    hint: "years (0-120)",
                    value: defaults.age.to_string(),
                    kind: FieldKind::Integer { min: 0, max: 120 },
                },
                FormField {
                    label: "Sex",
                    hint: "◂ ▸ to change",
                    value: String::new(),
                    kind: FieldKind::Sex,
                },
                FormField {
                    label: "Weight",
                    hint: "kg (30-250)",
                    value: format!("{:.1}", defaults.weight_kg),
                    kind: FieldKind::Decimal {
                        min: 30.0,
                        max: 250.0,
                    },
                },
                FormField {
                    label: "Height",
                    hint: "cm (100-220)",
                    value: format!("{:.1}", defaults.height_cm),
                    kind: FieldKind::Decimal {
                        min: 100.0,
                        max: 220.0,
                    },
                },
                FormField {
                    label: "Systolic BP",
                    hint: "mmHg (80-250)",
                    value: defaults.systolic.to_string(),
                    kind: FieldKind::Integer { min: 80, max: 250 },
                },
                FormField {
                    label: "Diastolic BP",
                    hint: "mmHg (40-150)",
                    value: defaults.diastolic.to_string(),
                    kind: FieldKind::Integer { min: 40, max: 150 },
                },
                FormField {
                    label: "Heart Rate",
                    hint: "bpm (30-200)",
                    value: defaults.heart_rate.to_string(),
                    kind: FieldKind::Integer { min: 30, max: 200 },
                },
                FormField {
                    label: "Temperature",
                    hint: "°C (34-42)",
                    value: format!("{:.1}", defaults.temperature_c),
                    kind: FieldKind::Decimal {
                        min: 34.0,
                        max: 42.0,
                    },
                },
            ],
            sex: defaults.sex,
            selected_field: 0,
            error_message: None,
        }
    }
}

impl VitalsFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field (numeric fields only)
    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.selected_field];
        if matches!(field.kind, FieldKind::Sex) {
            return;
        }
        if c.is_ascii_digit() || c == '.' {
            field.value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Flip the sex toggle when it is the focused field.
    pub fn toggle_selected(&mut self) {
        if self.selected_field == SEX_FIELD {
            self.sex = self.sex.toggled();
        }
    }

    /// Wipe all entry buffers and restore the default values.
    ///
    /// Entered vitals never outlive the form: buffers are zeroized before
    /// being replaced.
    pub fn restore_defaults(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
        *self = Self::default();
    }

    /// Validate and convert the entries to `PatientVitals`.
    pub fn to_vitals(&self) -> Result<PatientVitals, String> {
        Ok(PatientVitals {
            age: self.parse_integer(0)?,
            sex: self.sex,
            weight_kg: self.parse_decimal(2)?,
            height_cm: self.parse_decimal(3)?,
            systolic: self.parse_integer(4)?,
            diastolic: self.parse_integer(5)?,
            heart_rate: self.parse_integer(6)?,
            temperature_c: self.parse_decimal(7)?,
        })
    }

    fn parse_integer(&self, index: usize) -> Result<u32, String> {
        let field = &self.fields[index];
        let FieldKind::Integer { min, max } = field.kind else {
            return Err(format!("{}: not an integer field", field.label));
        };
        let value: u32 = field
            .value
            .parse()
            .map_err(|_| format!("{}: Invalid number", field.label))?;
        if value < min || value > max {
            return Err(format!(
                "{}: Value must be between {} and {}",
                field.label, min, max
            ));
        }
        Ok(value)
    }

    fn parse_decimal(&self, index: usize) -> Result<f64, String> {
        let field = &self.fields[index];
        let FieldKind::Decimal { min, max } = field.kind else {
            return Err(format!("{}: not a decimal field", field.label));
        };
        let value: f64 = field
            .value
            .parse()
            .map_err(|_| format!("{}: Invalid number", field.label))?;
        if value < min || value > max {
            return Err(format!(
                "{}: Value must be between {} and {}",
                field.label, min, max
            ));
        }
        Ok(value)
    }
}

/// Render the vitals entry form
pub fn render_vitals_form(f: &mut Frame, area: Rect, state: &VitalsFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(f, chunks[0], "Patient Vitals", "Single-session entry");
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &VitalsFormState) {
    // Two-column layout, four fields per column
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], state, 0, mid);
    render_field_column(f, columns[1], state, mid, state.fields.len());
}

fn render_field_column(f: &mut Frame, area: Rect, state: &VitalsFormState, from: usize, to: usize) {
    let field_height = 3;
    let constraints: Vec<Constraint> = (from..to)
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, index) in chunks.iter().zip(from..to) {
        let field = &state.fields[index];
        let is_selected = index == state.selected_field;

        let border_style = if is_selected {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        };
        let title_style = if is_selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = Paragraph::new(field_line(field, state.sex, is_selected)).block(block);
        f.render_widget(content, *chunk);
    }
}

fn field_line(field: &FormField, sex: Sex, is_selected: bool) -> Line<'_> {
    if matches!(field.kind, FieldKind::Sex) {
        let arrows = if is_selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text_muted()
        };
        return Line::from(vec![
            Span::raw(" "),
            Span::styled("◂ ", arrows),
            Span::styled(sex.to_string(), MedicalTheme::text()),
            Span::styled(" ▸", arrows),
        ]);
    }

    let value_display = if field.value.is_empty() {
        Span::styled(field.hint, MedicalTheme::text_muted())
    } else {
        Span::styled(&field.value, MedicalTheme::text())
    };

    Line::from(vec![
        Span::raw(" "),
        value_display,
        if is_selected {
            Span::styled("▌", MedicalTheme::focused())
        } else {
            Span::raw("")
        },
    ])
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &VitalsFormState) {
    let status = state
        .error_message
        .as_ref()
        .map(|err| super::StatusMessage::error(err.clone()));

    render_footer(
        f,
        area,
        &[
            ("↑↓", "Navigate"),
            ("◂▸", "Toggle"),
            ("Enter", "Assess"),
            ("D", "Defaults"),
            ("Esc", "Back"),
        ],
        status.as_ref(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let state = VitalsFormState::default();
        let vitals = state.to_vitals().expect("Should parse defaults");

        assert_eq!(vitals.age, 30);
        assert_eq!(vitals.sex, Sex::Male);
        assert!((vitals.weight_kg - 70.0).abs() < f64::EPSILON);
        assert_eq!(vitals.systolic, 120);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = VitalsFormState::default();
        assert_eq!(state.selected_field, 0);

        state.prev_field();
        assert_eq!(state.selected_field, state.fields.len() - 1);

        state.next_field();
        assert_eq!(state.selected_field, 0);
    }

    #[test]
    fn test_input_char_filters_non_numeric() {
        let mut state = VitalsFormState::default();
        state.clear_field();
        state.input_char('4');
        state.input_char('x');
        state.input_char('2');
        assert_eq!(state.fields[0].value, "42");
    }

    #[test]
    fn test_sex_toggle_only_on_sex_field() {
        let mut state = VitalsFormState::default();

        // Focused on Age: toggling does nothing.
        state.toggle_selected();
        assert_eq!(state.sex, Sex::Male);

        state.selected_field = SEX_FIELD;
        state.toggle_selected();
        assert_eq!(state.sex, Sex::Female);

        // Typing into the sex field is ignored.
        state.input_char('1');
        assert!(state.fields[SEX_FIELD].value.is_empty());
    }

    #[test]
    fn test_invalid_number_reported_with_label() {
        let mut state = VitalsFormState::default();
        state.selected_field = 4;
        state.clear_field();
        state.input_char('.');

        let err = state.to_vitals().expect_err("Should reject");
        assert!(err.contains("Systolic BP"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = VitalsFormState::default();
        state.selected_field = 7;
        state.clear_field();
        for c in "43.5".chars() {
            state.input_char(c);
        }

        let err = state.to_vitals().expect_err("Should reject");
        assert!(err.contains("between 34 and 42"));
    }

    #[test]
    fn test_restore_defaults_resets_state() {
        let mut state = VitalsFormState::default();
        state.selected_field = 2;
        state.clear_field();
        state.input_char('9');
        state.error_message = Some("boom".to_string());

        state.restore_defaults();
        assert_eq!(state.selected_field, 0);
        assert!(state.error_message.is_none());
        assert_eq!(state.fields[2].value, "70.0");
    }
}
