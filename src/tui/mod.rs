//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a medical-themed interface for:
//! - Dashboard with session status and reference ranges
//! - Patient vitals entry
//! - Assessment table with interpretation
//! - BMI gauge chart

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
