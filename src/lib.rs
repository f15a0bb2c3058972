//! # Vitalscope
//!
//! Terminal clinical parameter analyzer.
//!
//! This crate provides:
//! - BMI derivation and category classification
//! - Vital-sign assessment against static clinical reference ranges
//! - Terminal UI for single-session data entry and review
//! - PDF report export with a fixed layout
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core clinical types (vitals, BMI categories, reference ranges)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (printpdf renderer, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, BmiCategory, PatientVitals, RangeStatus};

/// Result type for Vitalscope operations
pub type Result<T> = std::result::Result<T, VitalscopeError>;

/// Main error type for Vitalscope
#[derive(Debug, thiserror::Error)]
pub enum VitalscopeError {
    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Report generation failed: {0}")]
    Report(#[from] adapters::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
