//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external libraries:
//! - `pdf`: printpdf for report generation
//! - `sanitize`: PII filtering for logs

pub mod pdf;
pub mod sanitize;

// Re-export report error for lib.rs
pub use pdf::{PdfRenderer, ReportError};
