//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the document-generation library.

mod report;

pub use report::ReportRenderer;
