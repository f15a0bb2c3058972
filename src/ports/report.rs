//! Report port: Trait for rendering an assessment into a document.

use crate::domain::Assessment;

/// Trait for document rendering.
///
/// Implementations produce the finished document as bytes; writing those
/// bytes anywhere is the caller's concern.
pub trait ReportRenderer {
    /// Error type for rendering operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render an assessment into document bytes.
    ///
    /// # Errors
    /// Returns error if the document cannot be assembled.
    fn render(&self, assessment: &Assessment) -> Result<Vec<u8>, Self::Error>;
}
