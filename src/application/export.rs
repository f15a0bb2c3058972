//! Export service: render a report and write it to disk.

use std::path::{Path, PathBuf};

use crate::adapters::ReportError;
use crate::domain::Assessment;
use crate::ports::ReportRenderer;
use crate::{Result, VitalscopeError};

/// Service that renders assessments through a [`ReportRenderer`] and writes
/// the result into the export directory.
pub struct ExportService<R>
where
    R: ReportRenderer,
{
    renderer: R,
    export_dir: PathBuf,
}

impl<R> ExportService<R>
where
    R: ReportRenderer,
    R::Error: Into<ReportError>,
{
    /// Create a new export service writing into `export_dir`.
    pub fn new(renderer: R, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            export_dir: export_dir.into(),
        }
    }

    /// The directory reports are written into.
    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Render the assessment and write it as a timestamped PDF file.
    ///
    /// The export directory is created on demand. The write itself is a
    /// single synchronous call.
    ///
    /// # Errors
    /// Returns error if rendering fails or the file cannot be written.
    pub fn export(&self, assessment: &Assessment) -> Result<PathBuf> {
        let bytes = self
            .renderer
            .render(assessment)
            .map_err(|e| VitalscopeError::Report(e.into()))?;

        std::fs::create_dir_all(&self.export_dir)?;

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = self.export_dir.join(format!("vitalscope-report-{stamp}.pdf"));
        std::fs::write(&path, &bytes)?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Report exported");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PdfRenderer;
    use crate::application::EvaluationService;
    use crate::domain::PatientVitals;

    #[test]
    fn test_export_writes_pdf_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let service = ExportService::new(PdfRenderer::new("Test Author"), dir.path());

        let assessment = EvaluationService::new()
            .assess(PatientVitals::default())
            .expect("Should assess");

        let path = service.export(&assessment).expect("Should export");
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));

        let bytes = std::fs::read(&path).expect("Should read back");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let nested = dir.path().join("reports").join("out");
        let service = ExportService::new(PdfRenderer::new("Test Author"), &nested);

        let assessment = EvaluationService::new()
            .assess(PatientVitals::default())
            .expect("Should assess");

        service.export(&assessment).expect("Should export");
        assert!(nested.is_dir());
    }
}
