//! Assessment result types.
//!
//! Represents the output of one evaluation pass over a set of vitals.

use serde::{Deserialize, Serialize};

use super::bmi::BmiCategory;
use super::reference::RangeStatus;
use super::vitals::PatientVitals;

/// Verdict attached to one evaluation row: either a BMI category or a
/// position relative to a reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Bmi(BmiCategory),
    Range(RangeStatus),
}

impl Verdict {
    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Bmi(category) => category.color(),
            Self::Range(status) => status.color(),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bmi(category) => category.fmt(f),
            Self::Range(status) => status.fmt(f),
        }
    }
}

/// One row of the evaluation table.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Parameter label shown in the table
    pub parameter: &'static str,

    /// Formatted measured value, with unit
    pub value: String,

    /// Classification verdict
    pub verdict: Verdict,
}

/// Complete assessment record for one entry of vitals.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Locally generated identifier (never transmitted)
    pub id: String,

    /// The vitals this assessment was computed from
    pub vitals: PatientVitals,

    /// Derived body-mass-index
    pub bmi: f64,

    /// BMI classification
    pub category: BmiCategory,

    /// Per-parameter evaluation rows, BMI first
    pub evaluations: Vec<Evaluation>,

    /// Timestamp of evaluation
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Assemble a new assessment record.
    #[must_use]
    pub fn new(
        vitals: PatientVitals,
        bmi: f64,
        category: BmiCategory,
        evaluations: Vec<Evaluation>,
    ) -> Self {
        Self {
            id: uuid_v4(),
            vitals,
            bmi,
            category,
            evaluations,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy to ensure cryptographic randomness
/// on all platforms. This prevents identifier prediction.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_creation() {
        let vitals = PatientVitals::default();
        let assessment = Assessment::new(vitals, 24.22, BmiCategory::Normal, Vec::new());

        assert_eq!(assessment.category, BmiCategory::Normal);
        assert_eq!(assessment.vitals.systolic, 120);
        assert!(!assessment.id.is_empty());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Bmi(BmiCategory::Obese).to_string(), "Obesity");
        assert_eq!(Verdict::Range(RangeStatus::Low).to_string(), "Low");
    }

    #[test]
    fn test_uuid_generation() {
        let id1 = uuid_v4();
        let id2 = uuid_v4();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format with dashes
    }
}
