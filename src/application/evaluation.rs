//! Evaluation service: vitals in, assessment out.
//!
//! Pure computation: BMI derivation plus static reference-range lookups.

use crate::domain::{
    bmi, Assessment, BmiCategory, Evaluation, PatientVitals, Verdict, DIASTOLIC, HEART_RATE,
    SYSTOLIC, TEMPERATURE,
};
use crate::{Result, VitalscopeError};

/// Service producing assessments from entered vitals.
#[derive(Debug, Default)]
pub struct EvaluationService;

impl EvaluationService {
    /// Create a new evaluation service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate the vitals, derive BMI and classify every parameter.
    ///
    /// # Errors
    /// Returns `VitalscopeError::Validation` if any value is outside the
    /// accepted entry limits.
    pub fn assess(&self, vitals: PatientVitals) -> Result<Assessment> {
        vitals
            .validate()
            .map_err(|errors| VitalscopeError::Validation(errors.join(", ")))?;

        let bmi_value = bmi(vitals.weight_kg, vitals.height_cm);
        let category = BmiCategory::from_bmi(bmi_value);

        let evaluations = vec![
            Evaluation {
                parameter: "BMI",
                value: format!("{bmi_value:.2}"),
                verdict: Verdict::Bmi(category),
            },
            Evaluation {
                parameter: SYSTOLIC.label,
                value: format!("{} {}", vitals.systolic, SYSTOLIC.unit),
                verdict: Verdict::Range(SYSTOLIC.status(f64::from(vitals.systolic))),
            },
            Evaluation {
                parameter: DIASTOLIC.label,
                value: format!("{} {}", vitals.diastolic, DIASTOLIC.unit),
                verdict: Verdict::Range(DIASTOLIC.status(f64::from(vitals.diastolic))),
            },
            Evaluation {
                parameter: HEART_RATE.label,
                value: format!("{} {}", vitals.heart_rate, HEART_RATE.unit),
                verdict: Verdict::Range(HEART_RATE.status(f64::from(vitals.heart_rate))),
            },
            Evaluation {
                parameter: TEMPERATURE.label,
                value: format!("{:.1} {}", vitals.temperature_c, TEMPERATURE.unit),
                verdict: Verdict::Range(TEMPERATURE.status(vitals.temperature_c)),
            },
        ];

        // Log classification only; raw measurements stay out of the logs.
        tracing::info!(category = %category, "Assessment computed");

        Ok(Assessment::new(vitals, bmi_value, category, evaluations))
    }

    /// Informative summary lines shown under the evaluation table.
    #[must_use]
    pub fn interpretation(&self, assessment: &Assessment) -> Vec<String> {
        let vitals = &assessment.vitals;
        vec![
            format!("BMI: {:.2} → {}", assessment.bmi, assessment.category),
            format!(
                "Blood Pressure: {}/{} mmHg",
                vitals.systolic, vitals.diastolic
            ),
            format!("Heart Rate: {} bpm", vitals.heart_rate),
            format!("Temperature: {:.1} °C", vitals.temperature_c),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeStatus;

    #[test]
    fn test_assess_default_vitals() {
        let service = EvaluationService::new();
        let assessment = service
            .assess(PatientVitals::default())
            .expect("Should assess");

        assert_eq!(assessment.category, BmiCategory::Normal);
        assert_eq!(assessment.evaluations.len(), 5);
        assert_eq!(assessment.evaluations[0].parameter, "BMI");

        // 120/80, 70 bpm and 36.5 C are all inside the reference bands.
        for row in &assessment.evaluations[1..] {
            assert_eq!(row.verdict, Verdict::Range(RangeStatus::Normal));
        }
    }

    #[test]
    fn test_assess_flags_out_of_band_values() {
        let service = EvaluationService::new();
        let vitals = PatientVitals {
            systolic: 150,
            heart_rate: 45,
            temperature_c: 38.2,
            ..PatientVitals::default()
        };
        let assessment = service.assess(vitals).expect("Should assess");

        assert_eq!(
            assessment.evaluations[1].verdict,
            Verdict::Range(RangeStatus::High)
        );
        assert_eq!(
            assessment.evaluations[3].verdict,
            Verdict::Range(RangeStatus::Low)
        );
        assert_eq!(
            assessment.evaluations[4].verdict,
            Verdict::Range(RangeStatus::High)
        );
    }

    #[test]
    fn test_assess_rejects_invalid_vitals() {
        let service = EvaluationService::new();
        let vitals = PatientVitals {
            height_cm: 90.0, // below entry limit
            ..PatientVitals::default()
        };
        let err = service.assess(vitals).expect_err("Should reject");
        assert!(matches!(err, VitalscopeError::Validation(_)));
    }

    #[test]
    fn test_interpretation_lines() {
        let service = EvaluationService::new();
        let assessment = service
            .assess(PatientVitals::default())
            .expect("Should assess");
        let lines = service.interpretation(&assessment);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("24.22"));
        assert!(lines[0].contains("Normal weight"));
        assert!(lines[1].contains("120/80"));
    }
}
