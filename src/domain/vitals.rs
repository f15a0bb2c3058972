//! Patient vital-sign input types.
//!
//! One transient record per session. Values are re-entered each time and
//! never persisted.

use serde::{Deserialize, Serialize};

/// Patient sex as recorded on the entry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// Flip to the other option (used by the form toggle).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// One set of patient vitals entered through the TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientVitals {
    /// Age in years (0-120)
    pub age: u32,

    /// Patient sex
    pub sex: Sex,

    /// Body weight in kilograms (30-250)
    pub weight_kg: f64,

    /// Height in centimeters (100-220)
    pub height_cm: f64,

    /// Systolic blood pressure in mmHg (80-250)
    pub systolic: u32,

    /// Diastolic blood pressure in mmHg (40-150)
    pub diastolic: u32,

    /// Heart rate in beats per minute (30-200)
    pub heart_rate: u32,

    /// Body temperature in degrees Celsius (34-42)
    pub temperature_c: f64,
}

impl Default for PatientVitals {
    fn default() -> Self {
        Self {
            age: 30,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
            systolic: 120,
            diastolic: 80,
            heart_rate: 70,
            temperature_c: 36.5,
        }
    }
}

impl PatientVitals {
    /// Validate that all values are within the accepted entry limits.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.age > 120 {
            errors.push(format!("Age {} out of range [0, 120]", self.age));
        }
        if !(30.0..=250.0).contains(&self.weight_kg) {
            errors.push(format!("Weight {} out of range [30, 250]", self.weight_kg));
        }
        if !(100.0..=220.0).contains(&self.height_cm) {
            errors.push(format!("Height {} out of range [100, 220]", self.height_cm));
        }
        if !(80..=250).contains(&self.systolic) {
            errors.push(format!(
                "Systolic pressure {} out of range [80, 250]",
                self.systolic
            ));
        }
        if !(40..=150).contains(&self.diastolic) {
            errors.push(format!(
                "Diastolic pressure {} out of range [40, 150]",
                self.diastolic
            ));
        }
        if !(30..=200).contains(&self.heart_rate) {
            errors.push(format!(
                "Heart rate {} out of range [30, 200]",
                self.heart_rate
            ));
        }
        if !(34.0..=42.0).contains(&self.temperature_c) {
            errors.push(format!(
                "Temperature {} out of range [34, 42]",
                self.temperature_c
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PatientVitals::default().validate().is_ok());
    }

    #[test]
    fn test_validation_limits() {
        let vitals = PatientVitals {
            weight_kg: 260.0, // invalid (> 250)
            temperature_c: 33.0, // invalid (< 34)
            ..PatientVitals::default()
        };
        let errors = vitals.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Weight"));
        assert!(errors[1].contains("Temperature"));
    }

    #[test]
    fn test_validation_boundaries_inclusive() {
        let vitals = PatientVitals {
            age: 120,
            weight_kg: 30.0,
            height_cm: 220.0,
            systolic: 250,
            diastolic: 40,
            heart_rate: 200,
            temperature_c: 42.0,
            ..PatientVitals::default()
        };
        assert!(vitals.validate().is_ok());
    }

    #[test]
    fn test_sex_toggle() {
        assert_eq!(Sex::Male.toggled(), Sex::Female);
        assert_eq!(Sex::Female.toggled(), Sex::Male);
        assert_eq!(Sex::Male.to_string(), "Male");
    }
}
