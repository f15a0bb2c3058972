//! Body-mass-index derivation and category classification.

use serde::{Deserialize, Serialize};

/// Upper edge of the BMI gauge axis.
pub const BMI_SCALE_MAX: f64 = 40.0;

/// Compute BMI from weight in kilograms and height in centimeters.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI category with WHO boundaries at 18.5, 25 and 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to 24.9
    Normal,
    /// 25 to 29.9
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Lower bounds are inclusive.
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < 18.5 {
            Self::Underweight
        } else if value < 25.0 {
            Self::Normal
        } else if value < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// The category's segment on the 0-40 gauge axis.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Underweight => (0.0, 18.5),
            Self::Normal => (18.5, 25.0),
            Self::Overweight => (25.0, 30.0),
            Self::Obese => (30.0, BMI_SCALE_MAX),
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Underweight => "Below the healthy weight range",
            Self::Normal => "Within the healthy weight range",
            Self::Overweight => "Above the healthy weight range",
            Self::Obese => "Well above the healthy weight range",
        }
    }

    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Underweight => (96, 165, 250), // Blue (#60A5FA)
            Self::Normal => (34, 197, 94),       // Green (#22C55E)
            Self::Overweight => (250, 204, 21),  // Yellow (#FACC15)
            Self::Obese => (239, 68, 68),        // Red (#EF4444)
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal weight"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obesity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_formula() {
        // 70 kg at 170 cm -> 70 / 1.7^2 = 24.2214...
        let value = bmi(70.0, 170.0);
        assert!((value - 24.2214).abs() < 1e-3);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bounds_cover_scale() {
        let categories = [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ];
        let mut edge = 0.0;
        for category in categories {
            let (lo, hi) = category.bounds();
            assert!((lo - edge).abs() < f64::EPSILON);
            edge = hi;
        }
        assert!((edge - BMI_SCALE_MAX).abs() < f64::EPSILON);
    }
}
