//! Static clinical reference ranges and range classification.
//!
//! Normal bands follow the general ranges used in international practice;
//! classification is a plain min/max comparison with inclusive bounds.

use serde::{Deserialize, Serialize};

/// Position of a measured value relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeStatus {
    /// Below the reference range
    Low,
    /// Within the reference range
    Normal,
    /// Above the reference range
    High,
}

impl RangeStatus {
    /// Get the associated color for display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (59, 130, 246),    // Blue (#3B82F6)
            Self::Normal => (16, 185, 129), // Emerald (#10B981)
            Self::High => (244, 63, 94),    // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Normal => write!(f, "Normal"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Classify a value against a min/max band. Bounds count as normal.
#[must_use]
pub fn classify(value: f64, min: f64, max: f64) -> RangeStatus {
    if value < min {
        RangeStatus::Low
    } else if value > max {
        RangeStatus::High
    } else {
        RangeStatus::Normal
    }
}

/// A named clinical reference range.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRange {
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    /// Classify a measured value against this range.
    #[must_use]
    pub fn status(&self, value: f64) -> RangeStatus {
        classify(value, self.min, self.max)
    }
}

pub const SYSTOLIC: ReferenceRange = ReferenceRange {
    label: "Systolic Pressure",
    unit: "mmHg",
    min: 90.0,
    max: 120.0,
};

pub const DIASTOLIC: ReferenceRange = ReferenceRange {
    label: "Diastolic Pressure",
    unit: "mmHg",
    min: 60.0,
    max: 80.0,
};

pub const HEART_RATE: ReferenceRange = ReferenceRange {
    label: "Heart Rate",
    unit: "bpm",
    min: 60.0,
    max: 100.0,
};

pub const TEMPERATURE: ReferenceRange = ReferenceRange {
    label: "Temperature",
    unit: "°C",
    min: 36.1,
    max: 37.2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bounds_are_normal() {
        assert_eq!(classify(89.9, 90.0, 120.0), RangeStatus::Low);
        assert_eq!(classify(90.0, 90.0, 120.0), RangeStatus::Normal);
        assert_eq!(classify(120.0, 90.0, 120.0), RangeStatus::Normal);
        assert_eq!(classify(120.1, 90.0, 120.0), RangeStatus::High);
    }

    #[test]
    fn test_vital_sign_bands() {
        assert_eq!(DIASTOLIC.status(59.0), RangeStatus::Low);
        assert_eq!(DIASTOLIC.status(80.0), RangeStatus::Normal);
        assert_eq!(HEART_RATE.status(101.0), RangeStatus::High);
        assert_eq!(HEART_RATE.status(60.0), RangeStatus::Normal);
        assert_eq!(TEMPERATURE.status(36.0), RangeStatus::Low);
        assert_eq!(TEMPERATURE.status(37.2), RangeStatus::Normal);
        assert_eq!(TEMPERATURE.status(37.3), RangeStatus::High);
    }
}
