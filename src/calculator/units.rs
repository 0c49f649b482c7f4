//! Unit systems and conversion constants
//!
//! Provides the metric/imperial unit system type and the factors used to
//! bring imperial entries onto the metric scale.

use serde::{Deserialize, Serialize};

/// Unit system a measurement was entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds, feet and inches
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Some(UnitSystem::Metric),
            "imperial" | "us" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Weight unit label
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Factor turning lb/in² into kg/m² for BMI
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Combine a feet + inches height into total inches
pub fn total_inches(feet: f64, inches: f64) -> f64 {
    feet * INCHES_PER_FOOT + inches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!(UnitSystem::from_str("metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str(" Imperial "), Some(UnitSystem::Imperial));
        assert_eq!(UnitSystem::from_str("furlongs"), None);
    }

    #[test]
    fn test_default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn test_total_inches() {
        assert_eq!(total_inches(5.0, 9.0), 69.0);
        assert_eq!(total_inches(0.0, 30.0), 30.0);
    }

    #[test]
    fn test_conversions() {
        assert!((lbs_to_kg(155.0) - 70.30676).abs() < 1e-9);
        assert!((inches_to_cm(69.0) - 175.26).abs() < 1e-9);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}
