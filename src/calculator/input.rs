//! Raw form input and its validated counterparts
//!
//! Measurements and age arrive as text exactly as typed. Parsing turns them
//! into typed values or a single `CalcError::InvalidInput`.

use serde::{Deserialize, Serialize};

use super::calories::{ActivityLevel, Gender, Goal};
use super::error::{CalcError, CalcResult, INVALID_AGE, INVALID_MEASUREMENTS, INVALID_TOTAL_HEIGHT};
use super::units::{inches_to_cm, lbs_to_kg, total_inches, UnitSystem};

/// Measurements as entered, tagged by unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum MeasurementInput {
    /// Weight in kg, height in cm
    Metric { weight: String, height: String },
    /// Weight in lbs, height split into feet and inches
    Imperial {
        weight: String,
        feet: String,
        inches: String,
    },
}

impl MeasurementInput {
    pub fn metric(weight: impl Into<String>, height: impl Into<String>) -> Self {
        MeasurementInput::Metric {
            weight: weight.into(),
            height: height.into(),
        }
    }

    pub fn imperial(
        weight: impl Into<String>,
        feet: impl Into<String>,
        inches: impl Into<String>,
    ) -> Self {
        MeasurementInput::Imperial {
            weight: weight.into(),
            feet: feet.into(),
            inches: inches.into(),
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        match self {
            MeasurementInput::Metric { .. } => UnitSystem::Metric,
            MeasurementInput::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    /// Validate and convert to a typed measurement
    pub fn parse(&self) -> CalcResult<Measurement> {
        match self {
            MeasurementInput::Metric { weight, height } => {
                match (parse_number(weight), parse_number(height)) {
                    (Some(weight_kg), Some(height_cm)) if weight_kg > 0.0 && height_cm > 0.0 => {
                        Ok(Measurement::Metric {
                            weight_kg,
                            height_cm,
                        })
                    }
                    _ => Err(CalcError::invalid(INVALID_MEASUREMENTS)),
                }
            }
            MeasurementInput::Imperial {
                weight,
                feet,
                inches,
            } => {
                let (weight_lb, feet, inches) =
                    match (parse_number(weight), parse_number(feet), parse_number(inches)) {
                        (Some(w), Some(ft), Some(inch)) => (w, ft, inch),
                        _ => return Err(CalcError::invalid(INVALID_MEASUREMENTS)),
                    };

                if weight_lb <= 0.0 || (feet <= 0.0 && inches <= 0.0) {
                    return Err(CalcError::invalid(INVALID_MEASUREMENTS));
                }

                // Negative inches can still cancel out a positive feet entry
                let total = total_inches(feet, inches);
                if total <= 0.0 {
                    return Err(CalcError::invalid(INVALID_TOTAL_HEIGHT));
                }

                Ok(Measurement::Imperial {
                    weight_lb,
                    total_inches: total,
                })
            }
        }
    }
}

/// A validated measurement in the unit system it was entered in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum Measurement {
    Metric { weight_kg: f64, height_cm: f64 },
    Imperial { weight_lb: f64, total_inches: f64 },
}

impl Measurement {
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            Measurement::Metric { .. } => UnitSystem::Metric,
            Measurement::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            Measurement::Metric { weight_kg, .. } => weight_kg,
            Measurement::Imperial { weight_lb, .. } => lbs_to_kg(weight_lb),
        }
    }

    pub fn height_cm(&self) -> f64 {
        match *self {
            Measurement::Metric { height_cm, .. } => height_cm,
            Measurement::Imperial { total_inches, .. } => inches_to_cm(total_inches),
        }
    }
}

/// Profile fields as entered; only age is free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub age: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl ProfileInput {
    pub fn new(age: impl Into<String>) -> Self {
        Self {
            age: age.into(),
            gender: Gender::default(),
            activity_level: ActivityLevel::default(),
            goal: Goal::default(),
        }
    }

    pub fn parse(&self) -> CalcResult<Profile> {
        let age = parse_age(&self.age).ok_or_else(|| CalcError::invalid(INVALID_AGE))?;
        Ok(Profile {
            age,
            gender: self.gender,
            activity_level: self.activity_level,
            goal: self.goal,
        })
    }
}

/// A validated profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Parse a text field into a finite number
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a text field into a positive whole number of years
pub fn parse_age(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&age| age > 0)
}
