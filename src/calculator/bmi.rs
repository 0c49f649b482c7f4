//! Body Mass Index calculation and category bands

use serde::{Deserialize, Serialize};

use super::input::Measurement;
use super::units::{CM_PER_M, IMPERIAL_BMI_FACTOR};

/// BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

/// Category bands as exclusive upper bounds, in ascending order.
///
/// A BMI belongs to the first band whose bound it is below, so each band is
/// the half-open interval `[previous bound, bound)`.
pub const BMI_BANDS: [(f64, BmiCategory); 4] = [
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::NormalWeight),
    (30.0, BmiCategory::Overweight),
    (f64::INFINITY, BmiCategory::Obese),
];

impl BmiCategory {
    /// Look up the band containing `bmi`
    pub fn from_bmi(bmi: f64) -> Self {
        BMI_BANDS
            .iter()
            .find(|(upper, _)| bmi < *upper)
            .map(|&(_, category)| category)
            .unwrap_or(BmiCategory::Obese)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed BMI with its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// `bmi` formatted with exactly one decimal
    pub display: String,
    pub category: BmiCategory,
}

/// Raw (unrounded) BMI for a measurement
pub fn raw_bmi(measurement: &Measurement) -> f64 {
    match *measurement {
        Measurement::Metric {
            weight_kg,
            height_cm,
        } => {
            let height_m = height_cm / CM_PER_M;
            weight_kg / (height_m * height_m)
        }
        Measurement::Imperial {
            weight_lb,
            total_inches,
        } => weight_lb / (total_inches * total_inches) * IMPERIAL_BMI_FACTOR,
    }
}

/// Compute BMI and classify it.
///
/// The category is taken from the unrounded value; rounding only affects
/// what is reported.
pub fn compute_bmi(measurement: &Measurement) -> BmiResult {
    let bmi = raw_bmi(measurement);
    let rounded = round_to_tenth(bmi);
    BmiResult {
        bmi: rounded,
        display: format!("{:.1}", rounded),
        category: BmiCategory::from_bmi(bmi),
    }
}

/// Round half away from zero to one decimal place.
///
/// Rounds `value * 10` rather than the exact decimal expansion, so a value
/// stored just below a tie (7.5499999... for 30.2 kg at 200 cm) rounds up to
/// 7.6 where JavaScript's `toFixed(1)` would give 7.5. Only the displayed
/// value is affected; the category always uses the unrounded BMI.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
