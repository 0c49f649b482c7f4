//! BMI and calorie calculator
//!
//! Pure calculation core: takes the form's textual input, validates it, and
//! returns a BMI result plus optional daily calorie targets.

pub mod bmi;
pub mod calories;
pub mod error;
pub mod input;
pub mod units;

use serde::{Deserialize, Serialize};

pub use bmi::{compute_bmi, raw_bmi, BmiCategory, BmiResult, BMI_BANDS};
pub use calories::{
    calculate_bmr, calculate_calories, calculate_tdee, ActivityLevel, CalorieResult, Gender, Goal,
    ACTIVITY_FACTORS,
};
pub use error::{CalcError, CalcResult};
pub use input::{Measurement, MeasurementInput, Profile, ProfileInput};
pub use units::UnitSystem;

/// Everything the form submits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub measurement: MeasurementInput,
    /// Without a profile only BMI is computed
    #[serde(default)]
    pub profile: Option<ProfileInput>,
}

impl CalculatorInput {
    pub fn bmi_only(measurement: MeasurementInput) -> Self {
        Self {
            measurement,
            profile: None,
        }
    }

    pub fn with_profile(measurement: MeasurementInput, profile: ProfileInput) -> Self {
        Self {
            measurement,
            profile: Some(profile),
        }
    }
}

/// Result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub unit: UnitSystem,
    pub bmi: BmiResult,
    pub calories: Option<CalorieResult>,
    /// Goal the suggested intake was picked for
    pub goal: Option<Goal>,
    pub suggested_intake: Option<i64>,
}

impl Calculation {
    /// Re-pick the suggested intake from the stored targets
    pub fn select_goal(&mut self, goal: Goal) -> Option<i64> {
        let calories = self.calories?;
        self.goal = Some(goal);
        self.suggested_intake = Some(calories.for_goal(goal));
        self.suggested_intake
    }
}

/// Validate the input and compute BMI and, with a profile, calorie targets.
///
/// Age is checked before the measurements, so a bad age is reported even
/// when the measurements are also wrong.
pub fn calculate(input: &CalculatorInput) -> CalcResult<Calculation> {
    let profile = input.profile.as_ref().map(ProfileInput::parse).transpose()?;
    let measurement = input.measurement.parse()?;

    let bmi = compute_bmi(&measurement);
    let calories = profile.map(|p| calculate_calories(&measurement, &p));
    let goal = profile.map(|p| p.goal);
    let suggested_intake = calories.zip(goal).map(|(c, g)| c.for_goal(g));

    tracing::debug!(
        unit = measurement.unit_system().as_str(),
        bmi = bmi.bmi,
        category = bmi.category.label(),
        maintenance = calories.map(|c| c.maintenance),
        "Calculation complete"
    );

    Ok(Calculation {
        unit: measurement.unit_system(),
        bmi,
        calories,
        goal,
        suggested_intake,
    })
}
