//! Daily calorie estimates
//!
//! BMR uses the Mifflin-St Jeor equation (Mifflin et al., 1990):
//!
//! BMR = 10 x `weight_kg` + 6.25 x `height_cm` - 5 x age + s
//!
//! where s is +5 for men and -161 for women. TDEE is BMR scaled by an
//! activity factor, and the lose/gain targets sit 500 kcal either side of it.

use serde::{Deserialize, Serialize};

use super::input::{Measurement, Profile};

/// Mifflin-St Jeor weight coefficient
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient
pub const MSJ_AGE_COEF: f64 = -5.0;
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Daily deficit/surplus applied for the lose and gain goals (kcal)
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    fn msj_constant(&self) -> f64 {
        match self {
            Gender::Male => MSJ_MALE_CONSTANT,
            Gender::Female => MSJ_FEMALE_CONSTANT,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise/sports 1-3 days/week
    Light,
    /// Moderate exercise/sports 3-5 days/week
    Moderate,
    /// Hard exercise/sports 6-7 days a week
    Active,
    /// Very hard exercise/sports and a physical job
    VeryActive,
}

/// Activity multipliers, least to most active
pub const ACTIVITY_FACTORS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::Light, 1.375),
    (ActivityLevel::Moderate, 1.55),
    (ActivityLevel::Active, 1.725),
    (ActivityLevel::VeryActive, 1.9),
];

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Some(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "veryactive" | "superactive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Lightly active (light exercise/sports 1-3 days/week)",
            ActivityLevel::Moderate => "Moderately active (moderate exercise/sports 3-5 days/week)",
            ActivityLevel::Active => "Very active (hard exercise/sports 6-7 days a week)",
            ActivityLevel::VeryActive => "Super active (very hard exercise/sports & physical job)",
        }
    }

    /// TDEE multiplier for this level
    pub fn factor(&self) -> f64 {
        ACTIVITY_FACTORS
            .iter()
            .find(|(level, _)| level == self)
            .map(|&(_, factor)| factor)
            .unwrap_or(ACTIVITY_FACTORS[0].1)
    }
}

/// Which of the three calorie targets to suggest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose_weight" | "loss" | "deficit" => Some(Goal::Lose),
            "maintain" | "maintenance" => Some(Goal::Maintain),
            "gain" | "gain_weight" | "surplus" => Some(Goal::Gain),
            _ => None,
        }
    }
}

/// Daily calorie targets (kcal/day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResult {
    pub maintenance: i64,
    pub lose_weight: i64,
    pub gain_weight: i64,
}

impl CalorieResult {
    /// Build the three targets from an unrounded TDEE
    pub fn from_tdee(tdee: f64) -> Self {
        Self {
            maintenance: round_half_up(tdee),
            lose_weight: round_half_up(tdee - GOAL_ADJUSTMENT_KCAL),
            gain_weight: round_half_up(tdee + GOAL_ADJUSTMENT_KCAL),
        }
    }

    /// The precomputed target for a goal
    pub fn for_goal(&self, goal: Goal) -> i64 {
        match goal {
            Goal::Lose => self.lose_weight,
            Goal::Maintain => self.maintenance,
            Goal::Gain => self.gain_weight,
        }
    }
}

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm + MSJ_AGE_COEF * f64::from(age)
        + gender.msj_constant()
}

/// Total Daily Energy Expenditure (kcal/day)
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Calorie targets for a measurement and profile, always computed in metric
pub fn calculate_calories(measurement: &Measurement, profile: &Profile) -> CalorieResult {
    let bmr = calculate_bmr(
        measurement.weight_kg(),
        measurement.height_cm(),
        profile.age,
        profile.gender,
    );
    CalorieResult::from_tdee(calculate_tdee(bmr, profile.activity_level))
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// Shifting the input by a whole number shifts the output by the same amount,
/// so the lose/gain targets stay exactly 500 away from maintenance. That holds
/// while `value` is well below 2^52, where `f64` still resolves halves; far
/// beyond any body measurement, `value ± 500` is no longer exact and the
/// `as i64` cast saturates, so the spacing is not guaranteed there.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
