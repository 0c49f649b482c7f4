//! Calculator MCP Tools
//!
//! Tools for computing BMI and calorie targets and for driving the session
//! (unit system, goal, last result).

use serde::Serialize;

use super::session::QuickCheckSession;
use crate::calculator::{
    ActivityLevel, CalcError, Calculation, CalculatorInput, Gender, Goal, MeasurementInput,
    ProfileInput, UnitSystem,
};

/// Error title shown for every validation failure
pub const INVALID_INPUT_TITLE: &str = "Invalid Input";
pub const NO_RESULT_TITLE: &str = "No Result";

/// Measurement fields as received from the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementFields<'a> {
    /// Falls back to the session's unit system when absent
    pub unit: Option<&'a str>,
    pub weight: &'a str,
    pub height: Option<&'a str>,
    pub feet: Option<&'a str>,
    pub inches: Option<&'a str>,
}

/// Profile fields as received from the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFields<'a> {
    pub age: &'a str,
    pub gender: Option<&'a str>,
    pub activity_level: Option<&'a str>,
    /// Falls back to the session's goal when absent
    pub goal: Option<&'a str>,
}

/// Response for a failed tool call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub description: String,
}

impl ErrorResponse {
    fn invalid(description: impl Into<String>) -> Self {
        Self {
            error: INVALID_INPUT_TITLE.to_string(),
            description: description.into(),
        }
    }
}

impl From<CalcError> for ErrorResponse {
    fn from(err: CalcError) -> Self {
        Self::invalid(err.message())
    }
}

/// Response for calculate_bmi / calculate_bmi_and_calories
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub calculation: Calculation,
    /// Explanations of the calorie targets
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl From<&Calculation> for CalculationResponse {
    fn from(calculation: &Calculation) -> Self {
        let notes = match &calculation.calories {
            Some(c) => vec![
                format!(
                    "Maintenance: {} kcal/day is the amount of calories required to maintain your current weight.",
                    c.maintenance
                ),
                format!(
                    "Calorie Deficit (for weight loss): A deficit of 500 kcal/day, like the suggested {} kcal/day, is generally recommended for sustainable weight loss of about 1 lb (0.5 kg) per week.",
                    c.lose_weight
                ),
                format!(
                    "Calorie Surplus (for weight gain): A surplus of 500 kcal/day, like the suggested {} kcal/day, can help in gaining weight, primarily muscle mass when combined with strength training.",
                    c.gain_weight
                ),
            ],
            None => Vec::new(),
        };
        Self {
            calculation: calculation.clone(),
            notes,
        }
    }
}

/// Response for select_goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectGoalResponse {
    pub goal: Goal,
    pub suggested_intake: i64,
    pub unit: &'static str,
}

/// Response for set_unit_system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetUnitSystemResponse {
    pub success: bool,
    pub unit_system: UnitSystem,
    pub result_cleared: bool,
}

/// Response for get_last_result
#[derive(Debug, Clone, Serialize)]
pub struct LastResultResponse {
    pub unit_system: UnitSystem,
    pub goal: Goal,
    pub result: Option<CalculationResponse>,
}

// ============================================================================
// Field Conversion
// ============================================================================

fn parse_unit_system(s: &str) -> Result<UnitSystem, ErrorResponse> {
    UnitSystem::from_str(s).ok_or_else(|| {
        ErrorResponse::invalid(format!("Unknown unit system '{}'. Use metric or imperial.", s))
    })
}

fn parse_goal(s: &str) -> Result<Goal, ErrorResponse> {
    Goal::from_str(s).ok_or_else(|| {
        ErrorResponse::invalid(format!("Unknown goal '{}'. Use lose, maintain or gain.", s))
    })
}

fn measurement_input(
    session: &QuickCheckSession,
    fields: &MeasurementFields,
) -> Result<MeasurementInput, ErrorResponse> {
    let unit = match fields.unit {
        Some(s) => parse_unit_system(s)?,
        None => session.unit_system(),
    };

    Ok(match unit {
        UnitSystem::Metric => {
            MeasurementInput::metric(fields.weight, fields.height.unwrap_or_default())
        }
        UnitSystem::Imperial => MeasurementInput::imperial(
            fields.weight,
            fields.feet.unwrap_or_default(),
            fields.inches.unwrap_or_default(),
        ),
    })
}

fn profile_input(
    session: &QuickCheckSession,
    fields: &ProfileFields,
) -> Result<ProfileInput, ErrorResponse> {
    let gender = match fields.gender {
        Some(s) => Gender::from_str(s).ok_or_else(|| {
            ErrorResponse::invalid(format!("Unknown gender '{}'. Use male or female.", s))
        })?,
        None => Gender::default(),
    };
    let activity_level = match fields.activity_level {
        Some(s) => ActivityLevel::from_str(s).ok_or_else(|| {
            ErrorResponse::invalid(format!(
                "Unknown activity level '{}'. Use sedentary, light, moderate, active or veryActive.",
                s
            ))
        })?,
        None => ActivityLevel::default(),
    };
    let goal = match fields.goal {
        Some(s) => parse_goal(s)?,
        None => session.goal(),
    };

    Ok(ProfileInput {
        age: fields.age.to_string(),
        gender,
        activity_level,
        goal,
    })
}

fn run(
    session: &mut QuickCheckSession,
    input: &CalculatorInput,
) -> Result<CalculationResponse, ErrorResponse> {
    match session.calculate(input) {
        Ok(calculation) => Ok(CalculationResponse::from(calculation)),
        Err(e) => {
            tracing::info!(error = %e, "Rejected calculator input");
            Err(e.into())
        }
    }
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Compute BMI only
pub fn calculate_bmi(
    session: &mut QuickCheckSession,
    fields: &MeasurementFields,
) -> Result<CalculationResponse, ErrorResponse> {
    let measurement = match measurement_input(session, fields) {
        Ok(m) => m,
        Err(e) => {
            session.clear_result();
            return Err(e);
        }
    };
    run(session, &CalculatorInput::bmi_only(measurement))
}

/// Compute BMI and calorie targets
pub fn calculate_bmi_and_calories(
    session: &mut QuickCheckSession,
    fields: &MeasurementFields,
    profile: &ProfileFields,
) -> Result<CalculationResponse, ErrorResponse> {
    let input = measurement_input(session, fields).and_then(|measurement| {
        Ok(CalculatorInput::with_profile(measurement, profile_input(session, profile)?))
    });
    match input {
        Ok(input) => run(session, &input),
        Err(e) => {
            session.clear_result();
            Err(e)
        }
    }
}

/// Show the target for a different goal from the last calorie result
pub fn select_goal(
    session: &mut QuickCheckSession,
    goal: &str,
) -> Result<SelectGoalResponse, ErrorResponse> {
    let goal = parse_goal(goal)?;
    match session.select_goal(goal) {
        Some(suggested_intake) => Ok(SelectGoalResponse {
            goal,
            suggested_intake,
            unit: "kcal/day",
        }),
        None => Err(ErrorResponse {
            error: NO_RESULT_TITLE.to_string(),
            description: "No calorie result available. Run calculate_bmi_and_calories first."
                .to_string(),
        }),
    }
}

/// Switch the session's unit system
pub fn set_unit_system(
    session: &mut QuickCheckSession,
    unit: &str,
) -> Result<SetUnitSystemResponse, ErrorResponse> {
    let unit_system = parse_unit_system(unit)?;
    let result_cleared = session.last().is_some();
    session.set_unit_system(unit_system);
    Ok(SetUnitSystemResponse {
        success: true,
        unit_system,
        result_cleared,
    })
}

/// Current session state and last result
pub fn get_last_result(session: &QuickCheckSession) -> LastResultResponse {
    LastResultResponse {
        unit_system: session.unit_system(),
        goal: session.goal(),
        result: session.last().map(CalculationResponse::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::BmiCategory;

    fn metric<'a>(weight: &'a str, height: &'a str) -> MeasurementFields<'a> {
        MeasurementFields {
            unit: Some("metric"),
            weight,
            height: Some(height),
            ..Default::default()
        }
    }

    #[test]
    fn test_calculate_bmi_metric() {
        let mut session = QuickCheckSession::default();
        let response = calculate_bmi(&mut session, &metric("70", "175")).unwrap();
        assert_eq!(response.calculation.bmi.display, "22.9");
        assert_eq!(response.calculation.bmi.category, BmiCategory::NormalWeight);
        assert!(response.notes.is_empty());
    }

    #[test]
    fn test_calculate_bmi_uses_session_unit() {
        let mut session = QuickCheckSession::new(UnitSystem::Imperial);
        let fields = MeasurementFields {
            weight: "155",
            feet: Some("5"),
            inches: Some("9"),
            ..Default::default()
        };
        let response = calculate_bmi(&mut session, &fields).unwrap();
        assert_eq!(response.calculation.unit, UnitSystem::Imperial);
        assert_eq!(response.calculation.bmi.display, "22.9");
    }

    #[test]
    fn test_calculate_bmi_invalid() {
        let mut session = QuickCheckSession::default();
        let err = calculate_bmi(&mut session, &metric("0", "175")).unwrap_err();
        assert_eq!(err.error, INVALID_INPUT_TITLE);
        assert_eq!(
            err.description,
            "Please enter valid positive numbers for weight and height."
        );
    }

    #[test]
    fn test_unknown_unit_clears_result() {
        let mut session = QuickCheckSession::default();
        calculate_bmi(&mut session, &metric("70", "175")).unwrap();

        let fields = MeasurementFields {
            unit: Some("stones"),
            weight: "11",
            ..Default::default()
        };
        let err = calculate_bmi(&mut session, &fields).unwrap_err();
        assert!(err.description.contains("stones"));
        assert!(session.last().is_none());
    }

    #[test]
    fn test_calculate_bmi_and_calories() {
        let mut session = QuickCheckSession::default();
        let profile = ProfileFields {
            age: "25",
            gender: Some("male"),
            activity_level: Some("sedentary"),
            goal: None,
        };
        let response =
            calculate_bmi_and_calories(&mut session, &metric("70", "175"), &profile).unwrap();
        let calories = response.calculation.calories.unwrap();
        assert_eq!(calories.maintenance, 2009);
        assert_eq!(response.calculation.suggested_intake, Some(2009));
        assert_eq!(response.notes.len(), 3);
        assert!(response.notes[1].contains("1509"));
    }

    #[test]
    fn test_unknown_activity_level() {
        let mut session = QuickCheckSession::default();
        let profile = ProfileFields {
            age: "25",
            activity_level: Some("couch"),
            ..Default::default()
        };
        let err =
            calculate_bmi_and_calories(&mut session, &metric("70", "175"), &profile).unwrap_err();
        assert_eq!(err.error, INVALID_INPUT_TITLE);
        assert!(err.description.contains("couch"));
    }

    #[test]
    fn test_select_goal_flow() {
        let mut session = QuickCheckSession::default();
        assert_eq!(select_goal(&mut session, "lose").unwrap_err().error, NO_RESULT_TITLE);

        let profile = ProfileFields {
            age: "25",
            ..Default::default()
        };
        calculate_bmi_and_calories(&mut session, &metric("70", "175"), &profile).unwrap();
        let response = select_goal(&mut session, "gain").unwrap();
        assert_eq!(response.goal, Goal::Gain);
        assert_eq!(response.suggested_intake, 2509);

        assert_eq!(select_goal(&mut session, "bulk").unwrap_err().error, INVALID_INPUT_TITLE);
    }

    #[test]
    fn test_recalculation_keeps_selected_goal() {
        let mut session = QuickCheckSession::default();
        let profile = ProfileFields {
            age: "25",
            ..Default::default()
        };
        calculate_bmi_and_calories(&mut session, &metric("70", "175"), &profile).unwrap();
        select_goal(&mut session, "gain").unwrap();

        let response =
            calculate_bmi_and_calories(&mut session, &metric("70", "175"), &profile).unwrap();
        assert_eq!(session.goal(), Goal::Gain);
        assert_eq!(response.calculation.goal, Some(Goal::Gain));
        assert_eq!(response.calculation.suggested_intake, Some(2509));

        let explicit = ProfileFields {
            goal: Some("lose"),
            ..profile
        };
        let response =
            calculate_bmi_and_calories(&mut session, &metric("70", "175"), &explicit).unwrap();
        assert_eq!(session.goal(), Goal::Lose);
        assert_eq!(response.calculation.suggested_intake, Some(1509));
    }

    #[test]
    fn test_set_unit_system() {
        let mut session = QuickCheckSession::default();
        calculate_bmi(&mut session, &metric("70", "175")).unwrap();

        let response = set_unit_system(&mut session, "imperial").unwrap();
        assert!(response.result_cleared);
        assert_eq!(response.unit_system, UnitSystem::Imperial);

        let last = get_last_result(&session);
        assert!(last.result.is_none());
        assert_eq!(last.unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_response_serialization() {
        let mut session = QuickCheckSession::default();
        let response = calculate_bmi(&mut session, &metric("70", "175")).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["unit"], "metric");
        assert_eq!(json["bmi"]["display"], "22.9");
        assert_eq!(json["bmi"]["category"], "Normal weight");
        assert!(json.get("notes").is_none());
    }
}
