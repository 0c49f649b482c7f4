//! Calculator session
//!
//! Holds what the form would keep between button presses: the selected unit
//! system, the selected goal, and the last successful calculation.

use crate::calculator::{calculate, CalcResult, Calculation, CalculatorInput, Goal, UnitSystem};

#[derive(Debug, Default)]
pub struct QuickCheckSession {
    unit_system: UnitSystem,
    goal: Goal,
    last: Option<Calculation>,
}

impl QuickCheckSession {
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            goal: Goal::default(),
            last: None,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn last(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }

    /// Switch unit systems. Any shown result is cleared.
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
        self.last = None;
    }

    pub fn clear_result(&mut self) {
        self.last = None;
    }

    /// Run a calculation. The previous result is cleared whether or not this
    /// one succeeds.
    pub fn calculate(&mut self, input: &CalculatorInput) -> CalcResult<&Calculation> {
        self.last = None;
        self.unit_system = input.measurement.unit_system();

        let calculation = calculate(input)?;
        if let Some(goal) = calculation.goal {
            self.goal = goal;
        }
        Ok(&*self.last.insert(calculation))
    }

    /// Change the goal and return the matching precomputed target, if the
    /// last calculation has calorie targets.
    pub fn select_goal(&mut self, goal: Goal) -> Option<i64> {
        self.goal = goal;
        self.last.as_mut().and_then(|calc| calc.select_goal(goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{MeasurementInput, ProfileInput};

    fn full_input() -> CalculatorInput {
        CalculatorInput::with_profile(
            MeasurementInput::metric("70", "175"),
            ProfileInput::new("25"),
        )
    }

    #[test]
    fn test_successful_calculation_is_kept() {
        let mut session = QuickCheckSession::default();
        session.calculate(&full_input()).unwrap();
        assert_eq!(session.last().unwrap().suggested_intake, Some(2009));
    }

    #[test]
    fn test_failed_calculation_clears_result() {
        let mut session = QuickCheckSession::default();
        session.calculate(&full_input()).unwrap();

        let bad = CalculatorInput::bmi_only(MeasurementInput::metric("0", "175"));
        assert!(session.calculate(&bad).is_err());
        assert!(session.last().is_none());
    }

    #[test]
    fn test_unit_change_clears_result() {
        let mut session = QuickCheckSession::default();
        session.calculate(&full_input()).unwrap();
        session.set_unit_system(UnitSystem::Imperial);
        assert!(session.last().is_none());
        assert_eq!(session.unit_system(), UnitSystem::Imperial);
    }

    #[test]
    fn test_calculation_tracks_unit_system() {
        let mut session = QuickCheckSession::new(UnitSystem::Metric);
        let input = CalculatorInput::bmi_only(MeasurementInput::imperial("155", "5", "9"));
        session.calculate(&input).unwrap();
        assert_eq!(session.unit_system(), UnitSystem::Imperial);
    }

    #[test]
    fn test_select_goal() {
        let mut session = QuickCheckSession::default();
        session.calculate(&full_input()).unwrap();
        let calories = session.last().unwrap().calories;

        assert_eq!(session.select_goal(Goal::Lose), Some(1509));
        assert_eq!(session.select_goal(Goal::Gain), Some(2509));
        assert_eq!(session.last().unwrap().calories, calories);
        assert_eq!(session.goal(), Goal::Gain);
    }

    #[test]
    fn test_failed_calculation_keeps_goal() {
        let mut session = QuickCheckSession::default();
        session.select_goal(Goal::Gain);

        let mut profile = ProfileInput::new("abc");
        profile.goal = Goal::Lose;
        let bad = CalculatorInput::with_profile(MeasurementInput::metric("70", "175"), profile);
        assert!(session.calculate(&bad).is_err());
        assert_eq!(session.goal(), Goal::Gain);
    }

    #[test]
    fn test_select_goal_without_result() {
        let mut session = QuickCheckSession::default();
        assert_eq!(session.select_goal(Goal::Lose), None);
        assert_eq!(session.goal(), Goal::Lose);
    }
}
