//! QuickCheck Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::calculator::UnitSystem;

/// Calculator instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# BMI & Calorie QuickCheck Instructions

## Tools

| Tool | Purpose |
|------|---------|
| `calculate_bmi` | BMI and category from weight and height |
| `calculate_bmi_and_calories` | BMI plus daily calorie targets (needs age, gender, activity level) |
| `select_goal` | Switch the suggested intake between lose / maintain / gain |
| `set_unit_system` | Switch between metric and imperial (clears the last result) |
| `get_last_result` | Show the last result and current selections |
| `quickcheck_status` | Build and process information |

## Units

- **metric**: `weight` in kg, `height` in cm
- **imperial**: `weight` in lbs, height as `feet` plus `inches`

All numbers are passed as text, exactly as the user typed them. When `unit`
is omitted the session's current unit system is used (see `set_unit_system`).

## Validation

- Weight must be a positive number
- Metric height must be a positive number
- Imperial feet and inches must both be numbers (use "0" for none), not both
  zero, and `feet*12 + inches` must be positive
- Age must be a positive whole number

A failed call returns `{"error": "Invalid Input", "description": ...}` and
clears the previous result. Relay the description to the user.

## BMI Categories

| BMI | Category |
|-----|----------|
| below 18.5 | Underweight |
| 18.5 to below 25 | Normal weight |
| 25 to below 30 | Overweight |
| 30 and above | Obese |

## Calorie Targets

BMR uses the Mifflin-St Jeor equation:
- male: `10*kg + 6.25*cm - 5*age + 5`
- female: `10*kg + 6.25*cm - 5*age - 161`

TDEE = BMR x activity factor:
- `sedentary` 1.2, `light` 1.375, `moderate` 1.55, `active` 1.725, `veryActive` 1.9

Targets: maintenance = TDEE, lose = TDEE - 500, gain = TDEE + 500 (kcal/day).
Changing the goal only picks a different one of these three values.
These are estimates, not medical advice.
"#;

/// Runtime status of the QuickCheck service
#[derive(Debug, Clone, Serialize)]
pub struct QuickCheckStatus {
    /// Build information
    pub name: &'static str,
    pub description: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub unit_system: UnitSystem,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, unit_system: UnitSystem) -> QuickCheckStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        QuickCheckStatus {
            name: build_info.name,
            description: build_info.description,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            unit_system,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(UnitSystem::Imperial);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.unit_system, UnitSystem::Imperial);
        assert_eq!(status.version, crate::build_info::VERSION);
        assert_eq!(status.name, "bmi-quickcheck");
        assert_eq!(status.description, crate::build_info::DESCRIPTION);
    }

    #[test]
    fn test_instructions_cover_tools() {
        for tool in [
            "calculate_bmi",
            "calculate_bmi_and_calories",
            "select_goal",
            "set_unit_system",
            "get_last_result",
        ] {
            assert!(CALCULATOR_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
