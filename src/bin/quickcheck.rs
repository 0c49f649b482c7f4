//! One-shot BMI and calorie calculation
//! Usage: cargo run --bin quickcheck -- metric <kg> <cm> [age [gender [activity [goal]]]]
//!        cargo run --bin quickcheck -- imperial <lbs> <feet> <inches> [age [gender [activity [goal]]]]

use bmi_quickcheck::calculator::{
    calculate, ActivityLevel, CalculatorInput, Gender, Goal, MeasurementInput, ProfileInput,
    UnitSystem,
};

const USAGE: &str = "Usage:\n  \
    quickcheck metric <kg> <cm> [age [gender [activity [goal]]]]\n  \
    quickcheck imperial <lbs> <feet> <inches> [age [gender [activity [goal]]]]";

fn parse_args(args: &[String]) -> Result<CalculatorInput, String> {
    let unit = args
        .first()
        .and_then(|s| UnitSystem::from_str(s))
        .ok_or_else(|| USAGE.to_string())?;

    let (measurement, rest) = match (unit, &args[1..]) {
        (UnitSystem::Metric, [weight, height, rest @ ..]) => {
            (MeasurementInput::metric(weight.as_str(), height.as_str()), rest)
        }
        (UnitSystem::Imperial, [weight, feet, inches, rest @ ..]) => (
            MeasurementInput::imperial(weight.as_str(), feet.as_str(), inches.as_str()),
            rest,
        ),
        _ => return Err(USAGE.to_string()),
    };

    let profile = match rest {
        [] => None,
        [_, options @ ..] if options.len() > 3 => return Err(USAGE.to_string()),
        [age, options @ ..] => {
            let mut profile = ProfileInput::new(age.as_str());
            if let Some(s) = options.first() {
                profile.gender =
                    Gender::from_str(s).ok_or_else(|| format!("Unknown gender: {}", s))?;
            }
            if let Some(s) = options.get(1) {
                profile.activity_level = ActivityLevel::from_str(s)
                    .ok_or_else(|| format!("Unknown activity level: {}", s))?;
            }
            if let Some(s) = options.get(2) {
                profile.goal = Goal::from_str(s).ok_or_else(|| format!("Unknown goal: {}", s))?;
            }
            Some(profile)
        }
    };

    Ok(CalculatorInput {
        measurement,
        profile,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let input = match parse_args(&args) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    match calculate(&input) {
        Ok(calculation) => {
            println!("{}", serde_json::to_string_pretty(&calculation)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metric_arity() {
        let input = parse_args(&args(&["metric", "70", "175"])).unwrap();
        assert_eq!(input.measurement, MeasurementInput::metric("70", "175"));
        assert!(input.profile.is_none());

        assert_eq!(parse_args(&args(&["metric", "70"])).unwrap_err(), USAGE);
    }

    #[test]
    fn test_imperial_arity() {
        let input = parse_args(&args(&["imperial", "155", "5", "9"])).unwrap();
        assert_eq!(input.measurement, MeasurementInput::imperial("155", "5", "9"));
        assert!(input.profile.is_none());

        assert_eq!(parse_args(&args(&["imperial", "155", "5"])).unwrap_err(), USAGE);
    }

    #[test]
    fn test_missing_or_unknown_unit() {
        assert_eq!(parse_args(&[]).unwrap_err(), USAGE);
        assert_eq!(parse_args(&args(&["stones", "11", "5"])).unwrap_err(), USAGE);
    }

    #[test]
    fn test_profile_age_only() {
        let input = parse_args(&args(&["metric", "70", "175", "25"])).unwrap();
        assert_eq!(input.profile, Some(ProfileInput::new("25")));
    }

    #[test]
    fn test_profile_with_options() {
        let input = parse_args(&args(&[
            "imperial", "155", "5", "9", "40", "female", "moderate", "lose",
        ]))
        .unwrap();
        let profile = input.profile.unwrap();
        assert_eq!(profile.age, "40");
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Lose);
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let input = parse_args(&args(&["metric", "70", "175", "25", "female"])).unwrap();
        let profile = input.profile.unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.goal, Goal::Maintain);
    }

    #[test]
    fn test_unknown_options() {
        let err = parse_args(&args(&["metric", "70", "175", "25", "other"])).unwrap_err();
        assert!(err.contains("gender"));

        let err =
            parse_args(&args(&["metric", "70", "175", "25", "male", "couch"])).unwrap_err();
        assert!(err.contains("activity level"));

        let err = parse_args(&args(&["metric", "70", "175", "25", "male", "light", "bulk"]))
            .unwrap_err();
        assert!(err.contains("goal"));
    }

    #[test]
    fn test_extra_args_rejected() {
        let err = parse_args(&args(&[
            "metric", "70", "175", "25", "male", "light", "gain", "extra",
        ]))
        .unwrap_err();
        assert_eq!(err, USAGE);
    }

    #[test]
    fn test_bad_age_reaches_calculator() {
        let input = parse_args(&args(&["metric", "70", "175", "abc"])).unwrap();
        assert!(calculate(&input).is_err());
    }
}
