use super::super::form::{complete_answers, required, FormValue, ValidationError};
use super::domain::{
    CoreAssessmentForm, CoreAssessmentInput, ExerciseLevel, IPSS_QUESTIONS, SHIM_QUESTIONS,
};

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 120;
const IMPERIAL_BMI_FACTOR: f64 = 703.0;

impl CoreAssessmentForm {
    /// Check fields in a fixed order and report the first one that fails.
    pub fn validate(&self) -> Result<CoreAssessmentInput, ValidationError> {
        let age = validate_age(self.age.as_ref())?;
        let bmi = self.resolve_bmi()?;

        let race = match self.race.as_deref() {
            Some(race) if !race.trim().is_empty() => race.to_string(),
            _ => return Err(ValidationError::Missing { field: "race" }),
        };

        let ipss_answers =
            complete_answers::<IPSS_QUESTIONS>(self.ipss_answers.as_deref(), "ipss_answers")?;
        let shim_answers =
            complete_answers::<SHIM_QUESTIONS>(self.shim_answers.as_deref(), "shim_answers")?;

        let code = required(self.exercise_level, "exercise_level")?;
        let exercise_level =
            ExerciseLevel::from_code(code).ok_or_else(|| ValidationError::OutOfRange {
                field: "exercise_level",
                expected: "0, 1, or 2",
                found: code.to_string(),
            })?;

        let family_history_count = required(self.family_history_count, "family_history_count")?;

        Ok(CoreAssessmentInput {
            age,
            race,
            bmi,
            ipss_answers,
            shim_answers,
            exercise_level,
            family_history_count,
        })
    }

    /// BMI from the direct entry when present, otherwise from metric then
    /// imperial measurements.
    pub fn resolve_bmi(&self) -> Result<f64, ValidationError> {
        let bmi = if let Some(bmi) = &self.bmi {
            numeric(bmi)?
        } else if let (Some(height), Some(weight)) = (&self.height_cm, &self.weight_kg) {
            let meters = numeric(height)? / 100.0;
            numeric(weight)? / (meters * meters)
        } else if let (Some(weight), true) = (
            &self.weight_lbs,
            self.height_feet.is_some() || self.height_inches.is_some(),
        ) {
            let feet = self.height_feet.as_ref().map(numeric).transpose()?;
            let inches = self.height_inches.as_ref().map(numeric).transpose()?;
            let total_inches = feet.unwrap_or(0.0) * 12.0 + inches.unwrap_or(0.0);
            IMPERIAL_BMI_FACTOR * numeric(weight)? / (total_inches * total_inches)
        } else {
            return Err(ValidationError::Missing { field: "bmi" });
        };

        if bmi.is_finite() && bmi > 0.0 {
            Ok(bmi)
        } else {
            Err(ValidationError::OutOfRange {
                field: "bmi",
                expected: "greater than 0",
                found: format!("{bmi:.1}"),
            })
        }
    }
}

fn validate_age(age: Option<&FormValue>) -> Result<u8, ValidationError> {
    let raw = required(age, "age")?;
    let age = raw.as_integer().ok_or_else(|| ValidationError::NotNumeric {
        field: "age",
        raw: raw.to_string(),
    })?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age",
            expected: "between 18 and 120",
            found: age.to_string(),
        });
    }
    Ok(age as u8)
}

fn numeric(value: &FormValue) -> Result<f64, ValidationError> {
    value.as_f64().ok_or_else(|| ValidationError::NotNumeric {
        field: "bmi",
        raw: value.to_string(),
    })
}
