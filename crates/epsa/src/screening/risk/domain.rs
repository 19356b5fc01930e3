use serde::{Deserialize, Serialize};
use std::fmt;

use super::super::form::FormValue;

pub const IPSS_QUESTIONS: usize = 7;
pub const SHIM_QUESTIONS: usize = 5;

/// Self-reported exercise habit; the numeric code is the model covariate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    Regular,
    Occasional,
    Sedentary,
}

impl ExerciseLevel {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Regular),
            1 => Some(Self::Occasional),
            2 => Some(Self::Sedentary),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Occasional => 1,
            Self::Sedentary => 2,
        }
    }
}

/// Core questionnaire as submitted. Every field is optional here so that a
/// partially completed form can be reported field by field.
///
/// BMI may be given directly or derived from metric or imperial measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreAssessmentForm {
    pub age: Option<FormValue>,
    pub race: Option<String>,
    pub bmi: Option<FormValue>,
    pub height_cm: Option<FormValue>,
    pub weight_kg: Option<FormValue>,
    pub height_feet: Option<FormValue>,
    pub height_inches: Option<FormValue>,
    pub weight_lbs: Option<FormValue>,
    pub ipss_answers: Option<Vec<Option<u8>>>,
    pub shim_answers: Option<Vec<Option<u8>>>,
    pub exercise_level: Option<u8>,
    pub family_history_count: Option<u32>,
}

/// Validated core questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreAssessmentInput {
    pub age: u8,
    pub race: String,
    pub bmi: f64,
    pub ipss_answers: [u8; IPSS_QUESTIONS],
    pub shim_answers: [u8; SHIM_QUESTIONS],
    pub exercise_level: ExerciseLevel,
    pub family_history_count: u32,
}

impl CoreAssessmentInput {
    pub fn is_black(&self) -> bool {
        self.race == "black"
    }

    pub fn ipss_total(&self) -> u16 {
        self.ipss_answers.iter().map(|&answer| u16::from(answer)).sum()
    }

    pub fn shim_total(&self) -> u16 {
        self.shim_answers.iter().map(|&answer| u16::from(answer)).sum()
    }

    pub fn has_family_history(&self) -> bool {
        self.family_history_count > 0
    }
}

impl From<&CoreAssessmentInput> for CoreAssessmentForm {
    fn from(input: &CoreAssessmentInput) -> Self {
        Self {
            age: Some(FormValue::Number(f64::from(input.age))),
            race: Some(input.race.clone()),
            bmi: Some(FormValue::Number(input.bmi)),
            ipss_answers: Some(input.ipss_answers.iter().copied().map(Some).collect()),
            shim_answers: Some(input.shim_answers.iter().copied().map(Some).collect()),
            exercise_level: Some(input.exercise_level.code()),
            family_history_count: Some(input.family_history_count),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Lower,
    Moderate,
    Higher,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lower => "Lower Risk",
            Self::Moderate => "Moderate Risk",
            Self::Higher => "Higher Risk",
        }
    }

    /// Display color token consumed by the questionnaire UI.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Lower => "green",
            Self::Moderate => "yellow",
            Self::Higher => "red",
        }
    }

    pub const fn action(self) -> &'static str {
        match self {
            Self::Lower => "Continue routine screening per guidelines",
            Self::Moderate => "Discuss PSA testing with your doctor",
            Self::Higher => "Get a PSA test and ask for a urology referral",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => write!(f, "LOWER"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Higher => write!(f, "HIGHER"),
        }
    }
}

/// Output of the core logistic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreAssessmentResult {
    pub age: u8,
    pub bmi: f64,
    pub bmi_formatted: String,
    pub ipss_total: u16,
    pub shim_total: u16,
    pub logit: f64,
    pub probability: f64,
    pub score_percent: u8,
    pub risk_tier: RiskTier,
    pub tier_label: String,
    pub color: String,
    pub action: String,
    pub confidence_low: u8,
    pub confidence_high: u8,
    /// Age falls outside the 30-95 range the model was fitted on.
    pub outside_validated_range: bool,
}
