use super::domain::{CoreAssessmentInput, RiskTier};

const INTERCEPT: f64 = -3.8347;
const AGE: f64 = 0.0454;
const RACE_BLACK: f64 = 0.0253;
const BMI: f64 = 0.0195;
const IPSS_TOTAL: f64 = 0.0292;
const EXERCISE_LEVEL: f64 = 0.5947;
const FAMILY_HISTORY: f64 = 0.8911;
const SHIM_TOTAL: f64 = 0.0358;

const LOWER_TIER_CEILING: f64 = 0.08;
const MODERATE_TIER_CEILING: f64 = 0.20;

const VALIDATED_AGE_MIN: u8 = 30;
const VALIDATED_AGE_MAX: u8 = 95;

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Log-odds for the fitted model. Terms are accumulated left to right in the
/// published order so the floating point result is reproducible.
pub(crate) fn logit(input: &CoreAssessmentInput) -> f64 {
    INTERCEPT + AGE * f64::from(input.age) - RACE_BLACK * indicator(input.is_black())
        + BMI * input.bmi
        - IPSS_TOTAL * f64::from(input.ipss_total())
        - EXERCISE_LEVEL * f64::from(input.exercise_level.code())
        - FAMILY_HISTORY * indicator(input.has_family_history())
        - SHIM_TOTAL * f64::from(input.shim_total())
}

pub(crate) fn logistic(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Tiers are cut on the raw probability, never on the rounded percentage.
pub(crate) fn tier_for(probability: f64) -> RiskTier {
    if probability < LOWER_TIER_CEILING {
        RiskTier::Lower
    } else if probability < MODERATE_TIER_CEILING {
        RiskTier::Moderate
    } else {
        RiskTier::Higher
    }
}

pub(crate) fn score_percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

pub(crate) fn confidence_band(score: u8) -> (u8, u8) {
    (score.saturating_sub(10), score.saturating_add(10).min(100))
}

pub(crate) fn within_validated_ages(age: u8) -> bool {
    (VALIDATED_AGE_MIN..=VALIDATED_AGE_MAX).contains(&age)
}
