//! ePSA core: seven-variable logistic regression risk estimate.
//!
//! The coefficients are reproduced as published, including the negative signs on
//! the race and IPSS terms that run against clinical intuition.

mod domain;
mod model;
mod validation;

pub use domain::{
    CoreAssessmentForm, CoreAssessmentInput, CoreAssessmentResult, ExerciseLevel, RiskTier,
    IPSS_QUESTIONS, SHIM_QUESTIONS,
};

use super::form::ValidationError;

pub fn compute_core_risk(input: &CoreAssessmentInput) -> CoreAssessmentResult {
    let logit = model::logit(input);
    let probability = model::logistic(logit);
    let score_percent = model::score_percent(probability);
    let (confidence_low, confidence_high) = model::confidence_band(score_percent);
    let risk_tier = model::tier_for(probability);

    CoreAssessmentResult {
        age: input.age,
        bmi: input.bmi,
        bmi_formatted: format!("{:.1}", input.bmi),
        ipss_total: input.ipss_total(),
        shim_total: input.shim_total(),
        logit,
        probability,
        score_percent,
        risk_tier,
        tier_label: risk_tier.label().to_string(),
        color: risk_tier.color().to_string(),
        action: risk_tier.action().to_string(),
        confidence_low,
        confidence_high,
        outside_validated_range: !model::within_validated_ages(input.age),
    }
}

/// Validate a submitted questionnaire and score it.
pub fn assess_form(form: &CoreAssessmentForm) -> Result<CoreAssessmentResult, ValidationError> {
    let input = form.validate()?;
    Ok(compute_core_risk(&input))
}
