//! ePSA-Post: refine the core estimate with a PSA result and, when known, the
//! PI-RADS score from a prostate MRI.

mod points;
mod policy;

pub use policy::PostRiskCategory;

use serde::{Deserialize, Serialize};

use super::form::FormValue;

/// Lab and imaging answers collected after the core questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostAssessmentInput {
    pub psa_level: Option<FormValue>,
    #[serde(default)]
    pub knows_pirads: bool,
    pub pirads_score: Option<FormValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAssessmentResult {
    pub risk_percent_range: String,
    pub risk_category: PostRiskCategory,
    pub category_label: String,
    pub color: String,
    pub psa_level: f64,
    pub psa_points: u8,
    pub pirads_points: u8,
    pub total_points: i32,
    pub next_steps: Vec<String>,
    pub pirads_overridden: bool,
}

/// Combine the externally supplied core points with PSA and PI-RADS.
///
/// There is no validation layer here: a PSA that does not parse contributes
/// zero points, and a PI-RADS score is ignored unless `knows_pirads` is set.
pub fn compute_post_risk(core_points: i32, input: &PostAssessmentInput) -> PostAssessmentResult {
    let psa_level = points::parse_psa(input.psa_level.as_ref());
    let psa_points = points::psa_points(psa_level);

    let pirads = if input.knows_pirads {
        points::parse_pirads(input.pirads_score.as_ref())
    } else {
        None
    };

    let overridden = match pirads {
        Some(4) => Some(PostRiskCategory::VeryHighPirads4),
        Some(5) => Some(PostRiskCategory::VeryHighPirads5),
        _ => None,
    };

    let pirads_points = match overridden {
        Some(_) => 0,
        None => points::pirads_points(pirads),
    };
    // core points are unbounded client input
    let total_points = core_points
        .saturating_add(i32::from(psa_points))
        .saturating_add(i32::from(pirads_points));
    let risk_category = overridden.unwrap_or_else(|| PostRiskCategory::from_points(total_points));

    PostAssessmentResult {
        risk_percent_range: risk_category.risk_percent_range().to_string(),
        risk_category,
        category_label: risk_category.label().to_string(),
        color: risk_category.color().to_string(),
        psa_level,
        psa_points,
        pirads_points,
        total_points,
        next_steps: risk_category.next_steps(),
        pirads_overridden: risk_category.is_override(),
    }
}
