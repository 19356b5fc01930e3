pub mod form;
pub mod post;
pub mod risk;
pub mod sessions;
pub mod triage;

pub use form::{FormValue, ValidationError};
pub use post::{compute_post_risk, PostAssessmentInput, PostAssessmentResult, PostRiskCategory};
pub use risk::{
    compute_core_risk, CoreAssessmentForm, CoreAssessmentInput, CoreAssessmentResult,
    ExerciseLevel, RiskTier,
};
pub use triage::{
    assess_screening_priority, PatientFactors, PatientFactorsForm, ScreeningPriority,
    TriageOutcome,
};
