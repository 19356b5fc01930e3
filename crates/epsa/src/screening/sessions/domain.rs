use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::post::{PostAssessmentInput, PostAssessmentResult};
use super::super::risk::{CoreAssessmentForm, CoreAssessmentResult};
use super::super::triage::{PatientFactorsForm, TriageOutcome};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Patient consent captured before any answers are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub given: bool,
    pub form_version: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// PSA/MRI answers together with the point contribution carried over from the
/// core questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSection {
    pub core_points: i32,
    #[serde(flatten)]
    pub input: PostAssessmentInput,
}

/// One patient's pass through the calculator. Each section is optional so a
/// patient can stop after triage or after the core questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub patient_ref: Option<String>,
    pub consent: Option<ConsentRecord>,
    pub triage: Option<PatientFactorsForm>,
    pub core: Option<CoreAssessmentForm>,
    pub post: Option<PostSection>,
}

impl AssessmentRequest {
    pub fn has_sections(&self) -> bool {
        self.triage.is_some() || self.core.is_some() || self.post.is_some()
    }

    pub fn consent_given(&self) -> bool {
        self.consent.as_ref().map(|consent| consent.given).unwrap_or(false)
    }
}

/// Stored result of a submitted assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub patient_ref: Option<String>,
    pub consent: Option<ConsentRecord>,
    pub triage: Option<TriageOutcome>,
    pub core: Option<CoreAssessmentResult>,
    pub post: Option<PostAssessmentResult>,
}

impl AssessmentRecord {
    /// One-line description for logs and the CLI.
    pub fn headline(&self) -> String {
        let mut parts = Vec::new();
        if let Some(triage) = &self.triage {
            parts.push(format!("triage {}", triage.summary()));
        }
        if let Some(core) = &self.core {
            parts.push(format!("core {}% {}", core.score_percent, core.risk_tier));
        }
        if let Some(post) = &self.post {
            parts.push(format!(
                "post {} {} ({} pts)",
                post.category_label, post.risk_percent_range, post.total_points
            ));
        }
        if parts.is_empty() {
            "no sections".to_string()
        } else {
            parts.join(" | ")
        }
    }
}
