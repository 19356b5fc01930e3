//! ePSA-Pre: screening-priority triage from coarse risk factors.
//!
//! The triage score is informational only; it never feeds the core risk model.

mod domain;
mod rules;

pub use domain::{
    AgeBracket, FamilyHistory, GeneticRisk, PatientFactors, PatientFactorsForm, PriorBiopsyResult,
    PriorPsaHistory, TriageFactor, TriageRace,
};

use serde::{Deserialize, Serialize};

use super::form::ValidationError;

pub const PRIOR_CANCER_MESSAGE: &str = "follow up with treating physician";
pub const FINASTERIDE_NOTE: &str =
    "Finasteride lowers measured PSA by about half; tell your clinician before interpreting results";

const ROUTINE_MAX_POINTS: u8 = 2;
const PRIORITY_MAX_POINTS: u8 = 5;

/// Screening priority assigned from the triage point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningPriority {
    Routine,
    Priority,
    HighPriority,
}

impl ScreeningPriority {
    pub fn from_points(points: u8) -> Self {
        if points <= ROUTINE_MAX_POINTS {
            Self::Routine
        } else if points <= PRIORITY_MAX_POINTS {
            Self::Priority
        } else {
            Self::HighPriority
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Routine => "Routine Screening",
            Self::Priority => "Priority Screening Today",
            Self::HighPriority => "High Priority + Strong Follow-Up Recommended",
        }
    }
}

/// Single point contribution, kept so staff can see why a priority was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageComponent {
    pub factor: TriageFactor,
    pub points: i16,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum TriageOutcome {
    /// Patient already has a cancer diagnosis; no screening priority applies.
    PriorCancer { message: String },
    Screened {
        priority: ScreeningPriority,
        label: String,
        points: u8,
        components: Vec<TriageComponent>,
        notes: Vec<String>,
    },
}

impl TriageOutcome {
    pub fn priority(&self) -> Option<ScreeningPriority> {
        match self {
            TriageOutcome::PriorCancer { .. } => None,
            TriageOutcome::Screened { priority, .. } => Some(*priority),
        }
    }

    pub fn points(&self) -> Option<u8> {
        match self {
            TriageOutcome::PriorCancer { .. } => None,
            TriageOutcome::Screened { points, .. } => Some(*points),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            TriageOutcome::PriorCancer { message } => format!("prior cancer: {message}"),
            TriageOutcome::Screened { label, points, .. } => format!("{label} ({points} points)"),
        }
    }
}

pub fn assess_screening_priority(factors: &PatientFactors) -> TriageOutcome {
    if factors.prior_biopsy_result == PriorBiopsyResult::Cancer {
        return TriageOutcome::PriorCancer {
            message: PRIOR_CANCER_MESSAGE.to_string(),
        };
    }

    let (components, points) = rules::score_factors(factors);
    let priority = ScreeningPriority::from_points(points);

    let mut notes = Vec::new();
    if factors.on_finasteride {
        notes.push(FINASTERIDE_NOTE.to_string());
    }

    TriageOutcome::Screened {
        priority,
        label: priority.label().to_string(),
        points,
        components,
        notes,
    }
}

/// Validate a submitted questionnaire and triage it.
pub fn assess_form(form: &PatientFactorsForm) -> Result<TriageOutcome, ValidationError> {
    let factors = form.validate()?;
    Ok(assess_screening_priority(&factors))
}
