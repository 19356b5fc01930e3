use serde::{Deserialize, Serialize};

use super::super::form::{required, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "40-49")]
    FortyToFortyNine,
    #[serde(rename = "50-59")]
    FiftyToFiftyNine,
    #[serde(rename = "60-69")]
    SixtyToSixtyNine,
    #[serde(rename = "70+")]
    SeventyPlus,
}

impl AgeBracket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FortyToFortyNine => "40-49",
            Self::FiftyToFiftyNine => "50-59",
            Self::SixtyToSixtyNine => "60-69",
            Self::SeventyPlus => "70+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyHistory {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1-relative")]
    OneRelative,
    #[serde(rename = "2+relatives")]
    TwoOrMoreRelatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneticRisk {
    None,
    KnownMutation,
}

/// Race grouping used by the pre-screening questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriageRace {
    WhiteAsian,
    Hispanic,
    Black,
    Other,
}

impl TriageRace {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WhiteAsian => "white-asian",
            Self::Hispanic => "hispanic",
            Self::Black => "black",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorPsaHistory {
    Never,
    Normal,
    Elevated,
    NotSure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorBiopsyResult {
    None,
    Negative,
    Cancer,
}

/// Pre-screening answers as collected, before every question is confirmed answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientFactorsForm {
    pub age_bracket: Option<AgeBracket>,
    pub family_history: Option<FamilyHistory>,
    pub genetic_risk: Option<GeneticRisk>,
    pub race: Option<TriageRace>,
    pub prior_psa_history: Option<PriorPsaHistory>,
    pub prior_biopsy_result: Option<PriorBiopsyResult>,
    pub on_finasteride: Option<bool>,
}

impl PatientFactorsForm {
    pub fn validate(&self) -> Result<PatientFactors, ValidationError> {
        Ok(PatientFactors {
            age_bracket: required(self.age_bracket, "age_bracket")?,
            family_history: required(self.family_history, "family_history")?,
            genetic_risk: required(self.genetic_risk, "genetic_risk")?,
            race: required(self.race, "race")?,
            prior_psa_history: required(self.prior_psa_history, "prior_psa_history")?,
            prior_biopsy_result: required(self.prior_biopsy_result, "prior_biopsy_result")?,
            on_finasteride: self.on_finasteride.unwrap_or(false),
        })
    }
}

/// Fully answered pre-screening questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFactors {
    pub age_bracket: AgeBracket,
    pub family_history: FamilyHistory,
    pub genetic_risk: GeneticRisk,
    pub race: TriageRace,
    pub prior_psa_history: PriorPsaHistory,
    pub prior_biopsy_result: PriorBiopsyResult,
    pub on_finasteride: bool,
}

impl From<PatientFactors> for PatientFactorsForm {
    fn from(factors: PatientFactors) -> Self {
        Self {
            age_bracket: Some(factors.age_bracket),
            family_history: Some(factors.family_history),
            genetic_risk: Some(factors.genetic_risk),
            race: Some(factors.race),
            prior_psa_history: Some(factors.prior_psa_history),
            prior_biopsy_result: Some(factors.prior_biopsy_result),
            on_finasteride: Some(factors.on_finasteride),
        }
    }
}

/// Factors that can contribute points to the screening priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageFactor {
    AgeBracket,
    FamilyHistory,
    GeneticRisk,
    Race,
    PriorPsaHistory,
    PriorBiopsy,
}
