use epsa::screening::triage::{
    AgeBracket, FamilyHistory, GeneticRisk, PriorBiopsyResult, PriorPsaHistory, TriageRace,
};
use epsa::screening::{
    assess_screening_priority, compute_core_risk, compute_post_risk, CoreAssessmentInput,
    ExerciseLevel, FormValue, PatientFactors, PostAssessmentInput, PostRiskCategory, RiskTier,
    ScreeningPriority, TriageOutcome,
};

const AGE_BRACKETS: [AgeBracket; 4] = [
    AgeBracket::FortyToFortyNine,
    AgeBracket::FiftyToFiftyNine,
    AgeBracket::SixtyToSixtyNine,
    AgeBracket::SeventyPlus,
];
const FAMILY_HISTORIES: [FamilyHistory; 3] = [
    FamilyHistory::None,
    FamilyHistory::OneRelative,
    FamilyHistory::TwoOrMoreRelatives,
];
const GENETIC_RISKS: [GeneticRisk; 2] = [GeneticRisk::None, GeneticRisk::KnownMutation];
const RACES: [TriageRace; 4] = [
    TriageRace::WhiteAsian,
    TriageRace::Hispanic,
    TriageRace::Black,
    TriageRace::Other,
];
const PSA_HISTORIES: [PriorPsaHistory; 4] = [
    PriorPsaHistory::Never,
    PriorPsaHistory::Normal,
    PriorPsaHistory::Elevated,
    PriorPsaHistory::NotSure,
];
const BIOPSY_RESULTS: [PriorBiopsyResult; 3] = [
    PriorBiopsyResult::None,
    PriorBiopsyResult::Negative,
    PriorBiopsyResult::Cancer,
];

fn every_patient() -> Vec<PatientFactors> {
    let mut patients = Vec::new();
    for age_bracket in AGE_BRACKETS {
        for family_history in FAMILY_HISTORIES {
            for genetic_risk in GENETIC_RISKS {
                for race in RACES {
                    for prior_psa_history in PSA_HISTORIES {
                        for prior_biopsy_result in BIOPSY_RESULTS {
                            for on_finasteride in [false, true] {
                                patients.push(PatientFactors {
                                    age_bracket,
                                    family_history,
                                    genetic_risk,
                                    race,
                                    prior_psa_history,
                                    prior_biopsy_result,
                                    on_finasteride,
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    patients
}

fn core_input(age: u8, bmi: f64) -> CoreAssessmentInput {
    CoreAssessmentInput {
        age,
        race: "white".to_string(),
        bmi,
        ipss_answers: [0; 7],
        shim_answers: [5; 5],
        exercise_level: ExerciseLevel::Regular,
        family_history_count: 0,
    }
}

#[test]
fn triage_priority_always_matches_component_total() {
    for patient in every_patient() {
        match assess_screening_priority(&patient) {
            TriageOutcome::PriorCancer { .. } => {
                assert_eq!(patient.prior_biopsy_result, PriorBiopsyResult::Cancer);
            }
            TriageOutcome::Screened {
                priority,
                points,
                components,
                ..
            } => {
                assert_ne!(patient.prior_biopsy_result, PriorBiopsyResult::Cancer);
                let summed: i16 = components.iter().map(|component| component.points).sum();
                assert_eq!(i16::from(points), summed.max(0), "patient {patient:?}");
                assert_eq!(priority, ScreeningPriority::from_points(points));
            }
        }
    }
}

#[test]
fn highest_risk_patient_is_high_priority() {
    let outcome = assess_screening_priority(&PatientFactors {
        age_bracket: AgeBracket::SeventyPlus,
        family_history: FamilyHistory::TwoOrMoreRelatives,
        genetic_risk: GeneticRisk::KnownMutation,
        race: TriageRace::Black,
        prior_psa_history: PriorPsaHistory::Elevated,
        prior_biopsy_result: PriorBiopsyResult::Negative,
        on_finasteride: false,
    });

    assert_eq!(outcome.priority(), Some(ScreeningPriority::HighPriority));
    assert_eq!(outcome.points(), Some(13));
}

#[test]
fn core_scoring_is_deterministic() {
    let input = core_input(58, 27.5);
    assert_eq!(compute_core_risk(&input), compute_core_risk(&input));
}

#[test]
fn core_probability_rises_with_age_and_bmi() {
    let mut previous = 0.0;
    for age in (30..=95).step_by(5) {
        let probability = compute_core_risk(&core_input(age, 25.0)).probability;
        assert!(probability > previous, "age {age} did not raise risk");
        previous = probability;
    }

    let lean = compute_core_risk(&core_input(60, 20.0)).probability;
    let heavy = compute_core_risk(&core_input(60, 38.0)).probability;
    assert!(heavy > lean);
}

#[test]
fn sedentary_code_lowers_core_probability() {
    let mut sedentary = core_input(62, 29.0);
    sedentary.exercise_level = ExerciseLevel::Sedentary;
    let mut regular = sedentary.clone();
    regular.exercise_level = ExerciseLevel::Regular;

    // the exercise coefficient is subtracted, so the larger code scores lower
    assert!(compute_core_risk(&sedentary).probability < compute_core_risk(&regular).probability);
}

#[test]
fn confidence_band_stays_within_bounds() {
    for age in 18..=120 {
        let result = compute_core_risk(&core_input(age, 31.0));
        assert!(result.confidence_low <= result.score_percent);
        assert!(result.confidence_high >= result.score_percent);
        assert!(result.confidence_high <= 100);
        assert_eq!(
            result.outside_validated_range,
            !(30..=95).contains(&age),
            "age {age}"
        );
    }
}

#[test]
fn documented_low_risk_patient_lands_in_lower_tier() {
    let mut input = core_input(45, 22.0);
    input.exercise_level = ExerciseLevel::Occasional;

    let result = compute_core_risk(&input);

    assert!((result.logit - -2.8524).abs() < 1e-3);
    assert_eq!(result.score_percent, 5);
    assert_eq!(result.risk_tier, RiskTier::Lower);
    assert_eq!(result.confidence_low, 0);
    assert_eq!(result.confidence_high, 15);
}

#[test]
fn core_tier_can_reach_higher() {
    let mut input = core_input(65, 28.0);
    input.ipss_answers = [2, 2, 2, 1, 1, 1, 1];
    input.shim_answers = [4; 5];

    let result = compute_core_risk(&input);

    assert_eq!(result.score_percent, 21);
    assert_eq!(result.risk_tier, RiskTier::Higher);
}

#[test]
fn post_points_climb_through_every_category() {
    let input = PostAssessmentInput {
        psa_level: Some(FormValue::from("12")),
        knows_pirads: false,
        pirads_score: None,
    };

    let categories: Vec<PostRiskCategory> = [0, 40, 80, 120]
        .into_iter()
        .map(|core_points| compute_post_risk(core_points, &input).risk_category)
        .collect();

    assert_eq!(
        categories,
        vec![
            PostRiskCategory::Low,
            PostRiskCategory::Moderate,
            PostRiskCategory::High,
            PostRiskCategory::VeryHigh,
        ]
    );
}

#[test]
fn pirads_five_overrides_low_point_total() {
    let result = compute_post_risk(
        0,
        &PostAssessmentInput {
            psa_level: Some(FormValue::from("0.4")),
            knows_pirads: true,
            pirads_score: Some(FormValue::from("5")),
        },
    );

    assert_eq!(result.risk_category, PostRiskCategory::VeryHighPirads5);
    assert_eq!(result.risk_percent_range, "89% (76–97%)");
    assert_eq!(result.next_steps.len(), 3);
}
