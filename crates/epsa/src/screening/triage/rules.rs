use super::domain::{
    AgeBracket, FamilyHistory, GeneticRisk, PatientFactors, PriorBiopsyResult, PriorPsaHistory,
    TriageFactor, TriageRace,
};
use super::TriageComponent;

const KNOWN_MUTATION_POINTS: i16 = 4;
const NEGATIVE_BIOPSY_POINTS: i16 = -1;

fn age_points(bracket: AgeBracket) -> i16 {
    match bracket {
        AgeBracket::FortyToFortyNine => 0,
        AgeBracket::FiftyToFiftyNine => 1,
        AgeBracket::SixtyToSixtyNine => 2,
        AgeBracket::SeventyPlus => 3,
    }
}

fn family_history_points(history: FamilyHistory) -> i16 {
    match history {
        FamilyHistory::None => 0,
        FamilyHistory::OneRelative => 2,
        FamilyHistory::TwoOrMoreRelatives => 3,
    }
}

fn race_points(race: TriageRace) -> i16 {
    match race {
        TriageRace::Hispanic | TriageRace::Black => 1,
        TriageRace::WhiteAsian | TriageRace::Other => 0,
    }
}

fn prior_psa_points(history: PriorPsaHistory) -> i16 {
    match history {
        PriorPsaHistory::Never | PriorPsaHistory::Normal => 0,
        PriorPsaHistory::Elevated => 3,
        PriorPsaHistory::NotSure => 1,
    }
}

/// Sum the point tables, returning the non-zero contributions and the total
/// floored at zero.
pub(crate) fn score_factors(factors: &PatientFactors) -> (Vec<TriageComponent>, u8) {
    let mut components = Vec::new();
    let mut total: i16 = 0;

    let mut record = |factor: TriageFactor, points: i16, notes: String| {
        if points != 0 {
            components.push(TriageComponent {
                factor,
                points,
                notes,
            });
            total += points;
        }
    };

    record(
        TriageFactor::AgeBracket,
        age_points(factors.age_bracket),
        format!("age bracket {}", factors.age_bracket.label()),
    );
    record(
        TriageFactor::FamilyHistory,
        family_history_points(factors.family_history),
        match factors.family_history {
            FamilyHistory::TwoOrMoreRelatives => "two or more affected relatives".to_string(),
            _ => "one affected relative".to_string(),
        },
    );

    let genetic = match factors.genetic_risk {
        GeneticRisk::KnownMutation => KNOWN_MUTATION_POINTS,
        GeneticRisk::None => 0,
    };
    record(
        TriageFactor::GeneticRisk,
        genetic,
        "known BRCA/HOXB13-type mutation".to_string(),
    );
    record(
        TriageFactor::Race,
        race_points(factors.race),
        format!("race group {}", factors.race.label()),
    );
    record(
        TriageFactor::PriorPsaHistory,
        prior_psa_points(factors.prior_psa_history),
        match factors.prior_psa_history {
            PriorPsaHistory::Elevated => "previously elevated PSA".to_string(),
            _ => "prior PSA result unknown".to_string(),
        },
    );

    let biopsy = match factors.prior_biopsy_result {
        PriorBiopsyResult::Negative => NEGATIVE_BIOPSY_POINTS,
        PriorBiopsyResult::None | PriorBiopsyResult::Cancer => 0,
    };
    record(
        TriageFactor::PriorBiopsy,
        biopsy,
        "prior negative biopsy".to_string(),
    );

    (components, total.max(0) as u8)
}
