use crate::infra::InMemoryAssessmentRepository;
use clap::Args;
use epsa::config::{AppConfig, SessionConfig};
use epsa::error::AppError;
use epsa::screening::sessions::{
    write_records_to_path, AssessmentRecord, AssessmentRequest, AssessmentService, ConsentRecord,
    PostSection,
};
use epsa::screening::triage::{
    AgeBracket, FamilyHistory, GeneticRisk, PatientFactorsForm, PriorBiopsyResult,
    PriorPsaHistory, TriageRace,
};
use epsa::screening::{CoreAssessmentForm, FormValue, PostAssessmentInput};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding one assessment request or an array of them
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write the scored assessments to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each stored record as JSON after its summary line
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestBatch {
    Many(Vec<AssessmentRequest>),
    One(Box<AssessmentRequest>),
}

fn parse_requests(raw: &str) -> Result<Vec<AssessmentRequest>, serde_json::Error> {
    Ok(match serde_json::from_str::<RequestBatch>(raw)? {
        RequestBatch::Many(requests) => requests,
        RequestBatch::One(request) => vec![*request],
    })
}

fn session_service(config: SessionConfig) -> AssessmentService<InMemoryAssessmentRepository> {
    AssessmentService::new(Arc::new(InMemoryAssessmentRepository::default()), config)
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { input, csv } = args;

    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&input)?;
    let requests = parse_requests(&raw)?;
    let service = session_service(config.sessions);

    println!(
        "Scoring {} assessment(s) from {}",
        requests.len(),
        input.display()
    );
    for (position, request) in requests.into_iter().enumerate() {
        let label = request
            .patient_ref
            .clone()
            .unwrap_or_else(|| format!("request #{}", position + 1));
        match service.submit(request) {
            Ok(record) => println!("- {} [{}]: {}", record.id.0, label, record.headline()),
            Err(err) => println!("- {label}: rejected ({err})"),
        }
    }

    if let Some(path) = csv {
        let records = service.list()?;
        let rows = write_records_to_path(&records, &path)?;
        println!("Exported {rows} row(s) to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = session_service(SessionConfig::default());

    println!("ePSA screening calculator demo");
    for (title, request) in demo_requests() {
        println!("\n{title}");
        let record = service.submit(request)?;
        render_record(&record);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

fn render_record(record: &AssessmentRecord) {
    println!("  {} -> {}", record.id.0, record.headline());

    if let Some(triage) = &record.triage {
        println!("  Pre-screening: {}", triage.summary());
    }
    if let Some(core) = &record.core {
        println!(
            "  Core: {}% ({}-{}%) {} | BMI {} | IPSS {} | SHIM {}",
            core.score_percent,
            core.confidence_low,
            core.confidence_high,
            core.tier_label,
            core.bmi_formatted,
            core.ipss_total,
            core.shim_total
        );
        if core.outside_validated_range {
            println!("  Note: age {} is outside the validated range", core.age);
        }
        println!("  {}", core.action);
    }
    if let Some(post) = &record.post {
        println!(
            "  PSA/MRI: {} {} | PSA {} ng/mL -> {} pts | PI-RADS {} pts | total {}",
            post.category_label,
            post.risk_percent_range,
            post.psa_level,
            post.psa_points,
            post.pirads_points,
            post.total_points
        );
        for step in &post.next_steps {
            println!("    - {step}");
        }
    }
}

fn demo_consent() -> Option<ConsentRecord> {
    Some(ConsentRecord {
        given: true,
        form_version: Some("demo".to_string()),
        recorded_at: None,
    })
}

fn core_form(
    age: u8,
    bmi: f64,
    ipss: [u8; 7],
    shim: [u8; 5],
    exercise_level: u8,
    family_history_count: u32,
) -> CoreAssessmentForm {
    CoreAssessmentForm {
        age: Some(FormValue::from(f64::from(age))),
        race: Some("white".to_string()),
        bmi: Some(FormValue::from(bmi)),
        ipss_answers: Some(ipss.into_iter().map(Some).collect()),
        shim_answers: Some(shim.into_iter().map(Some).collect()),
        exercise_level: Some(exercise_level),
        family_history_count: Some(family_history_count),
        ..CoreAssessmentForm::default()
    }
}

fn demo_requests() -> Vec<(&'static str, AssessmentRequest)> {
    vec![
        (
            "Healthy 45-year-old, occasional exercise",
            AssessmentRequest {
                patient_ref: Some("demo-low".to_string()),
                consent: demo_consent(),
                triage: Some(PatientFactorsForm {
                    age_bracket: Some(AgeBracket::FortyToFortyNine),
                    family_history: Some(FamilyHistory::None),
                    genetic_risk: Some(GeneticRisk::None),
                    race: Some(TriageRace::WhiteAsian),
                    prior_psa_history: Some(PriorPsaHistory::Never),
                    prior_biopsy_result: Some(PriorBiopsyResult::None),
                    on_finasteride: None,
                }),
                core: Some(core_form(45, 22.0, [0; 7], [5; 5], 1, 0)),
                post: None,
            },
        ),
        (
            "70-year-old with severe symptoms, sedentary, family history",
            AssessmentRequest {
                patient_ref: Some("demo-anomaly".to_string()),
                consent: demo_consent(),
                triage: None,
                core: Some(core_form(70, 30.0, [5; 7], [1; 5], 2, 1)),
                post: Some(PostSection {
                    core_points: 30,
                    input: PostAssessmentInput {
                        psa_level: Some(FormValue::from("3.2")),
                        knows_pirads: false,
                        pirads_score: None,
                    },
                }),
            },
        ),
        (
            "65-year-old with mild symptoms and an elevated PSA",
            AssessmentRequest {
                patient_ref: Some("demo-high".to_string()),
                consent: demo_consent(),
                triage: Some(PatientFactorsForm {
                    age_bracket: Some(AgeBracket::SixtyToSixtyNine),
                    family_history: Some(FamilyHistory::OneRelative),
                    genetic_risk: Some(GeneticRisk::None),
                    race: Some(TriageRace::Black),
                    prior_psa_history: Some(PriorPsaHistory::Elevated),
                    prior_biopsy_result: Some(PriorBiopsyResult::Negative),
                    on_finasteride: Some(true),
                }),
                core: Some(core_form(65, 28.0, [2, 2, 2, 1, 1, 1, 1], [4; 5], 0, 0)),
                post: Some(PostSection {
                    core_points: 70,
                    input: PostAssessmentInput {
                        psa_level: Some(FormValue::from("8.4")),
                        knows_pirads: true,
                        pirads_score: Some(FormValue::from("5")),
                    },
                }),
            },
        ),
    ]
}
