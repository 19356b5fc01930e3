use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::config::SessionConfig;
use crate::screening::form::FormValue;
use crate::screening::post::PostAssessmentInput;
use crate::screening::risk::{CoreAssessmentForm, IPSS_QUESTIONS, SHIM_QUESTIONS};
use crate::screening::sessions::domain::{
    AssessmentId, AssessmentRecord, AssessmentRequest, ConsentRecord, PostSection,
};
use crate::screening::sessions::repository::{AssessmentRepository, RepositoryError};
use crate::screening::sessions::{screening_router, AssessmentService};
use crate::screening::triage::{
    AgeBracket, FamilyHistory, GeneticRisk, PatientFactorsForm, PriorBiopsyResult,
    PriorPsaHistory, TriageRace,
};

pub(super) fn consent() -> ConsentRecord {
    ConsentRecord {
        given: true,
        form_version: Some("2024-03".to_string()),
        recorded_at: Some(Utc.with_ymd_and_hms(2025, 4, 2, 14, 30, 0).unwrap()),
    }
}

pub(super) fn triage_form() -> PatientFactorsForm {
    PatientFactorsForm {
        age_bracket: Some(AgeBracket::FiftyToFiftyNine),
        family_history: Some(FamilyHistory::OneRelative),
        genetic_risk: Some(GeneticRisk::None),
        race: Some(TriageRace::Black),
        prior_psa_history: Some(PriorPsaHistory::Never),
        prior_biopsy_result: Some(PriorBiopsyResult::None),
        on_finasteride: Some(false),
    }
}

pub(super) fn core_form() -> CoreAssessmentForm {
    CoreAssessmentForm {
        age: Some(FormValue::from("45")),
        race: Some("white".to_string()),
        bmi: Some(FormValue::from("22")),
        ipss_answers: Some(vec![Some(0); IPSS_QUESTIONS]),
        shim_answers: Some(vec![Some(5); SHIM_QUESTIONS]),
        exercise_level: Some(1),
        family_history_count: Some(0),
        ..CoreAssessmentForm::default()
    }
}

pub(super) fn post_section() -> PostSection {
    PostSection {
        core_points: 30,
        input: PostAssessmentInput {
            psa_level: Some(FormValue::from("3")),
            knows_pirads: true,
            pirads_score: Some(FormValue::from("3")),
        },
    }
}

pub(super) fn full_request() -> AssessmentRequest {
    AssessmentRequest {
        patient_ref: Some("kiosk-17".to_string()),
        consent: Some(consent()),
        triage: Some(triage_form()),
        core: Some(core_form()),
        post: Some(post_section()),
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), SessionConfig::default());
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    screening_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<AssessmentId, AssessmentRecord>>>,
}

impl MemoryRepository {
    pub(super) fn list_len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
