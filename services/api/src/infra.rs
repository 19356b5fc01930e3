use epsa::screening::sessions::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local assessment store. Records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<BTreeMap<AssessmentId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<AssessmentId, AssessmentRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("assessment store poisoned".to_string()))
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }
}
