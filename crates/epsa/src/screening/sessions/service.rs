use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::super::form::ValidationError;
use super::super::post::compute_post_risk;
use super::super::risk::compute_core_risk;
use super::super::triage::assess_screening_priority;
use super::domain::{AssessmentId, AssessmentRecord, AssessmentRequest};
use super::export::{write_records, ExportError};
use super::repository::{AssessmentRepository, RepositoryError};
use crate::config::SessionConfig;

/// Service composing the three scoring engines with the assessment store.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    config: SessionConfig,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: SessionConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Score every section present in the request and store the record.
    ///
    /// Sections are validated before anything is stored; one invalid section
    /// rejects the whole submission.
    pub fn submit(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if self.config.require_consent && !request.consent_given() {
            warn!(patient_ref = ?request.patient_ref, "assessment rejected without consent");
            return Err(AssessmentServiceError::ConsentRequired);
        }
        if !request.has_sections() {
            return Err(AssessmentServiceError::EmptySubmission);
        }

        let triage = request
            .triage
            .as_ref()
            .map(|form| form.validate().map(|factors| assess_screening_priority(&factors)))
            .transpose()
            .map_err(|source| AssessmentServiceError::invalid("triage", source))?;

        let core = request
            .core
            .as_ref()
            .map(|form| form.validate().map(|input| compute_core_risk(&input)))
            .transpose()
            .map_err(|source| AssessmentServiceError::invalid("core", source))?;

        let post = request
            .post
            .as_ref()
            .map(|section| compute_post_risk(section.core_points, &section.input));

        let record = AssessmentRecord {
            id: next_assessment_id(),
            created_at: Utc::now(),
            patient_ref: request.patient_ref,
            consent: request.consent,
            triage,
            core,
            post,
        };
        debug!(id = %record.id.0, summary = %record.headline(), "assessment scored");

        let stored = self.repository.insert(record)?;
        info!(id = %stored.id.0, "assessment stored");
        Ok(stored)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.list()?)
    }

    /// Write every stored assessment as CSV, returning the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AssessmentServiceError> {
        let records = self.repository.list()?;
        let rows = write_records(&records, writer)?;
        info!(rows, "assessments exported");
        Ok(rows)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("patient consent is required before an assessment can be stored")]
    ConsentRequired,
    #[error("assessment contains no triage, core, or post section")]
    EmptySubmission,
    #[error("{section} section is incomplete: {source}")]
    Validation {
        section: &'static str,
        source: ValidationError,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AssessmentServiceError {
    fn invalid(section: &'static str, source: ValidationError) -> Self {
        Self::Validation { section, source }
    }
}
