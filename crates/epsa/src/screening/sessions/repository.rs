use super::domain::{AssessmentId, AssessmentRecord};

/// Storage abstraction so the session service can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// All stored records ordered by id.
    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("assessment already exists")]
    Conflict,
    #[error("assessment not found")]
    NotFound,
    #[error("assessment store unavailable: {0}")]
    Unavailable(String),
}
