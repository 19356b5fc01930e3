//! Assessment sessions: one patient's triage, core, and post results stored
//! together, with consent tracking and CSV export.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentId, AssessmentRecord, AssessmentRequest, ConsentRecord, PostSection};
pub use export::{write_records, write_records_to_path, ExportError};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::screening_router;
pub use service::{AssessmentService, AssessmentServiceError};
