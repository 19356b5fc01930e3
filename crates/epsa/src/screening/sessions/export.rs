use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

use super::domain::AssessmentRecord;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to write assessment export: {}", err),
            ExportError::Csv(err) => write!(f, "could not encode assessment row: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

const HEADERS: [&str; 17] = [
    "id",
    "created_at",
    "patient_ref",
    "consent",
    "triage_category",
    "triage_points",
    "core_score",
    "core_tier",
    "confidence_low",
    "confidence_high",
    "ipss_total",
    "shim_total",
    "bmi",
    "post_category",
    "post_range",
    "post_points",
    "pirads_overridden",
];

/// Flat row layout matching `HEADERS`; sections a patient skipped export as
/// empty cells.
#[derive(Debug, Serialize)]
struct AssessmentRow<'a> {
    id: &'a str,
    created_at: String,
    patient_ref: Option<&'a str>,
    consent: bool,
    triage_category: Option<String>,
    triage_points: Option<u8>,
    core_score: Option<u8>,
    core_tier: Option<String>,
    confidence_low: Option<u8>,
    confidence_high: Option<u8>,
    ipss_total: Option<u16>,
    shim_total: Option<u16>,
    bmi: Option<&'a str>,
    post_category: Option<&'a str>,
    post_range: Option<&'a str>,
    post_points: Option<i32>,
    pirads_overridden: Option<bool>,
}

impl<'a> From<&'a AssessmentRecord> for AssessmentRow<'a> {
    fn from(record: &'a AssessmentRecord) -> Self {
        let triage_category = record.triage.as_ref().map(|triage| match triage.priority() {
            Some(priority) => priority.label().to_string(),
            None => "prior-cancer".to_string(),
        });

        Self {
            id: &record.id.0,
            created_at: record.created_at.to_rfc3339(),
            patient_ref: record.patient_ref.as_deref(),
            consent: record.consent.as_ref().is_some_and(|consent| consent.given),
            triage_category,
            triage_points: record.triage.as_ref().and_then(|triage| triage.points()),
            core_score: record.core.as_ref().map(|core| core.score_percent),
            core_tier: record.core.as_ref().map(|core| core.risk_tier.to_string()),
            confidence_low: record.core.as_ref().map(|core| core.confidence_low),
            confidence_high: record.core.as_ref().map(|core| core.confidence_high),
            ipss_total: record.core.as_ref().map(|core| core.ipss_total),
            shim_total: record.core.as_ref().map(|core| core.shim_total),
            bmi: record.core.as_ref().map(|core| core.bmi_formatted.as_str()),
            post_category: record.post.as_ref().map(|post| post.category_label.as_str()),
            post_range: record
                .post
                .as_ref()
                .map(|post| post.risk_percent_range.as_str()),
            post_points: record.post.as_ref().map(|post| post.total_points),
            pirads_overridden: record.post.as_ref().map(|post| post.pirads_overridden),
        }
    }
}

/// Write one CSV row per record, returning the number of rows written.
pub fn write_records<W: Write>(
    records: &[AssessmentRecord],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.serialize(AssessmentRow::from(record))?;
    }
    csv_writer.flush()?;

    Ok(records.len())
}

pub fn write_records_to_path<P: AsRef<Path>>(
    records: &[AssessmentRecord],
    path: P,
) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path)?;
    write_records(records, file)
}
