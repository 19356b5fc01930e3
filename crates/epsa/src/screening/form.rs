use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric form field as submitted by the questionnaire: either a JSON number
/// or the raw text typed into an input box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Finite numeric value, if the field holds one.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FormValue::Number(value) => *value,
            FormValue::Text(raw) => raw.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Whole-number value; fractional input is truncated toward zero.
    pub fn as_integer(&self) -> Option<i64> {
        if let FormValue::Text(raw) = self {
            if let Ok(parsed) = raw.trim().parse::<i64>() {
                return Some(parsed);
            }
        }
        self.as_f64().map(|value| value.trunc() as i64)
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Number(value) => write!(f, "{value}"),
            FormValue::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

/// User-correctable input problem. Carries the field that failed so the caller
/// can prompt for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be numeric (found '{raw}')")]
    NotNumeric { field: &'static str, raw: String },
    #[error("{field} must be {expected} (found {found})")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("{field} must contain exactly {expected} answers (found {found})")]
    WrongLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{field} is missing answer {position}")]
    MissingAnswer { field: &'static str, position: usize },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::WrongLength { field, .. }
            | ValidationError::MissingAnswer { field, .. } => field,
        }
    }
}

pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Ensure a questionnaire answered every item, returning the fixed-size answer set.
pub(crate) fn complete_answers<const N: usize>(
    answers: Option<&[Option<u8>]>,
    field: &'static str,
) -> Result<[u8; N], ValidationError> {
    let answers = required(answers, field)?;
    if answers.len() != N {
        return Err(ValidationError::WrongLength {
            field,
            expected: N,
            found: answers.len(),
        });
    }

    let mut complete = [0u8; N];
    for (index, answer) in answers.iter().enumerate() {
        complete[index] = answer.ok_or(ValidationError::MissingAnswer {
            field,
            position: index + 1,
        })?;
    }
    Ok(complete)
}
