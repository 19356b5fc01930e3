//! Scoring engines and service plumbing for the ePSA prostate cancer screening calculator.
//!
//! The three engines in [`screening`] are pure functions over plain records:
//! pre-screening triage, the logistic core risk model, and the PSA/MRI post
//! assessment. [`screening::sessions`] stores a patient's combined results and
//! exports them as CSV.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
