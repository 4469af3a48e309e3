//! Loan appraisal engine.
//!
//! The [`appraisal`] module holds the pure evaluation pipeline (ratios, compliance checks,
//! risk banding, scoring, and decisioning) together with the intake guard, CSV importer,
//! and HTTP router that feed it. Configuration and telemetry support the API service.

pub mod appraisal;
pub mod config;
pub mod error;
pub mod telemetry;

pub use appraisal::{evaluate, AppraisalEngine, AppraisalResult, LoanApplication};
