//! Loan appraisal pipeline.
//!
//! `ratios` → `compliance` → `risk` → `decision`, composed by [`AppraisalEngine`]. The
//! engine is a pure function of a [`LoanApplication`]; `intake`, `import`, `service`, and
//! `router` are the collaborators that build applications and deliver results.

pub mod compliance;
pub mod decision;
pub mod domain;
mod engine;
mod import;
pub mod intake;
pub mod ratios;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use compliance::{evaluate_policy, evaluate_regulatory, rulebook, Rulebook, Thresholds};
pub use decision::{score_and_decide, Verdict};
pub use domain::{
    AppraisalDecision, AppraisalResult, ComplianceAudit, ComplianceCheck, ComplianceStatus,
    EmploymentType, FinancialRatios, LoanApplication, LoanPurpose, RiskAssessment, RiskBand,
};
pub use engine::{evaluate, AppraisalEngine};
pub use import::{ApplicationCsvImporter, ImportError};
pub use intake::{ApplicationSubmission, FormValue, IntakeGuard, IntakePolicy, IntakeViolation};
pub use ratios::derive_ratios;
pub use risk::assess_risk;
pub use router::appraisal_router;
pub use service::{AppraisalEnvelope, AppraisalService, AppraisalServiceError, BatchOutcome};
