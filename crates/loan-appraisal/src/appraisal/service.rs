use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::compliance::{rulebook, Rulebook};
use super::decision::StatusTally;
use super::domain::AppraisalResult;
use super::engine::AppraisalEngine;
use super::intake::{ApplicationSubmission, IntakeGuard, IntakeViolation};
use crate::config::AppraisalSettings;

/// Appraisal result stamped with the applicant and evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalEnvelope {
    pub applicant_name: String,
    pub evaluated_at: DateTime<Utc>,
    pub result: AppraisalResult,
}

/// Per-row outcome of a batch request; one bad row does not sink the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    Appraised {
        index: usize,
        appraisal: AppraisalEnvelope,
    },
    Invalid {
        index: usize,
        error: String,
    },
}

/// Service composing the intake guard and the appraisal engine.
#[derive(Debug, Clone)]
pub struct AppraisalService {
    guard: Arc<IntakeGuard>,
    engine: AppraisalEngine,
    max_batch: usize,
}

impl AppraisalService {
    pub fn new(settings: AppraisalSettings) -> Self {
        Self::with_guard(IntakeGuard::from_settings(&settings), settings)
    }

    pub fn with_guard(guard: IntakeGuard, settings: AppraisalSettings) -> Self {
        Self {
            guard: Arc::new(guard),
            engine: AppraisalEngine::new(),
            max_batch: settings.max_batch,
        }
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    pub fn rules(&self) -> Rulebook {
        rulebook()
    }

    /// Validate a submission and appraise it.
    pub fn appraise(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<AppraisalEnvelope, AppraisalServiceError> {
        let application = match self.guard.application_from_submission(submission) {
            Ok(application) => application,
            Err(violation) => {
                warn!(%violation, "application rejected at intake");
                return Err(violation.into());
            }
        };

        let result = self.engine.evaluate(&application);
        let tally = StatusTally::from_checks(result.compliance.checks());
        info!(
            applicant = %application.applicant_name,
            purpose = application.loan_purpose.label(),
            decision = result.decision.label(),
            score = result.score,
            overall_risk = result.risk_assessment.overall_risk.label(),
            passed = tally.passed,
            warnings = tally.warnings,
            failed = tally.failed,
            "loan appraised"
        );

        Ok(AppraisalEnvelope {
            applicant_name: application.applicant_name,
            evaluated_at: Utc::now(),
            result,
        })
    }

    /// Appraise several submissions, reporting intake failures per row.
    pub fn appraise_batch(
        &self,
        submissions: Vec<ApplicationSubmission>,
    ) -> Result<Vec<BatchOutcome>, AppraisalServiceError> {
        if submissions.len() > self.max_batch {
            return Err(AppraisalServiceError::BatchTooLarge {
                size: submissions.len(),
                limit: self.max_batch,
            });
        }

        Ok(self.appraise_all(submissions))
    }

    /// Appraise every submission regardless of the batch limit, for offline imports.
    pub fn appraise_all(&self, submissions: Vec<ApplicationSubmission>) -> Vec<BatchOutcome> {
        debug!(size = submissions.len(), "appraising batch");
        submissions
            .into_iter()
            .enumerate()
            .map(|(index, submission)| match self.appraise(submission) {
                Ok(appraisal) => BatchOutcome::Appraised { index, appraisal },
                Err(err) => BatchOutcome::Invalid {
                    index,
                    error: err.to_string(),
                },
            })
            .collect()
    }
}

impl Default for AppraisalService {
    fn default() -> Self {
        Self::new(AppraisalSettings::default())
    }
}

/// Error raised by the appraisal service.
#[derive(Debug, thiserror::Error)]
pub enum AppraisalServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error("batch of {size} applications exceeds limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}
