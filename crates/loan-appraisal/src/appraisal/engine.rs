use super::compliance::{evaluate_policy, evaluate_regulatory};
use super::decision::score_and_decide;
use super::domain::{AppraisalResult, ComplianceAudit, LoanApplication};
use super::ratios::derive_ratios;
use super::risk::assess_risk;

/// Stateless evaluator running the ratio, compliance, risk, and decision stages.
///
/// Holds no state, so one engine can be shared freely across threads and requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppraisalEngine;

impl AppraisalEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, application: &LoanApplication) -> AppraisalResult {
        let ratios = derive_ratios(application);
        let regulatory = evaluate_regulatory(application, &ratios);
        let policy = evaluate_policy(application, &ratios);
        let risk_assessment = assess_risk(application, &ratios);
        let verdict = score_and_decide(
            &regulatory,
            &policy,
            &risk_assessment,
            application,
            &ratios,
        );

        AppraisalResult {
            decision: verdict.decision,
            score: verdict.score,
            reasons: verdict.reasons,
            compliance: ComplianceAudit {
                regulatory: regulatory.into(),
                policy: policy.into(),
            },
            risk_assessment,
            recommendations: verdict.recommendations,
        }
    }
}

/// Appraise one application with the standard rule tables.
pub fn evaluate(application: &LoanApplication) -> AppraisalResult {
    AppraisalEngine::new().evaluate(application)
}
