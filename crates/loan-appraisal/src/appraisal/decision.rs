use serde::{Deserialize, Serialize};

use super::domain::{
    AppraisalDecision, ComplianceCheck, ComplianceStatus, FinancialRatios, LoanApplication,
    RiskAssessment, RiskBand,
};

const REJECT_AT_FAILURES: usize = 3;
const REVIEW_AT_WARNINGS: usize = 3;
const MINIMUM_CREDIT_SCORE: i32 = 650;
const PREFERRED_CREDIT_SCORE: i32 = 700;
const MAXIMUM_DTI_PERCENT: f64 = 50.0;
const PREFERRED_DTI_PERCENT: f64 = 40.0;
const MAXIMUM_LTV: f64 = 0.90;

/// Score, decision, and the explanatory text that accompanies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: f64,
    pub decision: AppraisalDecision,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Status tallies over both rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct StatusTally {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl StatusTally {
    pub(crate) fn from_checks<'a>(checks: impl IntoIterator<Item = &'a ComplianceCheck>) -> Self {
        checks
            .into_iter()
            .fold(StatusTally::default(), |mut tally, check| {
                match check.status {
                    ComplianceStatus::Pass => tally.passed += 1,
                    ComplianceStatus::Warning => tally.warnings += 1,
                    ComplianceStatus::Fail => tally.failed += 1,
                }
                tally
            })
    }
}

/// Percentage score over every supplied check: PASS 12.5, WARNING 6.25, FAIL 0.
pub fn eligibility_score<'a>(checks: impl IntoIterator<Item = &'a ComplianceCheck>) -> f64 {
    checks
        .into_iter()
        .map(|check| check.status.score_weight())
        .sum()
}

/// Decision table; the first matching row wins.
pub fn decide(failed: usize, warnings: usize, overall_risk: RiskBand) -> AppraisalDecision {
    if failed >= REJECT_AT_FAILURES || overall_risk == RiskBand::High {
        AppraisalDecision::Rejected
    } else if failed >= 1 || warnings >= REVIEW_AT_WARNINGS || overall_risk == RiskBand::Medium {
        AppraisalDecision::ReviewRequired
    } else {
        AppraisalDecision::Approved
    }
}

pub fn score_and_decide(
    regulatory: &[ComplianceCheck],
    policy: &[ComplianceCheck],
    risk: &RiskAssessment,
    application: &LoanApplication,
    ratios: &FinancialRatios,
) -> Verdict {
    let checks = || regulatory.iter().chain(policy.iter());
    let score = eligibility_score(checks());
    let tally = StatusTally::from_checks(checks());
    let decision = decide(tally.failed, tally.warnings, risk.overall_risk);
    let (reasons, recommendations) = rationale(decision, application, ratios);

    Verdict {
        score,
        decision,
        reasons,
        recommendations,
    }
}

fn rationale(
    decision: AppraisalDecision,
    application: &LoanApplication,
    ratios: &FinancialRatios,
) -> (Vec<String>, Vec<String>) {
    match decision {
        AppraisalDecision::Rejected => {
            let mut reasons = vec![
                "Multiple compliance failures detected".to_string(),
                "High risk profile identified".to_string(),
            ];
            if application.credit_score < MINIMUM_CREDIT_SCORE {
                reasons.push(format!(
                    "Credit score below minimum threshold of {MINIMUM_CREDIT_SCORE}"
                ));
            }
            if ratios.debt_to_income > MAXIMUM_DTI_PERCENT {
                reasons.push(format!(
                    "Debt-to-income ratio exceeds {MAXIMUM_DTI_PERCENT:.0}% limit"
                ));
            }
            if ratios.loan_to_value > MAXIMUM_LTV {
                reasons.push(format!(
                    "Insufficient collateral coverage (LTV above {:.0}%)",
                    MAXIMUM_LTV * 100.0
                ));
            }

            let recommendations = vec![
                "Improve credit score before reapplying".to_string(),
                "Reduce existing debt obligations".to_string(),
                "Consider providing additional collateral".to_string(),
            ];
            (reasons, recommendations)
        }
        AppraisalDecision::ReviewRequired => {
            let mut reasons = vec![
                "Some parameters require manual review".to_string(),
                "Moderate risk profile".to_string(),
            ];
            if application.credit_score < PREFERRED_CREDIT_SCORE {
                reasons.push(format!(
                    "Credit score below preferred threshold of {PREFERRED_CREDIT_SCORE}"
                ));
            }
            if ratios.debt_to_income > PREFERRED_DTI_PERCENT {
                reasons.push(format!(
                    "Debt-to-income ratio above {PREFERRED_DTI_PERCENT:.0}% guideline"
                ));
            }

            let recommendations = vec![
                "Submit additional income documentation".to_string(),
                "Consider adding a co-applicant or guarantor".to_string(),
                "Senior credit officer review recommended".to_string(),
            ];
            (reasons, recommendations)
        }
        AppraisalDecision::Approved => {
            let reasons = vec![
                "All regulatory requirements met".to_string(),
                "Strong credit profile".to_string(),
                "Adequate collateral coverage".to_string(),
            ];
            let recommendations = vec![
                "Proceed with loan documentation".to_string(),
                "Complete property valuation and legal verification".to_string(),
                "Verify employment and income documents".to_string(),
            ];
            (reasons, recommendations)
        }
    }
}
