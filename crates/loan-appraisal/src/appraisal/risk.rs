use super::domain::{FinancialRatios, LoanApplication, RiskAssessment, RiskBand};

const CREDIT_HIGH_RISK_BELOW: i32 = 650;
const CREDIT_MEDIUM_RISK_BELOW: i32 = 750;
const COLLATERAL_LOW_RISK_LTV: f64 = 0.70;
const COLLATERAL_MEDIUM_RISK_LTV: f64 = 0.85;
const OVERALL_LOW_RISK_SCORE: f64 = 80.0;
const OVERALL_MEDIUM_RISK_SCORE: f64 = 50.0;

pub fn credit_risk(credit_score: i32) -> RiskBand {
    if credit_score < CREDIT_HIGH_RISK_BELOW {
        RiskBand::High
    } else if credit_score < CREDIT_MEDIUM_RISK_BELOW {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// NaN LTV falls through both cut points and lands in HIGH.
pub fn collateral_risk(loan_to_value: f64) -> RiskBand {
    if loan_to_value <= COLLATERAL_LOW_RISK_LTV {
        RiskBand::Low
    } else if loan_to_value <= COLLATERAL_MEDIUM_RISK_LTV {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}

pub fn overall_risk(risk_score: f64) -> RiskBand {
    if risk_score >= OVERALL_LOW_RISK_SCORE {
        RiskBand::Low
    } else if risk_score >= OVERALL_MEDIUM_RISK_SCORE {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}

/// Band credit and collateral risk and combine them. Compliance checks play no part.
pub fn assess_risk(application: &LoanApplication, ratios: &FinancialRatios) -> RiskAssessment {
    let credit_risk = credit_risk(application.credit_score);
    let collateral_risk = collateral_risk(ratios.loan_to_value);
    let risk_score = (credit_risk.weight() + collateral_risk.weight()) / 2.0;

    RiskAssessment {
        credit_risk,
        collateral_risk,
        overall_risk: overall_risk(risk_score),
        risk_score,
    }
}
