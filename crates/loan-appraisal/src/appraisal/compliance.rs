use serde::Serialize;

use super::domain::{ComplianceCheck, ComplianceStatus, FinancialRatios, LoanApplication};

pub const LTV_RATIO: &str = "LTV Ratio";
pub const CREDIT_INFORMATION_REPORT: &str = "Credit Information Report";
pub const KYC_COMPLIANCE: &str = "KYC Compliance";
pub const PRIORITY_SECTOR: &str = "Priority Sector Classification";
pub const DEBT_TO_INCOME: &str = "Debt-to-Income";
pub const EMPLOYMENT_STABILITY: &str = "Employment Stability";
pub const LOAN_TO_INCOME: &str = "Loan-to-Income";
pub const COLLATERAL_COVERAGE: &str = "Collateral Coverage";

/// Which side of the cut points a healthy value sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    AtMost,
    AtLeast,
}

/// Two cut points splitting a metric into PASS / WARNING / FAIL.
///
/// Both boundaries are inclusive on the healthier side. NaN compares false against
/// either cut point and therefore classifies as FAIL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub direction: Direction,
    pub pass: f64,
    pub warn: f64,
}

impl Thresholds {
    pub const fn at_most(pass: f64, warn: f64) -> Self {
        Self {
            direction: Direction::AtMost,
            pass,
            warn,
        }
    }

    pub const fn at_least(pass: f64, warn: f64) -> Self {
        Self {
            direction: Direction::AtLeast,
            pass,
            warn,
        }
    }

    pub fn classify(&self, value: f64) -> ComplianceStatus {
        self.classify_scaled(value, 1.0)
    }

    /// Classify `value` against the cut points multiplied by `scale`.
    pub fn classify_scaled(&self, value: f64, scale: f64) -> ComplianceStatus {
        let (pass, warn) = (self.pass * scale, self.warn * scale);
        let (within_pass, within_warn) = match self.direction {
            Direction::AtMost => (value <= pass, value <= warn),
            Direction::AtLeast => (value >= pass, value >= warn),
        };

        if within_pass {
            ComplianceStatus::Pass
        } else if within_warn {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Fail
        }
    }
}

pub const LTV_LIMITS: Thresholds = Thresholds::at_most(0.80, 0.90);
pub const CREDIT_SCORE_LIMITS: Thresholds = Thresholds::at_least(700.0, 650.0);
pub const DTI_LIMITS: Thresholds = Thresholds::at_most(40.0, 50.0);
pub const EMPLOYMENT_YEARS_LIMITS: Thresholds = Thresholds::at_least(2.0, 1.0);
pub const LTI_LIMITS: Thresholds = Thresholds::at_most(5.0, 7.0);
/// Collateral value required as a multiple of the loan amount.
pub const COLLATERAL_COVERAGE_LIMITS: Thresholds = Thresholds::at_least(1.2, 1.0);

/// Published threshold table for one named check.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescriptor {
    pub parameter: &'static str,
    pub thresholds: Option<Thresholds>,
    pub guideline: &'static str,
}

/// Threshold tables for both rule sets, in evaluation order.
#[derive(Debug, Clone, Serialize)]
pub struct Rulebook {
    pub regulatory: Vec<RuleDescriptor>,
    pub policy: Vec<RuleDescriptor>,
}

pub fn rulebook() -> Rulebook {
    Rulebook {
        regulatory: vec![
            RuleDescriptor {
                parameter: LTV_RATIO,
                thresholds: Some(LTV_LIMITS),
                guideline: "RBI housing finance LTV ceiling",
            },
            RuleDescriptor {
                parameter: CREDIT_INFORMATION_REPORT,
                thresholds: Some(CREDIT_SCORE_LIMITS),
                guideline: "Credit Information Companies (Regulation) Act bureau check",
            },
            RuleDescriptor {
                parameter: KYC_COMPLIANCE,
                thresholds: None,
                guideline: "RBI KYC Master Direction; documents verified upstream",
            },
            RuleDescriptor {
                parameter: PRIORITY_SECTOR,
                thresholds: None,
                guideline: "RBI priority sector lending: agriculture, MSME, education",
            },
        ],
        policy: vec![
            RuleDescriptor {
                parameter: DEBT_TO_INCOME,
                thresholds: Some(DTI_LIMITS),
                guideline: "Bank credit policy FOIR limits (percent)",
            },
            RuleDescriptor {
                parameter: EMPLOYMENT_STABILITY,
                thresholds: Some(EMPLOYMENT_YEARS_LIMITS),
                guideline: "Bank credit policy minimum tenure (years)",
            },
            RuleDescriptor {
                parameter: LOAN_TO_INCOME,
                thresholds: Some(LTI_LIMITS),
                guideline: "Bank credit policy income multiple",
            },
            RuleDescriptor {
                parameter: COLLATERAL_COVERAGE,
                thresholds: Some(COLLATERAL_COVERAGE_LIMITS),
                guideline: "Bank credit policy security cover (multiple of loan)",
            },
        ],
    }
}

/// Run the four regulatory checks in display order.
pub fn evaluate_regulatory(
    application: &LoanApplication,
    ratios: &FinancialRatios,
) -> [ComplianceCheck; 4] {
    let ltv = ratios.loan_to_value;
    let credit_score = application.credit_score;
    let purpose = application.loan_purpose;

    let priority_status = if purpose.is_priority_sector() {
        ComplianceStatus::Pass
    } else {
        ComplianceStatus::Warning
    };
    let priority_details = if purpose.is_priority_sector() {
        format!(
            "Purpose '{}' qualifies for RBI priority sector lending",
            purpose.label()
        )
    } else {
        format!(
            "Purpose '{}' is outside RBI priority sector categories (agriculture, MSME, education)",
            purpose.label()
        )
    };

    [
        ComplianceCheck {
            parameter: LTV_RATIO.to_string(),
            status: LTV_LIMITS.classify(ltv),
            details: format!(
                "LTV {:.2}% (RBI ceiling {:.0}%, upper limit {:.0}%)",
                ltv * 100.0,
                LTV_LIMITS.pass * 100.0,
                LTV_LIMITS.warn * 100.0
            ),
        },
        ComplianceCheck {
            parameter: CREDIT_INFORMATION_REPORT.to_string(),
            status: CREDIT_SCORE_LIMITS.classify(f64::from(credit_score)),
            details: format!(
                "Credit score {:.2} (CIC bureau preferred {:.0}, minimum {:.0})",
                f64::from(credit_score),
                CREDIT_SCORE_LIMITS.pass,
                CREDIT_SCORE_LIMITS.warn
            ),
        },
        ComplianceCheck {
            parameter: KYC_COMPLIANCE.to_string(),
            status: ComplianceStatus::Pass,
            details: "KYC documents verified per RBI KYC Master Direction".to_string(),
        },
        ComplianceCheck {
            parameter: PRIORITY_SECTOR.to_string(),
            status: priority_status,
            details: priority_details,
        },
    ]
}

/// Run the four internal policy checks in display order.
pub fn evaluate_policy(
    application: &LoanApplication,
    ratios: &FinancialRatios,
) -> [ComplianceCheck; 4] {
    let coverage = application.collateral_value / application.loan_amount;

    [
        ComplianceCheck {
            parameter: DEBT_TO_INCOME.to_string(),
            status: DTI_LIMITS.classify(ratios.debt_to_income),
            details: format!(
                "DTI {:.2}% (bank policy preferred <= {:.0}%, maximum {:.0}%)",
                ratios.debt_to_income, DTI_LIMITS.pass, DTI_LIMITS.warn
            ),
        },
        ComplianceCheck {
            parameter: EMPLOYMENT_STABILITY.to_string(),
            status: EMPLOYMENT_YEARS_LIMITS.classify(application.employment_years),
            details: format!(
                "{:.2} years as {} (bank policy preferred >= {:.0} years, minimum {:.0} year)",
                application.employment_years,
                application.employment_type.label(),
                EMPLOYMENT_YEARS_LIMITS.pass,
                EMPLOYMENT_YEARS_LIMITS.warn
            ),
        },
        ComplianceCheck {
            parameter: LOAN_TO_INCOME.to_string(),
            status: LTI_LIMITS.classify(ratios.loan_to_income),
            details: format!(
                "Loan is {:.2}x annual income (bank policy preferred <= {:.0}x, maximum {:.0}x)",
                ratios.loan_to_income, LTI_LIMITS.pass, LTI_LIMITS.warn
            ),
        },
        ComplianceCheck {
            parameter: COLLATERAL_COVERAGE.to_string(),
            status: COLLATERAL_COVERAGE_LIMITS
                .classify_scaled(application.collateral_value, application.loan_amount),
            details: format!(
                "Collateral covers {:.2}x the loan (bank policy preferred >= {:.1}x, minimum {:.1}x)",
                coverage, COLLATERAL_COVERAGE_LIMITS.pass, COLLATERAL_COVERAGE_LIMITS.warn
            ),
        },
    ]
}
