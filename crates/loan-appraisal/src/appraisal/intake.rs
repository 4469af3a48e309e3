use serde::{Deserialize, Serialize};

use super::domain::{EmploymentType, LoanApplication, LoanPurpose};
use crate::config::AppraisalSettings;

const CREDIT_SCORE_FLOOR: i32 = 300;
const CREDIT_SCORE_CEILING: i32 = 900;

/// A numeric form field as typed: either a JSON number or raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Raw application form payload before coercion and validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub loan_amount: Option<FormValue>,
    #[serde(default)]
    pub loan_purpose: String,
    #[serde(default)]
    pub annual_income: Option<FormValue>,
    #[serde(default)]
    pub credit_score: Option<FormValue>,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub employment_years: Option<FormValue>,
    #[serde(default)]
    pub existing_loans: Option<FormValue>,
    #[serde(default)]
    pub collateral_value: Option<FormValue>,
    #[serde(default)]
    pub business_vintage: Option<FormValue>,
    #[serde(default)]
    pub debt_to_income: Option<FormValue>,
}

/// Validation errors raised before an application reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("applicant name is required")]
    MissingApplicantName,
    #[error("{field} must be a finite number, found '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown loan purpose '{0}'")]
    UnknownLoanPurpose(String),
    #[error("unknown employment type '{0}'")]
    UnknownEmploymentType(String),
    #[error("{field} must be greater than zero, found {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },
    #[error("{field} cannot be negative, found {value}")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("credit score {0} outside bureau range 300-900")]
    CreditScoreOutOfRange(i32),
}

/// Controls how much validation intake performs beyond coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntakePolicy {
    /// Reject degenerate values (zero income, out-of-range scores) instead of passing
    /// them through to the engine.
    pub strict: bool,
}

impl From<&AppraisalSettings> for IntakePolicy {
    fn from(settings: &AppraisalSettings) -> Self {
        Self {
            strict: settings.strict_intake,
        }
    }
}

/// Guard responsible for producing `LoanApplication` instances from form payloads.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::with_policy(IntakePolicy { strict: true })
    }

    pub fn from_settings(settings: &AppraisalSettings) -> Self {
        Self::with_policy(IntakePolicy::from(settings))
    }

    pub fn policy(&self) -> IntakePolicy {
        self.policy
    }

    /// Coerce and validate a submission. Unset numeric fields default to zero.
    pub fn application_from_submission(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<LoanApplication, IntakeViolation> {
        let applicant_name = submission.applicant_name.trim().to_string();
        if applicant_name.is_empty() {
            return Err(IntakeViolation::MissingApplicantName);
        }

        let loan_purpose = LoanPurpose::parse(&submission.loan_purpose)
            .ok_or_else(|| IntakeViolation::UnknownLoanPurpose(submission.loan_purpose.clone()))?;
        let employment_type = EmploymentType::parse(&submission.employment_type).ok_or_else(
            || IntakeViolation::UnknownEmploymentType(submission.employment_type.clone()),
        )?;

        let loan_amount = required_number("loan_amount", submission.loan_amount.as_ref())?;
        let annual_income = required_number("annual_income", submission.annual_income.as_ref())?;
        let credit_score = required_number("credit_score", submission.credit_score.as_ref())?;
        let employment_years =
            required_number("employment_years", submission.employment_years.as_ref())?;
        let existing_loans =
            required_number("existing_loans", submission.existing_loans.as_ref())?;
        let collateral_value =
            required_number("collateral_value", submission.collateral_value.as_ref())?;
        let business_vintage =
            optional_number("business_vintage", submission.business_vintage.as_ref())?;
        let debt_to_income =
            optional_number("debt_to_income", submission.debt_to_income.as_ref())?;

        // Float-to-int `as` saturates, so absurd inputs clamp rather than wrap.
        let credit_score = credit_score.trunc() as i32;

        if self.policy.strict {
            for (field, value) in [("loan_amount", loan_amount), ("annual_income", annual_income)] {
                if value <= 0.0 {
                    return Err(IntakeViolation::NonPositiveAmount { field, value });
                }
            }

            let non_negative = [
                ("employment_years", Some(employment_years)),
                ("existing_loans", Some(existing_loans)),
                ("collateral_value", Some(collateral_value)),
                ("business_vintage", business_vintage),
                ("debt_to_income", debt_to_income),
            ];
            for (field, value) in non_negative {
                if let Some(value) = value.filter(|value| *value < 0.0) {
                    return Err(IntakeViolation::NegativeAmount { field, value });
                }
            }

            if !(CREDIT_SCORE_FLOOR..=CREDIT_SCORE_CEILING).contains(&credit_score) {
                return Err(IntakeViolation::CreditScoreOutOfRange(credit_score));
            }
        }

        Ok(LoanApplication {
            applicant_name,
            loan_amount,
            loan_purpose,
            annual_income,
            credit_score,
            employment_type,
            employment_years,
            existing_loans,
            collateral_value,
            business_vintage,
            debt_to_income,
        })
    }
}

fn required_number(
    field: &'static str,
    value: Option<&FormValue>,
) -> Result<f64, IntakeViolation> {
    Ok(optional_number(field, value)?.unwrap_or(0.0))
}

fn optional_number(
    field: &'static str,
    value: Option<&FormValue>,
) -> Result<Option<f64>, IntakeViolation> {
    let parsed = match value {
        None => return Ok(None),
        Some(FormValue::Number(number)) => *number,
        Some(FormValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .replace(',', "")
                .parse::<f64>()
                .map_err(|_| IntakeViolation::InvalidNumber {
                    field,
                    value: text.clone(),
                })?
        }
    };

    if !parsed.is_finite() {
        return Err(IntakeViolation::InvalidNumber {
            field,
            value: parsed.to_string(),
        });
    }

    Ok(Some(parsed))
}
