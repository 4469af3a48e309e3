use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::appraisal::domain::{
    ComplianceCheck, ComplianceStatus, EmploymentType, LoanApplication, LoanPurpose,
};
use crate::appraisal::intake::{ApplicationSubmission, FormValue};
use crate::appraisal::{appraisal_router, AppraisalService};
use crate::config::AppraisalSettings;

/// Strong salaried home-loan applicant: every check passes except priority sector.
pub(super) fn scenario_a() -> LoanApplication {
    LoanApplication {
        applicant_name: "Asha Verma".to_string(),
        loan_amount: 4_000_000.0,
        loan_purpose: LoanPurpose::Home,
        annual_income: 1_500_000.0,
        credit_score: 800,
        employment_type: EmploymentType::Salaried,
        employment_years: 5.0,
        existing_loans: 10_000.0,
        collateral_value: 6_000_000.0,
        business_vintage: None,
        debt_to_income: None,
    }
}

pub(super) fn scenario_b() -> LoanApplication {
    LoanApplication {
        applicant_name: "Ravi Kulkarni".to_string(),
        loan_amount: 9_000_000.0,
        loan_purpose: LoanPurpose::Personal,
        annual_income: 1_000_000.0,
        credit_score: 600,
        employment_type: EmploymentType::SelfEmployed,
        employment_years: 0.5,
        existing_loans: 40_000.0,
        collateral_value: 5_000_000.0,
        business_vintage: None,
        debt_to_income: None,
    }
}

pub(super) fn scenario_c() -> LoanApplication {
    LoanApplication {
        applicant_name: "Meera Traders".to_string(),
        loan_amount: 5_000_000.0,
        loan_purpose: LoanPurpose::Msme,
        annual_income: 1_200_000.0,
        credit_score: 680,
        employment_type: EmploymentType::Business,
        employment_years: 1.5,
        existing_loans: 25_000.0,
        collateral_value: 5_500_000.0,
        business_vintage: Some(3.0),
        debt_to_income: None,
    }
}

pub(super) fn check(status: ComplianceStatus) -> ComplianceCheck {
    ComplianceCheck {
        parameter: "Synthetic".to_string(),
        status,
        details: String::new(),
    }
}

pub(super) fn checks(statuses: &[ComplianceStatus]) -> Vec<ComplianceCheck> {
    statuses.iter().copied().map(check).collect()
}

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        applicant_name: "  Asha Verma ".to_string(),
        loan_amount: Some(FormValue::from("4,000,000")),
        loan_purpose: "Home".to_string(),
        annual_income: Some(FormValue::from(1_500_000.0)),
        credit_score: Some(FormValue::from("800")),
        employment_type: "salaried".to_string(),
        employment_years: Some(FormValue::from("5")),
        existing_loans: Some(FormValue::from(10_000.0)),
        collateral_value: Some(FormValue::from("6000000")),
        business_vintage: None,
        debt_to_income: Some(FormValue::from("")),
    }
}

pub(super) fn settings() -> AppraisalSettings {
    AppraisalSettings {
        max_batch: 3,
        strict_intake: false,
    }
}

pub(super) fn build_service() -> AppraisalService {
    AppraisalService::new(settings())
}

pub(super) fn build_router() -> axum::Router {
    appraisal_router(Arc::new(build_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
