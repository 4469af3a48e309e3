use super::common::*;
use crate::appraisal::domain::{EmploymentType, LoanPurpose};
use crate::appraisal::intake::{FormValue, IntakeGuard, IntakePolicy, IntakeViolation};

#[test]
fn guard_coerces_form_text() {
    let application = IntakeGuard::default()
        .application_from_submission(submission())
        .expect("submission is valid");

    assert_eq!(application.applicant_name, "Asha Verma");
    assert_eq!(application.loan_amount, 4_000_000.0);
    assert_eq!(application.loan_purpose, LoanPurpose::Home);
    assert_eq!(application.credit_score, 800);
    assert_eq!(application.employment_years, 5.0);
    assert_eq!(application.collateral_value, 6_000_000.0);
    assert_eq!(application.debt_to_income, None, "blank DTI means derive");
    assert_eq!(application.business_vintage, None);
}

#[test]
fn guard_defaults_unset_numbers_to_zero() {
    let mut submission = submission();
    submission.existing_loans = None;
    submission.employment_years = Some(FormValue::from("   "));

    let application = IntakeGuard::default()
        .application_from_submission(submission)
        .expect("submission is valid");

    assert_eq!(application.existing_loans, 0.0);
    assert_eq!(application.employment_years, 0.0);
}

#[test]
fn guard_keeps_explicit_zero_debt_to_income() {
    let mut submission = submission();
    submission.debt_to_income = Some(FormValue::from("0"));

    let application = IntakeGuard::default()
        .application_from_submission(submission)
        .expect("submission is valid");

    assert_eq!(application.debt_to_income, Some(0.0));
}

#[test]
fn guard_requires_applicant_name() {
    let mut submission = submission();
    submission.applicant_name = "   ".to_string();

    match IntakeGuard::default().application_from_submission(submission) {
        Err(IntakeViolation::MissingApplicantName) => {}
        other => panic!("expected missing applicant name, got {other:?}"),
    }
}

#[test]
fn guard_rejects_unknown_tags() {
    let mut submission = submission();
    submission.loan_purpose = "yacht".to_string();
    match IntakeGuard::default().application_from_submission(submission) {
        Err(IntakeViolation::UnknownLoanPurpose(purpose)) => assert_eq!(purpose, "yacht"),
        other => panic!("expected unknown purpose, got {other:?}"),
    }

    let mut submission = super::common::submission();
    submission.employment_type = "freelance".to_string();
    assert!(matches!(
        IntakeGuard::default().application_from_submission(submission),
        Err(IntakeViolation::UnknownEmploymentType(_))
    ));
}

#[test]
fn guard_accepts_employment_aliases() {
    for raw in ["self-employed", "Self_Employed", "SELFEMPLOYED"] {
        let mut submission = submission();
        submission.employment_type = raw.to_string();
        let application = IntakeGuard::default()
            .application_from_submission(submission)
            .expect("alias accepted");
        assert_eq!(application.employment_type, EmploymentType::SelfEmployed);
    }
}

#[test]
fn guard_rejects_unparseable_and_non_finite_numbers() {
    let mut submission = submission();
    submission.annual_income = Some(FormValue::from("fifteen lakh"));
    match IntakeGuard::default().application_from_submission(submission) {
        Err(IntakeViolation::InvalidNumber { field, value }) => {
            assert_eq!(field, "annual_income");
            assert_eq!(value, "fifteen lakh");
        }
        other => panic!("expected invalid number, got {other:?}"),
    }

    let mut submission = super::common::submission();
    submission.collateral_value = Some(FormValue::from("NaN"));
    assert!(matches!(
        IntakeGuard::default().application_from_submission(submission),
        Err(IntakeViolation::InvalidNumber {
            field: "collateral_value",
            ..
        })
    ));
}

#[test]
fn permissive_guard_passes_degenerate_values_through() {
    let mut submission = submission();
    submission.annual_income = Some(FormValue::from(0.0));
    submission.credit_score = Some(FormValue::from(950.0));

    let application = IntakeGuard::default()
        .application_from_submission(submission)
        .expect("permissive intake accepts degenerate values");

    assert_eq!(application.annual_income, 0.0);
    assert_eq!(application.credit_score, 950);
}

#[test]
fn strict_guard_rejects_degenerate_values() {
    let guard = IntakeGuard::strict();
    assert_eq!(guard.policy(), IntakePolicy { strict: true });

    let mut submission = submission();
    submission.annual_income = None;
    match guard.application_from_submission(submission) {
        Err(IntakeViolation::NonPositiveAmount { field, value }) => {
            assert_eq!(field, "annual_income");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected non-positive income, got {other:?}"),
    }

    let mut submission = super::common::submission();
    submission.existing_loans = Some(FormValue::from(-5.0));
    assert!(matches!(
        guard.application_from_submission(submission),
        Err(IntakeViolation::NegativeAmount {
            field: "existing_loans",
            ..
        })
    ));

    let mut submission = super::common::submission();
    submission.credit_score = Some(FormValue::from("250"));
    assert_eq!(
        guard.application_from_submission(submission),
        Err(IntakeViolation::CreditScoreOutOfRange(250))
    );
}
