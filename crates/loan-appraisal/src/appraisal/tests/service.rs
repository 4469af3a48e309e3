use super::common::*;
use crate::appraisal::domain::AppraisalDecision;
use crate::appraisal::intake::{FormValue, IntakeGuard, IntakeViolation};
use crate::appraisal::service::{AppraisalService, AppraisalServiceError, BatchOutcome};

#[test]
fn service_appraises_valid_submission() {
    let service = build_service();

    let envelope = service.appraise(submission()).expect("appraisal succeeds");

    assert_eq!(envelope.applicant_name, "Asha Verma");
    assert_eq!(envelope.result.decision, AppraisalDecision::Approved);
    assert_close(envelope.result.score, 93.75);
    assert_eq!(envelope.result.compliance.checks().count(), 8);
}

#[test]
fn service_surfaces_intake_violations() {
    let service = build_service();
    let mut submission = submission();
    submission.applicant_name = String::new();

    match service.appraise(submission) {
        Err(AppraisalServiceError::Intake(IntakeViolation::MissingApplicantName)) => {}
        other => panic!("expected intake violation, got {other:?}"),
    }
}

#[test]
fn strict_service_rejects_zero_income() {
    let service = AppraisalService::with_guard(IntakeGuard::strict(), settings());
    let mut submission = submission();
    submission.annual_income = Some(FormValue::from(0.0));

    assert!(matches!(
        service.appraise(submission),
        Err(AppraisalServiceError::Intake(
            IntakeViolation::NonPositiveAmount { .. }
        ))
    ));
}

#[test]
fn batch_respects_configured_limit() {
    let service = build_service();
    assert_eq!(service.max_batch(), 3);

    let oversized = vec![submission(); 4];
    match service.appraise_batch(oversized) {
        Err(AppraisalServiceError::BatchTooLarge { size, limit }) => {
            assert_eq!(size, 4);
            assert_eq!(limit, 3);
        }
        other => panic!("expected oversized batch, got {other:?}"),
    }
}

#[test]
fn appraise_all_ignores_batch_limit() {
    let service = build_service();
    let mut broken = submission();
    broken.applicant_name = String::new();
    let mut submissions = vec![submission(); 4];
    submissions.push(broken);

    let outcomes = service.appraise_all(submissions);

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes[..4]
        .iter()
        .all(|outcome| matches!(outcome, BatchOutcome::Appraised { .. })));
    assert!(matches!(
        outcomes[4],
        BatchOutcome::Invalid { index: 4, .. }
    ));
}

#[test]
fn batch_reports_each_row() {
    let service = build_service();
    let mut broken = submission();
    broken.loan_purpose = "yacht".to_string();

    let outcomes = service
        .appraise_batch(vec![submission(), broken])
        .expect("batch within limit");

    assert_eq!(outcomes.len(), 2);
    match &outcomes[0] {
        BatchOutcome::Appraised { index, appraisal } => {
            assert_eq!(*index, 0);
            assert_eq!(appraisal.result.decision, AppraisalDecision::Approved);
        }
        other => panic!("expected appraisal, got {other:?}"),
    }
    match &outcomes[1] {
        BatchOutcome::Invalid { index, error } => {
            assert_eq!(*index, 1);
            assert!(error.contains("yacht"), "error names the purpose: {error}");
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn rules_lists_both_check_groups() {
    let rules = build_service().rules();
    assert_eq!(rules.regulatory.len(), 4);
    assert_eq!(rules.policy.len(), 4);
}
