use super::common::*;
use crate::appraisal::domain::RiskBand;
use crate::appraisal::ratios::derive_ratios;
use crate::appraisal::risk::{assess_risk, collateral_risk, credit_risk, overall_risk};

#[test]
fn credit_risk_cut_points() {
    assert_eq!(credit_risk(750), RiskBand::Low);
    assert_eq!(credit_risk(749), RiskBand::Medium);
    assert_eq!(credit_risk(650), RiskBand::Medium);
    assert_eq!(credit_risk(649), RiskBand::High);
    assert_eq!(credit_risk(0), RiskBand::High);
}

#[test]
fn collateral_risk_cut_points() {
    assert_eq!(collateral_risk(0.0), RiskBand::Low);
    assert_eq!(collateral_risk(0.70), RiskBand::Low);
    assert_eq!(collateral_risk(0.71), RiskBand::Medium);
    assert_eq!(collateral_risk(0.85), RiskBand::Medium);
    assert_eq!(collateral_risk(0.86), RiskBand::High);
    assert_eq!(collateral_risk(f64::NAN), RiskBand::High);
}

#[test]
fn overall_risk_cut_points() {
    assert_eq!(overall_risk(100.0), RiskBand::Low);
    assert_eq!(overall_risk(82.5), RiskBand::Low);
    assert_eq!(overall_risk(65.0), RiskBand::Medium);
    assert_eq!(overall_risk(47.5), RiskBand::High);
    assert_eq!(overall_risk(30.0), RiskBand::High);
}

#[test]
fn strong_profile_is_low_risk() {
    let application = scenario_a();
    let risk = assess_risk(&application, &derive_ratios(&application));

    assert_eq!(risk.credit_risk, RiskBand::Low);
    assert_eq!(risk.collateral_risk, RiskBand::Low);
    assert_eq!(risk.overall_risk, RiskBand::Low);
    assert_eq!(risk.risk_score, 100.0);
}

#[test]
fn weak_profile_is_high_risk() {
    let application = scenario_b();
    let risk = assess_risk(&application, &derive_ratios(&application));

    assert_eq!(risk.credit_risk, RiskBand::High);
    assert_eq!(risk.collateral_risk, RiskBand::High);
    assert_eq!(risk.overall_risk, RiskBand::High);
    assert_eq!(risk.risk_score, 30.0);
}

#[test]
fn mixed_bands_average_their_weights() {
    let mut application = scenario_a();
    application.credit_score = 700;
    let risk = assess_risk(&application, &derive_ratios(&application));
    assert_eq!(risk.risk_score, 82.5);
    assert_eq!(risk.overall_risk, RiskBand::Low);

    application.credit_score = 600;
    let risk = assess_risk(&application, &derive_ratios(&application));
    assert_eq!(risk.risk_score, 65.0);
    assert_eq!(risk.overall_risk, RiskBand::Medium);

    application.collateral_value = application.loan_amount / 0.8;
    let risk = assess_risk(&application, &derive_ratios(&application));
    assert_eq!(risk.collateral_risk, RiskBand::Medium);
    assert_eq!(risk.risk_score, 47.5);
    assert_eq!(risk.overall_risk, RiskBand::High);
}

#[test]
fn risk_ignores_compliance_only_inputs() {
    let mut application = scenario_a();
    let baseline = assess_risk(&application, &derive_ratios(&application));

    application.employment_years = 0.0;
    application.existing_loans = 10_000_000.0;
    application.annual_income = 1.0;
    let stressed = assess_risk(&application, &derive_ratios(&application));

    assert_eq!(baseline, stressed);
}
