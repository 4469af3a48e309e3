use crate::infra::appraisal_service;
use clap::Args;
use loan_appraisal::appraisal::{
    ApplicationCsvImporter, AppraisalResult, BatchOutcome, ComplianceCheck, EmploymentType,
    LoanApplication, LoanPurpose,
};
use loan_appraisal::config::AppConfig;
use loan_appraisal::error::AppError;
use loan_appraisal::telemetry;
use loan_appraisal::AppraisalEngine;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// CSV export of application forms, one applicant per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Reject degenerate values (zero income, out-of-range scores) at intake
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the appraisals as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the appraisals as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let AppraiseArgs { csv, strict, json } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = appraisal_service(config.appraisal, strict);
    let submissions = ApplicationCsvImporter::from_path(&csv)?;
    let outcomes = service.appraise_all(submissions);

    if json {
        print_json(&outcomes);
        return Ok(());
    }

    println!(
        "Appraised {} application(s) from {}",
        outcomes.len(),
        csv.display()
    );
    for outcome in &outcomes {
        match outcome {
            BatchOutcome::Appraised { index, appraisal } => {
                println!("\nRow {}: {}", index + 1, appraisal.applicant_name);
                render_appraisal(&appraisal.result);
            }
            BatchOutcome::Invalid { index, error } => {
                println!("\nRow {}: rejected at intake ({})", index + 1, error);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = AppraisalEngine::new();
    let appraisals: Vec<(LoanApplication, AppraisalResult)> = demo_applications()
        .into_iter()
        .map(|application| {
            let result = engine.evaluate(&application);
            (application, result)
        })
        .collect();

    if args.json {
        let results: Vec<&AppraisalResult> =
            appraisals.iter().map(|(_, result)| result).collect();
        print_json(&results);
        return Ok(());
    }

    println!("Loan appraisal demo");
    for (application, result) in &appraisals {
        println!(
            "\n{}: {} loan of {:.0} ({}, {} years, credit score {})",
            application.applicant_name,
            application.loan_purpose.label(),
            application.loan_amount,
            application.employment_type.label(),
            application.employment_years,
            application.credit_score
        );
        render_appraisal(result);
    }

    Ok(())
}

pub(crate) fn render_appraisal(result: &AppraisalResult) {
    println!("  Decision: {}", result.summary());
    println!(
        "  Risk: credit {} | collateral {} | score {:.1}",
        result.risk_assessment.credit_risk.label(),
        result.risk_assessment.collateral_risk.label(),
        result.risk_assessment.risk_score
    );

    println!("  Regulatory checks:");
    render_checks(&result.compliance.regulatory);
    println!("  Policy checks:");
    render_checks(&result.compliance.policy);

    println!("  Reasons:");
    for reason in &result.reasons {
        println!("    - {}", reason);
    }
    println!("  Recommendations:");
    for recommendation in &result.recommendations {
        println!("    - {}", recommendation);
    }
}

fn render_checks(checks: &[ComplianceCheck]) {
    for check in checks {
        println!(
            "    [{:<7}] {}: {}",
            check.status.label(),
            check.parameter,
            check.details
        );
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}

/// Reference applicants covering the approve, reject, and review outcomes.
pub(crate) fn demo_applications() -> Vec<LoanApplication> {
    vec![
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
        },
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
        },
        LoanApplication {
            applicant_name: "Meera Traders".to_string(),
            loan_amount: 5_000_000.0,
            loan_purpose: LoanPurpose::Msme,
            annual_income: 1_200_000.0,
            credit_score: 680,
            employment_type: EmploymentType::Business,
            employment_years: 1.5,
            existing_loans: 25_000.0,
            collateral_value: 6_250_000.0,
            business_vintage: Some(3.0),
            debt_to_income: None,
        },
    ]
}
