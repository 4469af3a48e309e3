use super::domain::{FinancialRatios, LoanApplication};

/// Derive the loan-to-income, loan-to-value, and debt-to-income ratios.
///
/// Zero income is not special-cased: the division yields an infinite or NaN ratio that
/// the threshold tables then classify. Zero collateral reports an LTV of zero.
pub fn derive_ratios(application: &LoanApplication) -> FinancialRatios {
    let loan_to_income = application.loan_amount / application.annual_income;

    let loan_to_value = if application.collateral_value > 0.0 {
        application.loan_amount / application.collateral_value
    } else {
        0.0
    };

    let debt_to_income = application
        .debt_to_income
        .unwrap_or_else(|| (application.existing_loans / application.annual_income) * 100.0);

    FinancialRatios {
        loan_to_income,
        loan_to_value,
        debt_to_income,
    }
}
