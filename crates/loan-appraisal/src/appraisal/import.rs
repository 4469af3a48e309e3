use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::intake::{ApplicationSubmission, FormValue};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read application export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid application CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads exported application forms (one row per applicant) into submissions.
pub struct ApplicationCsvImporter;

impl ApplicationCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicationSubmission>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicationSubmission>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut submissions = Vec::new();
        for record in csv_reader.deserialize::<ApplicationRow>() {
            submissions.push(record?.into_submission());
        }

        Ok(submissions)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(rename = "Applicant Name")]
    applicant_name: String,
    #[serde(rename = "Loan Amount", default, deserialize_with = "empty_string_as_none")]
    loan_amount: Option<String>,
    #[serde(rename = "Loan Purpose")]
    loan_purpose: String,
    #[serde(rename = "Annual Income", default, deserialize_with = "empty_string_as_none")]
    annual_income: Option<String>,
    #[serde(rename = "Credit Score", default, deserialize_with = "empty_string_as_none")]
    credit_score: Option<String>,
    #[serde(rename = "Employment Type")]
    employment_type: String,
    #[serde(
        rename = "Employment Years",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    employment_years: Option<String>,
    #[serde(
        rename = "Existing Loans",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    existing_loans: Option<String>,
    #[serde(
        rename = "Collateral Value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    collateral_value: Option<String>,
    #[serde(
        rename = "Business Vintage",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    business_vintage: Option<String>,
    #[serde(
        rename = "Debt To Income",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    debt_to_income: Option<String>,
}

impl ApplicationRow {
    fn into_submission(self) -> ApplicationSubmission {
        ApplicationSubmission {
            applicant_name: self.applicant_name,
            loan_amount: self.loan_amount.map(FormValue::Text),
            loan_purpose: self.loan_purpose,
            annual_income: self.annual_income.map(FormValue::Text),
            credit_score: self.credit_score.map(FormValue::Text),
            employment_type: self.employment_type,
            employment_years: self.employment_years.map(FormValue::Text),
            existing_loans: self.existing_loans.map(FormValue::Text),
            collateral_value: self.collateral_value.map(FormValue::Text),
            business_vintage: self.business_vintage.map(FormValue::Text),
            debt_to_income: self.debt_to_income.map(FormValue::Text),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
