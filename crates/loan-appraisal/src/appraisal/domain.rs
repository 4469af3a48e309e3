use serde::{Deserialize, Serialize};

/// Financial facts supplied for a single loan appraisal.
///
/// The engine treats every numeric field as already verified. Range checks (positive
/// income, credit score inside 300-900) belong to the intake layer, so out-of-domain
/// values flow into the ratio and threshold tables unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant_name: String,
    pub loan_amount: f64,
    pub loan_purpose: LoanPurpose,
    pub annual_income: f64,
    pub credit_score: i32,
    pub employment_type: EmploymentType,
    pub employment_years: f64,
    /// Monthly debt service on loans already held.
    pub existing_loans: f64,
    pub collateral_value: f64,
    /// Reserved for business-loan rules; no current check reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_vintage: Option<f64>,
    /// Explicit debt-to-income percentage. `None` means derive it from existing loans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_to_income: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    Home,
    Personal,
    Business,
    Vehicle,
    Education,
    Agriculture,
    Msme,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 7] = [
        LoanPurpose::Home,
        LoanPurpose::Personal,
        LoanPurpose::Business,
        LoanPurpose::Vehicle,
        LoanPurpose::Education,
        LoanPurpose::Agriculture,
        LoanPurpose::Msme,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LoanPurpose::Home => "home",
            LoanPurpose::Personal => "personal",
            LoanPurpose::Business => "business",
            LoanPurpose::Vehicle => "vehicle",
            LoanPurpose::Education => "education",
            LoanPurpose::Agriculture => "agriculture",
            LoanPurpose::Msme => "msme",
        }
    }

    /// Purposes counted toward priority-sector lending targets.
    pub const fn is_priority_sector(self) -> bool {
        matches!(
            self,
            LoanPurpose::Agriculture | LoanPurpose::Msme | LoanPurpose::Education
        )
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.label() == normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Salaried,
    #[serde(alias = "self_employed")]
    SelfEmployed,
    Business,
    Professional,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::SelfEmployed => "self-employed",
            EmploymentType::Business => "business",
            EmploymentType::Professional => "professional",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "salaried" => Some(EmploymentType::Salaried),
            "self-employed" | "self_employed" | "selfemployed" => {
                Some(EmploymentType::SelfEmployed)
            }
            "business" => Some(EmploymentType::Business),
            "professional" => Some(EmploymentType::Professional),
            _ => None,
        }
    }
}

/// Ratios derived from the raw application before any rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    pub loan_to_income: f64,
    pub loan_to_value: f64,
    /// Percentage, e.g. `32.5` for 32.5%.
    pub debt_to_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Pass,
    Warning,
    Fail,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "PASS",
            ComplianceStatus::Warning => "WARNING",
            ComplianceStatus::Fail => "FAIL",
        }
    }

    /// Contribution of one check to the 100-point eligibility score.
    pub const fn score_weight(self) -> f64 {
        match self {
            ComplianceStatus::Pass => 12.5,
            ComplianceStatus::Warning => 6.25,
            ComplianceStatus::Fail => 0.0,
        }
    }
}

/// Outcome of a single named rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub parameter: String,
    pub status: ComplianceStatus,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            RiskBand::Low => 100.0,
            RiskBand::Medium => 65.0,
            RiskBand::High => 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub credit_risk: RiskBand,
    pub collateral_risk: RiskBand,
    pub overall_risk: RiskBand,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppraisalDecision {
    Approved,
    Rejected,
    ReviewRequired,
}

impl AppraisalDecision {
    pub const fn label(self) -> &'static str {
        match self {
            AppraisalDecision::Approved => "APPROVED",
            AppraisalDecision::Rejected => "REJECTED",
            AppraisalDecision::ReviewRequired => "REVIEW_REQUIRED",
        }
    }
}

/// Both compliance rule sets, each in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAudit {
    pub regulatory: Vec<ComplianceCheck>,
    pub policy: Vec<ComplianceCheck>,
}

impl ComplianceAudit {
    pub fn checks(&self) -> impl Iterator<Item = &ComplianceCheck> {
        self.regulatory.iter().chain(self.policy.iter())
    }

    pub fn count(&self, status: ComplianceStatus) -> usize {
        self.checks().filter(|check| check.status == status).count()
    }
}

/// Complete appraisal returned for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalResult {
    pub decision: AppraisalDecision,
    pub score: f64,
    pub reasons: Vec<String>,
    pub compliance: ComplianceAudit,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
}

impl AppraisalResult {
    pub fn summary(&self) -> String {
        format!(
            "{} (score {:.2}, overall risk {})",
            self.decision.label(),
            self.score,
            self.risk_assessment.overall_risk.label()
        )
    }
}
