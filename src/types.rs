use serde::{Deserialize, Serialize};
use std::fmt;

/// One customer's raw attributes, exactly as collected from the form.
/// Built fresh per prediction request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub gender: String,            // "Female" | "Male"
    pub senior_citizen: u8,        // 0 | 1
    pub partner: String,           // "Yes" | "No"
    pub dependents: String,
    pub tenure: u32,               // months, 0..=72
    pub phone_service: String,
    pub multiple_lines: String,
    pub internet_service: String,  // "DSL" | "Fiber optic" | "No"
    pub online_security: String,
    pub online_backup: String,
    pub device_protection: String,
    pub tech_support: String,
    pub streaming_tv: String,
    pub streaming_movies: String,
    pub contract: String,
    pub paperless_billing: String,
    pub payment_method: String,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnLabel {
    Stay,
    Churn,
}

impl ChurnLabel {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            ChurnLabel::Churn
        } else {
            ChurnLabel::Stay
        }
    }
}

/// Coarse bucketing of the churn probability for user-facing display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: ChurnLabel,
    /// [P(stay), P(churn)]
    pub proba: [f64; 2],
    pub confidence: f64,
    pub risk: RiskTier,
}
