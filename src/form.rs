// src/form.rs
use crate::types::CustomerRecord;
use anyhow::{bail, Result};
use serde::Deserialize;

// Enumerated domains, shown verbatim in the form.
pub const GENDER: &[&str] = &["Female", "Male"];
pub const YES_NO: &[&str] = &["Yes", "No"];
pub const MULTIPLE_LINES: &[&str] = &["No", "Yes", "No phone service"];
pub const INTERNET_SERVICE: &[&str] = &["DSL", "Fiber optic", "No"];
pub const INTERNET_ADDON: &[&str] = &["No", "Yes", "No internet service"];
pub const CONTRACT: &[&str] = &["Month-to-month", "One year", "Two year"];
pub const PAYMENT_METHOD: &[&str] = &[
    "Electronic check",
    "Mailed check",
    "Bank transfer (automatic)",
    "Credit card (automatic)",
];

pub const TENURE_MAX: u32 = 72;
pub const TENURE_DEFAULT: u32 = 12;
pub const MONTHLY_MAX: f64 = 150.0;
pub const MONTHLY_STEP: f64 = 5.0;
pub const MONTHLY_DEFAULT: f64 = 50.0;
pub const TOTAL_MAX: f64 = 10_000.0;
pub const TOTAL_STEP: f64 = 50.0;

/// Default for TotalCharges while the user has not touched the field.
/// Clamped so maximal tenure and monthly charges stay inside the
/// declared TotalCharges domain.
pub fn derived_total(tenure: u32, monthly_charges: f64) -> f64 {
    (f64::from(tenure) * monthly_charges).min(TOTAL_MAX)
}

/// Raw form submission for POST /predict. `total_overridden` is a hidden
/// input the page flips to true once the user edits TotalCharges.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictForm {
    pub gender: String,
    pub senior_citizen: u8,
    pub partner: String,
    pub dependents: String,
    pub tenure: u32,
    pub phone_service: String,
    pub multiple_lines: String,
    pub internet_service: String,
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
    #[serde(default)]
    pub total_overridden: bool,
}

fn check_domain(field: &str, value: &str, domain: &[&str]) -> Result<()> {
    if domain.contains(&value) {
        return Ok(());
    }
    bail!(
        "field {field}: {value:?} is not one of {}",
        domain.join(", ")
    )
}

fn check_range(field: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 || value > max {
        bail!("field {field}: {value} is outside 0..={max}");
    }
    Ok(())
}

impl PredictForm {
    /// Validates every field against its domain/range and resolves the
    /// derived TotalCharges rule, producing a complete record.
    pub fn into_record(self) -> Result<CustomerRecord> {
        check_domain("Gender", &self.gender, GENDER)?;
        if self.senior_citizen > 1 {
            bail!("field SeniorCitizen: {} is not 0 or 1", self.senior_citizen);
        }
        check_domain("Partner", &self.partner, YES_NO)?;
        check_domain("Dependents", &self.dependents, YES_NO)?;
        if self.tenure > TENURE_MAX {
            bail!("field Tenure: {} is outside 0..={TENURE_MAX}", self.tenure);
        }
        check_domain("Phone Service", &self.phone_service, YES_NO)?;
        check_domain("Multiple Lines", &self.multiple_lines, MULTIPLE_LINES)?;
        check_domain("Internet Service", &self.internet_service, INTERNET_SERVICE)?;
        check_domain("Online Security", &self.online_security, INTERNET_ADDON)?;
        check_domain("Online Backup", &self.online_backup, INTERNET_ADDON)?;
        check_domain("Device Protection", &self.device_protection, INTERNET_ADDON)?;
        check_domain("Tech Support", &self.tech_support, INTERNET_ADDON)?;
        check_domain("Streaming TV", &self.streaming_tv, INTERNET_ADDON)?;
        check_domain("Streaming Movies", &self.streaming_movies, INTERNET_ADDON)?;
        check_domain("Contract", &self.contract, CONTRACT)?;
        check_domain("Paperless Billing", &self.paperless_billing, YES_NO)?;
        check_domain("Payment Method", &self.payment_method, PAYMENT_METHOD)?;
        check_range("Monthly Charges", self.monthly_charges, MONTHLY_MAX)?;

        let total_charges = if self.total_overridden {
            self.total_charges
        } else {
            derived_total(self.tenure, self.monthly_charges)
        };
        check_range("Total Charges", total_charges, TOTAL_MAX)?;

        Ok(CustomerRecord {
            gender: self.gender,
            senior_citizen: self.senior_citizen,
            partner: self.partner,
            dependents: self.dependents,
            tenure: self.tenure,
            phone_service: self.phone_service,
            multiple_lines: self.multiple_lines,
            internet_service: self.internet_service,
            online_security: self.online_security,
            online_backup: self.online_backup,
            device_protection: self.device_protection,
            tech_support: self.tech_support,
            streaming_tv: self.streaming_tv,
            streaming_movies: self.streaming_movies,
            contract: self.contract,
            paperless_billing: self.paperless_billing,
            payment_method: self.payment_method,
            monthly_charges: self.monthly_charges,
            total_charges,
        })
    }
}
