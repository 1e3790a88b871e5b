use anyhow::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::artifacts::{Artifacts, CategoryEncoder, Classifier};

/// Classifier that always answers with a fixed distribution and counts
/// how often it is invoked.
pub struct FakeClassifier {
    pub proba: [f64; 2],
    pub calls: Arc<AtomicUsize>,
}

impl FakeClassifier {
    pub fn new(proba: [f64; 2]) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                proba,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Classifier for FakeClassifier {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![u8::from(self.proba[1] > 0.5); rows.len()])
    }

    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<[f64; 2]>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![self.proba; rows.len()])
    }
}

/// Encoder set matching the vocabularies the form offers.
pub fn telco_encoders() -> HashMap<String, CategoryEncoder> {
    let mut m = HashMap::new();
    m.insert(
        "MultipleLines".to_string(),
        CategoryEncoder::new(vec!["No".into(), "No phone service".into(), "Yes".into()]),
    );
    m.insert(
        "InternetService".to_string(),
        CategoryEncoder::new(vec!["DSL".into(), "Fiber optic".into(), "No".into()]),
    );
    for col in [
        "OnlineSecurity",
        "OnlineBackup",
        "DeviceProtection",
        "TechSupport",
        "StreamingTV",
        "StreamingMovies",
    ] {
        m.insert(
            col.to_string(),
            CategoryEncoder::new(vec![
                "No".into(),
                "No internet service".into(),
                "Yes".into(),
            ]),
        );
    }
    m.insert(
        "Contract".to_string(),
        CategoryEncoder::new(vec![
            "Month-to-month".into(),
            "One year".into(),
            "Two year".into(),
        ]),
    );
    m.insert(
        "PaymentMethod".to_string(),
        CategoryEncoder::new(vec![
            "Bank transfer (automatic)".into(),
            "Credit card (automatic)".into(),
            "Electronic check".into(),
            "Mailed check".into(),
        ]),
    );
    m
}

pub fn artifacts_with(classifier: impl Classifier + 'static) -> Artifacts {
    Artifacts {
        classifier: Box::new(classifier),
        encoders: telco_encoders(),
    }
}

/// Urlencoded body for POST /predict; overrides patch individual fields.
pub fn form_body(overrides: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(&str, String)> = vec![
        ("gender", "Female".into()),
        ("senior_citizen", "0".into()),
        ("partner", "No".into()),
        ("dependents", "No".into()),
        ("tenure", "1".into()),
        ("phone_service", "Yes".into()),
        ("multiple_lines", "No".into()),
        ("internet_service", "Fiber optic".into()),
        ("online_security", "No".into()),
        ("online_backup", "No".into()),
        ("device_protection", "No".into()),
        ("tech_support", "No".into()),
        ("streaming_tv", "No".into()),
        ("streaming_movies", "No".into()),
        ("contract", "Month-to-month".into()),
        ("paperless_billing", "Yes".into()),
        ("payment_method", "Electronic check".into()),
        ("monthly_charges", "70.0".into()),
        ("total_charges", "70.0".into()),
        ("total_overridden", "true".into()),
    ];
    for (key, value) in overrides {
        if let Some(pair) = pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = (*value).to_string();
        }
    }
    serde_urlencoded::to_string(&pairs).unwrap()
}
