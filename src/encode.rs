// src/encode.rs
use crate::artifacts::CategoryEncoder;
use crate::types::CustomerRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Feature order the classifier was trained on. Column names match the
/// training data; encoders are keyed by these names.
pub const FEATURE_NAMES: [&str; 19] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
];

pub const GENDER_MAP: &[(&str, f64)] = &[("Male", 1.0), ("Female", 0.0)];
pub const YES_NO_MAP: &[(&str, f64)] = &[("Yes", 1.0), ("No", 0.0)];

/// How one field becomes a number. Every field is exactly one of these.
enum Encoding<'a> {
    /// Already numeric.
    Passthrough(f64),
    /// Fixed two-value map.
    BinaryMap(&'static [(&'static str, f64)], &'a str),
    /// Loaded per-column encoder.
    Categorical(&'a str),
}

/// Full encoding plan for a record, in `FEATURE_NAMES` order. Static per
/// field, so every field's handling is known and exhaustive by construction.
fn field_plan(r: &CustomerRecord) -> [(&'static str, Encoding<'_>); 19] {
    use Encoding::*;
    [
        ("gender", BinaryMap(GENDER_MAP, &r.gender)),
        ("SeniorCitizen", Passthrough(f64::from(r.senior_citizen))),
        ("Partner", BinaryMap(YES_NO_MAP, &r.partner)),
        ("Dependents", BinaryMap(YES_NO_MAP, &r.dependents)),
        ("tenure", Passthrough(f64::from(r.tenure))),
        ("PhoneService", BinaryMap(YES_NO_MAP, &r.phone_service)),
        ("MultipleLines", Categorical(&r.multiple_lines)),
        ("InternetService", Categorical(&r.internet_service)),
        ("OnlineSecurity", Categorical(&r.online_security)),
        ("OnlineBackup", Categorical(&r.online_backup)),
        ("DeviceProtection", Categorical(&r.device_protection)),
        ("TechSupport", Categorical(&r.tech_support)),
        ("StreamingTV", Categorical(&r.streaming_tv)),
        ("StreamingMovies", Categorical(&r.streaming_movies)),
        ("Contract", Categorical(&r.contract)),
        ("PaperlessBilling", BinaryMap(YES_NO_MAP, &r.paperless_billing)),
        ("PaymentMethod", Categorical(&r.payment_method)),
        ("MonthlyCharges", Passthrough(r.monthly_charges)),
        ("TotalCharges", Passthrough(r.total_charges)),
    ]
}

/// Maps a record to the numeric feature vector the classifier expects.
/// Deterministic; rejects out-of-vocabulary values before any inference.
pub fn encode_record(
    record: &CustomerRecord,
    encoders: &HashMap<String, CategoryEncoder>,
) -> Result<Vec<f64>> {
    let mut features = Vec::with_capacity(FEATURE_NAMES.len());
    for (name, encoding) in field_plan(record) {
        let value = match encoding {
            Encoding::Passthrough(v) => v,
            Encoding::BinaryMap(map, raw) => map
                .iter()
                .find(|(k, _)| *k == raw)
                .map(|(_, v)| *v)
                .with_context(|| format!("field {name}: no binary mapping for {raw:?}"))?,
            Encoding::Categorical(raw) => encoders
                .get(name)
                .with_context(|| format!("no encoder loaded for column {name}"))?
                .transform(raw)
                .with_context(|| format!("field {name}"))?,
        };
        features.push(value);
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::CategoryEncoder;

    fn test_encoders() -> HashMap<String, CategoryEncoder> {
        let mut m = HashMap::new();
        let addon = || {
            CategoryEncoder::new(vec![
                "No".into(),
                "No internet service".into(),
                "Yes".into(),
            ])
        };
        m.insert(
            "MultipleLines".into(),
            CategoryEncoder::new(vec!["No".into(), "No phone service".into(), "Yes".into()]),
        );
        m.insert(
            "InternetService".into(),
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
            m.insert(col.into(), addon());
        }
        m.insert(
            "Contract".into(),
            CategoryEncoder::new(vec![
                "Month-to-month".into(),
                "One year".into(),
                "Two year".into(),
            ]),
        );
        m.insert(
            "PaymentMethod".into(),
            CategoryEncoder::new(vec![
                "Bank transfer (automatic)".into(),
                "Credit card (automatic)".into(),
                "Electronic check".into(),
                "Mailed check".into(),
            ]),
        );
        m
    }

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            gender: "Female".into(),
            senior_citizen: 0,
            partner: "No".into(),
            dependents: "No".into(),
            tenure: 1,
            phone_service: "Yes".into(),
            multiple_lines: "No".into(),
            internet_service: "Fiber optic".into(),
            online_security: "No".into(),
            online_backup: "No".into(),
            device_protection: "No".into(),
            tech_support: "No".into(),
            streaming_tv: "No".into(),
            streaming_movies: "No".into(),
            contract: "Month-to-month".into(),
            paperless_billing: "Yes".into(),
            payment_method: "Electronic check".into(),
            monthly_charges: 70.0,
            total_charges: 70.0,
        }
    }

    #[test]
    fn binary_maps_are_exact() {
        let encoders = test_encoders();
        let mut rec = sample_record();
        rec.gender = "Male".into();
        rec.partner = "Yes".into();
        rec.dependents = "Yes".into();
        rec.phone_service = "No".into();
        rec.paperless_billing = "No".into();
        let v = encode_record(&rec, &encoders).unwrap();
        assert_eq!(v[0], 1.0); // gender Male
        assert_eq!(v[2], 1.0); // Partner Yes
        assert_eq!(v[3], 1.0); // Dependents Yes
        assert_eq!(v[5], 0.0); // PhoneService No
        assert_eq!(v[15], 0.0); // PaperlessBilling No
    }

    #[test]
    fn sample_record_encodes_as_expected() {
        let v = encode_record(&sample_record(), &test_encoders()).unwrap();
        assert_eq!(v.len(), 19);
        assert_eq!(v[0], 0.0); // gender Female
        assert_eq!(v[1], 0.0); // SeniorCitizen
        assert_eq!(v[2], 0.0); // Partner No
        assert_eq!(v[3], 0.0); // Dependents No
        assert_eq!(v[4], 1.0); // tenure
        assert_eq!(v[5], 1.0); // PhoneService Yes
        assert_eq!(v[7], 1.0); // InternetService "Fiber optic"
        assert_eq!(v[14], 0.0); // Contract "Month-to-month"
        assert_eq!(v[15], 1.0); // PaperlessBilling Yes
        assert_eq!(v[16], 2.0); // PaymentMethod "Electronic check"
        assert_eq!(v[17], 70.0);
        assert_eq!(v[18], 70.0);
    }

    #[test]
    fn encoding_is_deterministic() {
        let encoders = test_encoders();
        let rec = sample_record();
        assert_eq!(
            encode_record(&rec, &encoders).unwrap(),
            encode_record(&rec, &encoders).unwrap()
        );
    }

    #[test]
    fn out_of_vocabulary_value_is_rejected_with_field_and_value() {
        let encoders = test_encoders();
        let mut rec = sample_record();
        rec.internet_service = "Satellite".into();
        let err = encode_record(&rec, &encoders).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("InternetService"));
        assert!(msg.contains("Satellite"));
    }

    #[test]
    fn missing_encoder_is_rejected() {
        let mut encoders = test_encoders();
        encoders.remove("Contract");
        let err = encode_record(&sample_record(), &encoders).unwrap_err();
        assert!(err.to_string().contains("Contract"));
    }
}
