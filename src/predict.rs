// src/predict.rs
use crate::artifacts::Classifier;
use crate::types::{ChurnLabel, Prediction, RiskTier};
use anyhow::{Context, Result};

/// Strict thresholds: >0.7 High, >0.4 Medium, else Low.
pub fn risk_tier(p_churn: f64) -> RiskTier {
    if p_churn > 0.7 {
        RiskTier::High
    } else if p_churn > 0.4 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Runs the classifier on a single encoded row and derives the
/// user-facing quantities. Classifier failures propagate; the caller
/// renders them as a request-level error.
pub fn predict_one(classifier: &dyn Classifier, features: Vec<f64>) -> Result<Prediction> {
    let rows = vec![features];
    let labels = classifier.predict(&rows).context("classifier predict")?;
    let probas = classifier
        .predict_proba(&rows)
        .context("classifier predict_proba")?;

    let class = *labels.first().context("classifier returned no label")?;
    let proba = *probas
        .first()
        .context("classifier returned no probabilities")?;

    Ok(Prediction {
        label: ChurnLabel::from_class(class),
        proba,
        confidence: proba[0].max(proba[1]),
        risk: risk_tier(proba[1]),
    })
}
