// src/artifacts.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const MODEL_FILE: &str = "churn_model.json";
pub const ENCODERS_FILE: &str = "churn_encoders.json";

/// Trained classifier seam. Batch-shaped like the offline model's API:
/// one output element per input row.
pub trait Classifier: Send + Sync {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>>;
    /// Per row: [P(class 0), P(class 1)].
    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<[f64; 2]>>;
}

/// Logistic model exported by the offline training job: one weight per
/// feature plus an intercept, class-1 probability via the sigmoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    fn score_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.weights.len() {
            bail!(
                "feature count mismatch: model expects {} features, got {}",
                self.weights.len(),
                row.len()
            );
        }
        let z = self.intercept
            + self
                .weights
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>> {
        rows.iter()
            .map(|r| Ok(u8::from(self.score_row(r)? > 0.5)))
            .collect()
    }

    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<[f64; 2]>> {
        rows.iter()
            .map(|r| {
                let p1 = self.score_row(r)?;
                Ok([1.0 - p1, p1])
            })
            .collect()
    }
}

/// Categorical value -> integer code, with the vocabulary fixed at training
/// time. Codes are positions in `classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn transform(&self, value: &str) -> Result<f64> {
        match self.classes.iter().position(|c| c == value) {
            Some(code) => Ok(code as f64),
            None => bail!(
                "unknown category {value:?} (known: {})",
                self.classes.join(", ")
            ),
        }
    }
}

pub struct Artifacts {
    pub classifier: Box<dyn Classifier>,
    pub encoders: HashMap<String, CategoryEncoder>,
}

impl Artifacts {
    pub fn load(dir: &Path) -> Result<Self> {
        let model_path = dir.join(MODEL_FILE);
        let raw = std::fs::read_to_string(&model_path)
            .with_context(|| format!("reading {}", model_path.display()))?;
        let model: LogisticModel =
            serde_json::from_str(&raw).with_context(|| format!("parsing {MODEL_FILE}"))?;

        let enc_path = dir.join(ENCODERS_FILE);
        let raw = std::fs::read_to_string(&enc_path)
            .with_context(|| format!("reading {}", enc_path.display()))?;
        let encoders: HashMap<String, CategoryEncoder> =
            serde_json::from_str(&raw).with_context(|| format!("parsing {ENCODERS_FILE}"))?;

        Ok(Self {
            classifier: Box::new(model),
            encoders,
        })
    }
}

/// Load-once artifact state, decided at startup and shared read-only.
/// A failed load keeps the process alive; every route renders the reason.
pub enum ArtifactState {
    Ready(Artifacts),
    Unavailable(String),
}

impl ArtifactState {
    pub fn load(dir: &Path) -> Self {
        match Artifacts::load(dir) {
            Ok(a) => {
                tracing::info!(dir = %dir.display(), encoders = a.encoders.len(), "model artifacts loaded");
                ArtifactState::Ready(a)
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "model artifacts unavailable");
                ArtifactState::Unavailable(format!(
                    "Model files not found ({e}). Run the offline training job to produce {MODEL_FILE} and {ENCODERS_FILE}, then restart."
                ))
            }
        }
    }
}
