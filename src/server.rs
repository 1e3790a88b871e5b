// src/server.rs
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;

use crate::artifacts::{ArtifactState, Artifacts};
use crate::encode::encode_record;
use crate::form::PredictForm;
use crate::predict::predict_one;
use crate::render;
use crate::types::ChurnLabel;

pub struct Engine {
    pub artifacts: ArtifactState,
}

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .with_state(engine)
}

async fn index(State(engine): State<Arc<Engine>>) -> Html<String> {
    match &engine.artifacts {
        ArtifactState::Ready(_) => Html(render::form_page()),
        ArtifactState::Unavailable(reason) => Html(render::unavailable_page(reason)),
    }
}

async fn predict(
    State(engine): State<Arc<Engine>>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> Html<String> {
    let artifacts = match &engine.artifacts {
        ArtifactState::Ready(a) => a,
        ArtifactState::Unavailable(reason) => return Html(render::unavailable_page(reason)),
    };
    // malformed submissions get the same in-page error as any other failure
    let Form(form) = match form {
        Ok(f) => f,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "malformed form submission");
            return Html(render::error_page(&rejection.body_text()));
        }
    };
    match handle_predict(artifacts, form) {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "prediction request failed");
            Html(render::error_page(&format!("{e:#}")))
        }
    }
}

// collect -> validate -> encode -> infer -> render, one linear pass.
fn handle_predict(artifacts: &Artifacts, form: PredictForm) -> anyhow::Result<String> {
    let record = form.into_record()?;
    let features = encode_record(&record, &artifacts.encoders)?;
    let prediction = predict_one(artifacts.classifier.as_ref(), features)?;
    tracing::info!(
        churn = prediction.label == ChurnLabel::Churn,
        p_churn = prediction.proba[1],
        risk = %prediction.risk,
        "prediction served"
    );
    Ok(render::result_page(&record, &prediction))
}

pub async fn run_server(engine: Engine, addr: &str) -> anyhow::Result<()> {
    let app = router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
