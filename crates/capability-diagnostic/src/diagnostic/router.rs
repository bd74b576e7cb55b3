use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::domain::{score_label, DomainKey, DOMAINS};
use super::export::{render_export, DiagnosticReportView};
use super::input::{DiagnosticInput, InputError};
use super::{DiagnosticEngine, DiagnosticResult};
use crate::config::ReportConfig;
use crate::error::AppError;

/// Router builder exposing the diagnostic over HTTP.
pub fn diagnostic_router(config: ReportConfig) -> Router {
    Router::new()
        .route("/api/v1/diagnostic/evaluate", post(evaluate_handler))
        .route("/api/v1/diagnostic/export", post(export_handler))
        .route("/api/v1/diagnostic/domains", get(domains_handler))
        .with_state(Arc::new(config))
}

fn run_engine(input: &DiagnosticInput) -> Result<DiagnosticResult, InputError> {
    let result = DiagnosticEngine::new().evaluate(input)?;
    info!(
        band = result.band.label(),
        average = result.average_score,
        signals = result.signals.len(),
        "diagnostic evaluated"
    );
    Ok(result)
}

pub(crate) async fn evaluate_handler(
    Json(input): Json<DiagnosticInput>,
) -> Result<Json<DiagnosticReportView>, AppError> {
    let result = run_engine(&input)?;
    Ok(Json(DiagnosticReportView::new(&input, &result)))
}

pub(crate) async fn export_handler(
    State(config): State<Arc<ReportConfig>>,
    Json(input): Json<DiagnosticInput>,
) -> Result<Response, AppError> {
    let result = run_engine(&input)?;
    let text = render_export(&input, &result, Utc::now(), &config.framework_edition);
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
struct ScaleEntry {
    score: i32,
    label: &'static str,
}

pub(crate) async fn domains_handler() -> Json<serde_json::Value> {
    let scale: Vec<ScaleEntry> = (0..=4)
        .map(|score| ScaleEntry {
            score,
            label: score_label(score),
        })
        .collect();

    Json(json!({
        "domains": DOMAINS,
        "order": DomainKey::ordered(),
        "scale": scale,
    }))
}
