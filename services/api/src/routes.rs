use crate::infra::{record_classification, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use risk_auditor::classification::{assess, normalize, unrecognized_fields, ClassificationResult};
use risk_auditor::error::AppError;
use risk_auditor::report::{render_text_report, sanitize_file_name, ReportOptions};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DownloadQuery {
    #[serde(rename = "fileName")]
    pub(crate) file_name: Option<String>,
}

/// Classification endpoints, mounted at the root and under `/api` for the web client.
fn classification_routes() -> Router {
    Router::new()
        .route("/classify", post(classify_endpoint))
        .route("/classify/download", post(download_endpoint))
}

pub(crate) fn with_classification_routes() -> Router {
    Router::new()
        .merge(classification_routes())
        .nest("/api", classification_routes())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn classify_endpoint(
    Json(payload): Json<Value>,
) -> Result<Json<ClassificationResult>, AppError> {
    let ignored = unrecognized_fields(&payload);
    if !ignored.is_empty() {
        warn!(fields = ?ignored, "ignoring unrecognized assessment fields");
    }

    let input = match normalize(&payload) {
        Ok(input) => input,
        Err(err) => {
            warn!(field = err.field(), error = %err, "rejected assessment payload");
            return Err(err.into());
        }
    };

    let result = assess(&input);
    record_classification(result.risk_category.label());
    info!(
        tier = %result.risk_category,
        recommendations = result.recommendations.len(),
        "classified AI system"
    );

    Ok(Json(result))
}

pub(crate) async fn download_endpoint(
    Query(query): Query<DownloadQuery>,
    Json(result): Json<ClassificationResult>,
) -> impl IntoResponse {
    let file_name = sanitize_file_name(query.file_name.as_deref());
    let body = render_text_report(&result, &ReportOptions::default());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
}
