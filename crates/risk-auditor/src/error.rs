use crate::classification::ValidationError;
use crate::config::ConfigError;
use crate::inventory::InventoryError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    RequestFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    Validation(ValidationError),
    Inventory(InventoryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::RequestFile { path, source } => {
                write!(f, "malformed request file {}: {}", path.display(), source)
            }
            AppError::Validation(err) => write!(f, "invalid assessment: {}", err),
            AppError::Inventory(err) => write!(f, "inventory error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::RequestFile { source, .. } => Some(source),
            AppError::Validation(err) => Some(err),
            AppError::Inventory(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                let body = Json(json!({ "error": err.to_string(), "field": err.field() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::RequestFile { .. } | AppError::Inventory(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<InventoryError> for AppError {
    fn from(value: InventoryError) -> Self {
        Self::Inventory(value)
    }
}
