use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::decision_notice::{AdjudicationError, DescriptorTableError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Descriptors(DescriptorTableError),
    Adjudication(AdjudicationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Server(err) => write!(f, "server error: {err}"),
            AppError::Descriptors(err) => write!(f, "descriptor table error: {err}"),
            AppError::Adjudication(err) => write!(f, "adjudication error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Descriptors(err) => Some(err),
            AppError::Adjudication(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Adjudication(AdjudicationError::UnsupportedBenefit(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Adjudication(AdjudicationError::Validation(_))
            | AppError::Adjudication(AdjudicationError::NoticeNotRequested(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Descriptors(_)
            | AppError::Adjudication(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<DescriptorTableError> for AppError {
    fn from(value: DescriptorTableError) -> Self {
        Self::Descriptors(value)
    }
}

impl From<AdjudicationError> for AppError {
    fn from(value: AdjudicationError) -> Self {
        Self::Adjudication(value)
    }
}
