//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, AppError>`; the error renders as
//! `{"error": {"code", "message", "details"}}` with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::errors::RegistryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// "Already exists" conflicts. Rendered as 400, not 409.
    #[error("{message}")]
    Conflict { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        let message = e.to_string();
        match e {
            RegistryError::AliasConflict { alias } => {
                AppError::conflict(message, json!({ "alias": alias }))
            }
            RegistryError::CodeConflict { code } => {
                AppError::conflict(message, json!({ "short_code": code }))
            }
            RegistryError::NotFound { code } => {
                AppError::not_found(message, json!({ "short_code": code }))
            }
            RegistryError::Expired { code } => AppError::not_found(
                message,
                json!({ "short_code": code, "reason": "expired" }),
            ),
            RegistryError::InactivityExpired { code } => AppError::not_found(
                message,
                json!({ "short_code": code, "reason": "inactive" }),
            ),
            RegistryError::InvalidInput(_) => AppError::bad_request(message, json!({})),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        let message = fields
            .iter()
            .next()
            .and_then(|(field, msgs)| {
                msgs.get(0)
                    .and_then(Value::as_str)
                    .map(|m| format!("{field}: {m}"))
            })
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::bad_request(message, Value::Object(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_are_bad_request() {
        let err: AppError = RegistryError::AliasConflict { alias: "ex".into() }.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "conflict");
        assert_eq!(err.to_string(), "Custom alias already exists.");

        let err: AppError = RegistryError::CodeConflict { code: "ex".into() }.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Short code already exists.");
    }

    #[test]
    fn test_lookup_failures_are_not_found() {
        for (e, message) in [
            (RegistryError::not_found("ex"), "Link not found"),
            (RegistryError::Expired { code: "ex".into() }, "Link has expired"),
            (
                RegistryError::InactivityExpired { code: "ex".into() },
                "Link has been deleted due to inactivity",
            ),
        ] {
            let err: AppError = e.into();
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
            assert_eq!(err.to_error_info().code, "not_found");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_invalid_input_is_validation() {
        let err: AppError = RegistryError::InvalidInput("URL must not be empty".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "validation_error");
    }
}
