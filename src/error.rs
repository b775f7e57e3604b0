//! Application error type and its HTTP mapping.
//!
//! Every failure path in the API is expressed as an [`AppError`]. Handlers
//! return `Result<_, AppError>` and axum turns the error into a response whose
//! body is an object with a single `error` key:
//!
//! ```json
//! { "error": "News matching query does not exist." }
//! { "error": { "title": ["This field is required."] } }
//! ```

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Field name → list of human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {errors:?}")]
    Validation { errors: FieldErrors },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Forbidden { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    /// Validation error carrying a single message for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::Validation { errors }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error: Value = match self {
            AppError::Validation { errors } => json!(errors),
            AppError::Internal { message } => {
                tracing::error!(%message, "Internal error");
                json!("Internal server error")
            }
            AppError::Unauthorized { message } => {
                return (
                    status,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(json!({ "error": message })),
                )
                    .into_response();
            }
            AppError::NotFound { message }
            | AppError::Forbidden { message }
            | AppError::Conflict { message } => json!(message),
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        collect_validation_errors(None, &errors, &mut fields);
        AppError::Validation { errors: fields }
    }
}

/// Flattens nested validator output into `parent.child` keys.
fn collect_validation_errors(prefix: Option<&str>, errors: &ValidationErrors, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(p) => format!("{p}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(key).or_default();
                for e in list {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({}).", e.code));
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_errors(Some(&key), inner, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect_validation_errors(Some(&format!("{key}[{idx}]")), inner, out);
                }
            }
        }
    }
}

/// Generic message for an id segment that cannot name any row.
pub const NOT_FOUND: &str = "Not found.";

/// Prefix axum puts in front of serde's message for a mistyped body.
const JSON_DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if let JsonRejection::JsonDataError(_) = &rejection {
            if let Some((field, message)) = field_type_error(&rejection.body_text()) {
                return AppError::field(field, message);
            }
        }
        AppError::field(NON_FIELD_ERRORS, rejection.body_text())
    }
}

/// Splits serde's `title: invalid type: ...` text into the top-level field
/// and a message for it.
fn field_type_error(text: &str) -> Option<(String, &'static str)> {
    let detail = text.strip_prefix(JSON_DATA_ERROR_PREFIX)?;
    let (path, reason) = detail.split_once(": ")?;
    if path.is_empty() || !path.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let message = if reason.contains("expected i64") || reason.contains("expected an integer") {
        "A valid integer is required."
    } else if reason.contains("expected a string") {
        "Not a valid string."
    } else {
        "Invalid value."
    };
    Some((path.to_string(), message))
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => AppError::not_found(NOT_FOUND),
            other => AppError::internal(other.body_text()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(format!(
                    "Unique constraint violation ({})",
                    db.constraint().unwrap_or("unknown")
                ));
            }
            if db.is_foreign_key_violation() {
                return AppError::field(
                    NON_FIELD_ERRORS,
                    "Referenced object does not exist.",
                );
            }
        }

        AppError::internal(format!("Database error: {e}"))
    }
}
