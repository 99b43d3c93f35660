use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::database::StoreError;
use crate::middleware::request_logger::current_request_id;
use crate::services::EmployeeError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ErrorCode {
    #[serde(rename = "VAL_3001")]
    InvalidInput,
    #[serde(rename = "VAL_3003")]
    InvalidFormat,
    #[serde(rename = "VAL_3006")]
    InvalidEmail,

    #[serde(rename = "RES_4001")]
    NotFound,
    #[serde(rename = "RES_4002")]
    AlreadyExists,

    #[serde(rename = "DB_7002")]
    QueryFailed,
}

impl ErrorCode {
    /// Numeric form carried next to the string code
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 3001,
            ErrorCode::InvalidFormat => 3003,
            ErrorCode::InvalidEmail => 3006,
            ErrorCode::NotFound => 4001,
            ErrorCode::AlreadyExists => 4002,
            ErrorCode::QueryFailed => 7002,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input provided",
            ErrorCode::InvalidFormat => "Invalid format provided",
            ErrorCode::InvalidEmail => "Invalid email address format",
            ErrorCode::NotFound => "The requested resource was not found",
            ErrorCode::AlreadyExists => "This resource already exists",
            ErrorCode::QueryFailed => "Database query failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput | ErrorCode::InvalidFormat | ErrorCode::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists => StatusCode::CONFLICT,
            ErrorCode::QueryFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub code_number: u16,
    pub message: String,
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    WithCode {
        code: ErrorCode,
        message: String,
        details: Option<String>,
    },

    #[error("Validation failed: {field}")]
    ValidationWithField {
        code: ErrorCode,
        field: String,
        message: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::WithCode {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        ApiError::WithCode {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Helper: Resource not found
    pub fn not_found(resource: &str) -> Self {
        ApiError::with_code(ErrorCode::NotFound, format!("{} not found", resource))
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::WithCode { code, .. } | ApiError::ValidationWithField { code, .. } => *code,
            ApiError::Database(_) => ErrorCode::QueryFailed,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.error_code().status()
    }

    fn into_detail(self) -> ErrorDetail {
        let code = self.error_code();
        let (message, details, field) = match self {
            ApiError::WithCode { message, details, .. } => (message, details, None),
            ApiError::ValidationWithField { field, message, .. } => (message, None, Some(field)),
            // Driver text stays in the logs only
            ApiError::Database(_) => (code.message().to_string(), None, None),
        };

        ErrorDetail {
            code,
            code_number: code.code(),
            message,
            details,
            field,
        }
    }

    fn log_error(&self, request_id: &str) {
        let status = self.status_code();
        if status.is_server_error() {
            error!(request_id = %request_id, error = %self, "Server error occurred");
        } else if status.is_client_error() {
            warn!(request_id = %request_id, error = %self, "Client error occurred");
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::DuplicateEmail { email } => ApiError::with_details(
                ErrorCode::AlreadyExists,
                "Employee with this email already exists",
                email,
            ),
            EmployeeError::Store(store_err) => store_err.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { constraint } => ApiError::with_details(
                ErrorCode::AlreadyExists,
                ErrorCode::AlreadyExists.message(),
                constraint,
            ),
            StoreError::Database(e) => ApiError::Database(e),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();

        match fields.into_iter().next() {
            Some(field) if field == "email" => ApiError::ValidationWithField {
                code: ErrorCode::InvalidEmail,
                field,
                message: ErrorCode::InvalidEmail.message().to_string(),
            },
            Some(field) => ApiError::ValidationWithField {
                code: ErrorCode::InvalidInput,
                field,
                message: format!("Validation error: {}", errors),
            },
            None => ApiError::with_code(ErrorCode::InvalidInput, errors.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Same ID the request logger echoes in X-Request-ID
        let request_id = current_request_id().unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let status = self.status_code();

        self.log_error(&request_id);

        let error_response = ErrorResponse {
            error: self.into_detail(),
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Handle Axum JSON rejections and convert to structured API errors
pub fn handle_rejection(err: JsonRejection) -> ApiError {
    match err {
        JsonRejection::JsonDataError(e) => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid input provided",
            e.body_text(),
        ),
        JsonRejection::JsonSyntaxError(_) => {
            ApiError::with_code(ErrorCode::InvalidFormat, "Invalid JSON format")
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::with_code(ErrorCode::InvalidFormat, "JSON content type required")
        }
        other => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid request body",
            other.body_text(),
        ),
    }
}

/// Convert path parameter rejections (e.g. a non-numeric id)
pub fn handle_path_rejection(err: PathRejection) -> ApiError {
    ApiError::with_details(ErrorCode::InvalidFormat, "Invalid path parameter", err.body_text())
}
