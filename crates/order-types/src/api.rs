//! API error types for the order HTTP API.
//!
//! Every failure in the system travels as an [`ApiError`]: a status
//! classification paired with one of the fixed message keys from
//! [`crate::codes`]. The HTTP layer is the only place where the
//! classification materializes as a status code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-level error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
	/// One of the fixed message keys.
	pub message: String,
	/// HTTP status code, duplicated in the body for client convenience.
	pub status_code: u16,
}

/// Classified API error with appropriate HTTP status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
	/// Request payload or path parameter failed validation (400).
	BadRequest { message: String },
	/// No order exists for the given order number (404).
	NotFound { message: String },
	/// An order with the same unique identifier already exists (409).
	Conflict { message: String },
	/// Store failure or an operation blocked by the order status (500).
	Internal { message: String },
}

impl ApiError {
	/// Creates a bad-request error carrying the given message key.
	pub fn bad_request(message: impl Into<String>) -> Self {
		ApiError::BadRequest {
			message: message.into(),
		}
	}

	/// Creates a not-found error carrying the given message key.
	pub fn not_found(message: impl Into<String>) -> Self {
		ApiError::NotFound {
			message: message.into(),
		}
	}

	/// Creates a conflict error carrying the given message key.
	pub fn conflict(message: impl Into<String>) -> Self {
		ApiError::Conflict {
			message: message.into(),
		}
	}

	/// Creates an internal error carrying the given message key.
	pub fn internal(message: impl Into<String>) -> Self {
		ApiError::Internal {
			message: message.into(),
		}
	}

	/// Get the HTTP status code for this error.
	pub fn status_code(&self) -> u16 {
		match self {
			ApiError::BadRequest { .. } => 400,
			ApiError::NotFound { .. } => 404,
			ApiError::Conflict { .. } => 409,
			ApiError::Internal { .. } => 500,
		}
	}

	/// Returns the message key carried by this error.
	pub fn message(&self) -> &str {
		match self {
			ApiError::BadRequest { message }
			| ApiError::NotFound { message }
			| ApiError::Conflict { message }
			| ApiError::Internal { message } => message,
		}
	}

	/// Convert to ErrorResponse for JSON serialization.
	pub fn to_error_response(&self) -> ErrorResponse {
		ErrorResponse {
			message: self.message().to_string(),
			status_code: self.status_code(),
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::BadRequest { message } => write!(f, "Bad Request: {}", message),
			ApiError::NotFound { message } => write!(f, "Not Found: {}", message),
			ApiError::Conflict { message } => write!(f, "Conflict: {}", message),
			ApiError::Internal { message } => write!(f, "Internal Server Error: {}", message),
		}
	}
}

impl std::error::Error for ApiError {}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		use axum::{http::StatusCode, response::Json};

		let status = match self {
			ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
			ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
			ApiError::Conflict { .. } => StatusCode::CONFLICT,
			ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, Json(self.to_error_response())).into_response()
	}
}
