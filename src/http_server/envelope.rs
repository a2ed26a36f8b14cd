//! # Response Envelope
//!
//! Every response body, success or failure, has the same shape:
//!
//! ```json
//! {"code": 200, "success": true, "message": "", "result": {"shows": []}}
//! ```
//!
//! `success` is derived from `code` and cannot be set on its own.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type for envelope construction
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Envelope construction errors. These are programming errors, not user input.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Result data was something other than a JSON object
    #[error("Envelope result must be a mapping, got {0}")]
    NotAMapping(&'static str),

    /// Result data could not be serialized
    #[error("Envelope result could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Uniform response wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    code: u16,
    success: bool,
    message: String,
    result: Option<Map<String, Value>>,
}

impl Envelope {
    /// Build an envelope from optional result data, a status and a message.
    ///
    /// Fails if `data` is present but is not a JSON object.
    pub fn build(
        data: Option<Value>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> EnvelopeResult<Self> {
        let result = match data {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => return Err(EnvelopeError::NotAMapping(json_type_name(&other))),
        };

        Ok(Self::from_parts(status, message.into(), result))
    }

    /// 200 envelope around a serializable mapping
    pub fn ok<T: Serialize>(data: &T) -> EnvelopeResult<Self> {
        Self::build(Some(serde_json::to_value(data)?), StatusCode::OK, "")
    }

    /// 200 envelope around an already-built mapping
    pub fn with_result(result: Map<String, Value>) -> Self {
        Self::from_parts(StatusCode::OK, String::new(), Some(result))
    }

    /// Envelope with no result
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::from_parts(status, message.into(), None)
    }

    /// Replace the status, keeping `success` in step with it
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.code = status.as_u16();
        self.success = status.is_success();
        self
    }

    fn from_parts(status: StatusCode, message: String, result: Option<Map<String, Value>>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message,
            result,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message_text(&self) -> &str {
        &self.message
    }

    pub fn result(&self) -> Option<&Map<String, Value>> {
        self.result.as_ref()
    }

    /// HTTP status for this envelope
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::from_parts(StatusCode::OK, String::new(), None)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
