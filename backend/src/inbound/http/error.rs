//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as the same four-field JSON envelope.
//! The trace identifier travels in the `trace-id` header rather than the
//! body, and internal failures are redacted before they reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, to_iso8601};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing message for redacted internal failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Uniform error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Category label, e.g. `Validation error`.
    #[schema(value_type = crate::inbound::http::schemas::ErrorCodeSchema)]
    pub error: ErrorCode,
    /// Human readable detail.
    #[schema(example = "Invalid email format")]
    pub message: String,
    /// HTTP status repeated in the body.
    #[schema(example = 400)]
    pub status_code: u16,
    /// ISO-8601 UTC instant the error was produced.
    #[schema(example = "2023-01-15T10:30:00Z")]
    pub timestamp: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound | ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> String {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(
            trace_id = error.trace_id().unwrap_or("-"),
            detail = error.message(),
            "internal error redacted"
        );
        INTERNAL_ERROR_MESSAGE.to_owned()
    } else {
        error.message().to_owned()
    }
}

impl ErrorEnvelope {
    /// Envelope for `error` stamped with `clock`.
    pub fn from_error(error: &Error, clock: &dyn Clock) -> Self {
        Self {
            error: error.code(),
            message: client_message(error),
            status_code: status_for(error.code()).as_u16(),
            timestamp: to_iso8601(clock.utc()),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from_error(self, &DefaultClock))
    }
}
