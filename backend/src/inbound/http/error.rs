//! HTTP rendering of domain errors for the records API.
//!
//! Every failure leaves the REST surface as a JSON [`Error`] body: registry
//! outcomes map onto 400/404/409/500, and bodies the JSON extractor cannot
//! decode are rewritten into `invalid_request` errors by
//! [`json_error_handler`] instead of actix's plain-text default.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::validation::{self, invalid_body_error};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        // Duplicate enrollment; the unchanged learner rides in `details.learner`.
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Strip message and details from internal errors, keeping only the trace id.
fn public_body(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    warn!(detail = error.message(), trace_id = ?error.trace_id(), "internal error redacted");
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
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
        builder.json(public_body(self))
    }
}

/// `JsonConfig` error handler turning undecodable learner, course and
/// enrollment bodies into `invalid_request` errors.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use academic_backend::inbound::http::error::json_error_handler;
///
/// let config = web::JsonConfig::default().error_handler(json_error_handler);
/// # let _ = config;
/// ```
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = match &err {
        JsonPayloadError::ContentType => invalid_body_error(
            validation::ErrorCode::UnsupportedContentType,
            "request body must be application/json",
        ),
        JsonPayloadError::Deserialize(source) => invalid_body_error(
            validation::ErrorCode::InvalidBody,
            format!("request body could not be decoded: {source}"),
        ),
        other => invalid_body_error(validation::ErrorCode::InvalidBody, other.to_string()),
    };
    debug!(path = req.path(), error = %err, "request body rejected");
    error.into()
}
