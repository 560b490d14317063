use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use crate::protocol::ErrorBody;

pub(crate) const SERVER_ERROR_MESSAGE: &str = "server error";

pub fn json_message(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        message: message.into(),
    })
}

/// JSON extractor config: body size limit, and malformed bodies answered with
/// `400 {"message": ...}` like every other rejection.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let response = json_message(status, format!("invalid request body: {err}"));
    InternalError::from_response(err, response).into()
}
