use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HtmxError>;

/// Errors raised while reading or writing htmx headers.
///
/// A request without `HX-Request: true` is not an error by itself; parsing just
/// yields no [`HtmxRequest`](crate::HtmxRequest).
#[derive(Debug, Error)]
pub enum HtmxError {
    /// The strict merge in [`add_headers`](crate::add_headers) found a value already in place.
    #[error("header already set: {name}: {value}")]
    HeaderAlreadySet { name: &'static str, value: String },

    /// The value cannot be carried in an HTTP header.
    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeaderValue { name: &'static str, value: String },

    #[error("failed to encode htmx header payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An [`HtmxRequest`](crate::HtmxRequest) was extracted from a request htmx did not send.
    #[error("not an htmx request")]
    NotHtmxRequest,
}

impl ResponseError for HtmxError {
    fn status_code(&self) -> StatusCode {
        match self {
            HtmxError::NotHtmxRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
