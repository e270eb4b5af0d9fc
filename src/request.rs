use actix_web::dev::{Extensions, Payload};
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;
use std::rc::Rc;

use crate::context;
use crate::error::HtmxError;
use crate::headers::RequestHeader;

/// The htmx details of an incoming request.
///
/// Having one of these at all means the request carried `HX-Request: true`.
/// String fields are empty when htmx did not send the matching header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmxRequest {
    /// See <https://htmx.org/attributes/hx-boost/>.
    pub boosted: bool,
    pub current_url: String,
    pub history_restore: bool,
    /// See <https://htmx.org/attributes/hx-prompt/>.
    pub prompt: String,
    pub target: String,
    pub trigger_name: String,
    pub trigger: String,
}

impl HtmxRequest {
    /// Read the htmx headers of a request.
    ///
    /// Returns `None` unless `HX-Request` is exactly `true` once surrounding
    /// whitespace is trimmed; no other header is looked at in that case.
    pub fn from_headers(headers: &HeaderMap) -> Option<HtmxRequest> {
        let value = |header: RequestHeader| header_value(headers, header);

        if value(RequestHeader::REQUEST) != "true" {
            return None;
        }

        Some(HtmxRequest {
            boosted: value(RequestHeader::BOOSTED) == "true",
            current_url: value(RequestHeader::CURRENT_URL).to_string(),
            history_restore: value(RequestHeader::HISTORY_RESTORE_REQUEST) == "true",
            prompt: value(RequestHeader::PROMPT).to_string(),
            target: value(RequestHeader::TARGET).to_string(),
            trigger_name: value(RequestHeader::TRIGGER_NAME).to_string(),
            trigger: value(RequestHeader::TRIGGER).to_string(),
        })
    }

    /// Attach this request to `extensions`. Same as [`context::attach`].
    pub fn to_context(self, extensions: &mut Extensions) -> Rc<HtmxRequest> {
        context::attach(extensions, self)
    }

    /// The request attached to `extensions`, if any. Same as [`context::retrieve`].
    pub fn from_context(extensions: &Extensions) -> Option<Rc<HtmxRequest>> {
        context::retrieve(extensions)
    }
}

fn header_value(headers: &HeaderMap, header: RequestHeader) -> &str {
    headers
        .get(header.header_name())
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .map(str::trim)
        .unwrap_or_default()
}

/// Extracts the request attached by [`HtmxMiddleware`](crate::HtmxMiddleware).
///
/// A request the middleware already let through as non-htmx is never parsed
/// again. Without the middleware the headers are parsed on the spot. Extraction fails
/// with [`HtmxError::NotHtmxRequest`] for requests htmx did not send, so use
/// `Option<HtmxRequest>` in handlers that serve both kinds.
impl FromRequest for HtmxRequest {
    type Error = HtmxError;
    type Future = Ready<Result<HtmxRequest, HtmxError>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = context::lookup(&req.extensions());

        let htmx = match parsed {
            Some(Some(htmx)) => Some(HtmxRequest::clone(&htmx)),
            Some(None) => None,
            None => HtmxRequest::from_headers(req.headers()),
        };

        ready(htmx.ok_or(HtmxError::NotHtmxRequest))
    }
}
