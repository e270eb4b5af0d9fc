//! # actix-htmxtools
//!
//! `actix-htmxtools` reads the headers [htmx](https://htmx.org) sends with its
//! requests and writes the headers htmx understands in responses.
//!
//! ## Features
//!
//! - **Typed header names**: every htmx request and response header as a constant
//! - **Request parsing**: [`HtmxMiddleware`] parses htmx headers once per request and
//!   hands them to handlers through the [`HtmxRequest`] extractor
//! - **Response headers**: [`HtmxResponse`] writes only the fields you set
//! - **Swap modes**: [`SwapMode`] maps `hx-swap` tokens both ways
//! - **Structured payloads**: [`HxLocation`] and [`Triggers`] produce the JSON forms
//!   of `HX-Location` and `HX-Trigger*`
//!
//! # Getting Started
//! Register [`HtmxMiddleware`] on your `App` and take an [`HtmxRequest`] in your handlers:
//!
//! ```no_run
//! use actix_htmxtools::{HtmxMiddleware, HtmxRequest, HtmxResponse};
//! use actix_web::{web, App, HttpResponse, HttpServer};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(HtmxMiddleware)
//!             .route("/", web::get().to(index))
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//!
//! async fn index(htmx: Option<HtmxRequest>) -> actix_web::Result<HttpResponse> {
//!     match htmx {
//!         // This is an htmx request - return partial HTML
//!         Some(htmx) => {
//!             let mut res = HttpResponse::Ok().body("<div>Partial content for htmx</div>");
//!             HtmxResponse::new()
//!                 .replace_url(htmx.current_url)
//!                 .apply_to_response(&mut res)?;
//!             Ok(res)
//!         }
//!         // Regular request - return full page
//!         None => Ok(HttpResponse::Ok()
//!             .body("<html><body><div>Full page content</div></body></html>")),
//!     }
//! }
//! ```

pub mod context;
mod error;
mod headers;
mod location;
mod middleware;
mod request;
mod response;
mod swap;
mod trigger;

pub use self::{
    error::{HtmxError, Result},
    headers::{ProtocolHeader, RequestHeader, ResponseHeader, HX_HEADER_PREFIX},
    location::HxLocation,
    middleware::HtmxMiddleware,
    request::HtmxRequest,
    response::{add_headers, HtmxResponse},
    swap::SwapMode,
    trigger::{TriggerPayload, TriggerType, Triggers},
};
