use crate::{context, HtmxRequest};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use log::{debug, trace};
use std::future::{ready, Ready};

/// A middleware for Actix Web that reads the htmx request headers once per request.
///
/// When a request carries `HX-Request: true`, [`HtmxMiddleware`] parses the
/// remaining htmx headers into an [`HtmxRequest`] and attaches it to the
/// request extensions, where handlers pick it up with the `HtmxRequest` (or
/// `Option<HtmxRequest>`) extractor. Any other request is only marked as
/// checked, so extractors do not parse its headers again.
/// The wrapped service's response and errors are returned as they are.
///
/// # Example
///
/// ```no_run
/// use actix_web::{web, App, HttpServer, Responder, HttpResponse};
/// use actix_htmxtools::{HtmxMiddleware, HtmxRequest};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     HttpServer::new(|| {
///         App::new()
///             .wrap(HtmxMiddleware)
///             .route("/", web::get().to(index))
///     })
///     .bind("127.0.0.1:8080")?
///     .run()
///     .await
/// }
///
/// async fn index(htmx: Option<HtmxRequest>) -> impl Responder {
///     match htmx {
///         Some(_) => HttpResponse::Ok().body(r##"<div id="content">htmx request</div>"##),
///         None => HttpResponse::Ok().body(r##"
///             <!DOCTYPE html>
///             <html>
///                 <head>
///                     <script src="https://unpkg.com/htmx.org@2.0.6"></script>
///                 </head>
///                 <body>
///                     <div id="content">
///                         <a href="/" hx-get="/" hx-target="#content">Make it htmx!</a>
///                     </div>
///                 </body>
///             </html>
///         "##),
///     }
/// }
/// ```
pub struct HtmxMiddleware;

impl<S, B> Transform<S, ServiceRequest> for HtmxMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = InnerHtmxMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InnerHtmxMiddleware { service }))
    }
}

#[doc(hidden)]
#[non_exhaustive]
pub struct InnerHtmxMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for InnerHtmxMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match HtmxRequest::from_headers(req.headers()) {
            Some(htmx) => {
                debug!("htmx request to {}: {:?}", req.path(), htmx);
                context::attach(&mut req.extensions_mut(), htmx);
            }
            None => {
                trace!("not an htmx request: {}", req.path());
                context::mark_not_htmx(&mut req.extensions_mut());
            }
        }

        self.service.call(req)
    }
}
