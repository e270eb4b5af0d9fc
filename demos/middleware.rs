use actix_htmxtools::{
    HtmxError, HtmxMiddleware, HtmxRequest, HtmxResponse, TriggerPayload, TriggerType, Triggers,
};
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde_json::json;

use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let addr = env::var("HTMX_DEMO_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("listening on {}", addr);

    HttpServer::new(|| {
        App::new()
            .wrap(HtmxMiddleware)
            .wrap(Logger::default())
            .route("/alert", web::get().to(serverside_alert))
            .route("/button-push", web::post().to(button_push))
            .route("/", web::get().to(index))
    })
    .bind(addr)?
    .run()
    .await
}

async fn index(htmx: Option<HtmxRequest>) -> impl Responder {
    info!("index, htmx request: {:?}", htmx);

    HttpResponse::Ok().content_type("text/html").body(
        r##"<!DOCTYPE html>
<html>
    <head>
        <title>htmx tools example</title>
        <script src="https://unpkg.com/htmx.org@2.0.6"></script>
    </head>
    <body>
        <a href="/alert" hx-get="/alert" hx-swap="none">Server side alert</a>
        <button hx-post="/button-push" hx-target="#button-push-response" hx-swap="outerHTML"
                hx-prompt="did you do it?" name="pusher" id="pusher">Push me</button>
        <div id="button-push-response"></div>
        <script>
            document.body.addEventListener("showMessage", function (evt) {
                alert(evt.detail.level + ": " + evt.detail.message);
            });
        </script>
    </body>
</html>
"##,
    )
}

/// Keeps the alert link out of the history and fires a client-side event.
async fn serverside_alert(htmx: Option<HtmxRequest>) -> Result<HttpResponse, HtmxError> {
    let mut res = HttpResponse::Ok().finish();

    if let Some(htmx) = htmx {
        let message = TriggerPayload::from_value(json!({
            "level": "info",
            "message": "this alert was triggered via the HX-Trigger header",
        }));

        HtmxResponse::new()
            .replace_url(htmx.current_url)
            .trigger_events(
                TriggerType::Standard,
                &Triggers::new().event("showMessage", Some(message)),
            )?
            .apply_to_response(&mut res)?;
    }

    Ok(res)
}

async fn button_push(htmx: HtmxRequest) -> Result<HttpResponse, HtmxError> {
    let request = serde_json::to_string_pretty(&htmx)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(format!(
        r#"<div id="button-push-response">Your request:<pre>{request}</pre></div>"#
    )))
}
