/// Page handlers
use actix_web::{web, HttpResponse};

use crate::templates::Templates;

/// Serve the static upload form.
pub async fn index(templates: web::Data<Templates>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(templates.index())
}

/// Liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}
