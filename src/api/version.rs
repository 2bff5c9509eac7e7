use actix_web::{http::header::ContentType, web, HttpResponse};

/// Service version reported by `/version`. Not tied to the crate version.
pub const VERSION: &str = "1.0.0";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/version")
            .route(web::get().to(version))
            .route(web::head().to(version)),
    );
}

async fn version() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(VERSION)
}
