use actix_web::{http::header::ContentType, web, HttpResponse};
use chrono::Local;

/// ISO-8601 without offset, microsecond precision: `2024-05-01T12:34:56.789012`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/time")
            .route(web::get().to(current_time))
            .route(web::head().to(current_time)),
    );
}

// Host local wall-clock time, rendered without its offset. Without an offset
// the value repeats an hour when daylight saving time ends, so it is only
// non-decreasing on hosts whose local zone has no DST transitions (e.g. UTC).
async fn current_time() -> HttpResponse {
    let now = Local::now().naive_local();
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(now.format(TIMESTAMP_FORMAT).to_string())
}
