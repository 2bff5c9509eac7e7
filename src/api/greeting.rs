use actix_web::{http::header::ContentType, web, HttpResponse};

const GREETING: &str = "Hola Mibanco";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(greeting))
            .route(web::head().to(greeting)),
    );
}

async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
