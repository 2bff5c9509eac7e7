use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

mod api;
mod config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::AppConfig::new().context("failed to load configuration")?;

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(api::configure)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?
        .run()
        .await?;

    Ok(())
}
