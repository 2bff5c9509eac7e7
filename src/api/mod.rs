pub mod greeting;
pub mod health;
pub mod time;
pub mod version;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(greeting::configure)
        .configure(health::configure)
        .configure(version::configure)
        .configure(time::configure);
}
