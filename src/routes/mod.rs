// Route exports
pub mod careers;

use actix_web::web;

pub use careers::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(careers::configure),
    );
}
