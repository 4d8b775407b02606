// Route exports
pub mod classrooms;

use actix_web::web;

pub use classrooms::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(classrooms::configure),
    );
}
