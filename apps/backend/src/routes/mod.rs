use actix_web::web;

pub mod games;
pub mod health;

/// Register every application route.
///
/// Shared by `main.rs` and the integration test app builder so both serve
/// the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(games::configure_routes);
}
