use actix_web::web;

pub mod health;
pub mod realtime;

/// Registers every HTTP route; shared by `main` and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Websocket upgrade: /ws
    cfg.service(web::scope("/ws").configure(realtime::configure_routes));
}
