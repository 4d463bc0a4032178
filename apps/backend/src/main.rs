use actix::Actor;
use actix_web::{web, App, HttpServer};
use tictactoe_backend::config::ServerConfig;
use tictactoe_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use tictactoe_backend::routes;
use tictactoe_backend::state::AppState;
use tictactoe_backend::telemetry;
use tictactoe_backend::ws::hub::MatchHub;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let hub = MatchHub::default().start();
    let data = web::Data::new(AppState::new(config.clone(), hub));

    info!(host = %config.host, port = config.port, "starting tic-tac-toe backend");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
