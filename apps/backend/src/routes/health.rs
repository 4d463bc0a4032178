use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::ws::hub::GetStats;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Tic-Tac-Toe backend. Connect a websocket client to /ws to play."))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    timestamp: String,
    connections: usize,
    live_games: usize,
    waiting_games: usize,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    // A dead hub mailbox surfaces as HUB_UNAVAILABLE
    let stats = app_state.hub().send(GetStats).await?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        app_version: env!("CARGO_PKG_VERSION"),
        timestamp,
        connections: stats.connections,
        live_games: stats.live_games,
        waiting_games: stats.waiting_games,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
