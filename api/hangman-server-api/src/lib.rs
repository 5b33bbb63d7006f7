use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use hangman_server_app::Application;
use log::info;

mod extract;
mod game;
mod key;
mod ranking;
mod score;
mod user;

pub use key::{decode_game_key, encode_game_key};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    let router: Router<AppState> = Router::new().nest(
        "/hangman/v1",
        Router::new()
            .route("/user", post(user::create_user))
            .route("/game", post(game::new_game))
            .route("/game/{key}", get(game::get_game).put(game::make_move))
            .route("/game/history/{key}", get(game::get_game_history))
            .route("/game/cancel/{key}", delete(game::cancel_game))
            .route("/games/user/{user_name}", get(game::get_user_games))
            .route("/scores", get(score::get_scores))
            .route("/scores/user/{user_name}", get(score::get_user_scores))
            .route("/scores/highest", get(score::get_high_scores))
            .route("/rankings", get(ranking::get_user_rankings)),
    );
    router.with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    host: &str,
    port: u16,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    info!("HTTP API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}

#[derive(serde::Serialize)]
pub struct StringMessage {
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct ItemsForm<T> {
    pub items: Vec<T>,
}

#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    Conflict(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ServiceError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}
