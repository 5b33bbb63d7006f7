use axum::{
    Json,
    extract::{Path, State},
};
use hangman_server_app::workflow::gameplay::{
    GameView,
    cancel::{CANCEL_GAME_MESSAGE, CancelGameError},
    get::GetGameError,
    history::GameHistoryError,
    list::ListUserGamesError,
    make_move::MakeMoveError,
    new_game::NewGameError,
};

use crate::{
    AppState, ItemsForm, ServiceError, StringMessage,
    extract::ApiJson,
    key::{encode_game_key, parse_game_key},
};

#[derive(serde::Serialize)]
pub struct GameForm {
    urlsafe_key: String,
    misses_remaining: u32,
    bad_guesses: Vec<String>,
    good_guesses: Vec<String>,
    status: String,
    history: Vec<String>,
    game_over: bool,
    message: String,
    user_name: String,
}

impl From<GameView> for GameForm {
    fn from(view: GameView) -> Self {
        GameForm {
            urlsafe_key: encode_game_key(view.game_id),
            misses_remaining: view.game.misses_remaining,
            bad_guesses: view.game.bad_guesses,
            good_guesses: view.game.good_guesses,
            status: view.game.status,
            history: view.game.history,
            game_over: view.game.game_over,
            message: view.message,
            user_name: view.user_name,
        }
    }
}

#[derive(serde::Serialize)]
pub struct GameHistoryForm {
    urlsafe_key: String,
    history: Vec<String>,
}

#[derive(serde::Deserialize)]
pub struct NewGameForm {
    user_name: String,
}

#[derive(serde::Deserialize)]
pub struct MakeMoveForm {
    guess: String,
}

pub async fn new_game(
    State(app_state): State<AppState>,
    ApiJson(form): ApiJson<NewGameForm>,
) -> Result<Json<GameForm>, ServiceError> {
    let view = app_state
        .app
        .game_new_use_case
        .new_game(&form.user_name)
        .await
        .map_err(|e| match e {
            NewGameError::UserNotFound => ServiceError::NotFound(e.to_string()),
            NewGameError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(view.into()))
}

pub async fn get_game(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<GameForm>, ServiceError> {
    let game_id = parse_game_key(&key)?;
    let view = app_state
        .app
        .game_get_use_case
        .get_game(game_id)
        .await
        .map_err(|e| match e {
            GetGameError::NotFound => ServiceError::NotFound(e.to_string()),
            GetGameError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(view.into()))
}

pub async fn make_move(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
    ApiJson(form): ApiJson<MakeMoveForm>,
) -> Result<Json<GameForm>, ServiceError> {
    let game_id = parse_game_key(&key)?;
    let view = app_state
        .app
        .game_make_move_use_case
        .make_move(game_id, &form.guess)
        .await
        .map_err(|e| match e {
            MakeMoveError::NotFound => ServiceError::NotFound(e.to_string()),
            MakeMoveError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(view.into()))
}

pub async fn get_game_history(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<GameHistoryForm>, ServiceError> {
    let game_id = parse_game_key(&key)?;
    let view = app_state
        .app
        .game_history_use_case
        .get_history(game_id)
        .await
        .map_err(|e| match e {
            GameHistoryError::NotFound => ServiceError::NotFound(e.to_string()),
            GameHistoryError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(GameHistoryForm {
        urlsafe_key: encode_game_key(view.game_id),
        history: view.history,
    }))
}

pub async fn get_user_games(
    Path(user_name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ItemsForm<GameForm>>, ServiceError> {
    let games = app_state
        .app
        .game_list_user_games_use_case
        .list_open_games(&user_name)
        .await
        .map_err(|e| match e {
            ListUserGamesError::UserNotFound | ListUserGamesError::NoGames => {
                ServiceError::NotFound(e.to_string())
            }
            ListUserGamesError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(ItemsForm {
        items: games.into_iter().map(GameForm::from).collect(),
    }))
}

pub async fn cancel_game(
    Path(key): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<StringMessage>, ServiceError> {
    let game_id = parse_game_key(&key)?;
    app_state
        .app
        .game_cancel_use_case
        .cancel_game(game_id)
        .await
        .map_err(|e| match e {
            CancelGameError::NotFound => ServiceError::NotFound(e.to_string()),
            CancelGameError::GameOver => ServiceError::Conflict(e.to_string()),
            CancelGameError::Internal => ServiceError::Internal(e.to_string()),
        })?;
    Ok(Json(StringMessage {
        message: CANCEL_GAME_MESSAGE.to_string(),
    }))
}
