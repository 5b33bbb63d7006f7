use axum::{
    Json,
    extract::{Path, State},
};
use hangman_server_app::workflow::scores::{ScoreView, query::ScoreQueryError};

use crate::{AppState, ItemsForm, ServiceError, extract::ApiQuery};

#[derive(serde::Serialize)]
pub struct ScoreForm {
    user_name: String,
    date: String,
    won: bool,
    misses: u32,
}

impl From<ScoreView> for ScoreForm {
    fn from(view: ScoreView) -> Self {
        ScoreForm {
            user_name: view.user_name,
            date: view.date.format("%Y-%m-%d").to_string(),
            won: view.won,
            misses: view.misses,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct HighScoresQuery {
    number_of_results: Option<i64>,
}

fn map_score_error(e: ScoreQueryError) -> ServiceError {
    match e {
        ScoreQueryError::UserNotFound => ServiceError::NotFound(e.to_string()),
        ScoreQueryError::Internal => ServiceError::Internal(e.to_string()),
    }
}

fn into_items(scores: Vec<ScoreView>) -> Json<ItemsForm<ScoreForm>> {
    Json(ItemsForm {
        items: scores.into_iter().map(ScoreForm::from).collect(),
    })
}

pub async fn get_scores(
    State(app_state): State<AppState>,
) -> Result<Json<ItemsForm<ScoreForm>>, ServiceError> {
    let scores = app_state
        .app
        .score_query_use_case
        .list_scores()
        .await
        .map_err(map_score_error)?;
    Ok(into_items(scores))
}

pub async fn get_user_scores(
    Path(user_name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ItemsForm<ScoreForm>>, ServiceError> {
    let scores = app_state
        .app
        .score_query_use_case
        .list_user_scores(&user_name)
        .await
        .map_err(map_score_error)?;
    Ok(into_items(scores))
}

pub async fn get_high_scores(
    ApiQuery(query): ApiQuery<HighScoresQuery>,
    State(app_state): State<AppState>,
) -> Result<Json<ItemsForm<ScoreForm>>, ServiceError> {
    // non-positive counts fall back to the default
    let number_of_results = query
        .number_of_results
        .filter(|n| *n > 0)
        .map(|n| n as usize);
    let scores = app_state
        .app
        .score_query_use_case
        .list_high_scores(number_of_results)
        .await
        .map_err(map_score_error)?;
    Ok(into_items(scores))
}
