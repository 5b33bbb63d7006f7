use axum::{Json, extract::State};

use crate::{AppState, ItemsForm, ServiceError};

#[derive(serde::Serialize)]
pub struct RankingsForm {
    user_name: String,
    percent_won: u32,
    played: u32,
}

pub async fn get_user_rankings(
    State(app_state): State<AppState>,
) -> Result<Json<ItemsForm<RankingsForm>>, ServiceError> {
    let rankings = app_state
        .app
        .ranking_list_use_case
        .list_rankings()
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    Ok(Json(ItemsForm {
        items: rankings
            .into_iter()
            .map(|r| RankingsForm {
                user_name: r.user_name,
                percent_won: r.percent_won,
                played: r.played,
            })
            .collect(),
    }))
}
