use axum::{Json, extract::State};
use hangman_server_app::workflow::account::create_user::CreateUserError;

use crate::{AppState, ServiceError, StringMessage, extract::ApiJson};

#[derive(serde::Deserialize)]
pub struct CreateUserForm {
    user_name: String,
    email: Option<String>,
}

pub async fn create_user(
    State(app_state): State<AppState>,
    ApiJson(form): ApiJson<CreateUserForm>,
) -> Result<Json<StringMessage>, ServiceError> {
    let user = app_state
        .app
        .user_create_use_case
        .create_user(&form.user_name, form.email)
        .await
        .map_err(|e| match e {
            CreateUserError::AlreadyExists => ServiceError::Conflict(e.to_string()),
            CreateUserError::InvalidName => ServiceError::BadRequest(e.to_string()),
            CreateUserError::Internal => ServiceError::Internal(e.to_string()),
        })?;

    Ok(Json(StringMessage {
        message: format!("User {} created!", user.name),
    }))
}
