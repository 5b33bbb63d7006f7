use std::sync::Arc;

use crate::{
    domain::{
        RepoRetrieveError,
        game::GameRepository,
        user::{UserRepository, normalize_user_name},
    },
    services::user_resolver::UserResolverService,
    workflow::gameplay::GameView,
};

#[async_trait::async_trait]
pub trait ListUserGamesUseCase {
    /// Games of the user that are not over yet, oldest first.
    async fn list_open_games(&self, user_name: &str) -> Result<Vec<GameView>, ListUserGamesError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListUserGamesError {
    #[error("A User with that name does not exist!")]
    UserNotFound,
    #[error("No games yet for User!")]
    NoGames,
    #[error("Failed to list games")]
    Internal,
}

pub struct ListUserGamesUseCaseImpl<U: UserRepository, G: GameRepository, R: UserResolverService> {
    user_repository: Arc<U>,
    game_repository: Arc<G>,
    user_resolver: Arc<R>,
}

impl<U: UserRepository, G: GameRepository, R: UserResolverService> ListUserGamesUseCaseImpl<U, G, R> {
    pub fn new(user_repository: Arc<U>, game_repository: Arc<G>, user_resolver: Arc<R>) -> Self {
        Self {
            user_repository,
            game_repository,
            user_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<
    U: UserRepository + Send + Sync + 'static,
    G: GameRepository + Send + Sync + 'static,
    R: UserResolverService + Send + Sync + 'static,
> ListUserGamesUseCase for ListUserGamesUseCaseImpl<U, G, R>
{
    async fn list_open_games(&self, user_name: &str) -> Result<Vec<GameView>, ListUserGamesError> {
        let user_name = normalize_user_name(user_name);
        let user = match self.user_repository.get_user_by_name(user_name).await {
            Ok(user) => user,
            Err(RepoRetrieveError::NotFound) => return Err(ListUserGamesError::UserNotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to look up user {}: {}", user_name, e);
                return Err(ListUserGamesError::Internal);
            }
        };

        let total_games = self
            .game_repository
            .count_games_for_user(user.user_id)
            .await
            .map_err(|e| {
                log::error!("Failed to count games of {}: {}", user.name, e);
                ListUserGamesError::Internal
            })?;
        if total_games == 0 {
            return Err(ListUserGamesError::NoGames);
        }

        let records = self
            .game_repository
            .get_open_games_for_user(user.user_id)
            .await
            .map_err(|e| {
                log::error!("Failed to list open games of {}: {}", user.name, e);
                ListUserGamesError::Internal
            })?;

        let mut views = Vec::with_capacity(records.len());
        for record in records {
            let view = GameView::resolve(self.user_resolver.as_ref(), record, "")
                .await
                .map_err(|e| {
                    log::error!("Failed to build game view: {}", e);
                    ListUserGamesError::Internal
                })?;
            views.push(view);
        }
        Ok(views)
    }
}
