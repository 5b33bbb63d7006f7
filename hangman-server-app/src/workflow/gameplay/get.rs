use std::sync::Arc;

use crate::{
    domain::{GameId, RepoRetrieveError, game::GameRepository},
    services::user_resolver::UserResolverService,
    workflow::gameplay::GameView,
};

pub const GET_GAME_MESSAGE: &str = "Time to make a move!";

#[async_trait::async_trait]
pub trait GetGameUseCase {
    async fn get_game(&self, game_id: GameId) -> Result<GameView, GetGameError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GetGameError {
    #[error("Game not found!")]
    NotFound,
    #[error("Failed to load game")]
    Internal,
}

pub struct GetGameUseCaseImpl<G: GameRepository, R: UserResolverService> {
    game_repository: Arc<G>,
    user_resolver: Arc<R>,
}

impl<G: GameRepository, R: UserResolverService> GetGameUseCaseImpl<G, R> {
    pub fn new(game_repository: Arc<G>, user_resolver: Arc<R>) -> Self {
        Self {
            game_repository,
            user_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<G: GameRepository + Send + Sync + 'static, R: UserResolverService + Send + Sync + 'static>
    GetGameUseCase for GetGameUseCaseImpl<G, R>
{
    async fn get_game(&self, game_id: GameId) -> Result<GameView, GetGameError> {
        let record = match self.game_repository.get_game(game_id).await {
            Ok(record) => record,
            Err(RepoRetrieveError::NotFound) => return Err(GetGameError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to load game {}: {}", game_id, e);
                return Err(GetGameError::Internal);
            }
        };
        GameView::resolve(self.user_resolver.as_ref(), record, GET_GAME_MESSAGE)
            .await
            .map_err(|e| {
                log::error!("Failed to build view for game {}: {}", game_id, e);
                GetGameError::Internal
            })
    }
}
