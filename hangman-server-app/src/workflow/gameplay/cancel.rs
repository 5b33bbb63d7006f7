use std::sync::Arc;

use crate::domain::{GameId, RepoRetrieveError, RepoUpdateError, game::GameRepository};

pub const CANCEL_GAME_MESSAGE: &str = "Success. Game cancelled.";

#[async_trait::async_trait]
pub trait CancelGameUseCase {
    async fn cancel_game(&self, game_id: GameId) -> Result<(), CancelGameError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CancelGameError {
    #[error("Game not found!")]
    NotFound,
    #[error("Game already over!")]
    GameOver,
    #[error("Failed to cancel game")]
    Internal,
}

pub struct CancelGameUseCaseImpl<G: GameRepository> {
    game_repository: Arc<G>,
}

impl<G: GameRepository> CancelGameUseCaseImpl<G> {
    pub fn new(game_repository: Arc<G>) -> Self {
        Self { game_repository }
    }
}

#[async_trait::async_trait]
impl<G: GameRepository + Send + Sync + 'static> CancelGameUseCase for CancelGameUseCaseImpl<G> {
    async fn cancel_game(&self, game_id: GameId) -> Result<(), CancelGameError> {
        let record = match self.game_repository.get_game(game_id).await {
            Ok(record) => record,
            Err(RepoRetrieveError::NotFound) => return Err(CancelGameError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to load game {}: {}", game_id, e);
                return Err(CancelGameError::Internal);
            }
        };
        if record.game.game_over {
            return Err(CancelGameError::GameOver);
        }

        match self.game_repository.delete_game(game_id).await {
            Ok(()) => {
                log::info!("Game {} cancelled", game_id);
                Ok(())
            }
            Err(RepoUpdateError::NotFound) => Err(CancelGameError::NotFound),
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to delete game {}: {}", game_id, e);
                Err(CancelGameError::Internal)
            }
        }
    }
}
