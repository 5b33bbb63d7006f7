use std::sync::Arc;

use crate::domain::{GameId, RepoRetrieveError, game::GameRepository};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameHistoryView {
    pub game_id: GameId,
    pub history: Vec<String>,
}

#[async_trait::async_trait]
pub trait GameHistoryUseCase {
    async fn get_history(&self, game_id: GameId) -> Result<GameHistoryView, GameHistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GameHistoryError {
    #[error("Game not found!")]
    NotFound,
    #[error("Failed to load game history")]
    Internal,
}

pub struct GameHistoryUseCaseImpl<G: GameRepository> {
    game_repository: Arc<G>,
}

impl<G: GameRepository> GameHistoryUseCaseImpl<G> {
    pub fn new(game_repository: Arc<G>) -> Self {
        Self { game_repository }
    }
}

#[async_trait::async_trait]
impl<G: GameRepository + Send + Sync + 'static> GameHistoryUseCase for GameHistoryUseCaseImpl<G> {
    async fn get_history(&self, game_id: GameId) -> Result<GameHistoryView, GameHistoryError> {
        match self.game_repository.get_game(game_id).await {
            Ok(record) => Ok(GameHistoryView {
                game_id: record.game_id,
                history: record.game.history,
            }),
            Err(RepoRetrieveError::NotFound) => Err(GameHistoryError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to load history of game {}: {}", game_id, e);
                Err(GameHistoryError::Internal)
            }
        }
    }
}
