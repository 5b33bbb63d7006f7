use hangman_core::HangmanGame;

use crate::domain::{GameId, RepoError, RepoRetrieveError, RepoUpdateError, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: GameId,
    pub user_id: UserId,
    pub game: HangmanGame,
}

#[async_trait::async_trait]
pub trait GameRepository {
    async fn create_game(&self, user_id: UserId, game: HangmanGame)
    -> Result<GameRecord, RepoError>;
    async fn get_game(&self, game_id: GameId) -> Result<GameRecord, RepoRetrieveError>;
    async fn save_game(&self, record: &GameRecord) -> Result<(), RepoUpdateError>;
    async fn delete_game(&self, game_id: GameId) -> Result<(), RepoUpdateError>;
    /// Counts every game the user ever started, finished ones included.
    async fn count_games_for_user(&self, user_id: UserId) -> Result<u64, RepoError>;
    async fn get_open_games_for_user(&self, user_id: UserId) -> Result<Vec<GameRecord>, RepoError>;
}
