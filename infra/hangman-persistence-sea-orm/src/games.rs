use hangman_core::HangmanGame;
use hangman_server_app::domain::{
    GameId, RepoError, RepoRetrieveError, RepoUpdateError, UserId,
    game::{GameRecord, GameRepository},
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::game;

pub struct GameRepositoryImpl {
    db: DatabaseConnection,
}

impl GameRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn encode_list(list: &[String]) -> Result<String, String> {
        serde_json::to_string(list).map_err(|e| e.to_string())
    }

    fn decode_list(column: &str) -> Result<Vec<String>, String> {
        serde_json::from_str(column).map_err(|e| format!("Corrupt game column: {}", e))
    }

    fn model_to_record(model: game::Model) -> Result<GameRecord, String> {
        Ok(GameRecord {
            game_id: GameId(model.id),
            user_id: UserId(model.user_id),
            game: HangmanGame {
                target: model.target,
                bad_guesses: Self::decode_list(&model.bad_guesses)?,
                good_guesses: Self::decode_list(&model.good_guesses)?,
                status: model.status,
                misses_remaining: model.misses_remaining as u32,
                game_over: model.game_over,
                history: Self::decode_list(&model.history)?,
            },
        })
    }

    fn fill_game_columns(active: &mut game::ActiveModel, game: &HangmanGame) -> Result<(), String> {
        active.target = Set(game.target.clone());
        active.bad_guesses = Set(Self::encode_list(&game.bad_guesses)?);
        active.good_guesses = Set(Self::encode_list(&game.good_guesses)?);
        active.history = Set(Self::encode_list(&game.history)?);
        active.status = Set(game.status.clone());
        active.misses_remaining = Set(game.misses_remaining as i32);
        active.game_over = Set(game.game_over);
        Ok(())
    }
}

#[async_trait::async_trait]
impl GameRepository for GameRepositoryImpl {
    async fn create_game(
        &self,
        user_id: UserId,
        game: HangmanGame,
    ) -> Result<GameRecord, RepoError> {
        let mut new_game = game::ActiveModel::new();
        new_game.user_id = Set(user_id.0);
        Self::fill_game_columns(&mut new_game, &game).map_err(RepoError::StorageError)?;

        let model = new_game
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(GameRecord {
            game_id: GameId(model.id),
            user_id,
            game,
        })
    }

    async fn get_game(&self, game_id: GameId) -> Result<GameRecord, RepoRetrieveError> {
        let model = game::Entity::find_by_id(game_id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?
            .ok_or(RepoRetrieveError::NotFound)?;
        Self::model_to_record(model).map_err(RepoRetrieveError::StorageError)
    }

    async fn save_game(&self, record: &GameRecord) -> Result<(), RepoUpdateError> {
        let model = game::Entity::find_by_id(record.game_id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?
            .ok_or(RepoUpdateError::NotFound)?;

        let mut active: game::ActiveModel = model.into();
        Self::fill_game_columns(&mut active, &record.game).map_err(RepoUpdateError::StorageError)?;
        active
            .update(&self.db)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;
        Ok(())
    }

    async fn delete_game(&self, game_id: GameId) -> Result<(), RepoUpdateError> {
        let result = game::Entity::delete_by_id(game_id.0)
            .exec(&self.db)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;
        if result.rows_affected == 0 {
            return Err(RepoUpdateError::NotFound);
        }
        Ok(())
    }

    async fn count_games_for_user(&self, user_id: UserId) -> Result<u64, RepoError> {
        game::Entity::find()
            .filter(game::Column::UserId.eq(user_id.0))
            .count(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))
    }

    async fn get_open_games_for_user(&self, user_id: UserId) -> Result<Vec<GameRecord>, RepoError> {
        let models = game::Entity::find()
            .filter(game::Column::UserId.eq(user_id.0))
            .filter(game::Column::GameOver.eq(false))
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        models
            .into_iter()
            .map(|model| Self::model_to_record(model).map_err(RepoError::StorageError))
            .collect()
    }
}
