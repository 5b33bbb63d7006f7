use std::sync::Arc;

use crate::domain::{
    game::GameRecord,
    score::{NewScore, Score, ScoreRepository},
    user::UserRepository,
};

/// Records the end of a game: one score entry plus the owner's updated stats.
///
/// The two writes are not atomic. A failure between them leaves a score
/// without the matching stats update.
#[async_trait::async_trait]
pub trait FinalizeGameWorkflow {
    async fn finalize_game(&self, ended_game: &GameRecord, won: bool)
    -> Result<Score, FinalizeGameError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FinalizeGameError {
    #[error("failed to record score: {0}")]
    Score(String),
    #[error("failed to update user stats: {0}")]
    UserStats(String),
}

pub struct FinalizeGameWorkflowImpl<U: UserRepository, S: ScoreRepository> {
    user_repository: Arc<U>,
    score_repository: Arc<S>,
}

impl<U: UserRepository, S: ScoreRepository> FinalizeGameWorkflowImpl<U, S> {
    pub fn new(user_repository: Arc<U>, score_repository: Arc<S>) -> Self {
        Self {
            user_repository,
            score_repository,
        }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync + 'static, S: ScoreRepository + Send + Sync + 'static>
    FinalizeGameWorkflow for FinalizeGameWorkflowImpl<U, S>
{
    async fn finalize_game(
        &self,
        ended_game: &GameRecord,
        won: bool,
    ) -> Result<Score, FinalizeGameError> {
        let score = self
            .score_repository
            .create_score(NewScore {
                user_id: ended_game.user_id,
                date: chrono::Utc::now().date_naive(),
                won,
                misses: ended_game.game.misses(),
            })
            .await
            .map_err(|e| FinalizeGameError::Score(e.to_string()))?;

        let mut user = self
            .user_repository
            .get_user(ended_game.user_id)
            .await
            .map_err(|e| FinalizeGameError::UserStats(e.to_string()))?;
        user.stats.record_game(won);
        self.user_repository
            .update_user_stats(user.user_id, user.stats)
            .await
            .map_err(|e| FinalizeGameError::UserStats(e.to_string()))?;

        log::info!(
            "Game {} finished for {}: won={}, misses={}, percent_won={}",
            ended_game.game_id,
            user.name,
            won,
            score.misses,
            user.stats.percent_won
        );
        Ok(score)
    }
}
