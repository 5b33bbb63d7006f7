use std::sync::Arc;

use hangman_core::GuessOutcome;

use crate::{
    domain::{GameId, RepoRetrieveError, game::GameRepository},
    services::user_resolver::UserResolverService,
    workflow::gameplay::{GameView, finalize_game::FinalizeGameWorkflow},
};

#[async_trait::async_trait]
pub trait MakeMoveUseCase {
    /// Rejected guesses are not errors: they come back as a view with an
    /// explanatory message and leave the stored game untouched.
    async fn make_move(&self, game_id: GameId, guess: &str) -> Result<GameView, MakeMoveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MakeMoveError {
    #[error("Game not found!")]
    NotFound,
    #[error("Failed to apply move")]
    Internal,
}

pub struct MakeMoveUseCaseImpl<G: GameRepository, F: FinalizeGameWorkflow, R: UserResolverService> {
    game_repository: Arc<G>,
    finalize_game_workflow: Arc<F>,
    user_resolver: Arc<R>,
}

impl<G: GameRepository, F: FinalizeGameWorkflow, R: UserResolverService>
    MakeMoveUseCaseImpl<G, F, R>
{
    pub fn new(
        game_repository: Arc<G>,
        finalize_game_workflow: Arc<F>,
        user_resolver: Arc<R>,
    ) -> Self {
        Self {
            game_repository,
            finalize_game_workflow,
            user_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<
    G: GameRepository + Send + Sync + 'static,
    F: FinalizeGameWorkflow + Send + Sync + 'static,
    R: UserResolverService + Send + Sync + 'static,
> MakeMoveUseCase for MakeMoveUseCaseImpl<G, F, R>
{
    async fn make_move(&self, game_id: GameId, guess: &str) -> Result<GameView, MakeMoveError> {
        let mut record = match self.game_repository.get_game(game_id).await {
            Ok(record) => record,
            Err(RepoRetrieveError::NotFound) => return Err(MakeMoveError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to load game {}: {}", game_id, e);
                return Err(MakeMoveError::Internal);
            }
        };

        let outcome = record.game.apply_guess(guess);
        let message = record.game.outcome_message(&outcome);
        log::debug!("Game {}: guess {:?} -> {:?}", game_id, guess, outcome);

        if !matches!(outcome, GuessOutcome::Rejected(_)) {
            // read-modify-write without isolation, concurrent moves may overwrite each other
            if let Err(e) = self.game_repository.save_game(&record).await {
                log::error!("Failed to save game {}: {}", game_id, e);
                return Err(MakeMoveError::Internal);
            }
        }

        if outcome.is_game_over() {
            let won = outcome == GuessOutcome::Won;
            if let Err(e) = self.finalize_game_workflow.finalize_game(&record, won).await {
                log::error!("Failed to finalize game {}: {}", game_id, e);
                return Err(MakeMoveError::Internal);
            }
        }

        GameView::resolve(self.user_resolver.as_ref(), record, message)
            .await
            .map_err(|e| {
                log::error!("Failed to build view for game {}: {}", game_id, e);
                MakeMoveError::Internal
            })
    }
}
