use std::sync::Arc;

use hangman_core::HangmanGame;

use crate::{
    domain::{
        RepoRetrieveError,
        game::GameRepository,
        user::{UserRepository, normalize_user_name},
        word::WordSource,
    },
    services::user_resolver::UserResolverService,
    workflow::gameplay::GameView,
};

pub const NEW_GAME_MESSAGE: &str = "Good luck playing Hangman!";

#[async_trait::async_trait]
pub trait NewGameUseCase {
    async fn new_game(&self, user_name: &str) -> Result<GameView, NewGameError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NewGameError {
    #[error("A User with that name does not exist!")]
    UserNotFound,
    #[error("Failed to create game")]
    Internal,
}

pub struct NewGameUseCaseImpl<U: UserRepository, G: GameRepository, W: WordSource, R: UserResolverService>
{
    user_repository: Arc<U>,
    game_repository: Arc<G>,
    word_source: Arc<W>,
    user_resolver: Arc<R>,
}

impl<U: UserRepository, G: GameRepository, W: WordSource, R: UserResolverService>
    NewGameUseCaseImpl<U, G, W, R>
{
    pub fn new(
        user_repository: Arc<U>,
        game_repository: Arc<G>,
        word_source: Arc<W>,
        user_resolver: Arc<R>,
    ) -> Self {
        Self {
            user_repository,
            game_repository,
            word_source,
            user_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<
    U: UserRepository + Send + Sync + 'static,
    G: GameRepository + Send + Sync + 'static,
    W: WordSource + Send + Sync + 'static,
    R: UserResolverService + Send + Sync + 'static,
> NewGameUseCase for NewGameUseCaseImpl<U, G, W, R>
{
    async fn new_game(&self, user_name: &str) -> Result<GameView, NewGameError> {
        let user_name = normalize_user_name(user_name);
        let user = match self.user_repository.get_user_by_name(user_name).await {
            Ok(user) => user,
            Err(RepoRetrieveError::NotFound) => return Err(NewGameError::UserNotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to look up user {}: {}", user_name, e);
                return Err(NewGameError::Internal);
            }
        };

        let game = HangmanGame::new(self.word_source.next_word());
        let record = self
            .game_repository
            .create_game(user.user_id, game)
            .await
            .map_err(|e| {
                log::error!("Failed to store new game for {}: {}", user.name, e);
                NewGameError::Internal
            })?;
        log::debug!("User {} started game {}", user.name, record.game_id);

        GameView::resolve(self.user_resolver.as_ref(), record, NEW_GAME_MESSAGE)
            .await
            .map_err(|e| {
                log::error!("Failed to build game view: {}", e);
                NewGameError::Internal
            })
    }
}
