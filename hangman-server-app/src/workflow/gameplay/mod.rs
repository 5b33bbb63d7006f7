use hangman_core::HangmanGame;

use crate::{
    domain::{GameId, game::GameRecord},
    services::user_resolver::{ResolveError, UserResolverService},
};

pub mod cancel;
pub mod finalize_game;
pub mod get;
pub mod history;
pub mod list;
pub mod make_move;
pub mod new_game;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub game_id: GameId,
    pub user_name: String,
    pub game: HangmanGame,
    pub message: String,
}

impl GameView {
    pub async fn resolve<R: UserResolverService + ?Sized>(
        user_resolver: &R,
        record: GameRecord,
        message: impl Into<String>,
    ) -> Result<Self, ResolveError> {
        let user_name = user_resolver.resolve_user_name(record.user_id).await?;
        Ok(GameView {
            game_id: record.game_id,
            user_name,
            game: record.game,
            message: message.into(),
        })
    }
}
