use std::sync::Arc;

use crate::{
    domain::{
        game::GameRepository, score::ScoreRepository, user::UserRepository, word::WordSource,
    },
    services::user_resolver::UserResolverServiceImpl,
    workflow::{
        account::create_user::{CreateUserUseCase, CreateUserUseCaseImpl},
        gameplay::{
            cancel::{CancelGameUseCase, CancelGameUseCaseImpl},
            finalize_game::FinalizeGameWorkflowImpl,
            get::{GetGameUseCase, GetGameUseCaseImpl},
            history::{GameHistoryUseCase, GameHistoryUseCaseImpl},
            list::{ListUserGamesUseCase, ListUserGamesUseCaseImpl},
            make_move::{MakeMoveUseCase, MakeMoveUseCaseImpl},
            new_game::{NewGameUseCase, NewGameUseCaseImpl},
        },
        ranking::list::{ListRankingsUseCase, ListRankingsUseCaseImpl},
        scores::query::{ScoreQueryUseCase, ScoreQueryUseCaseImpl},
    },
};

pub mod domain;
pub mod memory;
pub mod services;
pub mod workflow;

pub struct Application {
    pub user_create_use_case: Box<dyn CreateUserUseCase + Send + Sync + 'static>,

    pub game_new_use_case: Box<dyn NewGameUseCase + Send + Sync + 'static>,
    pub game_get_use_case: Box<dyn GetGameUseCase + Send + Sync + 'static>,
    pub game_make_move_use_case: Box<dyn MakeMoveUseCase + Send + Sync + 'static>,
    pub game_history_use_case: Box<dyn GameHistoryUseCase + Send + Sync + 'static>,
    pub game_list_user_games_use_case: Box<dyn ListUserGamesUseCase + Send + Sync + 'static>,
    pub game_cancel_use_case: Box<dyn CancelGameUseCase + Send + Sync + 'static>,

    pub score_query_use_case: Box<dyn ScoreQueryUseCase + Send + Sync + 'static>,
    pub ranking_list_use_case: Box<dyn ListRankingsUseCase + Send + Sync + 'static>,
}

pub fn build_application<
    U: UserRepository + Send + Sync + 'static,
    G: GameRepository + Send + Sync + 'static,
    S: ScoreRepository + Send + Sync + 'static,
    W: WordSource + Send + Sync + 'static,
>(
    user_repository: Arc<U>,
    game_repository: Arc<G>,
    score_repository: Arc<S>,
    word_source: Arc<W>,
) -> Application {
    let user_resolver = Arc::new(UserResolverServiceImpl::new(user_repository.clone()));

    let finalize_game_workflow = Arc::new(FinalizeGameWorkflowImpl::new(
        user_repository.clone(),
        score_repository.clone(),
    ));

    Application {
        user_create_use_case: Box::new(CreateUserUseCaseImpl::new(user_repository.clone())),

        game_new_use_case: Box::new(NewGameUseCaseImpl::new(
            user_repository.clone(),
            game_repository.clone(),
            word_source,
            user_resolver.clone(),
        )),
        game_get_use_case: Box::new(GetGameUseCaseImpl::new(
            game_repository.clone(),
            user_resolver.clone(),
        )),
        game_make_move_use_case: Box::new(MakeMoveUseCaseImpl::new(
            game_repository.clone(),
            finalize_game_workflow,
            user_resolver.clone(),
        )),
        game_history_use_case: Box::new(GameHistoryUseCaseImpl::new(game_repository.clone())),
        game_list_user_games_use_case: Box::new(ListUserGamesUseCaseImpl::new(
            user_repository.clone(),
            game_repository.clone(),
            user_resolver.clone(),
        )),
        game_cancel_use_case: Box::new(CancelGameUseCaseImpl::new(game_repository)),

        score_query_use_case: Box::new(ScoreQueryUseCaseImpl::new(
            user_repository.clone(),
            score_repository,
            user_resolver,
        )),
        ranking_list_use_case: Box::new(ListRankingsUseCaseImpl::new(user_repository)),
    }
}
