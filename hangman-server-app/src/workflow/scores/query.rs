use std::sync::Arc;

use crate::{
    domain::{
        RepoRetrieveError,
        score::{Score, ScoreOrder, ScoreQuery, ScoreRepository},
        user::{UserRepository, normalize_user_name},
    },
    services::user_resolver::UserResolverService,
    workflow::scores::ScoreView,
};

pub const DEFAULT_HIGH_SCORE_COUNT: usize = 5;

#[async_trait::async_trait]
pub trait ScoreQueryUseCase {
    async fn list_scores(&self) -> Result<Vec<ScoreView>, ScoreQueryError>;
    async fn list_user_scores(&self, user_name: &str) -> Result<Vec<ScoreView>, ScoreQueryError>;
    /// Fewest misses first. `None` or zero falls back to [`DEFAULT_HIGH_SCORE_COUNT`].
    async fn list_high_scores(
        &self,
        number_of_results: Option<usize>,
    ) -> Result<Vec<ScoreView>, ScoreQueryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreQueryError {
    #[error("A User with that name does not exist!")]
    UserNotFound,
    #[error("Failed to query scores")]
    Internal,
}

pub struct ScoreQueryUseCaseImpl<U: UserRepository, S: ScoreRepository, R: UserResolverService> {
    user_repository: Arc<U>,
    score_repository: Arc<S>,
    user_resolver: Arc<R>,
}

impl<U: UserRepository, S: ScoreRepository, R: UserResolverService> ScoreQueryUseCaseImpl<U, S, R> {
    pub fn new(user_repository: Arc<U>, score_repository: Arc<S>, user_resolver: Arc<R>) -> Self {
        Self {
            user_repository,
            score_repository,
            user_resolver,
        }
    }
}

impl<
    U: UserRepository + Send + Sync + 'static,
    S: ScoreRepository + Send + Sync + 'static,
    R: UserResolverService + Send + Sync + 'static,
> ScoreQueryUseCaseImpl<U, S, R>
{
    async fn query(&self, query: ScoreQuery) -> Result<Vec<ScoreView>, ScoreQueryError> {
        let scores: Vec<Score> = self.score_repository.query_scores(query).await.map_err(|e| {
            log::error!("Failed to query scores: {}", e);
            ScoreQueryError::Internal
        })?;

        let mut views = Vec::with_capacity(scores.len());
        for score in scores {
            let user_name = self
                .user_resolver
                .resolve_user_name(score.user_id)
                .await
                .map_err(|e| {
                    log::error!("Failed to resolve owner of score {:?}: {}", score.score_id, e);
                    ScoreQueryError::Internal
                })?;
            views.push(ScoreView {
                user_name,
                date: score.date,
                won: score.won,
                misses: score.misses,
            });
        }
        Ok(views)
    }
}

#[async_trait::async_trait]
impl<
    U: UserRepository + Send + Sync + 'static,
    S: ScoreRepository + Send + Sync + 'static,
    R: UserResolverService + Send + Sync + 'static,
> ScoreQueryUseCase for ScoreQueryUseCaseImpl<U, S, R>
{
    async fn list_scores(&self) -> Result<Vec<ScoreView>, ScoreQueryError> {
        self.query(ScoreQuery::default()).await
    }

    async fn list_user_scores(&self, user_name: &str) -> Result<Vec<ScoreView>, ScoreQueryError> {
        let user_name = normalize_user_name(user_name);
        let user = match self.user_repository.get_user_by_name(user_name).await {
            Ok(user) => user,
            Err(RepoRetrieveError::NotFound) => return Err(ScoreQueryError::UserNotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to look up user {}: {}", user_name, e);
                return Err(ScoreQueryError::Internal);
            }
        };
        self.query(ScoreQuery {
            user_id: Some(user.user_id),
            ..Default::default()
        })
        .await
    }

    async fn list_high_scores(
        &self,
        number_of_results: Option<usize>,
    ) -> Result<Vec<ScoreView>, ScoreQueryError> {
        let limit = number_of_results
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_HIGH_SCORE_COUNT);
        self.query(ScoreQuery {
            user_id: None,
            order: ScoreOrder::FewestMisses,
            limit: Some(limit),
        })
        .await
    }
}
