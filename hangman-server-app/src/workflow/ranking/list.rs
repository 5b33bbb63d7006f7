use std::sync::Arc;

use crate::{domain::user::UserRepository, workflow::ranking::RankingView};

#[async_trait::async_trait]
pub trait ListRankingsUseCase {
    /// Best win percentage first, ties broken by games played.
    async fn list_rankings(&self) -> Result<Vec<RankingView>, ListRankingsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListRankingsError {
    #[error("Failed to load rankings")]
    Internal,
}

pub struct ListRankingsUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> ListRankingsUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync + 'static> ListRankingsUseCase for ListRankingsUseCaseImpl<U> {
    async fn list_rankings(&self) -> Result<Vec<RankingView>, ListRankingsError> {
        let users = self.user_repository.get_rankings().await.map_err(|e| {
            log::error!("Failed to load rankings: {}", e);
            ListRankingsError::Internal
        })?;
        Ok(users
            .into_iter()
            .map(|user| RankingView {
                user_name: user.name,
                percent_won: user.stats.percent_won,
                played: user.stats.played,
            })
            .collect())
    }
}
