use chrono::NaiveDate;

use crate::domain::{RepoError, ScoreId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub score_id: ScoreId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub won: bool,
    pub misses: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub won: bool,
    pub misses: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreOrder {
    /// Insertion order.
    #[default]
    Recorded,
    /// Ascending misses, ties by insertion order.
    FewestMisses,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreQuery {
    pub user_id: Option<UserId>,
    pub order: ScoreOrder,
    pub limit: Option<usize>,
}

#[async_trait::async_trait]
pub trait ScoreRepository {
    async fn create_score(&self, score: NewScore) -> Result<Score, RepoError>;
    async fn query_scores(&self, query: ScoreQuery) -> Result<Vec<Score>, RepoError>;
}
