use hangman_server_app::domain::{
    RepoError, ScoreId, UserId,
    score::{NewScore, Score, ScoreOrder, ScoreQuery, ScoreRepository},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::score;

pub struct ScoreRepositoryImpl {
    db: DatabaseConnection,
}

impl ScoreRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_score(model: score::Model) -> Score {
        Score {
            score_id: ScoreId(model.id),
            user_id: UserId(model.user_id),
            date: model.date,
            won: model.won,
            misses: model.misses as u32,
        }
    }
}

#[async_trait::async_trait]
impl ScoreRepository for ScoreRepositoryImpl {
    async fn create_score(&self, score: NewScore) -> Result<Score, RepoError> {
        let new_score = score::ActiveModel {
            id: Default::default(), // Auto-increment
            user_id: Set(score.user_id.0),
            date: Set(score.date),
            won: Set(score.won),
            misses: Set(score.misses as i32),
        };
        let model = new_score
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(Self::model_to_score(model))
    }

    async fn query_scores(&self, query: ScoreQuery) -> Result<Vec<Score>, RepoError> {
        let mut select = score::Entity::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(score::Column::UserId.eq(user_id.0));
        }
        if query.order == ScoreOrder::FewestMisses {
            select = select.order_by_asc(score::Column::Misses);
        }
        select = select.order_by_asc(score::Column::Id);
        if let Some(limit) = query.limit {
            select = select.limit(limit as u64);
        }

        let models = select
            .all(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(models.into_iter().map(Self::model_to_score).collect())
    }
}
