use hangman_server_app::domain::{
    RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError, UserId,
    user::{User, UserRepository, UserStats},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::entity::user;

pub struct UserRepositoryImpl {
    db: DatabaseConnection,
}

impl UserRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: user::Model) -> User {
        User {
            user_id: UserId(model.id),
            name: model.name,
            email: model.email,
            stats: UserStats {
                wins: model.wins as u32,
                played: model.played as u32,
                percent_won: model.percent_won as u32,
            },
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create_user(
        &self,
        name: String,
        email: Option<String>,
    ) -> Result<User, RepoCreateError> {
        let existing = user::Entity::find()
            .filter(user::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| RepoCreateError::StorageError(e.to_string()))?;
        if existing.is_some() {
            return Err(RepoCreateError::Conflict);
        }

        let new_user = user::ActiveModel {
            id: Default::default(), // Auto-increment
            name: Set(name),
            email: Set(email),
            wins: Set(0),
            played: Set(0),
            percent_won: Set(0),
        };
        let model = new_user.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RepoCreateError::Conflict,
            _ => RepoCreateError::StorageError(e.to_string()),
        })?;
        Ok(Self::model_to_user(model))
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, RepoRetrieveError> {
        user::Entity::find_by_id(user_id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?
            .map(Self::model_to_user)
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn get_user_by_name(&self, name: &str) -> Result<User, RepoRetrieveError> {
        user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?
            .map(Self::model_to_user)
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn update_user_stats(
        &self,
        user_id: UserId,
        stats: UserStats,
    ) -> Result<(), RepoUpdateError> {
        let model = user::Entity::find_by_id(user_id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?
            .ok_or(RepoUpdateError::NotFound)?;

        let mut user: user::ActiveModel = model.into();
        user.wins = Set(stats.wins as i32);
        user.played = Set(stats.played as i32);
        user.percent_won = Set(stats.percent_won as i32);
        user.update(&self.db)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;
        Ok(())
    }

    async fn get_rankings(&self) -> Result<Vec<User>, RepoError> {
        let models = user::Entity::find()
            .order_by_desc(user::Column::PercentWon)
            .order_by_desc(user::Column::Played)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(models.into_iter().map(Self::model_to_user).collect())
    }
}
