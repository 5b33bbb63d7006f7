use std::{sync::Arc, time::Duration};

use crate::domain::{
    RepoRetrieveError, UserId,
    user::UserRepository,
};

#[async_trait::async_trait]
pub trait UserResolverService {
    async fn resolve_user_name(&self, user_id: UserId) -> Result<String, ResolveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("user {0} does not exist")]
    NotFound(UserId),
    #[error("storage error: {0}")]
    Internal(String),
}

pub struct UserResolverServiceImpl<U: UserRepository> {
    user_repository: Arc<U>,
    // user names never change once registered
    name_cache: moka::sync::Cache<UserId, String>,
}

impl<U: UserRepository> UserResolverServiceImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self {
            user_repository,
            name_cache: moka::sync::Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(60 * 60))
                .build(),
        }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync + 'static> UserResolverService
    for UserResolverServiceImpl<U>
{
    async fn resolve_user_name(&self, user_id: UserId) -> Result<String, ResolveError> {
        if let Some(name) = self.name_cache.get(&user_id) {
            return Ok(name);
        }
        match self.user_repository.get_user(user_id).await {
            Ok(user) => {
                self.name_cache.insert(user_id, user.name.clone());
                Ok(user.name)
            }
            Err(RepoRetrieveError::NotFound) => Err(ResolveError::NotFound(user_id)),
            Err(RepoRetrieveError::StorageError(e)) => Err(ResolveError::Internal(e)),
        }
    }
}
