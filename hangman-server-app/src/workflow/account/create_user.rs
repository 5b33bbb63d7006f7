use std::sync::Arc;

use crate::domain::{
    RepoCreateError,
    user::{User, UserRepository, normalize_user_name},
};

#[async_trait::async_trait]
pub trait CreateUserUseCase {
    async fn create_user(&self, name: &str, email: Option<String>)
    -> Result<User, CreateUserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("A User with that name already exists!")]
    AlreadyExists,
    #[error("A user name is required!")]
    InvalidName,
    #[error("Failed to create user")]
    Internal,
}

pub struct CreateUserUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> CreateUserUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync + 'static> CreateUserUseCase for CreateUserUseCaseImpl<U> {
    async fn create_user(
        &self,
        name: &str,
        email: Option<String>,
    ) -> Result<User, CreateUserError> {
        let name = normalize_user_name(name);
        if name.is_empty() {
            return Err(CreateUserError::InvalidName);
        }
        let email = email.filter(|e| !e.trim().is_empty());
        match self
            .user_repository
            .create_user(name.to_string(), email)
            .await
        {
            Ok(user) => {
                log::info!("Created user {} ({})", user.name, user.user_id);
                Ok(user)
            }
            Err(RepoCreateError::Conflict) => Err(CreateUserError::AlreadyExists),
            Err(RepoCreateError::StorageError(e)) => {
                log::error!("Failed to create user {}: {}", name, e);
                Err(CreateUserError::Internal)
            }
        }
    }
}
