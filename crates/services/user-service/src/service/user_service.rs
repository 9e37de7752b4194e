//! User service - Runs the entity lifecycle on top of the repository.
//!
//! Every write goes through the same pipeline before reaching the store:
//! normalize (`User::prepare`), validate for the action, hash the password.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Action, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Normalize, validate, hash and insert a new user
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// List users (at most 100)
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: u32) -> AppResult<User>;

    /// Normalize, validate, re-hash and overwrite user `id`
    async fn update_user(&self, id: u32, user: User) -> AppResult<User>;

    /// Hard delete user; zero rows affected is not an error
    async fn delete_user(&self, id: u32) -> AppResult<u64>;

    /// Compare a plaintext password with the stored hash for `email`
    async fn verify_credentials(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, mut user: User) -> AppResult<User> {
        user.prepare();
        user.validate(Action::Create)?;
        user.hash_password()?;

        let created = self.repo.create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn get_user(&self, id: u32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: u32, mut user: User) -> AppResult<User> {
        user.prepare();
        user.validate(Action::Update)?;
        // Always re-hashed: an update must carry the password
        user.hash_password()?;

        let updated = self.repo.update(id, user).await?.ok_or_not_found()?;
        tracing::info!(user_id = id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: u32) -> AppResult<u64> {
        let rows_affected = self.repo.delete(id).await?;
        tracing::info!(user_id = id, rows_affected, "User delete executed");
        Ok(rows_affected)
    }

    async fn verify_credentials(&self, email: String, password: String) -> AppResult<User> {
        let mut login = User {
            email,
            password,
            ..User::default()
        };
        login.prepare();
        login.validate(Action::Login)?;

        let user = self
            .repo
            .find_by_email(&login.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        user.verify_password(&login.password)?;

        tracing::debug!(user_id = user.id, "Credentials verified");
        Ok(user)
    }
}
