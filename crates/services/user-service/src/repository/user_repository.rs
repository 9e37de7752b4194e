//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model as UserModel};
use common::{AppError, AppResult};
use domain::{User, FIND_ALL_LIMIT};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Values reaching this layer are already normalized, validated and
/// hashed; the repository only talks to the store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the store assigns the id
    async fn create(&self, user: User) -> AppResult<User>;

    /// List up to `FIND_ALL_LIMIT` users in storage order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>>;

    /// Find user by (normalized) email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite the mutable columns of user `id`, returning the re-read row
    async fn update(&self, id: u32, user: User) -> AppResult<Option<User>>;

    /// Hard delete by ID, returning the number of removed rows
    async fn delete(&self, id: u32) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance over a store handle
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity, UserModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<UserEntity, UserModel, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Map a domain id onto the storage key; ids beyond the column range never exist.
fn storage_key(id: u32) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        let model = WriteRepository::insert(self, ActiveModel::for_insert(user)).await?;
        Ok(User::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models =
            ReadRepository::<UserEntity, UserModel>::find_limited(self, FIND_ALL_LIMIT).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>> {
        let Some(key) = storage_key(id) else {
            return Ok(None);
        };

        let model = ReadRepository::<UserEntity, UserModel>::find_by_id(self, key).await?;
        Ok(model.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(&self, id: u32, user: User) -> AppResult<Option<User>> {
        let Some(key) = storage_key(id) else {
            return Ok(None);
        };

        let result = UserEntity::update_many()
            .set(ActiveModel::for_update(user))
            .filter(user::Column::Id.eq(key))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        // Re-read to return the stored row
        let model = ReadRepository::<UserEntity, UserModel>::find_by_id(self, key).await?;
        Ok(model.map(User::from))
    }

    async fn delete(&self, id: u32) -> AppResult<u64> {
        let Some(key) = storage_key(id) else {
            return Ok(0);
        };

        DeleteRepository::<UserEntity>::delete_by_id(self, key).await
    }
}
