//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

use domain::{
    User, EMAIL_MAX_LENGTH, FIRST_NAME_MAX_LENGTH, LAST_NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH,
    PHOTO_MAX_LENGTH, ROLE_MAX_LENGTH,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Auto-increment key; exposed as `u32` by the domain
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(FIRST_NAME_MAX_LENGTH))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(LAST_NAME_MAX_LENGTH))")]
    pub last_name: String,
    #[sea_orm(column_type = "String(StringLen::N(EMAIL_MAX_LENGTH))", unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(PASSWORD_MAX_LENGTH))")]
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(ROLE_MAX_LENGTH))")]
    pub role: String,
    #[sea_orm(column_type = "String(StringLen::N(PHOTO_MAX_LENGTH))", nullable)]
    pub photo: Option<String>,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Build an insert model; the store assigns the id.
    pub fn for_insert(user: User) -> Self {
        let role = user.role_or_default();

        Self {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password: Set(user.password),
            role: Set(role),
            photo: Set(user.photo),
            active: Set(user.active),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }

    /// Build the column overwrite applied by an update.
    ///
    /// `id`, `active` and `created_at` are left untouched.
    pub fn for_update(user: User) -> Self {
        let role = user.role_or_default();

        Self {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password: Set(user.password),
            role: Set(role),
            photo: Set(user.photo),
            active: NotSet,
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now()),
        }
    }
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: u32::try_from(model.id).unwrap_or_default(),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password: model.password,
            role: model.role,
            photo: model.photo,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
