//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use common::DatabaseConfig;
use domain::User;
use user_service_lib::infra::Database;
use user_service_lib::repository::UserStore;
use user_service_lib::service::UserManager;

/// In-memory SQLite; a single pooled connection keeps the data alive.
pub async fn memory_db() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        log_statements: false,
    };
    Database::connect(&config)
        .await
        .expect("failed to open in-memory database")
}

pub fn store(db: &Database) -> UserStore {
    UserStore::new(db.get_connection())
}

pub fn manager(db: &Database) -> UserManager {
    UserManager::new(Arc::new(store(db)))
}

pub fn ada() -> User {
    User::new("Ada", "Lovelace", "ada@example.com", "secret123")
}
