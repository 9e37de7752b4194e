//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{
    sea_query::Table, ConnectOptions, ConnectionTrait, Database as SeaDatabase,
    DatabaseConnection, DbErr, Schema, Statement,
};

use common::DatabaseConfig;

use crate::repository::entities::UserEntity;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool and make sure the `users` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(config.log_statements);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };

        db.ensure_schema().await?;
        tracing::info!(
            backend = ?db.connection.get_database_backend(),
            "Database connected and schema ensured"
        );

        Ok(db)
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `users` table from the entity definition if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let mut create = schema.create_table_from_entity(UserEntity);
        create.if_not_exists();

        self.connection.execute(backend.build(&create)).await?;
        Ok(())
    }

    /// Drop the `users` table (if any) and recreate it empty.
    ///
    /// Destroys every stored user.
    pub async fn reset_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();

        let mut drop_table = Table::drop();
        drop_table.table(UserEntity).if_exists();
        self.connection.execute(backend.build(&drop_table)).await?;

        tracing::warn!("Dropped users table");
        self.ensure_schema().await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
