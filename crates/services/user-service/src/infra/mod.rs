//! Infrastructure layer - store connection and schema management.

mod db;

pub use db::Database;
