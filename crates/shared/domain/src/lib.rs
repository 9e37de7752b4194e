//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` entity with its normalization and validation rules, and the
//! credential hasher used before anything is persisted.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{User, UserResponse};
pub use validation::{Action, ValidationError};
