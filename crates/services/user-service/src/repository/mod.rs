//! Repository layer - Data access abstraction
//!
//! Repositories own every call to the store; the `User` entity itself
//! carries no persistence logic.

mod base;
pub mod entities;
mod user_repository;

pub use base::{DeleteRepository, ReadRepository, WriteRepository};
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
