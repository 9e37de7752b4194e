//! Domain-level constants.
//!
//! These constants define business rules and storage limits.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to users created without one
pub const ROLE_USER: &str = "user";

// =============================================================================
// Column sizes (enforced by the storage schema)
// =============================================================================

pub const FIRST_NAME_MAX_LENGTH: u32 = 50;
pub const LAST_NAME_MAX_LENGTH: u32 = 50;
pub const EMAIL_MAX_LENGTH: u32 = 100;
pub const PASSWORD_MAX_LENGTH: u32 = 100;
pub const ROLE_MAX_LENGTH: u32 = 50;
pub const PHOTO_MAX_LENGTH: u32 = 150;

// =============================================================================
// Queries
// =============================================================================

/// Maximum number of rows returned by a full listing
pub const FIND_ALL_LIMIT: u64 = 100;
