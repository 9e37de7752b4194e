//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::{DeleteResponse, LoginRequest, UserRequest};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::login,
    ),
    components(
        schemas(
            UserRequest,
            LoginRequest,
            UserResponse,
            DeleteResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Authentication", description = "Credential check"),
    )
)]
pub struct ApiDoc;
