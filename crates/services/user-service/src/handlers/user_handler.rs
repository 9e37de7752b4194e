//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{User, UserResponse, ROLE_USER};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create/replace user request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Password must be at most 100 characters"))]
    #[schema(example = "password123")]
    pub password: String,
    /// Defaults to `user`
    #[validate(length(min = 1, max = 50, message = "Role must be 1 to 50 characters"))]
    #[schema(example = "user")]
    pub role: Option<String>,
    #[validate(length(max = 150, message = "Photo URL must be at most 150 characters"))]
    #[schema(example = "https://robohash.org/ada+lovelace?set=set2")]
    pub photo: Option<String>,
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        User {
            role: request.role.unwrap_or_else(|| ROLE_USER.to_string()),
            photo: request.photo,
            ..User::new(
                request.first_name,
                request.last_name,
                request.email,
                request.password,
            )
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "password123")]
    pub password: String,
}

/// Result of a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Zero when no user had the given id
    pub rows_affected: u64,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/", post(login))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(User::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List users (at most 100)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Replace the mutable fields of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(id, User::from(payload))
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Delete executed", body = DeleteResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<DeleteResponse>> {
    let rows_affected = state.user_service.delete_user(id).await?;
    Ok(Json(DeleteResponse { rows_affected }))
}

/// Check an email/password pair
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .verify_credentials(payload.email, payload.password)
        .await?;
    Ok(Json(UserResponse::from(user)))
}
