//! User resource handlers.
//!
//! ```text
//! POST   /v1/users/      create a user
//! GET    /v1/users/{id}  fetch an active user
//! GET    /v1/users/      list active users
//! DELETE /v1/users/{id}  deactivate (soft delete)
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{EmailAddress, Error, NewUser, RecordId, User, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /v1/users/`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Requested username; no uniqueness is enforced.
    #[schema(example = "alice")]
    pub username: String,
    /// Email address; must satisfy the address grammar.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Optional display name.
    #[schema(example = "Alice Liddell")]
    pub full_name: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(value.email)?;
        Self::new(value.username, email, value.full_name)
    }
}

/// Wire representation of a user; the persisted soft-delete state is never
/// exposed here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// External identifier.
    #[schema(example = "65f2a0c4d9b1e83a7c5f0d12")]
    pub id: String,
    /// Username as stored.
    pub username: String,
    /// Email address as stored.
    pub email: String,
    /// Full name, `null` when absent.
    pub full_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_owned(),
            email: user.email().to_string(),
            full_name: user.full_name().map(ToOwned::to_owned),
        }
    }
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    let field = match err {
        UserValidationError::EmptyEmail | UserValidationError::InvalidEmail => "email",
        UserValidationError::EmptyUsername => "username",
    };
    Error::validation_failed(err.to_string()).with_details(json!({ "field": field }))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/v1/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    let user = state.users.create(new_user).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Fetch an active user by identifier.
///
/// A malformed identifier is indistinguishable from a missing one: both are
/// 404.
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    params(("id" = String, Path, description = "External user identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let raw = path.into_inner();
    let Ok(id) = RecordId::new(&raw) else {
        warn!(id = %raw, "rejected malformed user id");
        return Err(Error::not_found("User not found").into());
    };
    match state.users.find_active(&id).await? {
        Some(user) => Ok(web::Json(UserResponse::from(user))),
        None => Err(Error::not_found("User not found").into()),
    }
}

/// List all active users.
#[utoipa::path(
    get,
    path = "/v1/users/",
    responses(
        (status = 200, description = "Active users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_active().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Deactivate a user (soft delete).
///
/// Deactivation is monotonic: a second call finds no active document and
/// reports 404, as does a deactivation of a user that never existed.
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    params(("id" = String, Path, description = "External user identifier")),
    responses(
        (status = 204, description = "User deactivated"),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deactivateUser"
)]
#[delete("/users/{id}")]
pub async fn deactivate_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let Ok(id) = RecordId::new(&raw) else {
        warn!(id = %raw, "rejected malformed user id");
        return Err(Error::not_found("User not found").into());
    };
    if state.users.deactivate(&id).await? {
        info!(user_id = %id, "user deactivated");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found("User not found").into())
    }
}
