//! User profile handlers.
//!
//! ```text
//! GET    /api/users
//! GET    /api/users/{id}
//! POST   /api/users       {"username":"alice","email":"alice@example.com","first_name":"Alice","last_name":"Wong"}
//! PUT    /api/users/{id}  {"age":29}
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{UserId, UserProfile, to_iso8601};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::payload::{into_draft, json_object, require_create_fields};
use crate::inbound::http::schemas::{UserProfileSchema, UserRequestSchema};
use crate::inbound::http::state::HttpState;

/// Body of `GET /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Every stored profile in identifier order.
    #[schema(value_type = Vec<UserProfileSchema>)]
    pub users: Vec<UserProfile>,
    /// Number of profiles returned.
    pub count: usize,
    /// Response time.
    #[schema(example = "2023-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Body of `GET /api/users/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// Requested profile.
    #[schema(value_type = UserProfileSchema)]
    pub user: UserProfile,
    /// Response time.
    pub timestamp: String,
}

/// Body of successful create and update calls.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserWriteResponse {
    /// Outcome summary.
    #[schema(example = "User created successfully")]
    pub message: String,
    /// Profile after the write.
    #[schema(value_type = UserProfileSchema)]
    pub user: UserProfile,
    /// Response time.
    pub timestamp: String,
}

/// Body of a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDeletedResponse {
    /// Outcome summary.
    #[schema(example = "User deleted successfully")]
    pub message: String,
    /// Identifier of the removed user.
    #[schema(example = 3)]
    pub user_id: u64,
    /// Response time.
    pub timestamp: String,
}

fn now(state: &HttpState) -> String {
    to_iso8601(state.clock.utc())
}

fn parse_id(raw: &str) -> ApiResult<UserId> {
    Ok(UserId::parse(raw)?)
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users in creation order", body = UserListResponse),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UserListResponse>> {
    let users: Vec<UserProfile> = state
        .users
        .list_users()
        .await?
        .iter()
        .map(|user| user.profile())
        .collect();
    Ok(web::Json(UserListResponse {
        count: users.len(),
        users,
        timestamp: now(&state),
    }))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Positive integer user identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Identifier is not a positive integer", body = ErrorEnvelope),
        (status = 404, description = "No such user", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_id(&path)?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(UserResponse {
        user: user.profile(),
        timestamp: now(&state),
    }))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = UserRequestSchema, content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = UserWriteResponse),
        (status = 400, description = "Malformed request or invalid field", body = ErrorEnvelope),
        (status = 409, description = "Username or email already taken", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let object = json_object(&req, &body)?;
    require_create_fields(&object)?;
    let user = state.users.create_user(into_draft(object)).await?;
    Ok(HttpResponse::Created().json(UserWriteResponse {
        message: "User created successfully".to_owned(),
        user: user.profile(),
        timestamp: now(&state),
    }))
}

/// Update any subset of a user's fields.
///
/// A missing user is reported before the body is inspected.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Positive integer user identifier")),
    request_body(content = UserRequestSchema, content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = UserWriteResponse),
        (status = 400, description = "Malformed request or invalid field", body = ErrorEnvelope),
        (status = 404, description = "No such user", body = ErrorEnvelope),
        (status = 409, description = "Username or email already taken", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<UserWriteResponse>> {
    let id = parse_id(&path)?;
    state.users.get_user(id).await?;
    let object = json_object(&req, &body)?;
    let user = state.users.update_user(id, into_draft(object)).await?;
    Ok(web::Json(UserWriteResponse {
        message: "User updated successfully".to_owned(),
        user: user.profile(),
        timestamp: now(&state),
    }))
}

/// Delete a user. Its identifier is never handed out again.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Positive integer user identifier")),
    responses(
        (status = 200, description = "User deleted", body = UserDeletedResponse),
        (status = 400, description = "Identifier is not a positive integer", body = ErrorEnvelope),
        (status = 404, description = "No such user", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserDeletedResponse>> {
    let id = parse_id(&path)?;
    let removed = state.users.delete_user(id).await?;
    Ok(web::Json(UserDeletedResponse {
        message: "User deleted successfully".to_owned(),
        user_id: removed.id().get(),
        timestamp: now(&state),
    }))
}
