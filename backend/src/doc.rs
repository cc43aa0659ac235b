//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler's `utoipa::path` annotation and the
//! schema mirrors from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds; `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::ErrorEnvelope;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, UserProfileSchema, UserRequestSchema};
use crate::inbound::http::users::{
    UserDeletedResponse, UserListResponse, UserResponse, UserWriteResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Profile API",
        description = "CRUD over in-memory user profiles with field validation and a uniform error envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::health::health,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        UserProfileSchema,
        UserRequestSchema,
        ErrorCodeSchema,
        ErrorEnvelope,
        HealthResponse,
        UserListResponse,
        UserResponse,
        UserWriteResponse,
        UserDeletedResponse,
    )),
    tags(
        (name = "users", description = "User profile operations"),
        (name = "health", description = "Health probe"),
        (name = "meta", description = "Landing page")
    )
)]
pub struct ApiDoc;
