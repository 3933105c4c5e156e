//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (users,
//!   exercises, logs, health)
//! - **Schemas**: request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe the error body
//!   without coupling domain types to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::exercises::{AddExerciseBody, ExerciseResponse};
use crate::inbound::http::logs::{ExerciseLogResponse, LogEntryResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserBody, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, log exercises and query filtered exercise logs.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::logs::get_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        UserResponse,
        AddExerciseBody,
        ExerciseResponse,
        LogEntryResponse,
        ExerciseLogResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise logging and log queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
