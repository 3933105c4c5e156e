//! Users API handlers.
//!
//! ```text
//! POST /api/users {"username":"alice"}
//! GET /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::JsonOrForm;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /api/users`, as JSON or a urlencoded form.
///
/// A missing `username` reaches validation as an empty string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserBody {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
}

/// A user as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "alice")]
    pub username: String,
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            username: value.username().to_string(),
            id: value.id().to_string(),
        }
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content(
            (CreateUserBody = "application/json"),
            (CreateUserBody = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid username", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let body = payload.into_inner();
    let user = state
        .users
        .create_user(CreateUserRequest {
            username: body.username,
        })
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// List every registered user in registration order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}
