//! Exercise logging handler.
//!
//! ```text
//! POST /api/users/{id}/exercises {"description":"run","duration":30,"date":"2023-01-05"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, NumberOrText};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Exercise body for `POST /api/users/{id}/exercises`.
///
/// Missing fields reach validation as blanks so the error names the field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddExerciseBody {
    #[serde(default)]
    #[schema(example = "run")]
    pub description: String,
    /// Whole minutes, as a number or numeric string.
    #[serde(default)]
    #[schema(value_type = u32, example = 30)]
    pub duration: Option<NumberOrText>,
    /// Calendar day; today when omitted or blank.
    #[serde(default)]
    #[schema(example = "2023-01-05")]
    pub date: Option<String>,
}

/// The logged exercise merged with its owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Thu Jan 05 2023")]
    pub date: String,
}

impl From<AddExerciseResponse> for ExerciseResponse {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, exercise } = value;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration().minutes(),
            date: exercise.date().to_string(),
        }
    }
}

/// Log an exercise against a user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User identifier")),
    request_body(
        content(
            (AddExerciseBody = "application/json"),
            (AddExerciseBody = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseResponse),
        (status = 400, description = "Invalid description, duration or date", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonOrForm<AddExerciseBody>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let body = payload.into_inner();
    let response = state
        .exercises
        .add_exercise(AddExerciseRequest {
            user_id: path.into_inner(),
            description: body.description,
            duration: body.duration.map(NumberOrText::into_raw).unwrap_or_default(),
            date: body.date,
        })
        .await?;
    Ok(web::Json(ExerciseResponse::from(response)))
}
