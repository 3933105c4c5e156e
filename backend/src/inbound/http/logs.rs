//! Exercise log handler.
//!
//! ```text
//! GET /api/users/{id}/logs?from=2023-01-01&to=2023-01-31&limit=10
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ExerciseLogRequest;
use crate::domain::{ExerciseLog, ExerciseLogEntry};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Optional log filters. All values stay raw strings; the domain decides
/// what is malformed and what is ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// First day to include (`YYYY-MM-DD`, RFC 3339 or `Thu Jan 05 2023`).
    pub from: Option<String>,
    /// Last day to include; the whole day is covered.
    pub to: Option<String>,
    /// Maximum number of entries; non-positive or non-numeric values are
    /// ignored.
    pub limit: Option<String>,
}

/// One entry of the log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogEntryResponse {
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Thu Jan 05 2023")]
    pub date: String,
}

impl From<&ExerciseLogEntry> for LogEntryResponse {
    fn from(value: &ExerciseLogEntry) -> Self {
        Self {
            description: value.description.clone(),
            duration: value.duration,
            date: value.date.to_string(),
        }
    }
}

/// A user's exercise log. `count` equals the length of `log`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponse {
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = 1)]
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

impl From<ExerciseLog> for ExerciseLogResponse {
    fn from(value: ExerciseLog) -> Self {
        let log: Vec<LogEntryResponse> =
            value.entries().iter().map(LogEntryResponse::from).collect();
        Self {
            id: value.user().id().to_string(),
            username: value.user().username().to_string(),
            count: log.len(),
            log,
        }
    }
}

/// Fetch a user's exercise log, filtered by date and truncated by limit.
///
/// Entries are ordered by date ascending.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User identifier"), LogQuery),
    responses(
        (status = 200, description = "Exercise log", body = ExerciseLogResponse),
        (status = 400, description = "Unparseable from or to", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getExerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<ExerciseLogResponse>> {
    let LogQuery { from, to, limit } = query.into_inner();
    let log = state
        .exercise_log
        .fetch_log(ExerciseLogRequest {
            user_id: path.into_inner(),
            from,
            to,
            limit,
        })
        .await?;
    Ok(web::Json(ExerciseLogResponse::from(log)))
}
