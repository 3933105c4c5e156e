//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities for users and their exercise
//! logs, and the services that implement the driving ports consumed by the
//! HTTP adapter. Types are immutable once built and validate their
//! invariants on construction.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Exercise and their validated components.
//! - CalendarDate / DateWindow: day-granular dates and log filters.
//! - ExerciseLog: filtered, truncated log returned to clients.
//! - UserService, ExerciseService, ExerciseLogService: port implementations.

mod calendar_date;
pub mod error;
mod exercise;
mod exercise_log;
mod exercise_log_service;
mod exercise_service;
pub mod ports;
mod trace_id;
mod user;
mod user_lookup;
mod user_service;

pub use self::calendar_date::{CalendarDate, CalendarDateParseError, DISPLAY_FORMAT, DateWindow};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::exercise::{
    DURATION_MAX_MINUTES, Description, Exercise, ExerciseDuration, ExerciseId,
    ExerciseValidationError,
};
pub use self::exercise_log::{
    DateField, ExerciseLog, ExerciseLogEntry, LogCriteria, LogCriteriaError, LogLimit,
};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::exercise_service::ExerciseService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("unknown user"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
