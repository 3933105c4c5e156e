//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod exercises;
pub mod health;
pub mod logs;
pub mod payload;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` routes and the extractor configuration they rely on.
///
/// Malformed JSON, form and query payloads are answered with the shared
/// `invalid_request` error body. Callers supply [`state::HttpState`] as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use exercise_tracker::inbound::http::configure_api;
/// use exercise_tracker::inbound::http::state::HttpState;
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::fixtures()))
///     .configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .service(users::create_user)
            .service(users::list_users)
            .service(exercises::add_exercise)
            .service(logs::get_log),
    );
}
