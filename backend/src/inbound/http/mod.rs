//! HTTP inbound adapter exposing REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod learners;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The `/api/v1` scope with every learner and course handler registered.
///
/// Handlers expect [`state::HttpState`] in the application data. JSON bodies
/// that fail to decode are answered with [`error::json_error_handler`].
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(learners::create_learner)
        .service(learners::list_learners)
        .service(learners::get_learner)
        .service(learners::update_learner)
        .service(learners::delete_learner)
        .service(learners::enroll_learner)
        .service(learners::get_learner_courses)
        .service(courses::create_course)
        .service(courses::list_courses)
        .service(courses::get_course)
}
