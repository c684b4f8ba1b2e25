//! OpenAPI schema definitions for domain types.
//!
//! Domain and registry types remain framework-agnostic by not deriving
//! `ToSchema`. This module provides the schema definitions required for
//! OpenAPI documentation using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested learner or course does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request clashes with current state, such as a repeated enrollment.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "learnerId must be a valid UUID")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field or, for
    /// conflicts, the unchanged learner.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`academic_registry::Learner`].
#[derive(ToSchema)]
#[schema(as = academic_registry::Learner)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LearnerSchema {
    /// Stable learner identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Institution-assigned registration number.
    #[schema(example = "2023001")]
    registration_number: String,
    /// Display name.
    #[schema(example = "Adi Nugraha")]
    name: String,
    /// Department, when known.
    #[schema(example = "Teknik Informatika")]
    department: Option<String>,
    /// Enrolled course identifiers in enrollment order.
    course_ids: Vec<String>,
}

/// OpenAPI schema for [`academic_registry::Course`].
#[derive(ToSchema)]
#[schema(as = academic_registry::Course)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseSchema {
    /// Stable course identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Catalogue code.
    #[schema(example = "IF101")]
    code: String,
    /// Course title.
    #[schema(example = "Dasar Pemrograman")]
    title: String,
    /// Positive credit weight.
    #[schema(example = 3, minimum = 1)]
    credit_weight: u32,
}

/// OpenAPI schema for [`academic_registry::LearnerWithCourses`].
///
/// The learner's fields plus the details of every enrolled course that still
/// exists.
#[derive(ToSchema)]
#[schema(as = academic_registry::LearnerWithCourses)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LearnerWithCoursesSchema {
    #[schema(value_type = String)]
    id: String,
    registration_number: String,
    name: String,
    department: Option<String>,
    course_ids: Vec<String>,
    /// Resolved course details.
    courses: Vec<CourseSchema>,
}
