//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every learner, course and health endpoint
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] that describe
//!   registry and domain types without coupling them to utoipa, plus the
//!   request bodies
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::courses::CourseRequest;
use crate::inbound::http::learners::{EnrollRequest, LearnerRequest};
use crate::inbound::http::schemas::{
    CourseSchema, ErrorCodeSchema, ErrorSchema, LearnerSchema, LearnerWithCoursesSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academic records API",
        description = "Learners, courses and enrollments over a concurrent in-memory registry."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::learners::create_learner,
        crate::inbound::http::learners::list_learners,
        crate::inbound::http::learners::get_learner,
        crate::inbound::http::learners::update_learner,
        crate::inbound::http::learners::delete_learner,
        crate::inbound::http::learners::enroll_learner,
        crate::inbound::http::learners::get_learner_courses,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LearnerSchema,
        CourseSchema,
        LearnerWithCoursesSchema,
        ErrorSchema,
        ErrorCodeSchema,
        LearnerRequest,
        EnrollRequest,
        CourseRequest
    )),
    tags(
        (name = "learners", description = "Learner records and enrollment"),
        (name = "courses", description = "Course catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const LEARNER_SCHEMA_NAME: &str = "academic_registry.Learner";
    const COURSE_SCHEMA_NAME: &str = "academic_registry.Course";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "details")]
    #[case(LEARNER_SCHEMA_NAME, "registrationNumber")]
    #[case(LEARNER_SCHEMA_NAME, "courseIds")]
    #[case(COURSE_SCHEMA_NAME, "creditWeight")]
    fn registered_schemas_expose_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/v1/learners")]
    #[case("/api/v1/learners/{id}")]
    #[case("/api/v1/learners/{id}/courses")]
    #[case("/api/v1/courses")]
    #[case("/api/v1/courses/{id}")]
    #[case("/health/ready")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn enroll_documents_conflict_response() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/v1/learners/{id}/courses")
            .expect("enroll path");
        let post = item.post.as_ref().expect("post operation");
        assert!(post.responses.responses.contains_key("409"));
    }
}
