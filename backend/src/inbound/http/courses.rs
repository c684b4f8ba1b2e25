//! Course catalogue API handlers.
//!
//! ```text
//! POST /api/v1/courses {"code":"IF101","title":"Dasar Pemrograman","creditWeight":3}
//! GET /api/v1/courses
//! GET /api/v1/courses/{id}
//! ```

use academic_registry::{Course, CourseId};
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::domain::ports::CourseFields;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CourseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_uuid};

/// Request body for `POST /api/v1/courses`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    #[schema(example = 3)]
    pub credit_weight: Option<i64>,
}

impl TryFrom<CourseRequest> for CourseFields {
    type Error = Error;

    fn try_from(value: CourseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            code: value
                .code
                .ok_or_else(|| missing_field_error(FieldName::new("code")))?,
            title: value
                .title
                .ok_or_else(|| missing_field_error(FieldName::new("title")))?,
            credit_weight: value
                .credit_weight
                .ok_or_else(|| missing_field_error(FieldName::new("creditWeight")))?,
        })
    }
}

/// Add a course to the catalogue.
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<HttpResponse> {
    let fields = CourseFields::try_from(payload.into_inner())?;
    let course = state.courses.create(fields).await?;
    Ok(HttpResponse::Created().json(course))
}

/// List the course catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Courses", body = [CourseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    let courses = state.courses_query.list().await?;
    Ok(web::Json(courses))
}

/// Fetch one course.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course", body = CourseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    let id = parse_uuid(&path, FieldName::new("courseId")).map(CourseId::from)?;
    let course = state.courses_query.get(id).await?;
    Ok(web::Json(course))
}
