//! Learner API handlers.
//!
//! ```text
//! POST /api/v1/learners {"registrationNumber":"2023001","name":"Adi Nugraha"}
//! GET /api/v1/learners
//! GET /api/v1/learners/{id}
//! PUT /api/v1/learners/{id}
//! DELETE /api/v1/learners/{id}
//! POST /api/v1/learners/{id}/courses {"courseId":"..."}
//! GET /api/v1/learners/{id}/courses
//! ```

use academic_registry::{CourseId, Learner, LearnerId, LearnerWithCourses};
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::domain::ports::LearnerFields;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, LearnerSchema, LearnerWithCoursesSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_uuid};

const LEARNER_ID: FieldName = FieldName::new("learnerId");
const COURSE_ID: FieldName = FieldName::new("courseId");

/// Request body for creating or replacing a learner.
///
/// Example JSON:
/// `{"registrationNumber":"2023001","name":"Adi Nugraha","department":"Teknik Informatika"}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearnerRequest {
    pub registration_number: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
}

impl TryFrom<LearnerRequest> for LearnerFields {
    type Error = Error;

    fn try_from(value: LearnerRequest) -> Result<Self, Self::Error> {
        let registration_number = value
            .registration_number
            .ok_or_else(|| missing_field_error(FieldName::new("registrationNumber")))?;
        let name = value
            .name
            .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
        Ok(Self {
            registration_number,
            name,
            department: value.department,
        })
    }
}

/// Request body for `POST /api/v1/learners/{id}/courses`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: Option<String>,
}

fn learner_id(raw: &str) -> Result<LearnerId, Error> {
    parse_uuid(raw, LEARNER_ID).map(LearnerId::from)
}

/// Register a learner.
#[utoipa::path(
    post,
    path = "/api/v1/learners",
    request_body = LearnerRequest,
    responses(
        (status = 201, description = "Learner created", body = LearnerSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "createLearner"
)]
#[post("/learners")]
pub async fn create_learner(
    state: web::Data<HttpState>,
    payload: web::Json<LearnerRequest>,
) -> ApiResult<HttpResponse> {
    let fields = LearnerFields::try_from(payload.into_inner())?;
    let learner = state.learners.create(fields).await?;
    Ok(HttpResponse::Created().json(learner))
}

/// List every learner.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use academic_backend::inbound::http::learners::list_learners;
///
/// let app = App::new().service(list_learners);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/learners",
    responses(
        (status = 200, description = "Learners", body = [LearnerSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "listLearners"
)]
#[get("/learners")]
pub async fn list_learners(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Learner>>> {
    let learners = state.learners_query.list().await?;
    Ok(web::Json(learners))
}

/// Fetch one learner.
#[utoipa::path(
    get,
    path = "/api/v1/learners/{id}",
    params(("id" = String, Path, description = "Learner identifier")),
    responses(
        (status = 200, description = "Learner", body = LearnerSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "getLearner"
)]
#[get("/learners/{id}")]
pub async fn get_learner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Learner>> {
    let id = learner_id(&path)?;
    let learner = state.learners_query.get(id).await?;
    Ok(web::Json(learner))
}

/// Replace a learner's descriptive fields; enrollments are kept.
#[utoipa::path(
    put,
    path = "/api/v1/learners/{id}",
    params(("id" = String, Path, description = "Learner identifier")),
    request_body = LearnerRequest,
    responses(
        (status = 200, description = "Learner updated", body = LearnerSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "updateLearner"
)]
#[put("/learners/{id}")]
pub async fn update_learner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<LearnerRequest>,
) -> ApiResult<web::Json<Learner>> {
    let id = learner_id(&path)?;
    let fields = LearnerFields::try_from(payload.into_inner())?;
    let learner = state.learners.update(id, fields).await?;
    Ok(web::Json(learner))
}

/// Remove a learner.
#[utoipa::path(
    delete,
    path = "/api/v1/learners/{id}",
    params(("id" = String, Path, description = "Learner identifier")),
    responses(
        (status = 204, description = "Learner deleted"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "deleteLearner"
)]
#[delete("/learners/{id}")]
pub async fn delete_learner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = learner_id(&path)?;
    state.learners.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Enroll a learner in a course.
///
/// A repeated enrollment answers `409` with the unchanged learner under
/// `details.learner`.
#[utoipa::path(
    post,
    path = "/api/v1/learners/{id}/courses",
    params(("id" = String, Path, description = "Learner identifier")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Learner with resolved courses", body = LearnerWithCoursesSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Learner or course not found", body = ErrorSchema),
        (status = 409, description = "Already enrolled", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "enrollLearner"
)]
#[post("/learners/{id}/courses")]
pub async fn enroll_learner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EnrollRequest>,
) -> ApiResult<web::Json<LearnerWithCourses>> {
    let learner = learner_id(&path)?;
    let raw_course = payload
        .into_inner()
        .course_id
        .ok_or_else(|| missing_field_error(COURSE_ID))?;
    let course = parse_uuid(&raw_course, COURSE_ID).map(CourseId::from)?;
    let enrolled = state.enrollment.enroll(learner, course).await?;
    Ok(web::Json(enrolled))
}

/// Fetch a learner together with the details of each enrolled course.
#[utoipa::path(
    get,
    path = "/api/v1/learners/{id}/courses",
    params(("id" = String, Path, description = "Learner identifier")),
    responses(
        (status = 200, description = "Learner with resolved courses", body = LearnerWithCoursesSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["learners"],
    operation_id = "getLearnerCourses"
)]
#[get("/learners/{id}/courses")]
pub async fn get_learner_courses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LearnerWithCourses>> {
    let id = learner_id(&path)?;
    let resolved = state.learners_query.get_with_courses(id).await?;
    Ok(web::Json(resolved))
}
