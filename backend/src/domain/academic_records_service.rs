//! Academic records domain service.
//!
//! Implements every driving port over one shared [`AcademicRegistry`] and
//! maps registry failures onto the transport-agnostic [`Error`].

use std::sync::Arc;

use academic_registry::{
    AcademicRegistry, Course, CourseDraft, CourseId, Learner, LearnerDraft, LearnerId,
    LearnerWithCourses, RegistryError, ValidationError,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::Error;
use crate::domain::ports::{
    CourseCommand, CourseFields, CourseQuery, EnrollmentCommand, LearnerCommand, LearnerFields,
    LearnerQuery,
};

/// Service implementing the learner, course and enrollment ports.
#[derive(Clone)]
pub struct AcademicRecordsService {
    registry: Arc<AcademicRegistry>,
}

impl AcademicRecordsService {
    /// Create a service over the shared registry.
    pub fn new(registry: Arc<AcademicRegistry>) -> Self {
        Self { registry }
    }

    fn learner_draft(fields: LearnerFields) -> Result<LearnerDraft, Error> {
        let LearnerFields {
            registration_number,
            name,
            department,
        } = fields;
        LearnerDraft::new(registration_number, name, department).map_err(map_validation_error)
    }

    fn course_draft(fields: CourseFields) -> Result<CourseDraft, Error> {
        let CourseFields {
            code,
            title,
            credit_weight,
        } = fields;
        CourseDraft::new(code, title, credit_weight).map_err(map_validation_error)
    }
}

fn map_validation_error(err: ValidationError) -> Error {
    let code = match err {
        ValidationError::BlankField { .. } => "blank_field",
        ValidationError::InvalidCreditWeight { .. } => "invalid_credit_weight",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field().as_str(),
        "code": code,
    }))
}

pub(crate) fn map_registry_error(err: RegistryError) -> Error {
    match err {
        RegistryError::NotFound { kind, id } => Error::not_found(format!("{kind} not found"))
            .with_details(json!({
                "kind": kind.as_str(),
                "id": id,
                "code": format!("{kind}_not_found"),
            })),
        RegistryError::AlreadyEnrolled { learner, course_id } => {
            Error::conflict("learner is already enrolled in this course").with_details(json!({
                "courseId": course_id,
                "learner": learner,
                "code": "already_enrolled",
            }))
        }
        RegistryError::Validation(validation) => map_validation_error(validation),
        RegistryError::IdentityExhausted { kind } => {
            error!(%kind, "identifier generator exhausted");
            Error::internal(format!("cannot issue further {kind} identifiers"))
        }
    }
}

#[async_trait]
impl LearnerCommand for AcademicRecordsService {
    async fn create(&self, fields: LearnerFields) -> Result<Learner, Error> {
        let draft = Self::learner_draft(fields)?;
        let learner = self
            .registry
            .create_learner(draft)
            .map_err(map_registry_error)?;
        info!(learner_id = %learner.id(), "learner created");
        Ok(learner)
    }

    async fn update(&self, id: LearnerId, fields: LearnerFields) -> Result<Learner, Error> {
        let draft = Self::learner_draft(fields)?;
        let learner = self
            .registry
            .update_learner(id, draft)
            .map_err(map_registry_error)?;
        info!(learner_id = %id, "learner updated");
        Ok(learner)
    }

    async fn delete(&self, id: LearnerId) -> Result<(), Error> {
        self.registry
            .delete_learner(id)
            .map_err(map_registry_error)?;
        info!(learner_id = %id, "learner deleted");
        Ok(())
    }
}

#[async_trait]
impl LearnerQuery for AcademicRecordsService {
    async fn get(&self, id: LearnerId) -> Result<Learner, Error> {
        self.registry.get_learner(id).map_err(map_registry_error)
    }

    async fn list(&self) -> Result<Vec<Learner>, Error> {
        Ok(self.registry.list_learners())
    }

    async fn get_with_courses(&self, id: LearnerId) -> Result<LearnerWithCourses, Error> {
        self.registry
            .learner_with_courses(id)
            .map_err(map_registry_error)
    }

    async fn list_with_courses(&self) -> Result<Vec<LearnerWithCourses>, Error> {
        Ok(self.registry.list_learners_with_courses())
    }
}

#[async_trait]
impl CourseCommand for AcademicRecordsService {
    async fn create(&self, fields: CourseFields) -> Result<Course, Error> {
        let draft = Self::course_draft(fields)?;
        let course = self
            .registry
            .create_course(draft)
            .map_err(map_registry_error)?;
        info!(course_id = %course.id(), code = course.code(), "course created");
        Ok(course)
    }
}

#[async_trait]
impl CourseQuery for AcademicRecordsService {
    async fn get(&self, id: CourseId) -> Result<Course, Error> {
        self.registry.get_course(id).map_err(map_registry_error)
    }

    async fn list(&self) -> Result<Vec<Course>, Error> {
        Ok(self.registry.list_courses())
    }
}

#[async_trait]
impl EnrollmentCommand for AcademicRecordsService {
    async fn enroll(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> Result<LearnerWithCourses, Error> {
        match self.registry.enroll(learner_id, course_id) {
            Ok(enrolled) => {
                info!(%learner_id, %course_id, "learner enrolled");
                Ok(enrolled)
            }
            Err(err) => {
                debug!(%learner_id, %course_id, error = %err, "enrollment rejected");
                Err(map_registry_error(err))
            }
        }
    }
}

#[cfg(test)]
#[path = "academic_records_service_tests.rs"]
mod tests;
