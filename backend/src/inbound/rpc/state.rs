//! Shared RPC adapter state.
//!
//! The RPC session depends on domain ports (use-cases) instead of constructing
//! domain services directly, keeping it testable with deterministic doubles.

use std::sync::Arc;

use crate::domain::AcademicRecordsService;
use crate::domain::ports::{
    CourseCommand, CourseQuery, EnrollmentCommand, LearnerCommand, LearnerQuery,
};

/// Dependency bundle for RPC sessions.
#[derive(Clone)]
pub struct RpcState {
    pub learners: Arc<dyn LearnerCommand>,
    pub learners_query: Arc<dyn LearnerQuery>,
    pub courses: Arc<dyn CourseCommand>,
    pub courses_query: Arc<dyn CourseQuery>,
    pub enrollment: Arc<dyn EnrollmentCommand>,
}

impl RpcState {
    /// Wire every port to one shared service.
    pub fn from_service(service: &Arc<AcademicRecordsService>) -> Self {
        Self {
            learners: service.clone(),
            learners_query: service.clone(),
            courses: service.clone(),
            courses_query: service.clone(),
            enrollment: service.clone(),
        }
    }
}
