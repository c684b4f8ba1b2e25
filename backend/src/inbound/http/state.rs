//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AcademicRecordsService;
use crate::domain::ports::{
    CourseCommand, CourseQuery, EnrollmentCommand, LearnerCommand, LearnerQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub learners: Arc<dyn LearnerCommand>,
    pub learners_query: Arc<dyn LearnerQuery>,
    pub courses: Arc<dyn CourseCommand>,
    pub courses_query: Arc<dyn CourseQuery>,
    pub enrollment: Arc<dyn EnrollmentCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub learners: Arc<dyn LearnerCommand>,
    pub learners_query: Arc<dyn LearnerQuery>,
    pub courses: Arc<dyn CourseCommand>,
    pub courses_query: Arc<dyn CourseQuery>,
    pub enrollment: Arc<dyn EnrollmentCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            learners,
            learners_query,
            courses,
            courses_query,
            enrollment,
        } = ports;
        Self {
            learners,
            learners_query,
            courses,
            courses_query,
            enrollment,
        }
    }

    /// Wire every port to one shared service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use academic_backend::domain::AcademicRecordsService;
    /// use academic_backend::inbound::http::state::HttpState;
    /// use academic_registry::AcademicRegistry;
    ///
    /// let service = Arc::new(AcademicRecordsService::new(Arc::new(AcademicRegistry::default())));
    /// let state = HttpState::from_service(&service);
    /// let _learners = state.learners.clone();
    /// ```
    pub fn from_service(service: &Arc<AcademicRecordsService>) -> Self {
        Self::new(HttpStatePorts {
            learners: service.clone(),
            learners_query: service.clone(),
            courses: service.clone(),
            courses_query: service.clone(),
            enrollment: service.clone(),
        })
    }
}
