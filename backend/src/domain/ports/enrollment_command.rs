//! Driving port for enrolling learners in courses.

use academic_registry::{CourseId, LearnerId, LearnerWithCourses};
use async_trait::async_trait;

use crate::domain::Error;

/// Enrollment use-case.
///
/// Implementations report a missing learner before a missing course, and a
/// repeated enrollment as [`crate::domain::ErrorCode::Conflict`] whose details
/// carry the unchanged learner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Append `course_id` to the learner's courses.
    async fn enroll(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> Result<LearnerWithCourses, Error>;
}
