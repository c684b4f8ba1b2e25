//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use academic_registry::{
    AcademicRegistry, Course, CourseDraft, Learner, LearnerDraft, LearnerWithCourses,
    SequentialIdGenerator,
};

use crate::domain::ports::{
    MockCourseCommand, MockCourseQuery, MockEnrollmentCommand, MockLearnerCommand,
    MockLearnerQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mock port bundle; tests override the ports they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub learners: MockLearnerCommand,
    pub learners_query: MockLearnerQuery,
    pub courses: MockCourseCommand,
    pub courses_query: MockCourseQuery,
    pub enrollment: MockEnrollmentCommand,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            learners: Arc::new(self.learners),
            learners_query: Arc::new(self.learners_query),
            courses: Arc::new(self.courses),
            courses_query: Arc::new(self.courses_query),
            enrollment: Arc::new(self.enrollment),
        })
    }
}

fn sequential_registry() -> AcademicRegistry {
    AcademicRegistry::with_id_generators(
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(SequentialIdGenerator::starting_at(100)),
    )
}

/// Learner `2023001` with id `...0001` and no enrollments.
pub fn sample_learner() -> Learner {
    sequential_registry()
        .create_learner(
            LearnerDraft::new("2023001", "Adi Nugraha", Some("Teknik Informatika".to_owned()))
                .expect("valid learner draft"),
        )
        .expect("learner created")
}

/// Course `IF101` with id `...0064`.
pub fn sample_course() -> Course {
    sequential_registry()
        .create_course(CourseDraft::new("IF101", "Dasar Pemrograman", 3).expect("valid course"))
        .expect("course created")
}

/// [`sample_learner`] enrolled in [`sample_course`].
pub fn enrolled_sample() -> LearnerWithCourses {
    let registry = sequential_registry();
    let learner = registry
        .create_learner(
            LearnerDraft::new("2023001", "Adi Nugraha", Some("Teknik Informatika".to_owned()))
                .expect("valid learner draft"),
        )
        .expect("learner created");
    let course = registry
        .create_course(CourseDraft::new("IF101", "Dasar Pemrograman", 3).expect("valid course"))
        .expect("course created");
    registry
        .enroll(learner.id(), course.id())
        .expect("enrollment accepted")
}
