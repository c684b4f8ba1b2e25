//! Driving ports at the hexagonal boundary.
//!
//! Inbound adapters depend on these traits; [`crate::domain::AcademicRecordsService`]
//! implements all of them over the shared registry.

mod courses;
mod enrollment_command;
mod learners;

pub use courses::{CourseCommand, CourseFields, CourseQuery};
#[cfg(test)]
pub use courses::{MockCourseCommand, MockCourseQuery};
pub use enrollment_command::EnrollmentCommand;
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use learners::{LearnerCommand, LearnerFields, LearnerQuery};
#[cfg(test)]
pub use learners::{MockLearnerCommand, MockLearnerQuery};
