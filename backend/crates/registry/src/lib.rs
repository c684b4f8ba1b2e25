//! Concurrent in-memory registry of learners, courses and enrollments.
//!
//! The crate owns the only real invariants of the academic records service:
//! identifiers are issued once and never reused, a learner's enrolled-course
//! list holds no duplicates, and an enrollment is accepted only while the
//! referenced course exists. Transport adapters translate their requests into
//! calls on [`AcademicRegistry`] and render the results; they add no rules of
//! their own.
//!
//! # Overview
//!
//! - [`IdGenerator`] issues identifiers for one entity kind.
//! - [`EntityStore`] is a keyed container for one entity kind guarded by a
//!   reader/writer lock.
//! - [`AcademicRegistry`] owns one store per kind and implements enrollment,
//!   always acquiring the learner lock before the course lock.
//!
//! # Example
//!
//! ```
//! use academic_registry::{AcademicRegistry, CourseDraft, LearnerDraft};
//!
//! let registry = AcademicRegistry::default();
//! let course = registry
//!     .create_course(CourseDraft::new("IF101", "Dasar Pemrograman", 3).expect("valid course"))
//!     .expect("course created");
//! let learner = registry
//!     .create_learner(
//!         LearnerDraft::new("2023001", "Adi Nugraha", Some("Teknik Informatika".to_owned()))
//!             .expect("valid learner"),
//!     )
//!     .expect("learner created");
//!
//! let enrolled = registry
//!     .enroll(learner.id(), course.id())
//!     .expect("enrollment accepted");
//! assert_eq!(enrolled.courses().len(), 1);
//! ```

mod course;
mod entity;
mod error;
mod identity;
mod learner;
mod registry;
mod store;

pub use course::{Course, CourseDraft};
pub use entity::{CourseId, Entity, EntityId, LearnerId};
pub use error::{DraftField, RegistryError, ValidationError};
pub use identity::{EntityKind, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use learner::{Learner, LearnerDraft};
pub use registry::{AcademicRegistry, LearnerWithCourses};
pub use store::EntityStore;
