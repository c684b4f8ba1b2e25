//! The registry owning both entity stores and the enrollment relation.
//!
//! Any operation touching both stores acquires the learner lock before the
//! course lock. Single-store operations take only their own lock, so the two
//! locks can never be waited on in opposite orders.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::course::{Course, CourseDraft};
use crate::entity::{CourseId, LearnerId};
use crate::error::RegistryError;
use crate::identity::{EntityKind, IdGenerator, RandomIdGenerator};
use crate::learner::{Learner, LearnerDraft};
use crate::store::EntityStore;

/// A learner paired with the courses their enrollment list resolves to.
///
/// Courses appear in enrollment order. Identifiers that no longer resolve to a
/// live course are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerWithCourses {
    #[serde(flatten)]
    learner: Learner,
    courses: Vec<Course>,
}

impl LearnerWithCourses {
    /// The learner record.
    #[must_use]
    pub const fn learner(&self) -> &Learner {
        &self.learner
    }

    /// Resolved course details.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Split into the learner and its courses.
    #[must_use]
    pub fn into_parts(self) -> (Learner, Vec<Course>) {
        (self.learner, self.courses)
    }

    fn resolve(learner: Learner, courses: &HashMap<CourseId, Course>) -> Self {
        let resolved = learner
            .course_ids()
            .iter()
            .filter_map(|id| courses.get(id).cloned())
            .collect();
        Self {
            learner,
            courses: resolved,
        }
    }
}

/// Learners, courses and the enrollments linking them.
///
/// One instance is shared by every adapter in a process.
pub struct AcademicRegistry {
    learners: EntityStore<Learner>,
    courses: EntityStore<Course>,
}

impl Default for AcademicRegistry {
    fn default() -> Self {
        Self::with_id_generators(Arc::new(RandomIdGenerator), Arc::new(RandomIdGenerator))
    }
}

impl AcademicRegistry {
    /// Build an empty registry with independent identifier generators per kind.
    #[must_use]
    pub fn with_id_generators(
        learner_ids: Arc<dyn IdGenerator>,
        course_ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            learners: EntityStore::new(learner_ids),
            courses: EntityStore::new(course_ids),
        }
    }

    /// Register a learner with an empty enrollment list.
    ///
    /// # Errors
    /// Fails only when learner identifiers are exhausted.
    pub fn create_learner(&self, draft: LearnerDraft) -> Result<Learner, RegistryError> {
        self.learners.create(draft)
    }

    /// Fetch a learner.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the learner does not exist.
    pub fn get_learner(&self, id: LearnerId) -> Result<Learner, RegistryError> {
        self.learners.get(id)
    }

    /// Snapshot every learner.
    #[must_use]
    pub fn list_learners(&self) -> Vec<Learner> {
        self.learners.list()
    }

    /// Replace a learner's registration number, name and department.
    ///
    /// Enrollments are untouched; they only change through [`Self::enroll`].
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the learner does not exist.
    pub fn update_learner(
        &self,
        id: LearnerId,
        draft: LearnerDraft,
    ) -> Result<Learner, RegistryError> {
        self.learners.update(id, draft)
    }

    /// Remove a learner together with its enrollments.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the learner does not exist.
    pub fn delete_learner(&self, id: LearnerId) -> Result<(), RegistryError> {
        self.learners.delete(id)
    }

    /// Register a course.
    ///
    /// # Errors
    /// Fails only when course identifiers are exhausted.
    pub fn create_course(&self, draft: CourseDraft) -> Result<Course, RegistryError> {
        self.courses.create(draft)
    }

    /// Fetch a course.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the course does not exist.
    pub fn get_course(&self, id: CourseId) -> Result<Course, RegistryError> {
        self.courses.get(id)
    }

    /// Snapshot every course.
    #[must_use]
    pub fn list_courses(&self) -> Vec<Course> {
        self.courses.list()
    }

    /// Append `course_id` to the learner's enrollment list.
    ///
    /// Checks run in a fixed order under both locks: the learner must exist,
    /// then the course must exist, then the course must not already be listed.
    /// On success the learner is returned with its resolved courses.
    ///
    /// # Errors
    /// - [`RegistryError::NotFound`] for a missing learner, then for a missing
    ///   course.
    /// - [`RegistryError::AlreadyEnrolled`] carrying the unchanged learner
    ///   when the course is already listed.
    pub fn enroll(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> Result<LearnerWithCourses, RegistryError> {
        let mut learners = self.learners.write_records();
        let courses = self.courses.read_records();

        let learner = learners
            .get_mut(&learner_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Learner, learner_id))?;
        if !courses.contains_key(&course_id) {
            return Err(RegistryError::not_found(EntityKind::Course, course_id));
        }
        if learner.is_enrolled_in(course_id) {
            return Err(RegistryError::AlreadyEnrolled {
                learner: Box::new(learner.clone()),
                course_id,
            });
        }

        learner.push_course(course_id);
        Ok(LearnerWithCourses::resolve(learner.clone(), &courses))
    }

    /// Fetch a learner together with the courses it is enrolled in.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the learner does not exist.
    pub fn learner_with_courses(
        &self,
        id: LearnerId,
    ) -> Result<LearnerWithCourses, RegistryError> {
        let learners = self.learners.read_records();
        let courses = self.courses.read_records();

        let learner = learners
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(EntityKind::Learner, id))?;
        Ok(LearnerWithCourses::resolve(learner, &courses))
    }

    /// Snapshot every learner together with its resolved courses.
    #[must_use]
    pub fn list_learners_with_courses(&self) -> Vec<LearnerWithCourses> {
        let learners = self.learners.read_records();
        let courses = self.courses.read_records();

        learners
            .values()
            .cloned()
            .map(|learner| LearnerWithCourses::resolve(learner, &courses))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::entity::{Entity, EntityId};
    use crate::identity::SequentialIdGenerator;

    #[fixture]
    fn registry() -> AcademicRegistry {
        AcademicRegistry::with_id_generators(
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(SequentialIdGenerator::starting_at(1000)),
        )
    }

    fn course(registry: &AcademicRegistry, code: &str, credit_weight: i64) -> Course {
        let draft = CourseDraft::new(code, format!("Course {code}"), credit_weight)
            .unwrap_or_else(|err| panic!("test course must be valid: {err}"));
        registry
            .create_course(draft)
            .unwrap_or_else(|err| panic!("course create must succeed: {err}"))
    }

    fn learner(registry: &AcademicRegistry, registration_number: &str) -> Learner {
        let draft = LearnerDraft::new(registration_number, "Learner", None)
            .unwrap_or_else(|err| panic!("test learner must be valid: {err}"));
        registry
            .create_learner(draft)
            .unwrap_or_else(|err| panic!("learner create must succeed: {err}"))
    }

    #[rstest]
    fn enroll_appends_and_resolves(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let if102 = course(&registry, "IF102", 4);
        let adi = learner(&registry, "2023001");

        registry
            .enroll(adi.id(), if101.id())
            .unwrap_or_else(|err| panic!("first enroll must succeed: {err}"));
        let enrolled = registry
            .enroll(adi.id(), if102.id())
            .unwrap_or_else(|err| panic!("second enroll must succeed: {err}"));

        assert_eq!(enrolled.learner().course_ids(), &[if101.id(), if102.id()]);
        assert_eq!(enrolled.courses(), &[if101, if102]);
    }

    #[rstest]
    fn unknown_learner_is_reported_before_unknown_course(registry: AcademicRegistry) {
        let missing_learner = LearnerId::from_uuid(Uuid::from_u128(77));
        let missing_course = CourseId::from_uuid(Uuid::from_u128(88));

        let result = registry.enroll(missing_learner, missing_course);
        assert_eq!(
            result,
            Err(RegistryError::NotFound {
                kind: EntityKind::Learner,
                id: Uuid::from_u128(77),
            })
        );
    }

    #[rstest]
    fn unknown_course_leaves_learner_unchanged(registry: AcademicRegistry) {
        let adi = learner(&registry, "2023001");
        let missing_course = CourseId::from_uuid(Uuid::from_u128(88));

        let result = registry.enroll(adi.id(), missing_course);
        assert_eq!(
            result,
            Err(RegistryError::NotFound {
                kind: EntityKind::Course,
                id: Uuid::from_u128(88),
            })
        );
        assert_eq!(registry.get_learner(adi.id()), Ok(adi));
    }

    #[rstest]
    fn duplicate_enrollment_returns_unchanged_learner(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let adi = learner(&registry, "2023001");
        registry
            .enroll(adi.id(), if101.id())
            .unwrap_or_else(|err| panic!("first enroll must succeed: {err}"));
        let stored = registry
            .get_learner(adi.id())
            .unwrap_or_else(|err| panic!("learner must exist: {err}"));

        let result = registry.enroll(adi.id(), if101.id());
        assert_eq!(
            result,
            Err(RegistryError::AlreadyEnrolled {
                learner: Box::new(stored.clone()),
                course_id: if101.id(),
            })
        );
        assert_eq!(registry.get_learner(adi.id()), Ok(stored));
    }

    #[rstest]
    fn stale_course_ids_are_skipped_on_resolution(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let adi = learner(&registry, "2023001");
        registry
            .enroll(adi.id(), if101.id())
            .unwrap_or_else(|err| panic!("enroll must succeed: {err}"));

        registry
            .courses
            .delete(if101.id())
            .unwrap_or_else(|err| panic!("course delete must succeed: {err}"));

        let resolved = registry
            .learner_with_courses(adi.id())
            .unwrap_or_else(|err| panic!("learner must resolve: {err}"));
        assert_eq!(resolved.learner().course_ids(), &[if101.id()]);
        assert!(resolved.courses().is_empty());
    }

    #[rstest]
    fn resolution_of_missing_learner_is_not_found(registry: AcademicRegistry) {
        let result = registry.learner_with_courses(LearnerId::from_uuid(Uuid::nil()));
        assert!(matches!(
            result,
            Err(RegistryError::NotFound {
                kind: EntityKind::Learner,
                ..
            })
        ));
    }

    #[rstest]
    fn update_preserves_enrollments(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let adi = learner(&registry, "2023001");
        registry
            .enroll(adi.id(), if101.id())
            .unwrap_or_else(|err| panic!("enroll must succeed: {err}"));

        let draft = LearnerDraft::new("2023001", "Adi Nugraha", Some("Sains Data".to_owned()))
            .unwrap_or_else(|err| panic!("draft must be valid: {err}"));
        let updated = registry
            .update_learner(adi.id(), draft)
            .unwrap_or_else(|err| panic!("update must succeed: {err}"));

        assert_eq!(updated.department(), Some("Sains Data"));
        assert_eq!(updated.course_ids(), &[if101.id()]);
    }

    #[rstest]
    fn list_with_courses_covers_every_learner(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let adi = learner(&registry, "2023001");
        let siti = learner(&registry, "2023002");
        registry
            .enroll(siti.id(), if101.id())
            .unwrap_or_else(|err| panic!("enroll must succeed: {err}"));

        let listed = registry.list_learners_with_courses();
        assert_eq!(listed.len(), 2);
        for entry in listed {
            let expected = usize::from(entry.learner().id() == siti.id());
            assert_eq!(entry.courses().len(), expected);
            assert!(entry.learner().id() == adi.id() || entry.learner().id() == siti.id());
        }
    }

    #[rstest]
    fn racing_duplicate_enrollments_apply_once(registry: AcademicRegistry) {
        let if101 = course(&registry, "IF101", 3);
        let adi = learner(&registry, "2023001");
        let (learner_id, course_id) = (adi.id(), if101.id());

        let outcomes: Vec<Result<LearnerWithCourses, RegistryError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let registry = &registry;
                    scope.spawn(move || registry.enroll(learner_id, course_id))
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().ok())
                .collect()
        });

        let accepted = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, Err(RegistryError::AlreadyEnrolled { .. })))
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(
            registry.get_learner(adi.id()).map(|l| l.course_ids().len()),
            Ok(1)
        );
    }

    #[rstest]
    fn concurrent_mixed_operations_do_not_deadlock(registry: AcademicRegistry) {
        let courses: Vec<Course> = (0..10)
            .map(|index| course(&registry, &format!("C{index}"), 2))
            .collect();
        let learners: Vec<Learner> = (0..4)
            .map(|index| learner(&registry, &format!("L{index}")))
            .collect();

        thread::scope(|scope| {
            for enrolled in &learners {
                let registry = &registry;
                let courses = &courses;
                scope.spawn(move || {
                    for target in courses {
                        let _outcome = registry.enroll(enrolled.id(), target.id());
                    }
                });
            }
            let registry = &registry;
            scope.spawn(move || {
                for index in 0..20 {
                    let _created = course(registry, &format!("N{index}"), 1);
                    let _snapshot = registry.list_learners_with_courses();
                }
            });
        });

        for enrolled in &learners {
            let resolved = registry
                .learner_with_courses(enrolled.id())
                .unwrap_or_else(|err| panic!("learner must resolve: {err}"));
            let distinct: HashSet<_> = resolved.learner().course_ids().iter().collect();
            assert_eq!(resolved.courses().len(), courses.len());
            assert_eq!(distinct.len(), courses.len());
        }
        assert_eq!(registry.list_courses().len(), 30);
    }

    #[rstest]
    fn kinds_draw_from_independent_generators(registry: AcademicRegistry) {
        let first_learner = learner(&registry, "1");
        let first_course = course(&registry, "X", 1);
        assert_eq!(first_learner.id().as_uuid(), &Uuid::from_u128(1));
        assert_eq!(first_course.id().as_uuid(), &Uuid::from_u128(1000));
        assert_eq!(<Course as Entity>::KIND, EntityKind::Course);
    }
}
