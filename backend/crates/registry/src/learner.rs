//! Learner records.

use serde::Serialize;

use crate::entity::{CourseId, Entity, LearnerId};
use crate::error::{DraftField, ValidationError, require_text};
use crate::identity::EntityKind;

/// A learner and the ordered list of courses they are enrolled in.
///
/// ## Invariants
/// - `registration_number` and `name` are non-blank once trimmed.
/// - `course_ids` holds no duplicates and only grows through enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    id: LearnerId,
    registration_number: String,
    name: String,
    department: Option<String>,
    course_ids: Vec<CourseId>,
}

impl Learner {
    /// Identifier issued at creation.
    #[must_use]
    pub const fn id(&self) -> LearnerId {
        self.id
    }

    /// Institution-assigned registration number.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department, when one was supplied.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Enrolled courses in enrollment order.
    #[must_use]
    pub fn course_ids(&self) -> &[CourseId] {
        &self.course_ids
    }

    /// Whether `course_id` is already listed.
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: CourseId) -> bool {
        self.course_ids.contains(&course_id)
    }

    pub(crate) fn push_course(&mut self, course_id: CourseId) {
        self.course_ids.push(course_id);
    }
}

impl Entity for Learner {
    type Id = LearnerId;
    type Draft = LearnerDraft;

    const KIND: EntityKind = EntityKind::Learner;

    fn id(&self) -> LearnerId {
        self.id
    }

    fn from_draft(id: LearnerId, draft: LearnerDraft) -> Self {
        let LearnerDraft {
            registration_number,
            name,
            department,
        } = draft;
        Self {
            id,
            registration_number,
            name,
            department,
            course_ids: Vec::new(),
        }
    }

    fn revise(&self, draft: LearnerDraft) -> Self {
        let LearnerDraft {
            registration_number,
            name,
            department,
        } = draft;
        Self {
            id: self.id,
            registration_number,
            name,
            department,
            course_ids: self.course_ids.clone(),
        }
    }
}

/// Validated fields for creating or replacing a learner.
///
/// # Examples
/// ```
/// use academic_registry::LearnerDraft;
///
/// let draft = LearnerDraft::new(" 2023002 ", "Siti Aminah", Some("  ".to_owned()))
///     .expect("valid draft");
/// assert_eq!(draft.registration_number(), "2023002");
/// assert_eq!(draft.department(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerDraft {
    registration_number: String,
    name: String,
    department: Option<String>,
}

impl LearnerDraft {
    /// Validate and normalise learner fields.
    ///
    /// Text is trimmed; a blank department is treated as absent.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankField`] when the registration number or
    /// name is blank.
    pub fn new(
        registration_number: impl Into<String>,
        name: impl Into<String>,
        department: Option<String>,
    ) -> Result<Self, ValidationError> {
        let registration_number =
            require_text(registration_number.into(), DraftField::RegistrationNumber)?;
        let name = require_text(name.into(), DraftField::Name)?;
        let department = department
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Ok(Self {
            registration_number,
            name,
            department,
        })
    }

    /// Normalised registration number.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Normalised name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalised department.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
}
