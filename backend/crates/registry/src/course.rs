//! Course records.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::entity::{CourseId, Entity};
use crate::error::{DraftField, ValidationError, require_text};
use crate::identity::EntityKind;

/// A course learners can enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: CourseId,
    code: String,
    title: String,
    credit_weight: NonZeroU32,
}

impl Course {
    /// Identifier issued at creation.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// Short catalogue code such as `IF101`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit weight; always positive.
    #[must_use]
    pub const fn credit_weight(&self) -> u32 {
        self.credit_weight.get()
    }
}

impl Entity for Course {
    type Id = CourseId;
    type Draft = CourseDraft;

    const KIND: EntityKind = EntityKind::Course;

    fn id(&self) -> CourseId {
        self.id
    }

    fn from_draft(id: CourseId, draft: CourseDraft) -> Self {
        let CourseDraft {
            code,
            title,
            credit_weight,
        } = draft;
        Self {
            id,
            code,
            title,
            credit_weight,
        }
    }

    fn revise(&self, draft: CourseDraft) -> Self {
        Self::from_draft(self.id, draft)
    }
}

/// Validated fields for creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    code: String,
    title: String,
    credit_weight: NonZeroU32,
}

impl CourseDraft {
    /// Validate and normalise course fields.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankField`] for a blank code or title and
    /// [`ValidationError::InvalidCreditWeight`] unless `credit_weight` is in
    /// `1..=u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use academic_registry::{CourseDraft, ValidationError};
    ///
    /// assert!(CourseDraft::new("IF102", "Struktur Data", 4).is_ok());
    /// assert_eq!(
    ///     CourseDraft::new("IF102", "Struktur Data", 0),
    ///     Err(ValidationError::InvalidCreditWeight { value: 0 })
    /// );
    /// ```
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        credit_weight: i64,
    ) -> Result<Self, ValidationError> {
        let code = require_text(code.into(), DraftField::Code)?;
        let title = require_text(title.into(), DraftField::Title)?;
        let credit_weight = u32::try_from(credit_weight)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ValidationError::InvalidCreditWeight {
                value: credit_weight,
            })?;
        Ok(Self {
            code,
            title,
            credit_weight,
        })
    }

    /// Normalised course code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::entity::EntityId;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(i64::from(u32::MAX) + 1)]
    fn credit_weight_must_be_positive(#[case] credit_weight: i64) {
        let result = CourseDraft::new("IF101", "Dasar Pemrograman", credit_weight);
        assert_eq!(
            result,
            Err(ValidationError::InvalidCreditWeight {
                value: credit_weight
            })
        );
    }

    #[rstest]
    #[case("", "Dasar Pemrograman", DraftField::Code)]
    #[case("IF101", "\t", DraftField::Title)]
    fn blank_text_is_rejected(#[case] code: &str, #[case] title: &str, #[case] field: DraftField) {
        let result = CourseDraft::new(code, title, 3);
        assert_eq!(result, Err(ValidationError::BlankField { field }));
    }

    #[rstest]
    fn courses_expose_their_fields() {
        let draft = CourseDraft::new(" IF101", "Dasar Pemrograman", 3)
            .unwrap_or_else(|err| panic!("fixture draft must be valid: {err}"));
        let course = Course::from_draft(CourseId::from_uuid(Uuid::from_u128(3)), draft);

        assert_eq!(course.code(), "IF101");
        assert_eq!(course.title(), "Dasar Pemrograman");
        assert_eq!(course.credit_weight(), 3);
        let value = serde_json::to_value(&course).unwrap_or_default();
        assert_eq!(value["creditWeight"], 3);
    }
}
