//! Error types returned by registry operations.
//!
//! All failures are local and synchronous. The registry never logs or retries;
//! adapters map each variant onto their own wire representation.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::entity::{CourseId, EntityId};
use crate::identity::EntityKind;
use crate::learner::Learner;

/// Errors raised by [`AcademicRegistry`](crate::AcademicRegistry) and
/// [`EntityStore`](crate::EntityStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No live record of `kind` carries `id`.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of record that was looked up.
        kind: EntityKind,
        /// Identifier that failed to resolve.
        id: Uuid,
    },
    /// The learner already lists the course.
    ///
    /// Carries the learner exactly as stored so callers can show the current
    /// enrollment state.
    #[error("learner {} is already enrolled in course {course_id}", learner.id())]
    AlreadyEnrolled {
        /// Unmodified learner record.
        learner: Box<Learner>,
        /// Course the caller attempted to add.
        course_id: CourseId,
    },
    /// Caller-supplied fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The identifier generator for `kind` cannot issue further values.
    #[error("{kind} identifiers are exhausted")]
    IdentityExhausted {
        /// Kind whose generator is exhausted.
        kind: EntityKind,
    },
}

impl RegistryError {
    pub(crate) fn not_found<I: EntityId>(kind: EntityKind, id: I) -> Self {
        Self::NotFound {
            kind,
            id: *id.as_uuid(),
        }
    }
}

/// Draft fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Learner registration number.
    RegistrationNumber,
    /// Learner display name.
    Name,
    /// Course code.
    Code,
    /// Course title.
    Title,
    /// Course credit weight.
    CreditWeight,
}

impl DraftField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegistrationNumber => "registrationNumber",
            Self::Name => "name",
            Self::Code => "code",
            Self::Title => "title",
            Self::CreditWeight => "creditWeight",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised while building drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    #[error("{field} must not be blank")]
    BlankField {
        /// The offending field.
        field: DraftField,
    },
    /// Credit weight was zero, negative or too large.
    #[error("creditWeight must be a positive integer, got {value}")]
    InvalidCreditWeight {
        /// Value supplied by the caller.
        value: i64,
    },
}

impl ValidationError {
    /// The field that failed validation.
    #[must_use]
    pub const fn field(&self) -> DraftField {
        match self {
            Self::BlankField { field } => *field,
            Self::InvalidCreditWeight { .. } => DraftField::CreditWeight,
        }
    }
}

/// Trim `value`, rejecting it when nothing remains.
pub(crate) fn require_text(value: String, field: DraftField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::entity::LearnerId;

    #[rstest]
    fn not_found_names_kind_and_id() {
        let err = RegistryError::not_found(EntityKind::Course, LearnerId::from_uuid(Uuid::nil()));
        assert_eq!(
            err.to_string(),
            "course 00000000-0000-0000-0000-000000000000 not found"
        );
    }

    #[rstest]
    #[case(ValidationError::BlankField { field: DraftField::Name }, DraftField::Name, "name must not be blank")]
    #[case(
        ValidationError::InvalidCreditWeight { value: -2 },
        DraftField::CreditWeight,
        "creditWeight must be a positive integer, got -2"
    )]
    fn validation_errors_report_their_field(
        #[case] err: ValidationError,
        #[case] field: DraftField,
        #[case] message: &str,
    ) {
        assert_eq!(err.field(), field);
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    fn validation_errors_convert_into_registry_errors() {
        let err: RegistryError = ValidationError::BlankField {
            field: DraftField::Code,
        }
        .into();
        assert!(matches!(err, RegistryError::Validation(_)));
    }
}
