//! Traits shared by every record kind held in an [`EntityStore`](crate::EntityStore).

use std::fmt;
use std::hash::Hash;

use uuid::Uuid;

use crate::identity::EntityKind;

/// Strongly typed identifier wrapping a UUID.
pub trait EntityId: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Wrap a raw UUID.
    fn from_uuid(uuid: Uuid) -> Self;

    /// Borrow the raw UUID.
    fn as_uuid(&self) -> &Uuid;
}

/// A record owned by an [`EntityStore`](crate::EntityStore).
///
/// `Draft` carries the caller-supplied fields: [`Entity::from_draft`] builds
/// a new record once an identifier is issued, and [`Entity::revise`] applies
/// a whole-record replacement while keeping the identity and any state the
/// draft does not own.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type for this kind.
    type Id: EntityId;
    /// Validated caller-supplied fields.
    type Draft;

    /// The kind reported in errors.
    const KIND: EntityKind;

    /// Identifier of this record.
    fn id(&self) -> Self::Id;

    /// Build a record from a freshly issued identifier.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Replace the draft-owned fields, keeping the identifier.
    #[must_use]
    fn revise(&self, draft: Self::Draft) -> Self;
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl EntityId for $name {
            fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_entity_id! {
    /// Identifier issued to a learner at creation.
    LearnerId
}

define_entity_id! {
    /// Identifier issued to a course at creation.
    CourseId
}
