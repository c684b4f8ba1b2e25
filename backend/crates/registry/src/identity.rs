//! Identifier issuance for registry entities.
//!
//! Each entity kind draws identifiers from its own generator. Generators must
//! never hand out the same value twice during the process lifetime; deleted
//! records do not return their identifiers to the pool.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use uuid::Uuid;

/// The kinds of entity held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A person enrolled at the institution.
    Learner,
    /// A unit of study learners can enroll in.
    Course,
}

impl EntityKind {
    /// Stable lowercase name used in error payloads and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learner => "learner",
            Self::Course => "course",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of fresh identifiers for one entity kind.
///
/// Implementations return `None` once they can no longer guarantee a value
/// that has not been issued before.
pub trait IdGenerator: Send + Sync {
    /// Issue the next identifier, or `None` when the generator is exhausted.
    fn next_id(&self) -> Option<Uuid>;
}

/// Generator issuing random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Option<Uuid> {
        Some(Uuid::new_v4())
    }
}

/// Generator issuing monotonically increasing identifiers.
///
/// Values are encoded into the low bits of a UUID, so `1` becomes
/// `00000000-0000-0000-0000-000000000001`. Useful where deterministic
/// identifiers make logs and fixtures easier to read.
///
/// # Examples
/// ```
/// use academic_registry::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new();
/// let first = ids.next_id().expect("fresh generator");
/// let second = ids.next_id().expect("fresh generator");
/// assert!(first < second);
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first identifier is `first`.
    ///
    /// The final `u64` value is never issued; a generator that reaches it
    /// reports exhaustion instead.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Option<Uuid> {
        self.next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(1)
            })
            .ok()
            .map(|issued| Uuid::from_u128(u128::from(issued)))
    }
}
