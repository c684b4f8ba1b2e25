//! Generic keyed container for one entity kind.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::{Entity, EntityId};
use crate::error::RegistryError;
use crate::identity::IdGenerator;

/// In-memory store for records of kind `T`.
///
/// Reads take the shared lock, mutations take the exclusive lock, and every
/// returned record is a copy so callers never observe later mutations. No I/O
/// happens while a lock is held.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use academic_registry::{Course, CourseDraft, EntityStore, SequentialIdGenerator};
///
/// let store: EntityStore<Course> = EntityStore::new(Arc::new(SequentialIdGenerator::new()));
/// let course = store
///     .create(CourseDraft::new("UM101", "Bahasa Indonesia", 2).expect("valid draft"))
///     .expect("created");
/// assert_eq!(store.get(course.id()), Ok(course));
/// ```
pub struct EntityStore<T: Entity> {
    records: RwLock<HashMap<T::Id, T>>,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store drawing identifiers from `ids`.
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ids,
        }
    }

    /// Insert a new record built from `draft` under a freshly issued identifier.
    ///
    /// # Errors
    /// Returns [`RegistryError::IdentityExhausted`] when the generator has no
    /// identifiers left.
    pub fn create(&self, draft: T::Draft) -> Result<T, RegistryError> {
        let id = self
            .ids
            .next_id()
            .map(<T::Id as EntityId>::from_uuid)
            .ok_or(RegistryError::IdentityExhausted { kind: T::KIND })?;
        let record = T::from_draft(id, draft);
        self.records.write().insert(id, record.clone());
        Ok(record)
    }

    /// Fetch a copy of the record stored under `id`.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when no live record has `id`.
    pub fn get(&self, id: T::Id) -> Result<T, RegistryError> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(T::KIND, id))
    }

    /// Snapshot every live record. Order is unspecified.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.records.read().values().cloned().collect()
    }

    /// Replace the record stored under `id`, keeping its identity.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when no live record has `id`.
    pub fn update(&self, id: T::Id, draft: T::Draft) -> Result<T, RegistryError> {
        let mut records = self.records.write();
        let current = records
            .get_mut(&id)
            .ok_or_else(|| RegistryError::not_found(T::KIND, id))?;
        *current = current.revise(draft);
        Ok(current.clone())
    }

    /// Remove the record stored under `id`. Its identifier is never reissued.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when no live record has `id`.
    pub fn delete(&self, id: T::Id) -> Result<(), RegistryError> {
        self.records
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::not_found(T::KIND, id))
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub(crate) fn read_records(&self) -> RwLockReadGuard<'_, HashMap<T::Id, T>> {
        self.records.read()
    }

    pub(crate) fn write_records(&self) -> RwLockWriteGuard<'_, HashMap<T::Id, T>> {
        self.records.write()
    }
}
