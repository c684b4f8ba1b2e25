//! Driving ports for learner use-cases.
//!
//! Inbound adapters create, read, replace and delete learners through these
//! traits so handlers stay testable with mocks and never touch the registry
//! directly.

use academic_registry::{Learner, LearnerId, LearnerWithCourses};
use async_trait::async_trait;

use crate::domain::Error;

/// Caller-supplied learner fields prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerFields {
    /// Institution-assigned registration number.
    pub registration_number: String,
    /// Display name.
    pub name: String,
    /// Optional department.
    pub department: Option<String>,
}

/// Mutating learner use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LearnerCommand: Send + Sync {
    /// Register a learner with no enrollments.
    async fn create(&self, fields: LearnerFields) -> Result<Learner, Error>;

    /// Replace a learner's fields, keeping identity and enrollments.
    async fn update(&self, id: LearnerId, fields: LearnerFields) -> Result<Learner, Error>;

    /// Remove a learner.
    async fn delete(&self, id: LearnerId) -> Result<(), Error>;
}

/// Read-only learner use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LearnerQuery: Send + Sync {
    /// Fetch one learner.
    async fn get(&self, id: LearnerId) -> Result<Learner, Error>;

    /// Snapshot every learner.
    async fn list(&self) -> Result<Vec<Learner>, Error>;

    /// Fetch one learner with its enrolled courses resolved.
    async fn get_with_courses(&self, id: LearnerId) -> Result<LearnerWithCourses, Error>;

    /// Snapshot every learner with its enrolled courses resolved.
    async fn list_with_courses(&self) -> Result<Vec<LearnerWithCourses>, Error>;
}
