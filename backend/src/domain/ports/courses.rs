//! Driving ports for course use-cases.

use academic_registry::{Course, CourseId};
use async_trait::async_trait;

use crate::domain::Error;

/// Caller-supplied course fields prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    /// Catalogue code such as `IF101`.
    pub code: String,
    /// Human-readable title.
    pub title: String,
    /// Credit weight; must be positive.
    pub credit_weight: i64,
}

/// Mutating course use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCommand: Send + Sync {
    /// Register a course.
    async fn create(&self, fields: CourseFields) -> Result<Course, Error>;
}

/// Read-only course use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// Fetch one course.
    async fn get(&self, id: CourseId) -> Result<Course, Error>;

    /// Snapshot every course.
    async fn list(&self) -> Result<Vec<Course>, Error>;
}
