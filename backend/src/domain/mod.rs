//! Domain layer: transport-agnostic errors, trace correlation, driving ports
//! and the service implementing them.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: failure payload shared by all adapters.
//! - [`TraceId`]: request-scoped correlation identifier.
//! - [`AcademicRecordsService`]: implementation of every port in [`ports`].

mod academic_records_service;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::academic_records_service::AcademicRecordsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
