//! Wire-level message definitions for the RPC adapter.
//!
//! Clients send [`RpcRequest`] envelopes as text frames; every envelope is
//! answered by exactly one [`RpcResponse`] echoing its `requestId`.

use academic_registry::{CourseId, LearnerId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{Error, ErrorCode};

/// Inbound request envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcRequest {
    /// Client-provided correlation identifier, reused as the trace id.
    pub request_id: Uuid,
    /// Method name such as `createLearner`.
    pub method: String,
    /// Method parameters; absent is treated as `{}`.
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outcome classification carried by every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcStatus {
    Ok,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Internal,
}

impl From<ErrorCode> for RpcStatus {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => Self::InvalidArgument,
            ErrorCode::NotFound => Self::NotFound,
            ErrorCode::Conflict => Self::AlreadyExists,
            ErrorCode::InternalError => Self::Internal,
        }
    }
}

/// Outbound response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResponse {
    pub request_id: Uuid,
    pub status: RpcStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

impl RpcResponse {
    /// Successful reply carrying `result`.
    pub fn success(request_id: Uuid, result: Value) -> Self {
        Self {
            request_id,
            status: RpcStatus::Ok,
            result: Some(result),
            error: None,
        }
    }

    /// Failed reply; internal failures are redacted before leaving the process.
    pub fn failure(request_id: Uuid, error: Error) -> Self {
        let status = RpcStatus::from(error.code());
        let error = if status == RpcStatus::Internal {
            let redacted = Error::internal("Internal server error");
            match error.trace_id() {
                Some(id) => redacted.with_trace_id(id.to_owned()),
                None => redacted,
            }
        } else {
            error
        };
        Self {
            request_id,
            status,
            result: None,
            error: Some(error),
        }
    }
}

/// Parameters for `createLearner`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearnerParams {
    pub registration_number: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Parameters for `getLearner`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLearnerParams {
    pub learner_id: LearnerId,
    /// Return resolved course details alongside the learner.
    #[serde(default)]
    pub include_courses: bool,
}

/// Parameters for `listLearners`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLearnersParams {
    #[serde(default)]
    pub include_courses: bool,
}

/// Parameters for `updateLearner`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLearnerParams {
    pub learner_id: LearnerId,
    pub registration_number: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Parameters for `deleteLearner`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerRef {
    pub learner_id: LearnerId,
}

/// Parameters for `createCourse`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseParams {
    pub code: String,
    pub title: String,
    pub credit_weight: i64,
}

/// Parameters for `getCourse`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub course_id: CourseId,
}

/// Parameters for `enroll`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollParams {
    pub learner_id: LearnerId,
    pub course_id: CourseId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "invalid_argument")]
    #[case(ErrorCode::NotFound, "not_found")]
    #[case(ErrorCode::Conflict, "already_exists")]
    #[case(ErrorCode::InternalError, "internal")]
    fn failure_status_follows_error_code(#[case] code: ErrorCode, #[case] expected: &str) {
        let response = RpcResponse::failure(Uuid::nil(), Error::new(code, "boom"));
        let value = serde_json::to_value(&response).expect("response serialises");
        assert_eq!(value["status"], json!(expected));
        assert!(value.get("result").is_none());
    }

    #[rstest]
    fn internal_failures_are_redacted() {
        let error = Error::internal("registry poisoned").with_trace_id("t-1");
        let response = RpcResponse::failure(Uuid::nil(), error);
        let value = serde_json::to_value(&response).expect("response serialises");
        assert_eq!(value["error"]["message"], json!("Internal server error"));
        assert_eq!(value["error"]["traceId"], json!("t-1"));
    }

    #[rstest]
    fn success_omits_error() {
        let response = RpcResponse::success(Uuid::nil(), json!([]));
        let value = serde_json::to_value(&response).expect("response serialises");
        assert_eq!(
            value,
            json!({"requestId": Uuid::nil(), "status": "ok", "result": []})
        );
    }

    #[rstest]
    fn request_params_default_to_none() {
        let request: RpcRequest = serde_json::from_value(json!({
            "requestId": Uuid::nil(),
            "method": "listCourses",
        }))
        .expect("envelope parses");
        assert_eq!(request.method, "listCourses");
        assert!(request.params.is_none());
    }

    #[rstest]
    fn get_learner_params_reject_malformed_ids() {
        let parsed = serde_json::from_value::<GetLearnerParams>(json!({"learnerId": "2023001"}));
        assert!(parsed.is_err());
    }
}
