//! Method routing from decoded envelopes to domain ports.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{CourseFields, LearnerFields};
use crate::inbound::rpc::messages::{
    CourseRef, CreateCourseParams, CreateLearnerParams, EnrollParams, GetLearnerParams,
    LearnerRef, ListLearnersParams, UpdateLearnerParams,
};
use crate::inbound::rpc::state::RpcState;

fn params<T: DeserializeOwned>(method: &str, params: Option<Value>) -> Result<T, Error> {
    let value = params.unwrap_or_else(|| json!({}));
    serde_json::from_value(value).map_err(|err| {
        Error::invalid_request(format!("invalid params for {method}: {err}"))
            .with_details(json!({ "method": method, "code": "invalid_params" }))
    })
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value)
        .map_err(|err| Error::internal(format!("failed to encode result: {err}")))
}

/// Run `method` against the ports and encode its result.
pub(super) async fn dispatch(
    ports: &RpcState,
    method: &str,
    raw: Option<Value>,
) -> Result<Value, Error> {
    debug!(method, "dispatching rpc call");
    match method {
        "createLearner" => {
            let p: CreateLearnerParams = params(method, raw)?;
            let fields = LearnerFields {
                registration_number: p.registration_number,
                name: p.name,
                department: p.department,
            };
            to_result(&ports.learners.create(fields).await?)
        }
        "getLearner" => {
            let p: GetLearnerParams = params(method, raw)?;
            if p.include_courses {
                to_result(&ports.learners_query.get_with_courses(p.learner_id).await?)
            } else {
                to_result(&ports.learners_query.get(p.learner_id).await?)
            }
        }
        "listLearners" => {
            let p: ListLearnersParams = params(method, raw)?;
            if p.include_courses {
                to_result(&ports.learners_query.list_with_courses().await?)
            } else {
                to_result(&ports.learners_query.list().await?)
            }
        }
        "updateLearner" => {
            let p: UpdateLearnerParams = params(method, raw)?;
            let fields = LearnerFields {
                registration_number: p.registration_number,
                name: p.name,
                department: p.department,
            };
            to_result(&ports.learners.update(p.learner_id, fields).await?)
        }
        "deleteLearner" => {
            let p: LearnerRef = params(method, raw)?;
            ports.learners.delete(p.learner_id).await?;
            Ok(json!({ "learnerId": p.learner_id }))
        }
        "createCourse" => {
            let p: CreateCourseParams = params(method, raw)?;
            let fields = CourseFields {
                code: p.code,
                title: p.title,
                credit_weight: p.credit_weight,
            };
            to_result(&ports.courses.create(fields).await?)
        }
        "getCourse" => {
            let p: CourseRef = params(method, raw)?;
            to_result(&ports.courses_query.get(p.course_id).await?)
        }
        "listCourses" => to_result(&ports.courses_query.list().await?),
        "enroll" => {
            let p: EnrollParams = params(method, raw)?;
            to_result(&ports.enrollment.enroll(p.learner_id, p.course_id).await?)
        }
        unknown => Err(
            Error::invalid_request(format!("unknown method: {unknown}"))
                .with_details(json!({ "method": unknown, "code": "unknown_method" })),
        ),
    }
}
