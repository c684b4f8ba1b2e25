//! JSON example dataset describing courses and learners.
//!
//! Learners reference courses by catalogue code; codes must be unique, every
//! referenced code must be declared in `courses` and no learner may list the
//! same code twice.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing or validating a dataset.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The payload is not valid dataset JSON.
    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two courses share a code.
    #[error("duplicate course code {code}")]
    DuplicateCourseCode { code: String },
    /// A learner references an undeclared course.
    #[error("learner {registration_number} references unknown course {code}")]
    UnknownCourseCode {
        registration_number: String,
        code: String,
    },
    /// A learner lists the same course more than once.
    #[error("learner {registration_number} lists course {code} more than once")]
    DuplicateEnrollment {
        registration_number: String,
        code: String,
    },
}

/// One course in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseFixture {
    pub code: String,
    pub title: String,
    pub credit_weight: i64,
}

/// One learner in the dataset with the codes they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LearnerFixture {
    pub registration_number: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

impl LearnerFixture {
    fn validate_courses(&self, declared: &HashSet<&str>) -> Result<(), FixtureError> {
        let mut listed = HashSet::new();
        for code in &self.courses {
            if !declared.contains(code.as_str()) {
                return Err(FixtureError::UnknownCourseCode {
                    registration_number: self.registration_number.clone(),
                    code: code.clone(),
                });
            }
            if !listed.insert(code.as_str()) {
                return Err(FixtureError::DuplicateEnrollment {
                    registration_number: self.registration_number.clone(),
                    code: code.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parsed and cross-checked dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleDataset {
    pub courses: Vec<CourseFixture>,
    pub learners: Vec<LearnerFixture>,
}

impl ExampleDataset {
    /// Parse a dataset and check its course references.
    ///
    /// # Examples
    /// ```
    /// use academic_backend::example_data::ExampleDataset;
    ///
    /// let dataset = ExampleDataset::from_json(
    ///     r#"{"courses":[{"code":"IF101","title":"Dasar Pemrograman","creditWeight":3}],
    ///         "learners":[{"registrationNumber":"2023001","name":"Adi Nugraha","courses":["IF101"]}]}"#,
    /// )
    /// .expect("valid dataset");
    /// assert_eq!(dataset.learners[0].courses, ["IF101"]);
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, FixtureError> {
        let dataset: Self = serde_json::from_str(payload)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        let mut codes = HashSet::new();
        for course in &self.courses {
            if !codes.insert(course.code.as_str()) {
                return Err(FixtureError::DuplicateCourseCode {
                    code: course.code.clone(),
                });
            }
        }
        self.learners
            .iter()
            .try_for_each(|learner| learner.validate_courses(&codes))
    }

    /// Total enrollments the dataset describes.
    pub fn enrollment_count(&self) -> usize {
        self.learners.iter().map(|learner| learner.courses.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejects_unknown_course_codes() {
        let err = ExampleDataset::from_json(
            r#"{"courses":[],"learners":[{"registrationNumber":"2023001","name":"Adi","courses":["IF999"]}]}"#,
        )
        .expect_err("unknown code rejected");
        assert!(matches!(
            err,
            FixtureError::UnknownCourseCode { ref code, .. } if code == "IF999"
        ));
    }

    #[rstest]
    fn rejects_duplicate_course_codes() {
        let err = ExampleDataset::from_json(
            r#"{"courses":[
                {"code":"IF101","title":"Dasar Pemrograman","creditWeight":3},
                {"code":"IF101","title":"Again","creditWeight":2}
            ],"learners":[]}"#,
        )
        .expect_err("duplicate code rejected");
        assert!(matches!(err, FixtureError::DuplicateCourseCode { .. }));
    }

    #[rstest]
    fn rejects_learner_listing_a_course_twice() {
        let err = ExampleDataset::from_json(
            r#"{"courses":[{"code":"IF101","title":"Dasar Pemrograman","creditWeight":3}],
                "learners":[{"registrationNumber":"2023001","name":"Adi","courses":["IF101","IF101"]}]}"#,
        )
        .expect_err("repeated code rejected");
        assert!(matches!(
            err,
            FixtureError::DuplicateEnrollment { ref registration_number, ref code }
                if registration_number == "2023001" && code == "IF101"
        ));
    }

    #[rstest]
    #[case(r#"{"courses":[]}"#)]
    #[case(r#"{"courses":[],"learners":[],"extra":1}"#)]
    #[case("not json")]
    fn rejects_malformed_payloads(#[case] payload: &str) {
        let err = ExampleDataset::from_json(payload).expect_err("payload rejected");
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[rstest]
    fn department_and_courses_are_optional() {
        let dataset = ExampleDataset::from_json(
            r#"{"courses":[],"learners":[{"registrationNumber":"2023003","name":"Budi"}]}"#,
        )
        .expect("dataset parses");
        assert_eq!(dataset.learners[0].department, None);
        assert_eq!(dataset.enrollment_count(), 0);
    }
}
