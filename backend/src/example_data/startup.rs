//! Startup seeding orchestration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{
    CourseCommand, CourseFields, EnrollmentCommand, LearnerCommand, LearnerFields,
};
use crate::example_data::config::ExampleDataSettings;
use crate::example_data::fixture::{ExampleDataset, FixtureError};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Dataset file could not be read.
    #[error("failed to read dataset at {path}: {source}")]
    FixtureRead {
        /// Path to the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Dataset parsing or validation failed.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    /// A create or enroll call was rejected.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] Error),
}

/// Counts of records created by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub courses: usize,
    pub learners: usize,
    pub enrollments: usize,
}

/// Apply the example dataset on startup when enabled.
///
/// Courses are created first so learners can be enrolled by course code.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use academic_backend::domain::AcademicRecordsService;
/// use academic_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use academic_registry::AcademicRegistry;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let service = AcademicRecordsService::new(Arc::new(AcademicRegistry::default()));
/// let settings = ExampleDataSettings {
///     enabled: true,
///     fixture_path: None,
/// };
/// let outcome = seed_example_data_on_startup(&settings, &service).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<S>(
    settings: &ExampleDataSettings,
    service: &S,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    S: LearnerCommand + CourseCommand + EnrollmentCommand,
{
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let path = settings.fixture_path();
    let dataset = load_dataset(&path)?;
    let outcome = apply_dataset(&dataset, service).await?;
    info!(
        path = %path.display(),
        courses = outcome.courses,
        learners = outcome.learners,
        enrollments = outcome.enrollments,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

async fn apply_dataset<S>(dataset: &ExampleDataset, service: &S) -> Result<SeedOutcome, Error>
where
    S: LearnerCommand + CourseCommand + EnrollmentCommand,
{
    let mut course_ids = HashMap::with_capacity(dataset.courses.len());
    for course in &dataset.courses {
        let created = CourseCommand::create(
            service,
            CourseFields {
                code: course.code.clone(),
                title: course.title.clone(),
                credit_weight: course.credit_weight,
            },
        )
        .await?;
        course_ids.insert(course.code.as_str(), created.id());
    }

    let mut enrollments = 0;
    for learner in &dataset.learners {
        let created = LearnerCommand::create(
            service,
            LearnerFields {
                registration_number: learner.registration_number.clone(),
                name: learner.name.clone(),
                department: learner.department.clone(),
            },
        )
        .await?;
        // Codes were cross-checked when the dataset was parsed.
        for course_id in learner
            .courses
            .iter()
            .filter_map(|code| course_ids.get(code.as_str()))
        {
            service.enroll(created.id(), *course_id).await?;
            enrollments += 1;
        }
    }

    Ok(SeedOutcome {
        courses: dataset.courses.len(),
        learners: dataset.learners.len(),
        enrollments,
    })
}

fn load_dataset(path: &Path) -> Result<ExampleDataset, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::FixtureRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "dataset path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(ExampleDataset::from_json(&contents)?)
}
