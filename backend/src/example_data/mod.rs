//! Startup wiring for example data seeding.

mod config;
mod fixture;
mod startup;

pub use config::ExampleDataSettings;
pub use fixture::{CourseFixture, ExampleDataset, FixtureError, LearnerFixture};
pub use startup::{SeedOutcome, StartupSeedingError, seed_example_data_on_startup};
