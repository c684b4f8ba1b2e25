//! Example data configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Bundled dataset under the backend crate root, fixed at compile time.
fn default_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("academic.json")
}

/// Configuration values controlling example data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the registry with the example dataset on startup.
    #[ortho_config(default = true)]
    pub enabled: bool,
    /// Optional dataset path override.
    pub fixture_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Return the configured dataset path, falling back to the bundled fixture.
    pub fn fixture_path(&self) -> PathBuf {
        self.fixture_path
            .clone()
            .unwrap_or_else(default_fixture_path)
    }
}
