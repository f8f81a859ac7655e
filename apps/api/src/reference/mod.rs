// Reference data: skill taxonomy and career catalog.
// Loaded once before the listener binds; shared read-only through `Arc` afterwards.

pub mod catalog;
pub mod handlers;
pub mod taxonomy;

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::errors::ReferenceDataError;
use crate::models::CareerProfile;

pub use catalog::{CareerCatalog, CollegeRow, CourseRow};
pub use taxonomy::{RawTaxonomy, SkillTaxonomy};

pub const TAXONOMY_FILE: &str = "skill_taxonomy.json";
pub const CAREERS_FILE: &str = "careers.json";
pub const COURSES_FILE: &str = "courses.json";
pub const COLLEGES_FILE: &str = "colleges.json";

/// The full immutable reference data set.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub taxonomy: Arc<SkillTaxonomy>,
    pub catalog: Arc<CareerCatalog>,
}

impl ReferenceData {
    /// Loads and validates all four reference files from `dir`.
    /// Any missing, malformed or inconsistent file is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ReferenceDataError> {
        let raw_taxonomy: RawTaxonomy = read_json(&dir.join(TAXONOMY_FILE))?;
        let taxonomy = SkillTaxonomy::from_raw(raw_taxonomy)?;

        let careers: Vec<CareerProfile> = read_json(&dir.join(CAREERS_FILE))?;
        let courses: Vec<CourseRow> = read_json(&dir.join(COURSES_FILE))?;
        let colleges: Vec<CollegeRow> = read_json(&dir.join(COLLEGES_FILE))?;
        let catalog = CareerCatalog::new(careers, courses, colleges, &taxonomy)?;

        Ok(Self {
            taxonomy: Arc::new(taxonomy),
            catalog: Arc::new(catalog),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ReferenceDataError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ReferenceDataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The data set shipped with the crate, for tests.
#[cfg(test)]
pub(crate) fn bundled() -> ReferenceData {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    ReferenceData::load_from_dir(&dir).expect("bundled reference data must load")
}
