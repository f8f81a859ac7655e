use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::matching::CareerMatcher;
use crate::planning::{GuidancePlanner, LearningPathPlanner};
use crate::profiling::SkillProfiler;
use crate::reference::{CareerCatalog, ReferenceData, SkillTaxonomy};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after construction; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<SkillTaxonomy>,
    pub catalog: Arc<CareerCatalog>,
    pub profiler: SkillProfiler,
    pub matcher: CareerMatcher,
    pub learning_path: LearningPathPlanner,
    pub guidance: GuidancePlanner,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(data: ReferenceData) -> Self {
        Self {
            profiler: SkillProfiler::new(data.taxonomy.clone()),
            matcher: CareerMatcher::new(data.catalog.clone()),
            learning_path: LearningPathPlanner::new(data.taxonomy.clone()),
            guidance: GuidancePlanner::new(),
            taxonomy: data.taxonomy,
            catalog: data.catalog,
            started_at: Utc::now(),
        }
    }
}
