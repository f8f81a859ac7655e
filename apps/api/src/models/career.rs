use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::skill::SkillDimension;

/// A catalog career. Reference data, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Importance per dimension. Weights need not sum to 1.
    pub required_skills: IndexMap<SkillDimension, f64>,
    pub qualifications: Vec<String>,
    pub growth: String,
}

/// A scored career for one request, enriched with course and college suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct CareerMatch {
    pub id: String,
    pub title: String,
    pub score: f64, // 0.0 – 1.0, interest boost included
    /// Normalized per-dimension share of the skill score. The interest boost is not attributed.
    #[serde(rename = "why")]
    pub attribution: IndexMap<SkillDimension, f64>,
    pub description: String,
    pub qualifications: Vec<String>,
    pub growth: String,
    pub suggested_courses: Vec<String>,
    pub suggested_colleges: Vec<String>,
}
