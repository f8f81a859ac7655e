use serde::Serialize;

use crate::models::skill::SkillDimension;

/// One recommended study focus for a weak dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningStep {
    pub dimension: SkillDimension,
    pub target: f64,
    pub suggested_topics: Vec<String>,
    pub reason: String,
}

/// Phase-based roadmap plus study tips for a chosen career.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPlan {
    #[serde(rename = "roadmap")]
    pub phases: Vec<String>,
    pub tips: Vec<String>,
}
