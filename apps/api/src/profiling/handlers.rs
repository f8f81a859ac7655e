//! Axum route handlers for skill profiling.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Explanation, SkillDimension, SkillVector, TopicPerformanceRecord};
use crate::state::AppState;
use crate::validation::{require_non_empty, validate_topic_performance};

/// Weak/strong list length reported by `/analyze-skill`.
const SUMMARY_K: usize = 2;

#[derive(Debug, Deserialize)]
pub struct SkillProfileRequest {
    pub user_id: String,
    pub grade: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub topic_performance: Vec<TopicPerformanceRecord>,
}

#[derive(Debug, Serialize)]
pub struct SkillProfileResponse {
    pub user_id: String,
    pub skill_vector: SkillVector,
    pub weak_dimensions: Vec<SkillDimension>,
    pub strengths: Vec<SkillDimension>,
    pub explain: Explanation,
}

/// POST /api/v1/analyze-skill
///
/// Builds the skill vector and its explanation, then reports the two weakest
/// and two strongest dimensions.
pub async fn handle_analyze_skill(
    State(state): State<AppState>,
    payload: Result<Json<SkillProfileRequest>, JsonRejection>,
) -> Result<Json<SkillProfileResponse>, AppError> {
    let Json(request) = payload?;
    require_non_empty("user_id", &request.user_id)?;
    validate_topic_performance(&request.topic_performance)?;

    debug!(
        user_id = %request.user_id,
        grade = ?request.grade,
        interests = request.interests.len(),
        records = request.topic_performance.len(),
        "Profiling skills"
    );

    let (skill_vector, explain) = state.profiler.build_skill_vector(&request.topic_performance);
    let (weak_dimensions, strengths) = state.profiler.summarize(&skill_vector, SUMMARY_K);

    Ok(Json(SkillProfileResponse {
        user_id: request.user_id,
        skill_vector,
        weak_dimensions,
        strengths,
        explain,
    }))
}
