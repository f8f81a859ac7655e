//! Axum route handlers for learning paths and career guidance.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{LearningStep, SkillDimension, SkillVector};
use crate::planning::guidance::DEFAULT_TIMEFRAME_MONTHS;
use crate::planning::learning_path::{DEFAULT_MAX_STEPS, DEFAULT_TARGET};
use crate::state::AppState;
use crate::validation::{require_non_empty, validate_target};

fn default_target() -> f64 {
    DEFAULT_TARGET
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

fn default_timeframe_months() -> i64 {
    DEFAULT_TIMEFRAME_MONTHS
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub user_id: String,
    pub skill_vector: IndexMap<SkillDimension, f64>,
    #[serde(default)]
    pub weak_dimensions: Vec<SkillDimension>,
    #[serde(default = "default_target")]
    pub target: f64,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub user_id: String,
    pub steps: Vec<LearningStep>,
}

#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    pub user_id: String,
    pub career_id: String,
    pub current_grade: Option<String>,
    #[serde(default = "default_timeframe_months")]
    pub timeframe_months: i64,
    #[serde(default)]
    pub skill_vector: IndexMap<SkillDimension, f64>,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub user_id: String,
    pub career_id: String,
    pub roadmap: Vec<String>,
    pub tips: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/next-learning-path
pub async fn handle_next_learning_path(
    State(state): State<AppState>,
    payload: Result<Json<LearningPathRequest>, JsonRejection>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let Json(request) = payload?;
    require_non_empty("user_id", &request.user_id)?;
    validate_target(request.target)?;

    let vector = SkillVector::normalized(&state.taxonomy, &request.skill_vector);
    debug!(
        user_id = %request.user_id,
        weak = request.weak_dimensions.len(),
        max_steps = request.max_steps,
        "Suggesting learning path"
    );

    let steps = state.learning_path.suggest(
        &vector,
        &request.weak_dimensions,
        request.target,
        request.max_steps,
    );

    Ok(Json(LearningPathResponse {
        user_id: request.user_id,
        steps,
    }))
}

/// POST /api/v1/guidance
///
/// Unknown career ids, the empty id included, are not an error: they receive
/// the baseline roadmap.
pub async fn handle_guidance(
    State(state): State<AppState>,
    payload: Result<Json<GuidanceRequest>, JsonRejection>,
) -> Result<Json<GuidanceResponse>, AppError> {
    let Json(request) = payload?;
    require_non_empty("user_id", &request.user_id)?;

    let vector = SkillVector::normalized(&state.taxonomy, &request.skill_vector);
    debug!(
        user_id = %request.user_id,
        career_id = %request.career_id,
        grade = ?request.current_grade,
        timeframe_months = request.timeframe_months,
        known_career = state.catalog.get(&request.career_id).is_some(),
        "Generating guidance"
    );

    let plan = state
        .guidance
        .roadmap(&request.career_id, request.timeframe_months, &vector);

    Ok(Json(GuidanceResponse {
        user_id: request.user_id,
        career_id: request.career_id,
        roadmap: plan.phases,
        tips: plan.tips,
    }))
}
