//! Axum route handlers for career recommendation.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::matcher::DEFAULT_TOP_N;
use crate::models::{CareerMatch, SkillDimension, SkillVector};
use crate::state::AppState;
use crate::validation::require_non_empty;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
pub struct CareerRecommendRequest {
    pub user_id: String,
    pub skill_vector: IndexMap<SkillDimension, f64>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub grade: Option<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Serialize)]
pub struct CareerRecommendResponse {
    pub user_id: String,
    pub recommendations: Vec<CareerMatch>,
}

/// POST /api/v1/recommend-career
pub async fn handle_recommend_career(
    State(state): State<AppState>,
    payload: Result<Json<CareerRecommendRequest>, JsonRejection>,
) -> Result<Json<CareerRecommendResponse>, AppError> {
    let Json(request) = payload?;
    require_non_empty("user_id", &request.user_id)?;

    let vector = SkillVector::normalized(&state.taxonomy, &request.skill_vector);
    debug!(
        user_id = %request.user_id,
        grade = ?request.grade,
        interests = request.interests.len(),
        top_n = request.top_n,
        "Recommending careers"
    );

    let recommendations = state
        .matcher
        .recommend(&vector, &request.interests, request.top_n);

    Ok(Json(CareerRecommendResponse {
        user_id: request.user_id,
        recommendations,
    }))
}
