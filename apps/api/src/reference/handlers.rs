//! Read-only views over the reference data.

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::Serialize;

use crate::models::SkillDimension;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerSummary {
    pub id: String,
    pub title: String,
    pub growth: String,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerSummary>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub dimensions: Vec<SkillDimension>,
    pub fallback: SkillDimension,
    pub topics: IndexMap<SkillDimension, Vec<String>>,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CareerListResponse> {
    let careers = state
        .catalog
        .careers()
        .iter()
        .map(|c| CareerSummary {
            id: c.id.clone(),
            title: c.title.clone(),
            growth: c.growth.clone(),
        })
        .collect();
    Json(CareerListResponse { careers })
}

/// GET /api/v1/taxonomy
pub async fn handle_get_taxonomy(State(state): State<AppState>) -> Json<TaxonomyResponse> {
    let taxonomy = &state.taxonomy;
    Json(TaxonomyResponse {
        dimensions: taxonomy.dimensions().to_vec(),
        fallback: taxonomy.fallback().clone(),
        topics: taxonomy.reverse_index().clone(),
    })
}
