//! Career Matcher — scores every catalog career against a skill vector.
//!
//! Per required dimension `d` with weight `w`:
//!   contribution = min(skill[d], w) × w
//! score = Σ contribution / Σ w  (Σ w treated as 1.0 when zero)
//!
//! Exceeding a requirement earns nothing extra. Each interest that is a
//! case-insensitive substring of the title adds a flat 0.03, and the total is
//! capped at 1.0. Ranking is a stable descending sort, so equal scores keep
//! catalog order.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::models::{round4, CareerMatch, CareerProfile, SkillDimension, SkillVector};
use crate::reference::CareerCatalog;

pub const DEFAULT_TOP_N: usize = 3;
pub const INTEREST_BOOST: f64 = 0.03;

/// Skill-only score for one career, before the interest boost.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementScore {
    pub score: f64,
    pub attribution: IndexMap<SkillDimension, f64>,
}

#[derive(Debug, Clone)]
pub struct CareerMatcher {
    catalog: Arc<CareerCatalog>,
}

impl CareerMatcher {
    pub fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the `top_n` best matches, best first.
    pub fn recommend(
        &self,
        vector: &SkillVector,
        interests: &[String],
        top_n: usize,
    ) -> Vec<CareerMatch> {
        let mut ranked: Vec<(f64, IndexMap<SkillDimension, f64>, &CareerProfile)> = self
            .catalog
            .careers()
            .iter()
            .map(|career| {
                let requirement = score_requirements(vector, &career.required_skills);
                let boosted =
                    (requirement.score + interest_boost(&career.title, interests)).min(1.0);
                (round4(boosted), requirement.attribution, career)
            })
            .collect();

        // sort_by is stable: ties stay in catalog order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        ranked
            .into_iter()
            .take(top_n)
            .map(|(score, attribution, career)| CareerMatch {
                id: career.id.clone(),
                title: career.title.clone(),
                score,
                attribution,
                description: career.description.clone(),
                qualifications: career.qualifications.clone(),
                growth: career.growth.clone(),
                suggested_courses: self.catalog.courses_for(&career.id).to_vec(),
                suggested_colleges: self.catalog.colleges_for(&career.id).to_vec(),
            })
            .collect()
    }
}

/// Capped, importance-weighted coverage of a career's requirements.
pub fn score_requirements(
    vector: &SkillVector,
    required: &IndexMap<SkillDimension, f64>,
) -> RequirementScore {
    let total_weight: f64 = required.values().sum();
    let total_weight = if total_weight > 0.0 { total_weight } else { 1.0 };

    let contributions: IndexMap<SkillDimension, f64> = required
        .iter()
        .map(|(dim, weight)| {
            let skill = vector.score(dim.as_str());
            (dim.clone(), skill.min(*weight) * weight)
        })
        .collect();

    let raw: f64 = contributions.values().sum();
    let attribution: IndexMap<SkillDimension, f64> = if raw > 0.0 {
        contributions
            .into_iter()
            .map(|(dim, c)| (dim, round4(c / raw)))
            .collect()
    } else {
        IndexMap::new()
    };

    RequirementScore {
        score: round4(raw / total_weight),
        attribution,
    }
}

/// Flat boost per interest that is a case-insensitive substring of the title.
/// Interests are matched verbatim, surrounding whitespace included.
pub fn interest_boost(title: &str, interests: &[String]) -> f64 {
    let title_lower = title.to_lowercase();
    let hits = interests
        .iter()
        .filter(|interest| title_lower.contains(&interest.to_lowercase()))
        .count();
    hits as f64 * INTEREST_BOOST
}
