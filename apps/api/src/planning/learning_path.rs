//! Proposes the next topics for weak dimensions.

use std::sync::Arc;

use crate::models::{LearningStep, SkillDimension, SkillVector};
use crate::reference::SkillTaxonomy;

pub const DEFAULT_TARGET: f64 = 0.75;
pub const DEFAULT_MAX_STEPS: usize = 3;
pub const MAX_TOPICS_PER_STEP: usize = 4;

#[derive(Debug, Clone)]
pub struct LearningPathPlanner {
    taxonomy: Arc<SkillTaxonomy>,
}

impl LearningPathPlanner {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// One step per selected dimension, at most `max_steps`.
    ///
    /// With no `weak_dimensions`, the `max_steps` lowest-scoring dimensions of
    /// `vector` are used. Otherwise the caller's list is taken as-is, in the
    /// caller's order, truncated to `max_steps`.
    pub fn suggest(
        &self,
        vector: &SkillVector,
        weak_dimensions: &[SkillDimension],
        target: f64,
        max_steps: usize,
    ) -> Vec<LearningStep> {
        let selected: Vec<SkillDimension> = if weak_dimensions.is_empty() {
            vector.weakest(max_steps)
        } else {
            weak_dimensions.iter().take(max_steps).cloned().collect()
        };

        selected
            .into_iter()
            .map(|dimension| {
                let current = vector.score(dimension.as_str());
                let suggested_topics = self
                    .taxonomy
                    .topics_for(dimension.as_str())
                    .iter()
                    .take(MAX_TOPICS_PER_STEP)
                    .cloned()
                    .collect();
                let reason =
                    format!("Your {dimension} is {current:.2}. Focus here to reach {target:.2}.");
                LearningStep {
                    dimension,
                    target,
                    suggested_topics,
                    reason,
                }
            })
            .collect()
    }
}
