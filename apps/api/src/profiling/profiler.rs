//! Skill Profiler — turns quiz topic performance into a [`SkillVector`].
//!
//! Per record:
//! 1. resolve the topic's dimension (unknown topics → taxonomy fallback)
//! 2. accuracy = correct / attempts, 0.0 when attempts = 0
//! 3. time_factor = 1 / (1 + avg_time_sec / 60)
//! 4. topic_score = 0.75 × accuracy + 0.25 × time_factor
//! 5. weight = max(1, √attempts)
//!
//! A dimension scores the weighted mean of its topic scores, clamped to
//! [0, 1] and rounded to 4 decimals. Unobserved dimensions score 0.0.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::models::{round4, Explanation, SkillDimension, SkillVector, TopicPerformanceRecord};
use crate::reference::SkillTaxonomy;

const ACCURACY_WEIGHT: f64 = 0.75;
const SPEED_WEIGHT: f64 = 0.25;
/// Average response time at which the time factor is exactly 0.5.
const TIME_SCALE_SECS: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct SkillProfiler {
    taxonomy: Arc<SkillTaxonomy>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    weighted_score: f64,
    weight: f64,
}

impl SkillProfiler {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn build_skill_vector(
        &self,
        records: &[TopicPerformanceRecord],
    ) -> (SkillVector, Explanation) {
        let dimensions = self.taxonomy.dimensions();

        let mut totals: IndexMap<SkillDimension, Accumulator> = dimensions
            .iter()
            .map(|dim| (dim.clone(), Accumulator::default()))
            .collect();
        let mut explain: IndexMap<SkillDimension, IndexMap<String, f64>> = dimensions
            .iter()
            .map(|dim| (dim.clone(), IndexMap::new()))
            .collect();

        for record in records {
            let dim = self.taxonomy.resolve_dimension(&record.topic);
            let score = topic_score(record);
            let weight = topic_weight(record.attempts);

            let acc = totals.entry(dim.clone()).or_default();
            acc.weighted_score += score * weight;
            acc.weight += weight;

            // A repeated topic keeps its first position and its latest score.
            explain
                .entry(dim.clone())
                .or_default()
                .insert(record.topic.clone(), round4(score));
        }

        let vector: IndexMap<SkillDimension, f64> = totals
            .into_iter()
            .map(|(dim, acc)| {
                let raw = if acc.weight > 0.0 {
                    acc.weighted_score / acc.weight
                } else {
                    0.0
                };
                (dim, round4(raw.clamp(0.0, 1.0)))
            })
            .collect();

        for topics in explain.values_mut() {
            normalize_contributions(topics);
        }

        (
            SkillVector::from_ordered(vector),
            Explanation::from_ordered(explain),
        )
    }

    /// Splits a vector into its `k` weakest (lowest first) and `k` strongest
    /// (highest first) dimensions. Equal scores keep taxonomy declaration
    /// order in the ascending pass, so the strongest list sees them reversed.
    pub fn summarize(
        &self,
        vector: &SkillVector,
        k: usize,
    ) -> (Vec<SkillDimension>, Vec<SkillDimension>) {
        (vector.weakest(k), vector.strongest(k))
    }
}

/// Accuracy, defined as 0.0 for a topic that was never attempted.
pub fn accuracy(correct: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    f64::from(correct) / f64::from(attempts)
}

/// Decreasing in response time, bounded in (0, 1], 0.5 at exactly 60s.
pub fn time_factor(avg_time_sec: f64) -> f64 {
    1.0 / (1.0 + avg_time_sec / TIME_SCALE_SECS)
}

pub fn topic_score(record: &TopicPerformanceRecord) -> f64 {
    ACCURACY_WEIGHT * accuracy(record.correct, record.attempts)
        + SPEED_WEIGHT * time_factor(record.avg_time_sec)
}

/// Every topic counts at least once; more attempts count more, sub-linearly.
pub fn topic_weight(attempts: u32) -> f64 {
    f64::from(attempts).sqrt().max(1.0)
}

fn normalize_contributions(topics: &mut IndexMap<String, f64>) {
    if topics.is_empty() {
        return;
    }
    let sum: f64 = topics.values().sum();
    let sum = if sum > 0.0 { sum } else { 1.0 };
    for value in topics.values_mut() {
        *value = round4(*value / sum);
    }
}
