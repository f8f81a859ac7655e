use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::reference::SkillTaxonomy;

/// A coarse competency axis such as `algebra` or `physics`.
///
/// The set of valid dimensions is declared by the loaded [`SkillTaxonomy`];
/// this type only carries the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillDimension(String);

impl SkillDimension {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillDimension {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Borrow<str> for SkillDimension {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One quiz-performance row for a single topic.
/// `correct <= attempts` is a caller contract checked at the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPerformanceRecord {
    pub topic: String,
    pub attempts: u32,
    pub correct: u32,
    pub avg_time_sec: f64,
}

/// Rounds to four decimal places, the precision of every published score.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Per-dimension competency snapshot, each score in `[0.0, 1.0]`.
///
/// Entries are kept in taxonomy declaration order. That order is the
/// tie-break for every ranking built on top of a vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillVector(IndexMap<SkillDimension, f64>);

impl SkillVector {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps scores that are already clamped, rounded and in declaration order.
    pub(crate) fn from_ordered(scores: IndexMap<SkillDimension, f64>) -> Self {
        Self(scores)
    }

    /// Builds a vector from client-supplied scores.
    ///
    /// Every taxonomy dimension gets exactly one entry (missing ones score 0.0),
    /// values are clamped and rounded, and dimensions the taxonomy does not
    /// declare are dropped. An empty input stays empty: it means "no profile yet".
    pub fn normalized(taxonomy: &SkillTaxonomy, scores: &IndexMap<SkillDimension, f64>) -> Self {
        if scores.is_empty() {
            return Self::empty();
        }

        let ordered = taxonomy
            .dimensions()
            .iter()
            .map(|dim| {
                let raw = scores.get(dim).copied().unwrap_or(0.0);
                let value = if raw.is_finite() {
                    round4(raw.clamp(0.0, 1.0))
                } else {
                    0.0
                };
                (dim.clone(), value)
            })
            .collect();

        Self(ordered)
    }

    /// Score for `dim`, 0.0 when the dimension is absent.
    pub fn score(&self, dim: &str) -> f64 {
        self.0.get(dim).copied().unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkillDimension, f64)> {
        self.0.iter().map(|(dim, score)| (dim, *score))
    }

    /// Dimensions sorted by score ascending. The sort is stable, so equal
    /// scores keep declaration order.
    pub fn ascending(&self) -> Vec<&SkillDimension> {
        let mut entries: Vec<(&SkillDimension, f64)> = self.iter().collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        entries.into_iter().map(|(dim, _)| dim).collect()
    }

    /// The `k` lowest-scoring dimensions, lowest first.
    pub fn weakest(&self, k: usize) -> Vec<SkillDimension> {
        self.ascending().into_iter().take(k).cloned().collect()
    }

    /// The `k` highest-scoring dimensions, highest first. This is the tail of
    /// [`ascending`](Self::ascending) reversed, so among equal scores the
    /// later-declared dimension comes first.
    pub fn strongest(&self, k: usize) -> Vec<SkillDimension> {
        let ascending = self.ascending();
        let start = ascending.len().saturating_sub(k);
        ascending[start..].iter().rev().map(|dim| (*dim).clone()).collect()
    }
}

/// Which topics contributed how much to each dimension of a [`SkillVector`].
/// Weights within a dimension sum to 1.0; dimensions with no topics map to an
/// empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Explanation(IndexMap<SkillDimension, IndexMap<String, f64>>);

impl Explanation {
    pub(crate) fn from_ordered(topics: IndexMap<SkillDimension, IndexMap<String, f64>>) -> Self {
        Self(topics)
    }

    #[cfg(test)]
    pub fn topics(&self, dim: &str) -> Option<&IndexMap<String, f64>> {
        self.0.get(dim)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
