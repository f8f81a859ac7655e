//! Static topic → dimension mapping plus its reverse index.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::ReferenceDataError;
use crate::models::SkillDimension;

fn default_fallback() -> SkillDimension {
    SkillDimension::from("logic")
}

/// On-disk shape of `skill_taxonomy.json`.
#[derive(Debug, Deserialize)]
pub struct RawTaxonomy {
    pub dimensions: Vec<SkillDimension>,
    pub topic_to_dim: IndexMap<String, SkillDimension>,
    #[serde(default = "default_fallback")]
    pub fallback: SkillDimension,
}

/// Read-only taxonomy shared by every component. Built once at startup.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    dimensions: Vec<SkillDimension>,
    topic_to_dim: IndexMap<String, SkillDimension>,
    dim_to_topics: IndexMap<SkillDimension, Vec<String>>,
    fallback: SkillDimension,
}

impl SkillTaxonomy {
    /// Validates and indexes a taxonomy.
    ///
    /// Rejects an empty or duplicated dimension list, topics mapped to
    /// undeclared dimensions, and an undeclared fallback dimension.
    pub fn new(
        dimensions: Vec<SkillDimension>,
        topic_to_dim: IndexMap<String, SkillDimension>,
        fallback: SkillDimension,
    ) -> Result<Self, ReferenceDataError> {
        if dimensions.is_empty() {
            return Err(ReferenceDataError::Taxonomy(
                "at least one dimension must be declared".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for dim in &dimensions {
            if !seen.insert(dim.as_str()) {
                return Err(ReferenceDataError::Taxonomy(format!(
                    "dimension '{dim}' is declared twice"
                )));
            }
        }

        if !seen.contains(fallback.as_str()) {
            return Err(ReferenceDataError::Taxonomy(format!(
                "fallback dimension '{fallback}' is not declared"
            )));
        }

        let mut dim_to_topics: IndexMap<SkillDimension, Vec<String>> = dimensions
            .iter()
            .map(|dim| (dim.clone(), Vec::new()))
            .collect();

        for (topic, dim) in &topic_to_dim {
            match dim_to_topics.get_mut(dim.as_str()) {
                Some(topics) => topics.push(topic.clone()),
                None => {
                    return Err(ReferenceDataError::Taxonomy(format!(
                        "topic '{topic}' maps to undeclared dimension '{dim}'"
                    )))
                }
            }
        }

        Ok(Self {
            dimensions,
            topic_to_dim,
            dim_to_topics,
            fallback,
        })
    }

    pub fn from_raw(raw: RawTaxonomy) -> Result<Self, ReferenceDataError> {
        Self::new(raw.dimensions, raw.topic_to_dim, raw.fallback)
    }

    /// Known dimensions in declaration order.
    pub fn dimensions(&self) -> &[SkillDimension] {
        &self.dimensions
    }

    pub fn contains(&self, dim: &str) -> bool {
        self.dim_to_topics.contains_key(dim)
    }

    pub fn fallback(&self) -> &SkillDimension {
        &self.fallback
    }

    pub fn topic_count(&self) -> usize {
        self.topic_to_dim.len()
    }

    /// Total lookup from topic name to dimension.
    ///
    /// Matching is exact. Unrecognized topics resolve to the fallback
    /// dimension, never to an error.
    pub fn resolve_dimension(&self, topic: &str) -> &SkillDimension {
        match self.topic_to_dim.get(topic) {
            Some(dim) => dim,
            None => &self.fallback,
        }
    }

    /// Topics declared for `dim`, in source order. Empty for unknown dimensions.
    pub fn topics_for(&self, dim: &str) -> &[String] {
        self.dim_to_topics
            .get(dim)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Reverse index in declaration order.
    pub fn reverse_index(&self) -> &IndexMap<SkillDimension, Vec<String>> {
        &self.dim_to_topics
    }
}
