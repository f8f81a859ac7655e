//! Career catalog: careers in catalog order plus course/college suggestions keyed by career id.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::errors::ReferenceDataError;
use crate::models::CareerProfile;
use crate::reference::taxonomy::SkillTaxonomy;

/// One row of `courses.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    pub career_id: String,
    pub courses: Vec<String>,
}

/// One row of `colleges.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollegeRow {
    pub career_id: String,
    pub colleges: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<CareerProfile>,
    courses: HashMap<String, Vec<String>>,
    colleges: HashMap<String, Vec<String>>,
}

impl CareerCatalog {
    /// Validates careers against the taxonomy and indexes suggestions by career id.
    pub fn new(
        careers: Vec<CareerProfile>,
        course_rows: Vec<CourseRow>,
        college_rows: Vec<CollegeRow>,
        taxonomy: &SkillTaxonomy,
    ) -> Result<Self, ReferenceDataError> {
        let mut ids = HashSet::new();
        for career in &careers {
            if career.id.trim().is_empty() {
                return Err(ReferenceDataError::Catalog(format!(
                    "career '{}' has an empty id",
                    career.title
                )));
            }
            if !ids.insert(career.id.as_str()) {
                return Err(ReferenceDataError::Catalog(format!(
                    "career id '{}' appears twice",
                    career.id
                )));
            }
            for (dim, weight) in &career.required_skills {
                if !taxonomy.contains(dim.as_str()) {
                    return Err(ReferenceDataError::Catalog(format!(
                        "career '{}' requires unknown dimension '{dim}'",
                        career.id
                    )));
                }
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(ReferenceDataError::Catalog(format!(
                        "career '{}' has invalid weight {weight} for '{dim}'",
                        career.id
                    )));
                }
            }
        }

        let courses = index_rows(
            "courses",
            &ids,
            course_rows.into_iter().map(|r| (r.career_id, r.courses)),
        )?;
        let colleges = index_rows(
            "colleges",
            &ids,
            college_rows.into_iter().map(|r| (r.career_id, r.colleges)),
        )?;

        Ok(Self {
            careers,
            courses,
            colleges,
        })
    }

    /// Careers in catalog order.
    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    pub fn get(&self, id: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Courses registered for `career_id`; empty when none are.
    pub fn courses_for(&self, career_id: &str) -> &[String] {
        self.courses.get(career_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Colleges registered for `career_id`; empty when none are.
    pub fn colleges_for(&self, career_id: &str) -> &[String] {
        self.colleges.get(career_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn index_rows(
    table: &str,
    known_ids: &HashSet<&str>,
    rows: impl Iterator<Item = (String, Vec<String>)>,
) -> Result<HashMap<String, Vec<String>>, ReferenceDataError> {
    let mut index = HashMap::new();
    for (career_id, items) in rows {
        if !known_ids.contains(career_id.as_str()) {
            return Err(ReferenceDataError::Catalog(format!(
                "{table} row references unknown career '{career_id}'"
            )));
        }
        if index.insert(career_id.clone(), items).is_some() {
            return Err(ReferenceDataError::Catalog(format!(
                "{table} has more than one row for career '{career_id}'"
            )));
        }
    }
    Ok(index)
}
