//! Curriculum model.

use serde::{Deserialize, Serialize};

use super::{CurriculumId, Subject, SubjectId};

/// An ordered set of subjects taken together in one term.
///
/// Subjects are referenced by id; existence is validated at the boundary
/// (see `validation::validate_curriculum_integrity`) rather than embedding
/// the subject objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    /// Unique curriculum identifier.
    pub id: CurriculumId,
    /// Curriculum name (e.g., "BSCS Year 1").
    pub name: String,
    /// Academic term (e.g., "1st Semester").
    pub term: String,
    /// Year level (1-6).
    pub year_level: u32,
    /// Subjects in scheduling order.
    pub subject_ids: Vec<SubjectId>,
    /// Sum of units across subjects; set by [`Curriculum::compute_total_units`].
    pub total_units: u32,
}

impl Curriculum {
    /// Creates a new curriculum.
    pub fn new(id: CurriculumId, name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            term: term.into(),
            year_level: 1,
            subject_ids: Vec::new(),
            total_units: 0,
        }
    }

    /// Sets the year level.
    pub fn with_year_level(mut self, year_level: u32) -> Self {
        self.year_level = year_level;
        self
    }

    /// Appends a subject (duplicates ignored).
    pub fn with_subject(mut self, subject_id: SubjectId) -> Self {
        if !self.has_subject(subject_id) {
            self.subject_ids.push(subject_id);
        }
        self
    }

    /// Whether the curriculum contains a subject.
    pub fn has_subject(&self, subject_id: SubjectId) -> bool {
        self.subject_ids.contains(&subject_id)
    }

    /// Removes a subject.
    pub fn remove_subject(&mut self, subject_id: SubjectId) {
        self.subject_ids.retain(|&id| id != subject_id);
    }

    /// Recomputes `total_units` from a subject lookup.
    ///
    /// Unknown subject ids contribute nothing.
    pub fn compute_total_units<'a, F>(&mut self, lookup: F)
    where
        F: Fn(SubjectId) -> Option<&'a Subject>,
    {
        self.total_units = self
            .subject_ids
            .iter()
            .filter_map(|&id| lookup(id))
            .map(|s| s.units)
            .sum();
    }
}
