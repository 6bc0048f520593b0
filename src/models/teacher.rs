//! Teacher model.

use serde::{Deserialize, Serialize};

use super::{SubjectId, TeacherId};

/// A teacher and the subjects they are qualified to teach.
///
/// Qualification is a loose reference-by-id set; existence of the
/// referenced subjects is checked at the boundary, not embedded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: TeacherId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Subjects this teacher is qualified for.
    pub subject_ids: Vec<SubjectId>,
    /// Weekly workload ceiling in hours.
    pub max_hours_per_week: u32,
}

impl Teacher {
    /// Creates a new teacher with the default 40-hour weekly ceiling.
    pub fn new(id: TeacherId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            subject_ids: Vec::new(),
            max_hours_per_week: 40,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: SubjectId) -> Self {
        if !self.can_teach(subject_id) {
            self.subject_ids.push(subject_id);
        }
        self
    }

    /// Sets the weekly workload ceiling.
    pub fn with_max_hours(mut self, max_hours_per_week: u32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Whether this teacher is qualified for a subject.
    pub fn can_teach(&self, subject_id: SubjectId) -> bool {
        self.subject_ids.contains(&subject_id)
    }

    /// Removes a subject qualification.
    pub fn remove_subject(&mut self, subject_id: SubjectId) {
        self.subject_ids.retain(|&id| id != subject_id);
    }
}
