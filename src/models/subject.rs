//! Subject model.

use serde::{Deserialize, Serialize};

use super::SubjectId;

/// A subject (course) to be timetabled.
///
/// Immutable input to the scheduler: the allocator claims
/// `hours_per_week` one-hour grid slots for each subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: SubjectId,
    /// Subject title (e.g., "Linear Algebra").
    pub title: String,
    /// Credit units.
    pub units: u32,
    /// Weekly contact hours. Grid slots are one hour, so this is also
    /// the number of slots the allocator tries to claim.
    pub hours_per_week: u32,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: SubjectId, title: impl Into<String>, units: u32, hours_per_week: u32) -> Self {
        Self {
            id,
            title: title.into(),
            units,
            hours_per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_new() {
        let s = Subject::new(1, "Calculus I", 3, 5);
        assert_eq!(s.id, 1);
        assert_eq!(s.title, "Calculus I");
        assert_eq!(s.units, 3);
        assert_eq!(s.hours_per_week, 5);
    }
}
