//! Enrollment request and scheduling preferences.

use serde::{Deserialize, Serialize};

use crate::models::{CurriculumId, RoomId, TeacherId, Weekday};

/// Maximum students per enrollment request.
pub const MAX_STUDENT_COUNT: u32 = 500;
/// Upper bound for the per-day hours preference.
pub const MAX_HOURS_PER_DAY_LIMIT: u32 = 8;

/// Optional knobs a caller can attach to an enrollment request.
///
/// All fields default to "no preference"; the scheduler falls back to
/// its load-balancing and size heuristics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Days to try first, in the given order.
    pub preferred_days: Option<Vec<Weekday>>,
    /// Teacher ids to prefer, in the given order.
    pub preferred_teachers: Option<Vec<TeacherId>>,
    /// Room ids to prefer, in the given order.
    pub preferred_rooms: Option<Vec<RoomId>>,
    /// Cap on hours allocated to one subject on a single day (default 3).
    pub max_hours_per_day: Option<u32>,
    /// Term label stamped on created classes.
    pub term: Option<String>,
}

impl Preferences {
    /// Creates empty preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets preferred days.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.preferred_days = Some(days);
        self
    }

    /// Sets preferred teachers.
    pub fn with_teachers(mut self, teacher_ids: Vec<TeacherId>) -> Self {
        self.preferred_teachers = Some(teacher_ids);
        self
    }

    /// Sets preferred rooms.
    pub fn with_rooms(mut self, room_ids: Vec<RoomId>) -> Self {
        self.preferred_rooms = Some(room_ids);
        self
    }

    /// Sets the per-day hours cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = Some(hours);
        self
    }

    /// Sets the term label.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }
}

/// A request to timetable one curriculum for a cohort of students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// Curriculum to schedule.
    pub curriculum_id: CurriculumId,
    /// Cohort size (1..=500); drives room capacity matching.
    pub student_count: u32,
    /// Optional scheduling preferences.
    pub preferences: Preferences,
}

impl EnrollmentRequest {
    /// Creates a request with default preferences.
    pub fn new(curriculum_id: CurriculumId, student_count: u32) -> Self {
        Self {
            curriculum_id,
            student_count,
            preferences: Preferences::default(),
        }
    }

    /// Attaches preferences.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }
}
