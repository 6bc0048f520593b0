//! Schedule generation output types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    ClassId, CurriculumId, Room, RoomId, Subject, SubjectId, Teacher, TeacherId, TimeSlot,
};
use crate::request::{MAX_HOURS_PER_DAY_LIMIT, MAX_STUDENT_COUNT};

/// Hard input failure: the whole request is rejected before any
/// allocation is attempted. Per-subject resource failures are NOT errors;
/// they land in [`ScheduleResult::conflicts`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The requested curriculum does not exist.
    #[error("invalid or missing curriculum id: {0}")]
    UnknownCurriculum(CurriculumId),
    /// Student count outside 1..=500.
    #[error("student count must be between 1 and {MAX_STUDENT_COUNT}, got {0}")]
    InvalidStudentCount(u32),
    /// Malformed preference shape (unknown ids, out-of-range hours cap).
    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),
}

/// Subject fields embedded in a schedule record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub id: SubjectId,
    pub title: String,
    pub units: u32,
    pub hours_per_week: u32,
}

impl From<&Subject> for SubjectSummary {
    fn from(s: &Subject) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            units: s.units,
            hours_per_week: s.hours_per_week,
        }
    }
}

/// Teacher fields embedded in a schedule record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
}

impl From<&Teacher> for TeacherSummary {
    fn from(t: &Teacher) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            email: t.email.clone(),
        }
    }
}

/// Room fields embedded in a schedule record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
}

impl From<&Room> for RoomSummary {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            capacity: r.capacity,
            location: r.location.clone(),
        }
    }
}

/// One scheduled subject: the created class plus embedded resource
/// summaries and the allocated weekly slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Created class id.
    pub class_id: ClassId,
    /// Section code of the created class.
    pub class_code: String,
    /// Scheduled subject.
    pub subject: SubjectSummary,
    /// Assigned teacher.
    pub teacher: TeacherSummary,
    /// Assigned room.
    pub room: RoomSummary,
    /// Allocated weekly slots, in allocation order.
    pub slots: Vec<TimeSlot>,
    /// Enrollment cap of the created class.
    pub max_students: u32,
    /// Sum of allocated slot durations in hours. Less than
    /// `subject.hours_per_week` indicates a partial allocation.
    pub total_hours: f64,
}

impl ScheduleRecord {
    /// Builds a record, computing `total_hours` from the slots.
    pub fn new(
        class_id: ClassId,
        class_code: impl Into<String>,
        subject: &Subject,
        teacher: &Teacher,
        room: &Room,
        slots: Vec<TimeSlot>,
        max_students: u32,
    ) -> Self {
        let total_hours = slots.iter().map(TimeSlot::duration_hours).sum();
        Self {
            class_id,
            class_code: class_code.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
            slots,
            max_students,
            total_hours,
        }
    }

    /// Whether every requested weekly hour was allocated.
    pub fn is_fully_allocated(&self) -> bool {
        self.total_hours >= f64::from(self.subject.hours_per_week)
    }
}

/// Outcome of one `generate` call.
///
/// Conflicts and warnings never block the result; they are attached for
/// the caller to act on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Successfully scheduled subjects.
    pub schedules: Vec<ScheduleRecord>,
    /// Per-subject resource failures and structural double-bookings.
    pub conflicts: Vec<String>,
    /// Advisory messages (utilization, fragmentation).
    pub warnings: Vec<String>,
}

/// Sanity bound used when validating the hours-per-day preference.
pub(crate) fn hours_per_day_in_range(hours: u32) -> bool {
    (1..=MAX_HOURS_PER_DAY_LIMIT).contains(&hours)
}
