//! Class (schedule assignment) model.
//!
//! A `ClassEntity` binds one subject, one teacher, and one room to a set
//! of weekly time slots. Created by the scheduler once a subject is fully
//! or partially allocated; owned by the repository thereafter.

use serde::{Deserialize, Serialize};

use super::{ClassId, RoomId, StudentId, SubjectId, TeacherId, TimeSlot};

/// Lifecycle status of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassStatus {
    /// Open and scheduled.
    Active,
    /// Cancelled before or during the term.
    Cancelled,
    /// Term finished.
    Completed,
}

/// A scheduled class section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntity {
    /// Unique class identifier (from the repository id source).
    pub id: ClassId,
    /// Section code (e.g., "CALCULUS-A-007").
    pub code: String,
    /// Subject taught.
    pub subject_id: SubjectId,
    /// Assigned teacher.
    pub teacher_id: TeacherId,
    /// Assigned room.
    pub room_id: RoomId,
    /// Enrollment cap.
    pub max_students: u32,
    /// Enrolled students.
    pub enrolled_student_ids: Vec<StudentId>,
    /// Weekly meeting times, in allocation order.
    pub schedule: Vec<TimeSlot>,
    /// Academic term.
    pub term: String,
    /// Year level.
    pub year_level: u32,
    /// Lifecycle status.
    pub status: ClassStatus,
}

impl ClassEntity {
    /// Creates an active class with an empty roster and schedule.
    pub fn new(
        id: ClassId,
        subject_id: SubjectId,
        teacher_id: TeacherId,
        room_id: RoomId,
        max_students: u32,
    ) -> Self {
        Self {
            id,
            code: String::new(),
            subject_id,
            teacher_id,
            room_id,
            max_students,
            enrolled_student_ids: Vec::new(),
            schedule: Vec::new(),
            term: String::new(),
            year_level: 1,
            status: ClassStatus::Active,
        }
    }

    /// Sets the section code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the weekly schedule.
    pub fn with_schedule(mut self, schedule: Vec<TimeSlot>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Enrolls a student. Returns `false` when full or already enrolled.
    pub fn add_student(&mut self, student_id: StudentId) -> bool {
        if self.is_full() || self.has_student(student_id) {
            return false;
        }
        self.enrolled_student_ids.push(student_id);
        true
    }

    /// Drops a student. Returns `false` if not enrolled.
    pub fn remove_student(&mut self, student_id: StudentId) -> bool {
        let before = self.enrolled_student_ids.len();
        self.enrolled_student_ids.retain(|&id| id != student_id);
        self.enrolled_student_ids.len() != before
    }

    /// Whether a student is enrolled.
    pub fn has_student(&self, student_id: StudentId) -> bool {
        self.enrolled_student_ids.contains(&student_id)
    }

    /// Whether the roster is at capacity.
    pub fn is_full(&self) -> bool {
        self.enrolled_student_ids.len() >= self.max_students as usize
    }

    /// Remaining open seats.
    pub fn available_seats(&self) -> u32 {
        self.max_students
            .saturating_sub(self.enrolled_student_ids.len() as u32)
    }

    /// Total weekly scheduled hours.
    pub fn weekly_hours(&self) -> f64 {
        self.schedule.iter().map(TimeSlot::duration_hours).sum()
    }
}

/// Builds a section code from a subject title.
///
/// Non-alphanumeric characters in the title collapse to single dashes;
/// the zero-padded class id is the unique suffix, keeping codes stable
/// without consulting a clock.
pub fn generate_class_code(title: &str, section: char, class_id: ClassId) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.extend(ch.to_uppercase());
            last_dash = false;
        } else if !last_dash {
            stem.push('-');
            last_dash = true;
        }
    }
    let stem = stem.trim_end_matches('-');
    let stem = if stem.is_empty() { "CLASS" } else { stem };
    format!("{stem}-{}-{class_id:03}", section.to_ascii_uppercase())
}
