//! Input validation for catalog entities and schedules.
//!
//! Checks field-level integrity of subjects, teachers, rooms, and
//! curricula before they enter a repository, plus two aggregate business
//! rules over finished schedules:
//! - Maximum class count per teacher per day
//! - Minimum break between consecutive classes
//!
//! Validators collect every problem they find rather than stopping at
//! the first, so callers can report all of them at once.

use std::collections::BTreeMap;

use crate::models::{
    ClassEntity, Curriculum, Room, Subject, Teacher, TimeSlot, Weekday, BUSINESS_CLOSE,
    BUSINESS_OPEN,
};
use crate::repository::Repository;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Terms a curriculum may be offered in.
pub const VALID_TERMS: [&str; 6] = [
    "1st Semester",
    "2nd Semester",
    "Summer",
    "Trimester 1",
    "Trimester 2",
    "Trimester 3",
];

/// Most slot occurrences a teacher may hold on one day.
pub const MAX_CLASSES_PER_TEACHER_PER_DAY: usize = 6;

/// Shortest allowed gap between consecutive classes, in minutes.
pub const MIN_BREAK_MINUTES: u16 = 15;

/// Curriculum weekly workload bounds, in hours.
const MIN_WEEKLY_HOURS: u32 = 12;
const MAX_WEEKLY_HOURS: u32 = 40;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is empty.
    MissingField,
    /// A numeric field is outside its allowed range.
    OutOfRange,
    /// A string field does not match its expected format.
    InvalidFormat,
    /// An id refers to an entity that doesn't exist.
    InvalidReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a subject's fields.
pub fn validate_subject(subject: &Subject) -> ValidationResult {
    let mut errors = Vec::new();

    if subject.title.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Subject title is required",
        ));
    }
    if subject.units == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            "Units must be a positive number",
        ));
    }
    if subject.hours_per_week == 0 || subject.hours_per_week > MAX_WEEKLY_HOURS {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Hours per week must be between 1 and {MAX_WEEKLY_HOURS}, got {}",
                subject.hours_per_week
            ),
        ));
    }

    finish(errors)
}

/// Validates a teacher's fields.
pub fn validate_teacher(teacher: &Teacher) -> ValidationResult {
    let mut errors = Vec::new();

    if teacher.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Teacher name is required",
        ));
    }
    if !teacher.email.is_empty() && !is_plausible_email(&teacher.email) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            format!("Invalid email format: {}", teacher.email),
        ));
    }
    if teacher.subject_ids.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Teacher must be able to teach at least one subject",
        ));
    }
    if teacher.max_hours_per_week == 0 || teacher.max_hours_per_week > 60 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Max hours per week must be between 1 and 60, got {}",
                teacher.max_hours_per_week
            ),
        ));
    }

    finish(errors)
}

/// Validates a room's fields.
pub fn validate_room(room: &Room) -> ValidationResult {
    let mut errors = Vec::new();

    if room.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Room name is required",
        ));
    }
    if room.capacity == 0 || room.capacity > 1000 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Capacity must be between 1 and 1000, got {}", room.capacity),
        ));
    }

    finish(errors)
}

/// Validates a curriculum's fields. Subject ids are not resolved here;
/// use [`validate_curriculum_integrity`] for reference checks.
pub fn validate_curriculum(curriculum: &Curriculum) -> ValidationResult {
    let mut errors = Vec::new();

    if curriculum.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Curriculum name is required",
        ));
    }
    if !VALID_TERMS.contains(&curriculum.term.as_str()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            format!(
                "Invalid term '{}'. Valid terms: {}",
                curriculum.term,
                VALID_TERMS.join(", ")
            ),
        ));
    }
    if curriculum.year_level == 0 || curriculum.year_level > 6 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Year level must be between 1 and 6, got {}",
                curriculum.year_level
            ),
        ));
    }
    if curriculum.subject_ids.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Curriculum must have at least one subject",
        ));
    }

    finish(errors)
}

/// Validates a class entity's fields.
pub fn validate_class(class: &ClassEntity) -> ValidationResult {
    let mut errors = Vec::new();

    if class.code.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Class code is required",
        ));
    }
    if class.max_students == 0 || class.max_students > 200 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Max students must be between 1 and 200, got {}",
                class.max_students
            ),
        ));
    }
    for slot in &class.schedule {
        if let Err(slot_errors) = validate_time_slot(slot) {
            errors.extend(slot_errors);
        }
    }

    finish(errors)
}

/// Validates a single time slot: ordering, duration, business hours.
pub fn validate_time_slot(slot: &TimeSlot) -> ValidationResult {
    let mut errors = Vec::new();

    if slot.start >= slot.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("End time must be after start time: {slot}"),
        ));
    } else {
        let hours = slot.duration_hours();
        if !(0.5..=4.0).contains(&hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Slot duration must be between 0.5 and 4 hours: {slot}"),
            ));
        }
    }
    if slot.start < BUSINESS_OPEN || slot.end > BUSINESS_CLOSE {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Slot falls outside business hours ({BUSINESS_OPEN}-{BUSINESS_CLOSE}): {slot}"),
        ));
    }

    finish(errors)
}

/// Cross-checks a curriculum against the repository: every subject id
/// must resolve, and the combined weekly workload must stay within
/// 12 to 40 hours.
pub fn validate_curriculum_integrity(
    repo: &dyn Repository,
    curriculum_id: crate::models::CurriculumId,
) -> ValidationResult {
    let Some(curriculum) = repo.get_curriculum(curriculum_id) else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidReference,
            format!("Curriculum {curriculum_id} not found"),
        )]);
    };

    let mut errors = Vec::new();
    let mut total_hours = 0;

    for &subject_id in &curriculum.subject_ids {
        match repo.get_subject(subject_id) {
            Some(subject) => total_hours += subject.hours_per_week,
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!("Subject with ID {subject_id} in curriculum does not exist"),
            )),
        }
    }

    if total_hours > MAX_WEEKLY_HOURS {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Total weekly hours ({total_hours}) exceeds recommended maximum ({MAX_WEEKLY_HOURS} hours)"
            ),
        ));
    }
    if total_hours < MIN_WEEKLY_HOURS {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Total weekly hours ({total_hours}) is below minimum requirement ({MIN_WEEKLY_HOURS} hours)"
            ),
        ));
    }

    finish(errors)
}

/// Schedule data submitted for business-rule checks.
///
/// `consecutive_slots` is expected in chronological order; only
/// adjacent same-day pairs are gap-checked.
#[derive(Debug, Clone, Default)]
pub struct BusinessRuleInput {
    /// Classes whose teachers' daily load should be counted.
    pub classes: Vec<ClassEntity>,
    /// Back-to-back class time ranges to gap-check.
    pub consecutive_slots: Vec<TimeSlot>,
}

/// Checks aggregate constraints per-slot reservation cannot express.
/// Returns one message per violation; an empty vector means the
/// schedule passes.
pub fn validate_business_rules(input: &BusinessRuleInput) -> Vec<String> {
    let mut messages = Vec::new();

    // Slot occurrences per (teacher, day)
    let mut daily: BTreeMap<(crate::models::TeacherId, Weekday), usize> = BTreeMap::new();
    for class in &input.classes {
        for slot in &class.schedule {
            *daily.entry((class.teacher_id, slot.day)).or_insert(0) += 1;
        }
    }
    for ((teacher_id, day), count) in daily {
        if count > MAX_CLASSES_PER_TEACHER_PER_DAY {
            messages.push(format!(
                "Teacher {teacher_id} exceeds maximum classes per day ({count}) on {day}"
            ));
        }
    }

    for pair in input.consecutive_slots.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.day != next.day {
            continue;
        }
        let gap = current.end.minutes_until(next.start);
        if gap < MIN_BREAK_MINUTES {
            messages.push(format!(
                "Insufficient break time between consecutive classes on {}: {} minutes between {} and {}",
                current.day, gap, current.end, next.start
            ));
        }
    }

    messages
}

/// Loose email shape check: one `@` with a dotted domain after it.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
