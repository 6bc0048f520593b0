//! Schedule generation entry point.
//!
//! One synchronous pass per enrollment request: hard validation, then a
//! match → allocate → persist loop over the curriculum's subjects
//! against a grid owned by this call, then the post-hoc conflict scan
//! and advisory analysis. No step suspends; no locks are taken. Callers
//! running requests concurrently must serialize repository writes
//! themselves.

use tracing::{debug, info, warn};

use crate::grid::{AvailabilityGrid, GridConfig, TimeSlotCatalog};
use crate::matching::{LeastLoadedMatcher, MatchingStrategy};
use crate::models::{generate_class_code, ClassEntity, Curriculum, Subject};
use crate::repository::Repository;
use crate::request::{EnrollmentRequest, MAX_STUDENT_COUNT};

use super::advisor::OptimizationAdvisor;
use super::allocator::SlotAllocator;
use super::conflict::detect_conflicts;
use super::result::{hours_per_day_in_range, ScheduleError, ScheduleRecord, ScheduleResult};

/// Extra seats offered beyond the requested cohort, capped by room size.
const ENROLLMENT_HEADROOM: u32 = 10;

/// Term stamped on classes when the request names none.
const DEFAULT_TERM: &str = "Current Term";

/// Generates weekly timetables for curriculum enrollment requests.
///
/// # Example
///
/// ```
/// use classplan::models::{Curriculum, Room, Subject, Teacher};
/// use classplan::repository::InMemoryRepository;
/// use classplan::request::EnrollmentRequest;
/// use classplan::scheduler::ScheduleGenerator;
///
/// let mut repo = InMemoryRepository::new();
/// repo.add_subject(Subject::new(1, "Algebra", 3, 3));
/// repo.add_teacher(Teacher::new(10, "Ada").with_subject(1));
/// repo.add_room(Room::new(20, "B-204", 35));
/// repo.add_curriculum(Curriculum::new(30, "Year 1", "1st Semester").with_subject(1));
///
/// let generator = ScheduleGenerator::new();
/// let result = generator
///     .generate(&mut repo, &EnrollmentRequest::new(30, 25))
///     .unwrap();
/// assert_eq!(result.schedules.len(), 1);
/// assert!(result.conflicts.is_empty());
/// ```
#[derive(Debug)]
pub struct ScheduleGenerator {
    config: GridConfig,
    matcher: Box<dyn MatchingStrategy>,
    advisor: OptimizationAdvisor,
}

impl ScheduleGenerator {
    /// Creates a generator with the default grid, matcher, and advisor.
    pub fn new() -> Self {
        Self {
            config: GridConfig::default(),
            matcher: Box::new(LeastLoadedMatcher::new()),
            advisor: OptimizationAdvisor::new(),
        }
    }

    /// Substitutes the resource matching strategy.
    pub fn with_matcher<M: MatchingStrategy + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Substitutes the grid configuration.
    pub fn with_grid_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Static description of the bookable week for this generator.
    pub fn available_time_slots(&self) -> TimeSlotCatalog {
        TimeSlotCatalog::from(&self.config)
    }

    /// Runs one scheduling pass for an enrollment request.
    ///
    /// Hard input errors reject the whole request; per-subject resource
    /// failures only append to `conflicts` and the remaining subjects
    /// keep scheduling. Structural double-bookings and advisory warnings
    /// are attached to the result, never raised.
    pub fn generate(
        &self,
        repo: &mut dyn Repository,
        request: &EnrollmentRequest,
    ) -> Result<ScheduleResult, ScheduleError> {
        let curriculum = self.validate_request(&*repo, request)?;
        let subjects = resolve_subjects(&*repo, &curriculum);
        info!(
            curriculum = curriculum.id,
            subjects = subjects.len(),
            students = request.student_count,
            "generating schedule"
        );

        let mut grid = AvailabilityGrid::new(&self.config);
        let mut allocator = SlotAllocator::new();
        if let Some(hours) = request.preferences.max_hours_per_day {
            allocator = allocator.with_max_hours_per_day(hours);
        }
        let preferred_days = request
            .preferences
            .preferred_days
            .clone()
            .unwrap_or_default();

        let mut result = ScheduleResult::default();

        for subject in &subjects {
            match self.schedule_subject(repo, request, subject, &mut grid, &allocator, &preferred_days)
            {
                Ok(record) => result.schedules.push(record),
                Err(message) => {
                    warn!(subject = subject.id, %message, "subject not scheduled");
                    result.conflicts.push(message);
                }
            }
        }

        // The grid should have prevented double-bookings; scan anyway.
        for conflict in detect_conflicts(&result.schedules) {
            result.conflicts.push(conflict.to_string());
        }

        result.warnings = self.advisor.suggest(&result.schedules);
        Ok(result)
    }

    /// Matches resources and claims slots for one subject, creating the
    /// class in the repository on success. The error string is the
    /// conflict message for this subject.
    fn schedule_subject(
        &self,
        repo: &mut dyn Repository,
        request: &EnrollmentRequest,
        subject: &Subject,
        grid: &mut AvailabilityGrid,
        allocator: &SlotAllocator,
        preferred_days: &[crate::models::Weekday],
    ) -> Result<ScheduleRecord, String> {
        let prefs = &request.preferences;

        let teacher = self
            .matcher
            .select_teacher(&*repo, subject, prefs)
            .ok_or_else(|| format!("No available teacher for subject: {}", subject.title))?;

        let room = self
            .matcher
            .select_room(&*repo, request.student_count, prefs)
            .ok_or_else(|| {
                format!(
                    "No available room with capacity for {} students for subject: {}",
                    request.student_count, subject.title
                )
            })?;

        let slots = allocator.allocate(
            grid,
            subject.hours_per_week,
            teacher.id,
            room.id,
            preferred_days,
        );
        if slots.is_empty() {
            return Err(format!(
                "Cannot allocate sufficient time slots for subject: {}",
                subject.title
            ));
        }

        let class_id = repo.next_id();
        let code = generate_class_code(&subject.title, 'A', class_id);
        let max_students = room.capacity.min(request.student_count + ENROLLMENT_HEADROOM);
        let term = prefs.term.clone().unwrap_or_else(|| DEFAULT_TERM.to_string());

        debug!(
            class = class_id,
            subject = subject.id,
            teacher = teacher.id,
            room = room.id,
            slots = slots.len(),
            "class scheduled"
        );

        repo.add_class(
            ClassEntity::new(class_id, subject.id, teacher.id, room.id, max_students)
                .with_code(code.clone())
                .with_schedule(slots.clone())
                .with_term(term),
        );

        Ok(ScheduleRecord::new(
            class_id,
            code,
            subject,
            &teacher,
            &room,
            slots,
            max_students,
        ))
    }

    /// Tier-one validation: reject the whole request before touching the
    /// grid. Returns the curriculum on success.
    fn validate_request(
        &self,
        repo: &dyn Repository,
        request: &EnrollmentRequest,
    ) -> Result<Curriculum, ScheduleError> {
        if request.student_count == 0 || request.student_count > MAX_STUDENT_COUNT {
            return Err(ScheduleError::InvalidStudentCount(request.student_count));
        }

        let prefs = &request.preferences;
        if let Some(hours) = prefs.max_hours_per_day {
            if !hours_per_day_in_range(hours) {
                return Err(ScheduleError::InvalidPreferences(format!(
                    "max hours per day must be between 1 and 8, got {hours}"
                )));
            }
        }
        if let Some(teacher_ids) = &prefs.preferred_teachers {
            for &id in teacher_ids {
                if repo.get_teacher(id).is_none() {
                    return Err(ScheduleError::InvalidPreferences(format!(
                        "preferred teacher {id} does not exist"
                    )));
                }
            }
        }
        if let Some(room_ids) = &prefs.preferred_rooms {
            for &id in room_ids {
                if repo.get_room(id).is_none() {
                    return Err(ScheduleError::InvalidPreferences(format!(
                        "preferred room {id} does not exist"
                    )));
                }
            }
        }

        repo.get_curriculum(request.curriculum_id)
            .ok_or(ScheduleError::UnknownCurriculum(request.curriculum_id))
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Curriculum subject ids resolved to subjects, keeping order. Missing
/// ids are skipped (negative lookups are not errors).
fn resolve_subjects(repo: &dyn Repository, curriculum: &Curriculum) -> Vec<Subject> {
    curriculum
        .subject_ids
        .iter()
        .filter_map(|&id| repo.get_subject(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Room, Teacher, Weekday};
    use crate::repository::InMemoryRepository;
    use crate::request::Preferences;

    fn sample_repo() -> InMemoryRepository {
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "Algebra", 3, 6));
        repo.add_subject(Subject::new(2, "Geometry", 3, 3));
        repo.add_teacher(Teacher::new(10, "Ada").with_subject(1).with_subject(2));
        repo.add_teacher(Teacher::new(11, "Grace").with_subject(1));
        repo.add_room(Room::new(20, "B-204", 35).with_location("Main"));
        repo.add_room(Room::new(21, "Hall", 120).with_location("Main"));
        repo.add_curriculum(
            Curriculum::new(30, "Year 1", "1st Semester")
                .with_subject(1)
                .with_subject(2),
        );
        repo
    }

    #[test]
    fn test_generate_full_curriculum() {
        let mut repo = sample_repo();
        let generator = ScheduleGenerator::new();

        let result = generator
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();

        assert_eq!(result.schedules.len(), 2);
        assert!(result.conflicts.is_empty(), "{:?}", result.conflicts);

        // Fully allocated: durations sum to the requested weekly hours
        for record in &result.schedules {
            assert!(record.is_fully_allocated(), "{}", record.class_code);
        }

        // Classes were persisted with matching schedules
        assert_eq!(repo.classes().len(), 2);
        assert_eq!(repo.classes()[0].schedule.len(), 6);
    }

    #[test]
    fn test_no_resource_overlap_across_subjects() {
        let mut repo = sample_repo();
        let generator = ScheduleGenerator::new();
        let result = generator
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();

        let all: Vec<_> = result
            .schedules
            .iter()
            .flat_map(|r| r.slots.iter().map(move |s| (r.teacher.id, r.room.id, *s)))
            .collect();
        for (i, (t1, r1, s1)) in all.iter().enumerate() {
            for (t2, r2, s2) in &all[i + 1..] {
                if s1.overlaps(s2) {
                    assert!(t1 != t2, "teacher {t1} double-booked at {s1}");
                    assert!(r1 != r2, "room {r1} double-booked at {s1}");
                }
            }
        }
    }

    #[test]
    fn test_least_loaded_teacher_selected_per_scenario() {
        // One 6-hour subject, two qualified teachers, one already loaded.
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "Algebra", 3, 6));
        repo.add_teacher(Teacher::new(10, "Busy").with_subject(1));
        repo.add_teacher(Teacher::new(11, "Idle").with_subject(1));
        repo.add_room(Room::new(20, "R", 40));
        repo.add_curriculum(Curriculum::new(30, "C", "Summer").with_subject(1));
        repo.add_class(ClassEntity::new(100, 1, 10, 20, 30));
        repo.add_class(ClassEntity::new(101, 1, 10, 20, 30));

        let result = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();

        let record = &result.schedules[0];
        assert_eq!(record.teacher.id, 11);

        // Two 3-hour consecutive blocks on two distinct days
        let days: std::collections::BTreeSet<Weekday> =
            record.slots.iter().map(|s| s.day).collect();
        assert_eq!(days.len(), 2);
        for day in days {
            let block: Vec<_> = record.slots.iter().filter(|s| s.day == day).collect();
            assert_eq!(block.len(), 3);
            for pair in block.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_student_count_hard_limit() {
        let mut repo = sample_repo();
        let generator = ScheduleGenerator::new();

        let err = generator
            .generate(&mut repo, &EnrollmentRequest::new(30, 501))
            .unwrap_err();
        assert_eq!(err, ScheduleError::InvalidStudentCount(501));
        assert!(repo.classes().is_empty()); // zero schedules produced

        let err = generator
            .generate(&mut repo, &EnrollmentRequest::new(30, 0))
            .unwrap_err();
        assert_eq!(err, ScheduleError::InvalidStudentCount(0));
    }

    #[test]
    fn test_unknown_curriculum_rejected() {
        let mut repo = sample_repo();
        let err = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(99, 25))
            .unwrap_err();
        assert_eq!(err, ScheduleError::UnknownCurriculum(99));
    }

    #[test]
    fn test_malformed_preferences_rejected() {
        let mut repo = sample_repo();
        let generator = ScheduleGenerator::new();

        let request = EnrollmentRequest::new(30, 25)
            .with_preferences(Preferences::new().with_max_hours_per_day(9));
        assert!(matches!(
            generator.generate(&mut repo, &request),
            Err(ScheduleError::InvalidPreferences(_))
        ));

        let request = EnrollmentRequest::new(30, 25)
            .with_preferences(Preferences::new().with_teachers(vec![999]));
        assert!(matches!(
            generator.generate(&mut repo, &request),
            Err(ScheduleError::InvalidPreferences(_))
        ));

        let request = EnrollmentRequest::new(30, 25)
            .with_preferences(Preferences::new().with_rooms(vec![999]));
        assert!(matches!(
            generator.generate(&mut repo, &request),
            Err(ScheduleError::InvalidPreferences(_))
        ));
    }

    #[test]
    fn test_unstaffed_subject_reported_others_continue() {
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "Staffed", 3, 3));
        repo.add_subject(Subject::new(2, "Orphaned", 3, 3));
        repo.add_teacher(Teacher::new(10, "Ada").with_subject(1));
        repo.add_room(Room::new(20, "R", 40));
        repo.add_curriculum(
            Curriculum::new(30, "C", "Summer").with_subject(1).with_subject(2),
        );

        let result = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();

        assert_eq!(result.schedules.len(), 1);
        assert_eq!(result.schedules[0].subject.id, 1);
        assert_eq!(result.conflicts.len(), 1);
        assert!(result.conflicts[0].contains("Orphaned"), "{}", result.conflicts[0]);
        assert_eq!(repo.classes().len(), 1); // nothing persisted for the orphan
    }

    #[test]
    fn test_no_room_fits_cohort() {
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "S", 3, 3));
        repo.add_teacher(Teacher::new(10, "T").with_subject(1));
        repo.add_room(Room::new(20, "Tiny", 10));
        repo.add_curriculum(Curriculum::new(30, "C", "Summer").with_subject(1));

        let result = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 100))
            .unwrap();
        assert!(result.schedules.is_empty());
        assert_eq!(result.conflicts.len(), 1);
        assert!(result.conflicts[0].contains("capacity for 100 students"));
    }

    #[test]
    fn test_max_students_capped_by_room() {
        let mut repo = sample_repo();
        let result = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 30))
            .unwrap();

        // Smallest fitting room seats 35; 30 + 10 headroom caps at 35
        assert!(result.schedules.iter().all(|r| r.max_students == 35));
    }

    #[test]
    fn test_term_preference_stamped() {
        let mut repo = sample_repo();
        let request = EnrollmentRequest::new(30, 25)
            .with_preferences(Preferences::new().with_term("2nd Semester"));
        ScheduleGenerator::new().generate(&mut repo, &request).unwrap();
        assert!(repo.classes().iter().all(|c| c.term == "2nd Semester"));

        let mut repo = sample_repo();
        ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();
        assert!(repo.classes().iter().all(|c| c.term == DEFAULT_TERM));
    }

    #[test]
    fn test_preferred_days_respected() {
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "S", 3, 4));
        repo.add_teacher(Teacher::new(10, "T").with_subject(1));
        repo.add_room(Room::new(20, "R", 40));
        repo.add_curriculum(Curriculum::new(30, "C", "Summer").with_subject(1));

        let request = EnrollmentRequest::new(30, 25).with_preferences(
            Preferences::new().with_days(vec![Weekday::Tuesday, Weekday::Thursday]),
        );
        let result = ScheduleGenerator::new().generate(&mut repo, &request).unwrap();

        let record = &result.schedules[0];
        assert!(record
            .slots
            .iter()
            .all(|s| s.day == Weekday::Tuesday || s.day == Weekday::Thursday));
    }

    #[test]
    fn test_available_time_slots_descriptor() {
        let catalog = ScheduleGenerator::new().available_time_slots();
        assert_eq!(catalog.working_days, Weekday::WORKING.to_vec());
        assert_eq!(catalog.time_slots.len(), 12);
        assert_eq!(catalog.break_times.len(), 3);
    }

    #[test]
    fn test_load_balancing_within_one_run() {
        // Two 3-hour subjects, two equally idle teachers: the second
        // subject must see the class created for the first.
        let mut repo = InMemoryRepository::new();
        repo.add_subject(Subject::new(1, "A", 3, 3));
        repo.add_subject(Subject::new(2, "B", 3, 3));
        repo.add_teacher(Teacher::new(10, "One").with_subject(1).with_subject(2));
        repo.add_teacher(Teacher::new(11, "Two").with_subject(1).with_subject(2));
        repo.add_room(Room::new(20, "R", 40));
        repo.add_curriculum(
            Curriculum::new(30, "C", "Summer").with_subject(1).with_subject(2),
        );

        let result = ScheduleGenerator::new()
            .generate(&mut repo, &EnrollmentRequest::new(30, 25))
            .unwrap();
        assert_eq!(result.schedules.len(), 2);
        assert_ne!(result.schedules[0].teacher.id, result.schedules[1].teacher.id);
    }
}
