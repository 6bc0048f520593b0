//! Curriculum-driven class timetabling.
//!
//! Takes an enrollment request (a curriculum plus a cohort size) and
//! produces a weekly timetable: a teacher, a room, and a set of time
//! slots for every subject in the curriculum. Scheduling is greedy and
//! deterministic — no solver, no randomness — with resource conflicts
//! prevented by reservation on an availability grid and reported
//! per-subject when resources run out.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Teacher`, `Room`,
//!   `Curriculum`, `ClassEntity`, `TimeSlot`, `Weekday`
//! - **`grid`**: The bookable week — working days, hourly slots, break
//!   windows, priority scores, reservations
//! - **`matching`**: Teacher and room selection (`MatchingStrategy`,
//!   least-loaded default)
//! - **`repository`**: Entity lookup contract plus an in-memory
//!   implementation for tests and embedding
//! - **`request`**: Enrollment request and scheduling preferences
//! - **`scheduler`**: Generation pipeline — allocation, conflict
//!   detection, optimization advice
//! - **`validation`**: Field validators and aggregate business rules
//!
//! # Example
//!
//! ```
//! use classplan::models::{Curriculum, Room, Subject, Teacher};
//! use classplan::repository::InMemoryRepository;
//! use classplan::request::EnrollmentRequest;
//! use classplan::scheduler::ScheduleGenerator;
//!
//! let mut repo = InMemoryRepository::new();
//! repo.add_subject(Subject::new(1, "Calculus I", 4, 4));
//! repo.add_teacher(Teacher::new(10, "R. Santos").with_subject(1));
//! repo.add_room(Room::new(20, "Room 101", 40));
//! repo.add_curriculum(Curriculum::new(30, "BSCS Year 1", "1st Semester").with_subject(1));
//!
//! let result = ScheduleGenerator::new()
//!     .generate(&mut repo, &EnrollmentRequest::new(30, 35))
//!     .unwrap();
//!
//! assert_eq!(result.schedules.len(), 1);
//! assert!(result.conflicts.is_empty());
//! ```

pub mod grid;
pub mod matching;
pub mod models;
pub mod repository;
pub mod request;
pub mod scheduler;
pub mod validation;
