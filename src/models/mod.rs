//! Timetabling domain models.
//!
//! Core data types for curriculum scheduling: subjects, teachers, rooms,
//! curricula, scheduled classes, and the time primitives they share.
//!
//! Entity-to-entity relationships (teacher ↔ subject, curriculum ↔ subject)
//! are loose id lists validated at the boundary, not embedded objects;
//! this keeps ownership flat and lets the repository stay the single
//! source of truth.

mod class_entity;
mod curriculum;
mod room;
mod subject;
mod teacher;
mod time;

pub use class_entity::{generate_class_code, ClassEntity, ClassStatus};
pub use curriculum::Curriculum;
pub use room::Room;
pub use subject::Subject;
pub use teacher::Teacher;
pub use time::{ParseTimeError, TimeOfDay, TimeSlot, Weekday, BUSINESS_CLOSE, BUSINESS_OPEN};

/// Subject identifier.
pub type SubjectId = u32;
/// Teacher identifier.
pub type TeacherId = u32;
/// Room identifier.
pub type RoomId = u32;
/// Curriculum identifier.
pub type CurriculumId = u32;
/// Class (section) identifier.
pub type ClassId = u32;
/// Student identifier.
pub type StudentId = u32;
