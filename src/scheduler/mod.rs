//! Timetable construction pipeline.
//!
//! [`ScheduleGenerator`] drives one pass per enrollment request:
//! resource matching, slot allocation on an [availability
//! grid](crate::grid), conflict detection over the produced records, and
//! advisory analysis. Each stage is also usable on its own.

mod advisor;
mod allocator;
mod conflict;
mod generator;
mod result;

pub use advisor::{OptimizationAdvisor, ROOM_WEEKLY_HOURS};
pub use allocator::{SlotAllocator, DEFAULT_MAX_HOURS_PER_DAY};
pub use conflict::{detect_conflicts, ConflictRecord, ResourceKind};
pub use generator::ScheduleGenerator;
pub use result::{
    RoomSummary, ScheduleError, ScheduleRecord, ScheduleResult, SubjectSummary, TeacherSummary,
};
