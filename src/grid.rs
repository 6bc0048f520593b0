//! Availability grid: per-day, per-slot occupancy for one generation run.
//!
//! The grid enumerates every bookable one-hour interval of the working
//! week up front (break windows removed), then tracks which teacher and
//! room ids are busy in each interval. It is exclusively owned by a
//! single `generate` call — constructed fresh at the start, dropped at
//! the end, never persisted or shared across concurrent runs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{RoomId, TeacherId, TimeOfDay, TimeSlot, Weekday};

/// A fixed daily window during which no class may be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// Label for diagnostics (e.g., "Lunch break").
    pub label: String,
    /// Window start (inclusive).
    pub start: TimeOfDay,
    /// Window end (exclusive).
    pub end: TimeOfDay,
}

impl BreakWindow {
    /// Creates a break window.
    pub fn new(label: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Whether a `[start, end)` interval falls entirely inside this window.
    pub fn covers(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start >= self.start && end <= self.end
    }
}

/// Static grid shape: eligible days, the hourly timeline, and break windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Days on which classes may be scheduled.
    pub working_days: Vec<Weekday>,
    /// Timeline points; each adjacent pair is a candidate slot.
    pub timeline: Vec<TimeOfDay>,
    /// Daily break windows (day-independent).
    pub breaks: Vec<BreakWindow>,
}

impl Default for GridConfig {
    /// Monday-Friday, hourly 07:00-18:00, with morning/lunch/afternoon breaks.
    fn default() -> Self {
        Self {
            working_days: Weekday::WORKING.to_vec(),
            timeline: (7..=18).map(|h| TimeOfDay::new(h, 0)).collect(),
            breaks: vec![
                BreakWindow::new("Morning break", TimeOfDay::new(10, 0), TimeOfDay::new(10, 15)),
                BreakWindow::new("Lunch break", TimeOfDay::new(12, 0), TimeOfDay::new(13, 0)),
                BreakWindow::new(
                    "Afternoon break",
                    TimeOfDay::new(15, 0),
                    TimeOfDay::new(15, 15),
                ),
            ],
        }
    }
}

impl GridConfig {
    /// Whether an interval is swallowed by a break window.
    fn is_break(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.breaks.iter().any(|b| b.covers(start, end))
    }
}

/// Static description of the bookable week, for callers building UIs
/// or pre-validating requests. No grid state involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotCatalog {
    /// Days eligible for scheduling.
    pub working_days: Vec<Weekday>,
    /// Timeline points.
    pub time_slots: Vec<TimeOfDay>,
    /// Break windows.
    pub break_times: Vec<BreakWindow>,
}

impl From<&GridConfig> for TimeSlotCatalog {
    fn from(config: &GridConfig) -> Self {
        Self {
            working_days: config.working_days.clone(),
            time_slots: config.timeline.clone(),
            break_times: config.breaks.clone(),
        }
    }
}

/// One bookable grid cell.
#[derive(Debug, Clone)]
pub struct AvailabilitySlot {
    /// Day of the week.
    pub day: Weekday,
    /// Interval start.
    pub start: TimeOfDay,
    /// Interval end.
    pub end: TimeOfDay,
    /// Teachers already booked in this interval.
    pub occupied_teachers: HashSet<TeacherId>,
    /// Rooms already booked in this interval.
    pub occupied_rooms: HashSet<RoomId>,
    /// Desirability score; higher slots are claimed first.
    pub priority: i32,
}

impl AvailabilitySlot {
    /// Whether neither the teacher nor the room is booked here.
    pub fn is_free(&self, teacher_id: TeacherId, room_id: RoomId) -> bool {
        !self.occupied_teachers.contains(&teacher_id) && !self.occupied_rooms.contains(&room_id)
    }

    /// The cell as a claimable time slot.
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.start, self.end)
    }
}

/// Desirability score for a slot.
///
/// Base 5; +3 for mid-morning starts (08:00-11:00), +2 on mid-week days,
/// -2 for starts before 07:30 or after 17:00.
fn slot_priority(day: Weekday, start: TimeOfDay) -> i32 {
    let mut priority = 5;

    if start >= TimeOfDay::new(8, 0) && start <= TimeOfDay::new(11, 0) {
        priority += 3;
    }

    if matches!(day, Weekday::Tuesday | Weekday::Wednesday | Weekday::Thursday) {
        priority += 2;
    }

    if start < TimeOfDay::new(7, 30) || start > TimeOfDay::new(17, 0) {
        priority -= 2;
    }

    priority
}

/// Mutable occupancy state for one scheduling run.
///
/// Slots within a day are kept in chronological order so that consecutive
/// runs can be detected by end-to-start chaining.
#[derive(Debug, Clone)]
pub struct AvailabilityGrid {
    days: Vec<(Weekday, Vec<AvailabilitySlot>)>,
}

impl AvailabilityGrid {
    /// Builds the grid from a config: one slot per adjacent timeline pair
    /// per working day, minus intervals inside break windows.
    pub fn new(config: &GridConfig) -> Self {
        let mut days = Vec::with_capacity(config.working_days.len());

        for &day in &config.working_days {
            let mut slots = Vec::new();
            for pair in config.timeline.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                if config.is_break(start, end) {
                    continue;
                }
                slots.push(AvailabilitySlot {
                    day,
                    start,
                    end,
                    occupied_teachers: HashSet::new(),
                    occupied_rooms: HashSet::new(),
                    priority: slot_priority(day, start),
                });
            }
            days.push((day, slots));
        }

        Self { days }
    }

    /// Days in grid order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().map(|(day, _)| *day)
    }

    /// Slots for one day, chronological. Empty for days outside the grid.
    pub fn day_slots(&self, day: Weekday) -> &[AvailabilitySlot] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, slots)| slots.as_slice())
            .unwrap_or(&[])
    }

    /// Books a teacher and room into the slot starting at `start` on `day`.
    ///
    /// Returns `false` if no such slot exists. Occupancy is append-only
    /// within a run; there is no release operation.
    pub fn reserve(
        &mut self,
        day: Weekday,
        start: TimeOfDay,
        teacher_id: TeacherId,
        room_id: RoomId,
    ) -> bool {
        let Some((_, slots)) = self.days.iter_mut().find(|(d, _)| *d == day) else {
            return false;
        };
        let Some(slot) = slots.iter_mut().find(|s| s.start == start) else {
            return false;
        };
        slot.occupied_teachers.insert(teacher_id);
        slot.occupied_rooms.insert(room_id);
        true
    }

    /// Total slots still free for a teacher/room pair (diagnostics).
    pub fn free_slot_count(&self, teacher_id: TeacherId, room_id: RoomId) -> usize {
        self.days
            .iter()
            .flat_map(|(_, slots)| slots)
            .filter(|s| s.is_free(teacher_id, room_id))
            .count()
    }
}

impl Default for AvailabilityGrid {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}
