//! Slot allocation: claiming weekly hours from the availability grid.
//!
//! # Algorithm
//!
//! 1. Primary pass — for each preferred day in order, look for the
//!    highest-priority run of `min(max_hours_per_day, remaining)`
//!    time-contiguous free slots and claim the whole run.
//! 2. Scatter pass — any hours still unplaced are claimed one free slot
//!    at a time, walking all grid days in fixed order.
//!
//! Partial allocation is legal: callers compare the claimed duration sum
//! against the subject's weekly hours. An empty result means the subject
//! could not be scheduled at all.

use tracing::debug;

use crate::grid::{AvailabilityGrid, AvailabilitySlot};
use crate::models::{RoomId, TeacherId, TimeSlot, Weekday};

/// Default cap on hours claimed for one subject on a single day.
pub const DEFAULT_MAX_HOURS_PER_DAY: u32 = 3;

/// Claims grid slots for one subject given its teacher and room.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    max_hours_per_day: u32,
}

impl SlotAllocator {
    /// Creates an allocator with the default daily cap.
    pub fn new() -> Self {
        Self {
            max_hours_per_day: DEFAULT_MAX_HOURS_PER_DAY,
        }
    }

    /// Sets the daily cap (from request preferences).
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours.max(1);
        self
    }

    /// Claims up to `hours_per_week` one-hour slots from the grid.
    ///
    /// Every returned slot is reserved in the grid for the teacher/room
    /// pair before this returns; the day identifier is carried from the
    /// grid cell itself, never re-derived.
    pub fn allocate(
        &self,
        grid: &mut AvailabilityGrid,
        hours_per_week: u32,
        teacher_id: TeacherId,
        room_id: RoomId,
        preferred_days: &[Weekday],
    ) -> Vec<TimeSlot> {
        let day_order = self.day_order(grid, preferred_days);
        let mut claimed: Vec<TimeSlot> = Vec::new();
        let mut remaining = hours_per_week;

        // Primary pass: one consecutive block per preferred day.
        for &day in &day_order {
            if remaining == 0 {
                break;
            }
            let want = remaining.min(self.max_hours_per_day) as usize;
            if let Some(run) = best_consecutive_run(grid.day_slots(day), want, teacher_id, room_id)
            {
                for slot in &run {
                    grid.reserve(slot.day, slot.start, teacher_id, room_id);
                }
                remaining -= run.len() as u32;
                claimed.extend(run);
            }
        }

        // Scatter pass: greedily claim any single free slot.
        if remaining > 0 {
            debug!(
                teacher = teacher_id,
                room = room_id,
                remaining,
                "consecutive pass incomplete, scattering remaining hours"
            );
            let days: Vec<Weekday> = grid.days().collect();
            'days: for day in days {
                loop {
                    if remaining == 0 {
                        break 'days;
                    }
                    let Some(slot) = grid
                        .day_slots(day)
                        .iter()
                        .find(|s| s.is_free(teacher_id, room_id))
                        .map(AvailabilitySlot::time_slot)
                    else {
                        break;
                    };
                    grid.reserve(slot.day, slot.start, teacher_id, room_id);
                    claimed.push(slot);
                    remaining -= 1;
                }
            }
        }

        claimed
    }

    /// Preferred days restricted to days present in the grid; falls back
    /// to all grid days when the intersection is empty.
    fn day_order(&self, grid: &AvailabilityGrid, preferred_days: &[Weekday]) -> Vec<Weekday> {
        let filtered: Vec<Weekday> = preferred_days
            .iter()
            .copied()
            .filter(|&d| !grid.day_slots(d).is_empty())
            .collect();
        if filtered.is_empty() {
            grid.days().collect()
        } else {
            filtered
        }
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the free, end-to-start contiguous run of `want` slots with the
/// highest combined priority (earliest such run on ties).
///
/// `slots` must be in chronological order, which the grid guarantees.
fn best_consecutive_run(
    slots: &[AvailabilitySlot],
    want: usize,
    teacher_id: TeacherId,
    room_id: RoomId,
) -> Option<Vec<TimeSlot>> {
    if want == 0 || slots.len() < want {
        return None;
    }

    let mut best: Option<(i32, usize)> = None;
    for start in 0..=slots.len() - want {
        let window = &slots[start..start + want];
        if !window.iter().all(|s| s.is_free(teacher_id, room_id)) {
            continue;
        }
        if !is_consecutive(window) {
            continue;
        }
        let score: i32 = window.iter().map(|s| s.priority).sum();
        if best.map_or(true, |(b, _)| score > b) {
            best = Some((score, start));
        }
    }

    best.map(|(_, start)| {
        slots[start..start + want]
            .iter()
            .map(AvailabilitySlot::time_slot)
            .collect()
    })
}

/// Whether each slot ends exactly where the next one starts.
fn is_consecutive(window: &[AvailabilitySlot]) -> bool {
    window.windows(2).all(|pair| pair[0].end == pair[1].start)
}
