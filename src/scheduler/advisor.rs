//! Post-hoc schedule quality analysis.
//!
//! Produces advisory messages only — nothing here blocks a result.
//! Two checks: weekly room utilization against an assumed 45 bookable
//! hours, and per-class fragmentation (too many days, or too many hours
//! piled onto one day).

use std::collections::BTreeMap;

use crate::models::{RoomId, Weekday};

use super::ScheduleRecord;

/// Assumed bookable hours per room per week (9 hours x 5 days).
pub const ROOM_WEEKLY_HOURS: f64 = 45.0;

/// Analyzes finished schedules for utilization and fragmentation issues.
#[derive(Debug, Clone)]
pub struct OptimizationAdvisor {
    /// Utilization below this percentage flags a room as underutilized.
    pub underutilized_pct: f64,
    /// Utilization above this percentage flags a room as overutilized.
    pub overutilized_pct: f64,
    /// A class spread over more than this many days is fragmented.
    pub max_spread_days: usize,
    /// More than this many hours of one class on a single day is a pile-up.
    pub max_daily_hours: f64,
}

impl Default for OptimizationAdvisor {
    fn default() -> Self {
        Self {
            underutilized_pct: 30.0,
            overutilized_pct: 90.0,
            max_spread_days: 4,
            max_daily_hours: 4.0,
        }
    }
}

impl OptimizationAdvisor {
    /// Creates an advisor with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all advisory messages for a schedule set.
    pub fn suggest(&self, records: &[ScheduleRecord]) -> Vec<String> {
        let mut warnings = self.room_utilization(records);
        warnings.extend(self.fragmentation(records));
        warnings
    }

    /// Weekly scheduled hours per room as a percentage of
    /// [`ROOM_WEEKLY_HOURS`]; flags rooms outside the healthy band.
    fn room_utilization(&self, records: &[ScheduleRecord]) -> Vec<String> {
        // BTreeMap keeps message order deterministic by room id.
        let mut hours_by_room: BTreeMap<RoomId, (&str, f64)> = BTreeMap::new();
        for record in records {
            let entry = hours_by_room
                .entry(record.room.id)
                .or_insert((&record.room.name, 0.0));
            entry.1 += record.total_hours;
        }

        let mut warnings = Vec::new();
        for (name, hours) in hours_by_room.values() {
            let pct = hours / ROOM_WEEKLY_HOURS * 100.0;
            if pct < self.underutilized_pct {
                warnings.push(format!(
                    "Room {name} is underutilized at {pct:.0}% ({hours} of {ROOM_WEEKLY_HOURS} weekly hours), consider consolidating classes"
                ));
            } else if pct > self.overutilized_pct {
                warnings.push(format!(
                    "Room {name} is overutilized at {pct:.0}% ({hours} of {ROOM_WEEKLY_HOURS} weekly hours), consider spreading classes to other rooms"
                ));
            }
        }
        warnings
    }

    /// Per-class day spread and single-day pile-up checks.
    fn fragmentation(&self, records: &[ScheduleRecord]) -> Vec<String> {
        let mut warnings = Vec::new();

        for record in records {
            let mut daily_hours: BTreeMap<Weekday, f64> = BTreeMap::new();
            for slot in &record.slots {
                *daily_hours.entry(slot.day).or_insert(0.0) += slot.duration_hours();
            }

            if daily_hours.len() > self.max_spread_days {
                warnings.push(format!(
                    "Class {} is spread across {} days, consider consolidation",
                    record.class_code,
                    daily_hours.len()
                ));
            }

            for (day, hours) in &daily_hours {
                if *hours > self.max_daily_hours {
                    warnings.push(format!(
                        "Class {} has {hours} hours on {day}, consider redistributing",
                        record.class_code
                    ));
                }
            }
        }

        warnings
    }
}
