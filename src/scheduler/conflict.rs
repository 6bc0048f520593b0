//! Post-hoc conflict detection over finished schedule records.
//!
//! A pure scan that finds teacher or room double-bookings in any
//! schedule set, self-generated or externally supplied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::TimeSlot;

use super::ScheduleRecord;

/// Which shared resource is double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Teacher,
    Room,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Teacher => f.write_str("Teacher"),
            ResourceKind::Room => f.write_str("Room"),
        }
    }
}

/// A single double-booking: one resource, one day/time, two classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Resource type in conflict.
    pub kind: ResourceKind,
    /// Id of the teacher or room.
    pub resource_id: u32,
    /// Name of the teacher or room.
    pub resource_name: String,
    /// The contested day/time.
    pub slot: TimeSlot,
    /// Code of the class that claimed the slot first.
    pub first_class: String,
    /// Code of the class that collided with it.
    pub second_class: String,
}

impl fmt::Display for ConflictRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} has conflicting schedules on {} at {}-{} ({}, {})",
            self.kind,
            self.resource_name,
            self.slot.day,
            self.slot.start,
            self.slot.end,
            self.first_class,
            self.second_class,
        )
    }
}

/// Scans schedule records for teacher and room double-bookings.
///
/// Two records conflict when they share a resource id and an identical
/// `{day, start, end}` slot key. Every repeat occurrence of a taken key
/// yields one conflict against the class that claimed it first. The scan
/// is pure: it never mutates or filters the input.
pub fn detect_conflicts(records: &[ScheduleRecord]) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();
    let mut teacher_slots: HashMap<(u32, TimeSlot), &str> = HashMap::new();
    let mut room_slots: HashMap<(u32, TimeSlot), &str> = HashMap::new();

    for record in records {
        for &slot in &record.slots {
            match teacher_slots.entry((record.teacher.id, slot)) {
                std::collections::hash_map::Entry::Occupied(held) => {
                    conflicts.push(ConflictRecord {
                        kind: ResourceKind::Teacher,
                        resource_id: record.teacher.id,
                        resource_name: record.teacher.name.clone(),
                        slot,
                        first_class: (*held.get()).to_string(),
                        second_class: record.class_code.clone(),
                    });
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(&record.class_code);
                }
            }

            match room_slots.entry((record.room.id, slot)) {
                std::collections::hash_map::Entry::Occupied(held) => {
                    conflicts.push(ConflictRecord {
                        kind: ResourceKind::Room,
                        resource_id: record.room.id,
                        resource_name: record.room.name.clone(),
                        slot,
                        first_class: (*held.get()).to_string(),
                        second_class: record.class_code.clone(),
                    });
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(&record.class_code);
                }
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Room, Subject, Teacher, TimeOfDay, Weekday};

    fn slot(day: Weekday, hour: u16) -> TimeSlot {
        TimeSlot::new(day, TimeOfDay::new(hour, 0), TimeOfDay::new(hour + 1, 0))
    }

    fn record(code: &str, teacher_id: u32, room_id: u32, slots: Vec<TimeSlot>) -> ScheduleRecord {
        ScheduleRecord::new(
            1,
            code,
            &Subject::new(1, "S", 1, slots.len() as u32),
            &Teacher::new(teacher_id, format!("T{teacher_id}")),
            &Room::new(room_id, format!("R{room_id}"), 30),
            slots,
            30,
        )
    }

    #[test]
    fn test_clean_schedule_has_no_conflicts() {
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Monday, 8)]),
            record("B", 1, 10, vec![slot(Weekday::Monday, 9)]), // adjacent, not equal
            record("C", 2, 11, vec![slot(Weekday::Monday, 8)]), // same time, other resources
        ];
        assert!(detect_conflicts(&records).is_empty());
    }

    #[test]
    fn test_teacher_double_booking() {
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Monday, 8)]),
            record("B", 1, 11, vec![slot(Weekday::Monday, 8)]),
        ];
        let conflicts = detect_conflicts(&records);
        assert_eq!(conflicts.len(), 1);

        let c = &conflicts[0];
        assert_eq!(c.kind, ResourceKind::Teacher);
        assert_eq!(c.resource_id, 1);
        assert_eq!(c.first_class, "A");
        assert_eq!(c.second_class, "B");
        assert_eq!(c.slot, slot(Weekday::Monday, 8));
    }

    #[test]
    fn test_room_double_booking() {
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Tuesday, 9)]),
            record("B", 2, 10, vec![slot(Weekday::Tuesday, 9)]),
        ];
        let conflicts = detect_conflicts(&records);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ResourceKind::Room);
        assert_eq!(conflicts[0].resource_id, 10);
    }

    #[test]
    fn test_one_conflict_per_overlapping_pair() {
        // Same teacher AND same room at the same time → two conflicts
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Monday, 8)]),
            record("B", 1, 10, vec![slot(Weekday::Monday, 8)]),
        ];
        let conflicts = detect_conflicts(&records);
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.iter().any(|c| c.kind == ResourceKind::Teacher));
        assert!(conflicts.iter().any(|c| c.kind == ResourceKind::Room));
    }

    #[test]
    fn test_third_occupant_conflicts_with_first() {
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Friday, 14)]),
            record("B", 1, 11, vec![slot(Weekday::Friday, 14)]),
            record("C", 1, 12, vec![slot(Weekday::Friday, 14)]),
        ];
        let conflicts = detect_conflicts(&records);
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.iter().all(|c| c.first_class == "A"));
    }

    #[test]
    fn test_same_time_different_day_is_clean() {
        let records = vec![
            record("A", 1, 10, vec![slot(Weekday::Monday, 8)]),
            record("B", 1, 10, vec![slot(Weekday::Tuesday, 8)]),
        ];
        assert!(detect_conflicts(&records).is_empty());
    }

    #[test]
    fn test_display_message() {
        let records = vec![
            record("ALG-A-001", 1, 10, vec![slot(Weekday::Monday, 8)]),
            record("GEO-A-002", 1, 11, vec![slot(Weekday::Monday, 8)]),
        ];
        let message = detect_conflicts(&records)[0].to_string();
        assert_eq!(
            message,
            "Teacher T1 has conflicting schedules on Monday at 08:00-09:00 (ALG-A-001, GEO-A-002)"
        );
    }
}
