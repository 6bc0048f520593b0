//! Time primitives: weekdays, clock times, and class time slots.
//!
//! # Time Model
//! Clock times are minutes since midnight, displayed and serialized in
//! "HH:MM" 24-hour form. Slots are half-open intervals `[start, end)` on
//! a single weekday — a weekly recurring pattern, not calendar dates.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Working days eligible for scheduling (Monday through Friday).
    pub const WORKING: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day name (e.g., "Monday").
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Whether this day is a working day.
    pub fn is_working_day(&self) -> bool {
        Self::WORKING.contains(self)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseTimeError(format!("invalid day: {s}")))
    }
}

/// Error parsing a weekday or clock time from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseTimeError(String);

/// A clock time within a day, minute resolution.
///
/// Ordered chronologically; half-past and quarter-past times are valid
/// (break windows use them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from hour (0-23) and minute (0-59).
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`. Intended for literals;
    /// use [`TimeOfDay::from_str`] for untrusted input.
    pub const fn new(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn total_minutes(&self) -> u16 {
        self.minutes
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Minutes from `self` to `later` (0 if `later` is not after `self`).
    pub fn minutes_until(&self, later: TimeOfDay) -> u16 {
        later.minutes.saturating_sub(self.minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Parses "HH:MM" (24-hour). A single-digit hour is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(format!("invalid time format: {s}, expected HH:MM"));
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        if hour > 23 || minute > 59 {
            return Err(err());
        }
        Ok(TimeOfDay::new(hour, minute))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Business hours lower bound (07:00).
pub const BUSINESS_OPEN: TimeOfDay = TimeOfDay::new(7, 0);
/// Business hours upper bound (22:00).
pub const BUSINESS_CLOSE: TimeOfDay = TimeOfDay::new(22, 0);

/// A weekly recurring class meeting time: one day, one `[start, end)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start: TimeOfDay,
    /// End time (exclusive).
    pub end: TimeOfDay,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { day, start, end }
    }

    /// Slot length in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.start.minutes_until(self.end)) / 60.0
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// Whether two slots claim the same day with intersecting time ranges.
    ///
    /// Back-to-back slots (one ends exactly when the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Whether the slot falls inside business hours (07:00-22:00).
    pub fn is_within_business_hours(&self) -> bool {
        self.start >= BUSINESS_OPEN && self.end <= BUSINESS_CLOSE
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_roundtrip() {
        for day in Weekday::ALL {
            let parsed: Weekday = day.name().parse().unwrap();
            assert_eq!(parsed, day);
        }
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_working_days() {
        assert!(Weekday::Wednesday.is_working_day());
        assert!(!Weekday::Saturday.is_working_day());
        assert_eq!(Weekday::WORKING.len(), 5);
    }

    #[test]
    fn test_time_of_day_parse() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "09:30");

        // Single-digit hour accepted
        let t2: TimeOfDay = "7:05".parse().unwrap();
        assert_eq!(t2, TimeOfDay::new(7, 5));

        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("1200".parse::<TimeOfDay>().is_err());
        assert!("12:0".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_of_day_ordering() {
        assert!(TimeOfDay::new(8, 0) < TimeOfDay::new(8, 30));
        assert!(TimeOfDay::new(17, 0) < TimeOfDay::new(17, 1));
        assert_eq!(TimeOfDay::new(9, 0).minutes_until(TimeOfDay::new(10, 30)), 90);
        assert_eq!(TimeOfDay::new(10, 0).minutes_until(TimeOfDay::new(9, 0)), 0);
    }

    #[test]
    fn test_slot_duration() {
        let slot = TimeSlot::new(Weekday::Monday, TimeOfDay::new(9, 0), TimeOfDay::new(10, 30));
        assert!((slot.duration_hours() - 1.5).abs() < 1e-10);
        assert_eq!(slot.duration_minutes(), 90);
    }

    #[test]
    fn test_slot_overlap() {
        let a = TimeSlot::new(Weekday::Monday, TimeOfDay::new(9, 0), TimeOfDay::new(11, 0));
        let b = TimeSlot::new(Weekday::Monday, TimeOfDay::new(10, 0), TimeOfDay::new(12, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Back-to-back: no overlap
        let c = TimeSlot::new(Weekday::Monday, TimeOfDay::new(11, 0), TimeOfDay::new(12, 0));
        assert!(!a.overlaps(&c));

        // Same time, different day: no overlap
        let d = TimeSlot::new(Weekday::Tuesday, TimeOfDay::new(9, 0), TimeOfDay::new(11, 0));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_business_hours() {
        let ok = TimeSlot::new(Weekday::Monday, TimeOfDay::new(7, 0), TimeOfDay::new(22, 0));
        assert!(ok.is_within_business_hours());

        let early = TimeSlot::new(Weekday::Monday, TimeOfDay::new(6, 0), TimeOfDay::new(8, 0));
        assert!(!early.is_within_business_hours());
    }

    #[test]
    fn test_time_slot_serde() {
        let slot = TimeSlot::new(Weekday::Friday, TimeOfDay::new(8, 0), TimeOfDay::new(9, 0));
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"Friday\""));
        assert!(json.contains("\"08:00\""));

        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
