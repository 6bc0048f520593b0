//! Resource matching: picking one teacher and one room for a subject.
//!
//! Matching is a pluggable strategy behind [`MatchingStrategy`], so a
//! curriculum-wide load balancer or a bin-packing room assigner can be
//! substituted without touching the allocator or conflict logic. The
//! default is a greedy heuristic: explicit preferences win, then the
//! least-loaded qualified teacher and the smallest room that still fits.

use std::fmt::Debug;

use tracing::debug;

use crate::models::{Room, Subject, Teacher};
use crate::repository::Repository;
use crate::request::Preferences;

/// Picks resources for one subject. Returning `None` means the subject
/// cannot be scheduled; the generator reports it as a conflict message.
pub trait MatchingStrategy: Debug {
    /// Strategy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Selects a teacher qualified for the subject, or `None` if no
    /// qualified teacher exists.
    fn select_teacher(
        &self,
        repo: &dyn Repository,
        subject: &Subject,
        prefs: &Preferences,
    ) -> Option<Teacher>;

    /// Selects a room seating `student_count`, or `None` if no room
    /// has sufficient capacity.
    fn select_room(
        &self,
        repo: &dyn Repository,
        student_count: u32,
        prefs: &Preferences,
    ) -> Option<Room>;
}

/// Default greedy matcher.
///
/// Teacher: first preference hit in preference order, else the qualified
/// teacher with the fewest assigned classes (ties keep encounter order).
/// Room: first preference hit that fits, else the smallest-capacity room
/// that fits (minimizes wasted seats).
#[derive(Debug, Clone, Default)]
pub struct LeastLoadedMatcher;

impl LeastLoadedMatcher {
    /// Creates the default matcher.
    pub fn new() -> Self {
        Self
    }
}

impl MatchingStrategy for LeastLoadedMatcher {
    fn name(&self) -> &'static str {
        "least-loaded"
    }

    fn select_teacher(
        &self,
        repo: &dyn Repository,
        subject: &Subject,
        prefs: &Preferences,
    ) -> Option<Teacher> {
        let qualified = repo.find_teachers_by_subject(subject.id);
        if qualified.is_empty() {
            return None;
        }

        if let Some(preferred) = &prefs.preferred_teachers {
            for &wanted in preferred {
                if let Some(teacher) = qualified.iter().find(|t| t.id == wanted) {
                    debug!(teacher = teacher.id, subject = subject.id, "preferred teacher matched");
                    return Some(teacher.clone());
                }
            }
        }

        // Least currently-assigned classes; min_by_key keeps the first
        // minimum, preserving encounter order on ties.
        qualified
            .into_iter()
            .min_by_key(|t| repo.find_classes_by_teacher(t.id).len())
    }

    fn select_room(
        &self,
        repo: &dyn Repository,
        student_count: u32,
        prefs: &Preferences,
    ) -> Option<Room> {
        let candidates = repo.find_rooms_by_capacity(student_count);
        if candidates.is_empty() {
            return None;
        }

        if let Some(preferred) = &prefs.preferred_rooms {
            for &wanted in preferred {
                if let Some(room) = candidates.iter().find(|r| r.id == wanted) {
                    debug!(room = room.id, "preferred room matched");
                    return Some(room.clone());
                }
            }
        }

        candidates.into_iter().min_by_key(|r| r.capacity)
    }
}
