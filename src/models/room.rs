//! Room model.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A room with a seating capacity and equipment tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Room name (e.g., "B-204").
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Building or wing.
    pub location: String,
    /// Equipment tags (e.g., "projector", "lab-benches").
    pub equipment: Vec<String>,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            location: String::new(),
            equipment: Vec::new(),
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Adds an equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Whether the room carries a given equipment tag.
    pub fn has_equipment(&self, tag: &str) -> bool {
        self.equipment.iter().any(|e| e == tag)
    }

    /// Whether the room seats at least `count` students.
    pub fn fits(&self, count: u32) -> bool {
        self.capacity >= count
    }
}
