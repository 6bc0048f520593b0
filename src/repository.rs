//! Repository collaborator: entity lookups and the class id source.
//!
//! The scheduling core never owns entity storage. It consumes query
//! results through the [`Repository`] trait and writes back the classes
//! it creates. Lookups returning `None`/empty are ordinary negative
//! results, not errors.
//!
//! Concurrency is the implementor's concern: the core assumes a
//! monotonically increasing id source and read-after-write visibility
//! within one generation run (a teacher's class count must reflect
//! classes added earlier in the same run).

use crate::models::{
    ClassEntity, ClassId, Curriculum, CurriculumId, Room, RoomId, Subject, SubjectId, Teacher,
    TeacherId,
};

/// Lookup and write operations the scheduler needs from storage.
pub trait Repository {
    /// Fetches a curriculum by id.
    fn get_curriculum(&self, id: CurriculumId) -> Option<Curriculum>;

    /// Fetches a subject by id.
    fn get_subject(&self, id: SubjectId) -> Option<Subject>;

    /// Fetches a teacher by id.
    fn get_teacher(&self, id: TeacherId) -> Option<Teacher>;

    /// Fetches a room by id.
    fn get_room(&self, id: RoomId) -> Option<Room>;

    /// Teachers qualified for a subject, in stable encounter order.
    fn find_teachers_by_subject(&self, subject_id: SubjectId) -> Vec<Teacher>;

    /// Rooms seating at least `min_capacity`, in stable encounter order.
    fn find_rooms_by_capacity(&self, min_capacity: u32) -> Vec<Room>;

    /// Classes currently assigned to a teacher (for load counting).
    fn find_classes_by_teacher(&self, teacher_id: TeacherId) -> Vec<ClassEntity>;

    /// Allocates the next class id. Monotonically increasing.
    fn next_id(&mut self) -> ClassId;

    /// Stores a newly created class.
    fn add_class(&mut self, class: ClassEntity);
}

/// Vec-backed repository for tests and embedding.
///
/// Entities keep insertion order, so query results have a deterministic
/// encounter order (the matcher's documented tie-break).
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    subjects: Vec<Subject>,
    teachers: Vec<Teacher>,
    rooms: Vec<Room>,
    curricula: Vec<Curriculum>,
    classes: Vec<ClassEntity>,
    next_id: ClassId,
}

impl InMemoryRepository {
    /// Creates an empty repository with the id counter at 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Adds a subject.
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Adds a teacher.
    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    /// Adds a room.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Adds a curriculum.
    pub fn add_curriculum(&mut self, curriculum: Curriculum) {
        self.curricula.push(curriculum);
    }

    /// All stored classes.
    pub fn classes(&self) -> &[ClassEntity] {
        &self.classes
    }

    /// Fetches a class by id.
    pub fn get_class(&self, id: ClassId) -> Option<&ClassEntity> {
        self.classes.iter().find(|c| c.id == id)
    }
}

impl Repository for InMemoryRepository {
    fn get_curriculum(&self, id: CurriculumId) -> Option<Curriculum> {
        self.curricula.iter().find(|c| c.id == id).cloned()
    }

    fn get_subject(&self, id: SubjectId) -> Option<Subject> {
        self.subjects.iter().find(|s| s.id == id).cloned()
    }

    fn get_teacher(&self, id: TeacherId) -> Option<Teacher> {
        self.teachers.iter().find(|t| t.id == id).cloned()
    }

    fn get_room(&self, id: RoomId) -> Option<Room> {
        self.rooms.iter().find(|r| r.id == id).cloned()
    }

    fn find_teachers_by_subject(&self, subject_id: SubjectId) -> Vec<Teacher> {
        self.teachers
            .iter()
            .filter(|t| t.can_teach(subject_id))
            .cloned()
            .collect()
    }

    fn find_rooms_by_capacity(&self, min_capacity: u32) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|r| r.fits(min_capacity))
            .cloned()
            .collect()
    }

    fn find_classes_by_teacher(&self, teacher_id: TeacherId) -> Vec<ClassEntity> {
        self.classes
            .iter()
            .filter(|c| c.teacher_id == teacher_id)
            .cloned()
            .collect()
    }

    fn next_id(&mut self) -> ClassId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn add_class(&mut self, class: ClassEntity) {
        self.classes.push(class);
    }
}
