//! Teacher domain model.

use chrono::{DateTime, Utc};
use registrar_core::AppResult;
use serde::Serialize;
use std::fmt;

use crate::identity::{Identity, NewPerson, Person};
use crate::ids::CourseId;

#[derive(Debug, Clone, Serialize)]
pub struct Teacher {
    pub person: Person,
    pub specialty: String,
    pub hired_at: DateTime<Utc>,
    courses: Vec<CourseId>,
}

impl Teacher {
    pub fn new(dto: NewPerson, specialty: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            person: dto.into_person()?,
            specialty: specialty.into(),
            hired_at: Utc::now(),
            courses: Vec::new(),
        })
    }

    /// Assigned courses, in assignment order.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Teacher side of an assignment. Returns `false` if already assigned.
    pub fn add_course(&mut self, course: CourseId) -> bool {
        if self.courses.contains(&course) {
            return false;
        }
        self.courses.push(course);
        true
    }
}

impl Identity for Teacher {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
