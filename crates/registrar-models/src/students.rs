//! Student domain model.
//!
//! A student carries its identity, enrollment metadata and the ids of the
//! courses and records it takes part in. The links are maintained by the
//! registry, which updates the course side in the same operation.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use registrar_core::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::{Identity, NewPerson, Person};
use crate::ids::{AttendanceId, CourseId, GradeId};

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    Withdrawn,
    Graduated,
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Withdrawn => "Withdrawn",
            Self::Graduated => "Graduated",
        };
        write!(f, "{}", label)
    }
}

/// `"EST" + year + four random digits`. Collisions are not checked.
pub fn generate_enrollment_number(year: i32) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..9999);
    format!("EST{}{}", year, suffix)
}

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub person: Person,
    pub enrollment_number: String,
    pub enrolled_at: DateTime<Utc>,
    pub status: StudentStatus,
    courses: Vec<CourseId>,
    attendance: Vec<AttendanceId>,
    grades: Vec<GradeId>,
}

impl Student {
    pub fn new(dto: NewPerson) -> AppResult<Self> {
        let person = dto.into_person()?;
        let enrolled_at = Utc::now();

        Ok(Self {
            person,
            enrollment_number: generate_enrollment_number(enrolled_at.year()),
            enrolled_at,
            status: StudentStatus::Active,
            courses: Vec::new(),
            attendance: Vec::new(),
            grades: Vec::new(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }

    /// Enrolled courses, in enrollment order.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn is_enrolled_in(&self, course: CourseId) -> bool {
        self.courses.contains(&course)
    }

    /// Attendance records for this student across all courses.
    pub fn attendance(&self) -> &[AttendanceId] {
        &self.attendance
    }

    /// Grade records for this student across all courses.
    pub fn grades(&self) -> &[GradeId] {
        &self.grades
    }

    /// Student side of an enrollment link. Returns `false` if already present.
    pub fn add_course(&mut self, course: CourseId) -> bool {
        if self.courses.contains(&course) {
            return false;
        }
        self.courses.push(course);
        true
    }

    pub fn remove_course(&mut self, course: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| *c != course);
        self.courses.len() != before
    }

    pub fn push_attendance(&mut self, id: AttendanceId) {
        self.attendance.push(id);
    }

    pub fn push_grade(&mut self, id: GradeId) {
        self.grades.push(id);
    }
}

impl Identity for Student {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        Student::new(NewPerson::new("12345678-9", "Juan", "Pérez")).unwrap()
    }

    #[test]
    fn test_new_student_is_active() {
        let s = student();
        assert_eq!(s.status, StudentStatus::Active);
        assert!(s.is_active());
        assert!(s.courses().is_empty());
        assert!(s.attendance().is_empty());
        assert!(s.grades().is_empty());
    }

    #[test]
    fn test_new_student_rejects_blank_identity() {
        assert!(Student::new(NewPerson::new("", "Juan", "Pérez")).is_err());
        assert!(Student::new(NewPerson::new("1-9", "", "Pérez")).is_err());
        assert!(Student::new(NewPerson::new("1-9", "Juan", " ")).is_err());
    }

    #[test]
    fn test_enrollment_number_format() {
        let s = student();
        let expected_prefix = format!("EST{}", s.enrolled_at.year());
        assert!(s.enrollment_number.starts_with(&expected_prefix));
        let suffix = &s.enrollment_number[expected_prefix.len()..];
        assert_eq!(suffix.len(), 4);
        let n: u32 = suffix.parse().unwrap();
        assert!((1000..9999).contains(&n));
    }

    #[test]
    fn test_status_changes_affect_is_active() {
        let mut s = student();
        for status in [
            StudentStatus::Inactive,
            StudentStatus::Withdrawn,
            StudentStatus::Graduated,
        ] {
            s.status = status;
            assert!(!s.is_active());
        }
        s.status = StudentStatus::Active;
        assert!(s.is_active());
    }

    #[test]
    fn test_add_course_is_idempotent() {
        let mut s = student();
        assert!(s.add_course(CourseId::new(0)));
        assert!(!s.add_course(CourseId::new(0)));
        assert!(s.add_course(CourseId::new(1)));
        assert_eq!(s.courses(), &[CourseId::new(0), CourseId::new(1)]);
        assert!(s.remove_course(CourseId::new(0)));
        assert!(!s.remove_course(CourseId::new(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(student().to_string(), "Juan Pérez (12345678-9)");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&StudentStatus::Withdrawn).unwrap();
        assert_eq!(json, r#""withdrawn""#);
    }
}
