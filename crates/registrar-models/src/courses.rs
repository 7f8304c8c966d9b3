//! Course domain model and DTOs.

use registrar_core::{AppResult, not_blank};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::ids::{AttendanceId, GradeId, StudentId, TeacherId};

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    /// Course code, intended unique but not enforced.
    pub code: String,
    pub name: String,
    /// Free-text level label, e.g. "1st Year".
    pub level: String,
    pub credits: u32,
    teacher: Option<TeacherId>,
    students: Vec<StudentId>,
    attendance: Vec<AttendanceId>,
    grades: Vec<GradeId>,
}

/// DTO for creating a course. `credits` falls back to the configured default.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(custom(function = "not_blank"))]
    pub code: String,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub level: String,
    pub credits: Option<u32>,
}

impl NewCourse {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            level: level.into(),
            credits: None,
        }
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }
}

impl Course {
    pub fn new(dto: NewCourse, default_credits: u32) -> AppResult<Self> {
        dto.validate()?;

        Ok(Self {
            code: dto.code,
            name: dto.name,
            level: dto.level,
            credits: dto.credits.unwrap_or(default_credits),
            teacher: None,
            students: Vec::new(),
            attendance: Vec::new(),
            grades: Vec::new(),
        })
    }

    /// The single assigned teacher, if any. Last assignment wins.
    pub fn teacher(&self) -> Option<TeacherId> {
        self.teacher
    }

    pub fn set_teacher(&mut self, teacher: TeacherId) {
        self.teacher = Some(teacher);
    }

    /// Enrolled students, in enrollment order.
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn has_student(&self, student: StudentId) -> bool {
        self.students.contains(&student)
    }

    /// Attendance records for this course across all students.
    pub fn attendance(&self) -> &[AttendanceId] {
        &self.attendance
    }

    /// Grade records for this course across all students.
    pub fn grades(&self) -> &[GradeId] {
        &self.grades
    }

    /// Course side of an enrollment link. Returns `false` if already present.
    pub fn add_student(&mut self, student: StudentId) -> bool {
        if self.students.contains(&student) {
            return false;
        }
        self.students.push(student);
        true
    }

    /// Plain removal; absent students are ignored.
    pub fn remove_student(&mut self, student: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| *s != student);
        self.students.len() != before
    }

    pub fn push_attendance(&mut self, id: AttendanceId) {
        self.attendance.push(id);
    }

    pub fn push_grade(&mut self, id: GradeId) {
        self.grades.push(id);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_defaults_credits() {
        let course = Course::new(NewCourse::new("MAT101", "Mathematics I", "1st Year"), 4).unwrap();
        assert_eq!(course.credits, 4);
        assert_eq!(course.teacher(), None);
        assert!(course.students().is_empty());
        assert_eq!(course.to_string(), "Mathematics I (MAT101)");
    }

    #[test]
    fn test_new_course_explicit_credits() {
        let course =
            Course::new(NewCourse::new("FIS301", "Physics", "3rd Year").credits(6), 4).unwrap();
        assert_eq!(course.credits, 6);
    }

    #[test]
    fn test_new_course_rejects_blank_code_or_name() {
        assert!(Course::new(NewCourse::new("", "Physics", ""), 4)
            .unwrap_err()
            .is_validation());
        assert!(Course::new(NewCourse::new("FIS301", "   ", ""), 4).is_err());
    }

    #[test]
    fn test_level_may_be_empty() {
        assert!(Course::new(NewCourse::new("FIS301", "Physics", ""), 4).is_ok());
    }

    #[test]
    fn test_roster_add_and_remove() {
        let mut course = Course::new(NewCourse::new("HIS201", "History", "2nd Year"), 4).unwrap();
        assert!(course.add_student(StudentId::new(1)));
        assert!(!course.add_student(StudentId::new(1)));
        assert!(course.has_student(StudentId::new(1)));
        assert!(course.remove_student(StudentId::new(1)));
        assert!(!course.remove_student(StudentId::new(1)));
        assert!(course.students().is_empty());
    }

    #[test]
    fn test_last_teacher_wins() {
        let mut course = Course::new(NewCourse::new("LEN101", "Language", "1st Year"), 4).unwrap();
        course.set_teacher(TeacherId::new(0));
        course.set_teacher(TeacherId::new(1));
        assert_eq!(course.teacher(), Some(TeacherId::new(1)));
    }

    #[test]
    fn test_new_course_deserialize() {
        let dto: NewCourse =
            serde_json::from_str(r#"{"code":"QUI401","name":"Chemistry","credits":5}"#).unwrap();
        assert_eq!(dto.level, "");
        assert_eq!(dto.credits, Some(5));
    }
}
