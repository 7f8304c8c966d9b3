use chrono::{DateTime, NaiveDate, Utc};
use registrar_models::{
    AttendanceId, AttendanceStatus, CourseId, EvaluationKind, GradeId, StudentId, StudentStatus,
};
use serde::Serialize;

/// One line of the student overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub id: StudentId,
    pub code: String,
    pub full_name: String,
    pub enrollment_number: String,
    pub status: StudentStatus,
    pub course_count: usize,
    pub attendance_rate: f64,
    pub average_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    pub id: AttendanceId,
    pub date: NaiveDate,
    pub student: StudentId,
    pub student_name: String,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

/// Attendance for one course, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAttendanceReport {
    pub course: CourseId,
    pub code: String,
    pub name: String,
    pub average_attendance: f64,
    pub entries: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceReport {
    pub courses: Vec<CourseAttendanceReport>,
    pub total_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub id: GradeId,
    pub value: f64,
    pub weight: f64,
    pub kind: EvaluationKind,
    pub passed: bool,
    pub recorded_at: DateTime<Utc>,
}

/// A student's grades in one course, newest first, with the flat mean of
/// their values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGradeGroup {
    pub course: CourseId,
    pub code: String,
    pub name: String,
    pub average: f64,
    pub grades: Vec<GradeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentGradeReport {
    pub student: StudentId,
    pub code: String,
    pub full_name: String,
    pub average_grade: f64,
    pub courses: Vec<CourseGradeGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub students: Vec<StudentGradeReport>,
    pub total_grades: usize,
}
