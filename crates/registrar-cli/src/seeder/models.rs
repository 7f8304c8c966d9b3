//! Data models for seeding configuration.

use chrono::NaiveDate;
use registrar_models::{AttendanceStatus, EvaluationKind};

/// Fixed course in the sample catalogue.
pub struct CourseSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub level: &'static str,
}

/// Fixed teacher in the sample catalogue, assigned to `course`.
pub struct TeacherSeed {
    pub code: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub specialty: &'static str,
    pub course: &'static str,
}

/// Generated student with the records to register once enrolled.
pub struct StudentSeed {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub attendance: Vec<AttendanceSeed>,
    pub grades: Vec<GradeSeed>,
}

/// Attendance to record; `course` indexes the seeded course list.
pub struct AttendanceSeed {
    pub course: usize,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

pub struct GradeSeed {
    pub course: usize,
    pub value: f64,
    pub kind: EvaluationKind,
    pub weight: f64,
}

/// Records generated per student and course.
#[derive(Clone)]
pub struct RecordsPerCourse {
    pub sessions: usize,
    pub grades: usize,
}

impl Default for RecordsPerCourse {
    fn default() -> Self {
        Self {
            sessions: 10, // one per week
            grades: 3,
        }
    }
}

/// Complete configuration for seeding a registry.
#[derive(Clone)]
pub struct SeedConfig {
    pub num_students: usize,
    pub records_per_course: RecordsPerCourse,
    /// Date of the most recent session; earlier sessions go back a week each.
    pub last_session: NaiveDate,
}

impl SeedConfig {
    /// Creates a new seed configuration with the specified number of students.
    pub fn new(num_students: usize) -> Self {
        Self {
            num_students,
            records_per_course: RecordsPerCourse::default(),
            last_session: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_records(mut self, records: RecordsPerCourse) -> Self {
        self.records_per_course = records;
        self
    }

    pub fn with_last_session(mut self, date: NaiveDate) -> Self {
        self.last_session = date;
        self
    }

    /// Attendance records generated for each student.
    pub fn attendance_per_student(&self, courses: usize) -> usize {
        courses * self.records_per_course.sessions
    }

    pub fn grades_per_student(&self, courses: usize) -> usize {
        courses * self.records_per_course.grades
    }
}
