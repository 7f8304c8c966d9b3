//! # Registrar Models
//!
//! Domain models and aggregation rules for Registrar.
//!
//! # Modules
//!
//! - [`ids`]: Typed entity and record identifiers
//! - [`identity`]: Personal identity shared by students and teachers
//! - [`students`]: Student model and enrollment status
//! - [`teachers`]: Teacher model
//! - [`courses`]: Course model and creation DTO
//! - [`attendance`]: Attendance records and attendance-rate rules
//! - [`grades`]: Grade records and grade-average rules
//!
//! # Example
//!
//! ```ignore
//! use registrar_models::{Identity, NewPerson, Student};
//!
//! let student = Student::new(NewPerson::new("12345678-9", "Juan", "Pérez"))?;
//! assert!(student.is_active());
//! println!("{}", student.display_name());
//! ```

pub mod attendance;
pub mod courses;
pub mod grades;
pub mod identity;
pub mod ids;
pub mod students;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use attendance::{
    AttendanceRecord, AttendanceStatus, course_attendance_rate, student_attendance_rate,
};
pub use courses::{Course, NewCourse};
pub use grades::{
    EvaluationKind, GradeRecord, NewGrade, course_average_grade, student_average_grade,
};
pub use identity::{Identity, NewPerson, Person};
pub use ids::{AttendanceId, CourseId, GradeId, StudentId, TeacherId};
pub use students::{Student, StudentStatus};
pub use teachers::Teacher;
