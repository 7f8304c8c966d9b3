//! # Registrar
//!
//! In-memory academic records: students, teachers, courses, attendance and
//! grades, plus the metrics derived from them.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── state.rs          # Registry: entity arenas and record sequences
//! └── modules/          # Feature modules
//!     ├── students/     # Creation, enrollment, student metrics
//!     ├── teachers/     # Creation, course assignment, academic load
//!     ├── courses/      # Creation, roster, course metrics
//!     ├── attendance/   # Attendance recording and status changes
//!     ├── grades/       # Grade recording
//!     └── reports/      # Summaries and grouped report data
//! ```
//!
//! Each feature module exposes a `service.rs` with a stateless service whose
//! associated functions take the [`Registry`] explicitly.
//!
//! ## Relationships
//!
//! Entities refer to each other by typed id. Enrollment (student and course)
//! and assignment (teacher and course) are updated on both sides in a single
//! call. Every attendance and grade record is stored once and listed under
//! both its student and its course.
//!
//! ## Metrics
//!
//! Student and course metrics are intentionally computed differently:
//!
//! | Metric | Student | Course |
//! |--------|---------|--------|
//! | Average grade | mean of per-course means of `value * weight` | flat mean of values |
//! | Attendance rate | Present + Justified | Present only |
//!
//! ## Quick Start
//!
//! ```ignore
//! use registrar::{Registry, modules::{CourseService, StudentService}};
//! use registrar_models::{NewCourse, NewPerson};
//!
//! let mut reg = Registry::new();
//! let student = StudentService::create(&mut reg, NewPerson::new("12345678-9", "Juan", "Pérez"))?;
//! let course = CourseService::create(&mut reg, NewCourse::new("MAT101", "Mathematics I", "1st Year"))?;
//! StudentService::enroll(&mut reg, student, course)?;
//! ```
//!
//! ## Modules
//!
//! - [`modules`]: Feature services and report models
//! - [`state`]: The [`Registry`] aggregate

pub mod modules;
pub mod state;

pub use state::Registry;

// Re-export workspace crates for convenience
pub use registrar_config;
pub use registrar_core;
pub use registrar_models;
