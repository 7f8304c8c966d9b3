//! Seeding module for populating a registry with sample data.
//!
//! # Module Structure
//!
//! - [`catalogue`] - Fixed courses and teachers
//! - [`students`] - Student generation, enrollment and record registration
//! - [`models`] - Data structures for seeding configuration
//!
//! # Usage
//!
//! ```ignore
//! use registrar_cli::seeder::{seed_registry, SeedConfig};
//!
//! let registry = seed_registry(RegistryConfig::default(), SeedConfig::new(10))?;
//! ```
//!
//! # Performance
//!
//! - Parallel data generation using Rayon
//! - Registration stays sequential; the registry is single-writer

pub mod catalogue;
pub mod models;
pub mod students;

pub use catalogue::{COURSES, Catalogue, TEACHERS, seed_catalogue};
pub use models::{RecordsPerCourse, SeedConfig};

use registrar::Registry;
use registrar_config::RegistryConfig;
use registrar_core::AppResult;
use std::time::Instant;
use tracing::info;

/// Builds a registry with the sample catalogue plus generated students.
pub fn seed_registry(registry_config: RegistryConfig, config: SeedConfig) -> AppResult<Registry> {
    let start_time = Instant::now();
    info!(
        students = config.num_students,
        sessions = config.records_per_course.sessions,
        grades = config.records_per_course.grades,
        "Starting seeding"
    );

    let mut reg = Registry::with_config(registry_config);

    // Step 1: Courses and teachers
    let catalogue = seed_catalogue(&mut reg)?;

    // Step 2: Generate students in parallel
    let seeds = students::generate_students(&config, catalogue.courses.len());

    // Step 3: Register, enroll and record
    students::seed_students(&mut reg, seeds, &catalogue.courses)?;

    info!(
        students = reg.students().count(),
        attendance = reg.attendance_count(),
        grades = reg.grade_count(),
        elapsed = ?start_time.elapsed(),
        "Seeding complete"
    );
    Ok(reg)
}
