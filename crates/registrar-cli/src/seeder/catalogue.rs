//! Fixed sample catalogue: four courses and two teachers.

use anyhow::anyhow;
use registrar::Registry;
use registrar::modules::{CourseService, TeacherService};
use registrar_core::{AppError, AppResult};
use registrar_models::{CourseId, NewCourse, NewPerson, TeacherId};
use tracing::info;

use super::models::{CourseSeed, TeacherSeed};

pub const COURSES: [CourseSeed; 4] = [
    CourseSeed {
        code: "MAT101",
        name: "Mathematics I",
        level: "1st Year",
    },
    CourseSeed {
        code: "LEN101",
        name: "Language",
        level: "1st Year",
    },
    CourseSeed {
        code: "HIS201",
        name: "History",
        level: "2nd Year",
    },
    CourseSeed {
        code: "FIS301",
        name: "Physics",
        level: "3rd Year",
    },
];

pub const TEACHERS: [TeacherSeed; 2] = [
    TeacherSeed {
        code: "12345678-9",
        first_name: "Roberto",
        last_name: "González",
        specialty: "Mathematics",
        course: "MAT101",
    },
    TeacherSeed {
        code: "98765432-1",
        first_name: "María",
        last_name: "Silva",
        specialty: "Language",
        course: "LEN101",
    },
];

/// Ids of the seeded catalogue, in declaration order.
pub struct Catalogue {
    pub courses: Vec<CourseId>,
    pub teachers: Vec<TeacherId>,
}

/// Creates the catalogue courses, then the teachers with their assignments.
pub fn seed_catalogue(reg: &mut Registry) -> AppResult<Catalogue> {
    let courses = COURSES
        .iter()
        .map(|seed| CourseService::create(reg, NewCourse::new(seed.code, seed.name, seed.level)))
        .collect::<AppResult<Vec<_>>>()?;

    let mut teachers = Vec::with_capacity(TEACHERS.len());
    for seed in &TEACHERS {
        let teacher = TeacherService::create(
            reg,
            NewPerson::new(seed.code, seed.first_name, seed.last_name),
            seed.specialty,
        )?;

        let course = COURSES
            .iter()
            .position(|c| c.code == seed.course)
            .map(|idx| courses[idx])
            .ok_or_else(|| AppError::argument(anyhow!("Unknown catalogue course {}", seed.course)))?;
        TeacherService::assign_course(reg, teacher, course)?;
        teachers.push(teacher);
    }

    info!(
        courses = courses.len(),
        teachers = teachers.len(),
        "Catalogue seeded"
    );
    Ok(Catalogue { courses, teachers })
}
