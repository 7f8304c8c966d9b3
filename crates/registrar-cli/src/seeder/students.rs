//! Student seeding.
//!
//! Students and their records are generated in parallel, then registered one
//! by one since the registry is not shared between threads.

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::name::en::*;
use rand::Rng;
use rayon::prelude::*;
use registrar::Registry;
use registrar::modules::{AttendanceService, GradeService, StudentService};
use registrar_core::AppResult;
use registrar_models::{AttendanceStatus, CourseId, EvaluationKind, NewGrade, NewPerson, StudentId};
use std::time::Instant;
use tracing::info;

use super::models::{AttendanceSeed, GradeSeed, SeedConfig, StudentSeed};

const KINDS: [EvaluationKind; 6] = [
    EvaluationKind::Test,
    EvaluationKind::Homework,
    EvaluationKind::Project,
    EvaluationKind::Exam,
    EvaluationKind::Assignment,
    EvaluationKind::Presentation,
];

/// Generates `config.num_students` students with records for `course_count`
/// courses.
pub fn generate_students(config: &SeedConfig, course_count: usize) -> Vec<StudentSeed> {
    (0..config.num_students)
        .into_par_iter()
        .map(|idx| generate_student(config, course_count, idx))
        .collect()
}

fn generate_student(config: &SeedConfig, course_count: usize, idx: usize) -> StudentSeed {
    let mut rng = rand::thread_rng();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let email = format!(
        "{}.{}+{}@example.com",
        email_part(&first_name),
        email_part(&last_name),
        idx
    );
    let birth_date = config.last_session - Duration::days(rng.gen_range(14 * 365..19 * 365));

    let sessions = config.records_per_course.sessions;
    let mut attendance = Vec::with_capacity(config.attendance_per_student(course_count));
    let mut grades = Vec::with_capacity(config.grades_per_student(course_count));
    for course in 0..course_count {
        for week in (0..sessions).rev() {
            attendance.push(AttendanceSeed {
                course,
                date: session_date(config.last_session, week),
                status: random_status(&mut rng),
            });
        }
        for _ in 0..config.records_per_course.grades {
            grades.push(GradeSeed {
                course,
                value: f64::from(rng.gen_range(10..=70_u32)) / 10.0,
                kind: KINDS[rng.gen_range(0..KINDS.len())],
                weight: 1.0,
            });
        }
    }

    StudentSeed {
        code: format!("{}-{}", 20_000_000 + idx, idx % 10),
        first_name,
        last_name,
        birth_date,
        email,
        attendance,
        grades,
    }
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

fn session_date(last_session: NaiveDate, weeks_back: usize) -> NaiveDate {
    last_session - Duration::weeks(weeks_back as i64)
}

fn random_status<R: Rng>(rng: &mut R) -> AttendanceStatus {
    match rng.gen_range(0..100) {
        0..=69 => AttendanceStatus::Present,
        70..=84 => AttendanceStatus::Absent,
        85..=94 => AttendanceStatus::Late,
        _ => AttendanceStatus::Justified,
    }
}

/// Registers the generated students, enrolls each in every course and
/// records their attendance and grades.
pub fn seed_students(
    reg: &mut Registry,
    seeds: Vec<StudentSeed>,
    courses: &[CourseId],
) -> AppResult<Vec<StudentId>> {
    let start_time = Instant::now();
    let mut ids = Vec::with_capacity(seeds.len());

    for seed in seeds {
        let dto = NewPerson::new(seed.code, seed.first_name, seed.last_name)
            .born(seed.birth_date)
            .email(seed.email);
        let student = StudentService::create(reg, dto)?;

        for course in courses {
            StudentService::enroll(reg, student, *course)?;
        }
        for record in seed.attendance {
            AttendanceService::record(reg, student, courses[record.course], record.date, record.status)?;
        }
        for grade in seed.grades {
            GradeService::record(
                reg,
                NewGrade::new(student, courses[grade.course], grade.value)
                    .kind(grade.kind)
                    .weight(grade.weight),
            )?;
        }
        ids.push(student);
    }

    info!(
        students = ids.len(),
        elapsed = ?start_time.elapsed(),
        "Students seeded"
    );
    Ok(ids)
}
