use chrono::NaiveDate;
use registrar::Registry;
use registrar::modules::{AttendanceService, CourseService, StudentService, TeacherService};
use registrar_models::{AttendanceStatus, CourseId, NewCourse, NewPerson, StudentId, TeacherId};
use std::sync::atomic::{AtomicUsize, Ordering};

static CODE_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[allow(dead_code)]
pub const EPSILON: f64 = 1e-4;

/// Generate a unique identity code for tests
#[allow(dead_code)]
pub fn generate_unique_code() -> String {
    let n = CODE_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}", 30_000_000 + n, n % 10)
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} to be within {} of {}",
        actual,
        EPSILON,
        expected
    );
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[allow(dead_code)]
pub fn create_test_student(reg: &mut Registry, first_name: &str, last_name: &str) -> StudentId {
    StudentService::create(
        reg,
        NewPerson::new(generate_unique_code(), first_name, last_name),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn create_test_teacher(reg: &mut Registry, first_name: &str, specialty: &str) -> TeacherId {
    TeacherService::create(
        reg,
        NewPerson::new(generate_unique_code(), first_name, "Teacher"),
        specialty,
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn create_test_course(reg: &mut Registry, code: &str, name: &str) -> CourseId {
    CourseService::create(reg, NewCourse::new(code, name, "1st Year")).unwrap()
}

/// Records `count` entries of each status, one day apart from 2025-03-01.
#[allow(dead_code)]
pub fn record_attendance(
    reg: &mut Registry,
    student: StudentId,
    course: CourseId,
    statuses: &[(AttendanceStatus, usize)],
) {
    let mut day = date(2025, 3, 1);
    for (status, count) in statuses {
        for _ in 0..*count {
            AttendanceService::record(reg, student, course, day, *status).unwrap();
            day = day.succ_opt().unwrap();
        }
    }
}
