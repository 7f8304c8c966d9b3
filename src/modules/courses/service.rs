use registrar_core::AppResult;
use registrar_models::{
    AttendanceRecord, Course, CourseId, GradeRecord, NewCourse, Student, StudentId, Teacher,
    course_attendance_rate, course_average_grade,
};
use tracing::{debug, instrument};

use crate::state::Registry;

pub struct CourseService;

impl CourseService {
    /// Creates a course. Unset credits take the registry's default.
    #[instrument(skip(reg))]
    pub fn create(reg: &mut Registry, dto: NewCourse) -> AppResult<CourseId> {
        let course = Course::new(dto, reg.config().default_credits)?;
        let id = reg.insert_course(course);

        debug!(%id, "Course created");
        Ok(id)
    }

    /// Course-side enrollment. Same link as `StudentService::enroll`.
    #[instrument(skip(reg))]
    pub fn add_student(reg: &mut Registry, course: CourseId, student: StudentId) -> AppResult<()> {
        if reg.link_enrollment(student, course)? {
            debug!("Student added to roster");
        }
        Ok(())
    }

    #[instrument(skip(reg))]
    pub fn remove_student(
        reg: &mut Registry,
        course: CourseId,
        student: StudentId,
    ) -> AppResult<()> {
        if reg.unlink_enrollment(student, course)? {
            debug!("Student removed from roster");
        }
        Ok(())
    }

    /// Enrolled students in enrollment order.
    pub fn roster(reg: &Registry, id: CourseId) -> AppResult<Vec<&Student>> {
        reg.course(id)?
            .students()
            .iter()
            .map(|student| reg.student(*student))
            .collect()
    }

    pub fn teacher(reg: &Registry, id: CourseId) -> AppResult<Option<&Teacher>> {
        reg.course(id)?
            .teacher()
            .map(|teacher| reg.teacher(teacher))
            .transpose()
    }

    pub fn attendance_records(reg: &Registry, id: CourseId) -> AppResult<Vec<&AttendanceRecord>> {
        let course = reg.course(id)?;
        Ok(reg.attendance_for(course.attendance()).collect())
    }

    pub fn grade_records(reg: &Registry, id: CourseId) -> AppResult<Vec<&GradeRecord>> {
        let course = reg.course(id)?;
        Ok(reg.grades_for(course.grades()).collect())
    }

    /// Flat mean of grade values, weights ignored. `0.0` without grades.
    pub fn average_grade(reg: &Registry, id: CourseId) -> AppResult<f64> {
        let course = reg.course(id)?;
        Ok(course_average_grade(reg.grades_for(course.grades())))
    }

    /// Percentage of records marked Present. Justified does not count here.
    pub fn average_attendance(reg: &Registry, id: CourseId) -> AppResult<f64> {
        let course = reg.course(id)?;
        Ok(course_attendance_rate(reg.attendance_for(course.attendance())))
    }
}
