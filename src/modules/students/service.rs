use registrar_models::{
    AttendanceRecord, Course, CourseId, GradeRecord, NewPerson, Person, Student, StudentId,
    StudentStatus, student_attendance_rate, student_average_grade,
};
use registrar_core::AppResult;
use tracing::{debug, instrument};

use crate::state::Registry;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(reg, dto), fields(code = %dto.code))]
    pub fn create(reg: &mut Registry, dto: NewPerson) -> AppResult<StudentId> {
        let student = Student::new(dto)?;
        let enrollment_number = student.enrollment_number.clone();
        let id = reg.insert_student(student);

        debug!(%id, %enrollment_number, "Student created");
        Ok(id)
    }

    /// Enrolls `student` in `course`, updating the student's course list and
    /// the course roster together. Enrolling twice is a no-op.
    #[instrument(skip(reg))]
    pub fn enroll(reg: &mut Registry, student: StudentId, course: CourseId) -> AppResult<()> {
        if reg.link_enrollment(student, course)? {
            debug!("Student enrolled");
        } else {
            debug!("Student already enrolled, skipping");
        }
        Ok(())
    }

    #[instrument(skip(reg))]
    pub fn set_status(reg: &mut Registry, id: StudentId, status: StudentStatus) -> AppResult<()> {
        reg.student_mut(id)?.status = status;
        Ok(())
    }

    /// Mutable access to the personal fields. Links and records stay owned by
    /// the registry.
    pub fn person_mut(reg: &mut Registry, id: StudentId) -> AppResult<&mut Person> {
        Ok(&mut reg.student_mut(id)?.person)
    }

    pub fn is_active(reg: &Registry, id: StudentId) -> AppResult<bool> {
        Ok(reg.student(id)?.is_active())
    }

    pub fn courses(reg: &Registry, id: StudentId) -> AppResult<Vec<&Course>> {
        let student = reg.student(id)?;
        student
            .courses()
            .iter()
            .map(|course| reg.course(*course))
            .collect()
    }

    /// Every attendance record of the student across all courses, in
    /// recording order.
    pub fn attendance_records(reg: &Registry, id: StudentId) -> AppResult<Vec<&AttendanceRecord>> {
        let student = reg.student(id)?;
        Ok(reg.attendance_for(student.attendance()).collect())
    }

    pub fn grade_records(reg: &Registry, id: StudentId) -> AppResult<Vec<&GradeRecord>> {
        let student = reg.student(id)?;
        Ok(reg.grades_for(student.grades()).collect())
    }

    /// Mean of per-course weighted means. `0.0` without grades.
    pub fn average_grade(reg: &Registry, id: StudentId) -> AppResult<f64> {
        let student = reg.student(id)?;
        Ok(student_average_grade(reg.grades_for(student.grades())))
    }

    /// Percentage of records marked Present or Justified. `0.0` without records.
    pub fn attendance_rate(reg: &Registry, id: StudentId) -> AppResult<f64> {
        let student = reg.student(id)?;
        Ok(student_attendance_rate(reg.attendance_for(student.attendance())))
    }
}
