use std::collections::BTreeMap;

use anyhow::anyhow;
use chrono::NaiveDate;
use registrar_config::RegistryConfig;
use registrar_core::{AppError, AppResult, Sequence};
use registrar_models::{
    AttendanceId, AttendanceRecord, Course, CourseId, GradeId, GradeRecord, NewGrade, Student,
    StudentId, Teacher, TeacherId,
};

/// Aggregate root holding every entity and record of one registrar session.
///
/// Entities live in arenas indexed by their typed ids. Records are stored once
/// and referenced by id from both the student and the course they belong to.
/// Only the services in [`crate::modules`] mutate links, and they always touch
/// both sides in the same call.
#[derive(Debug, Default)]
pub struct Registry {
    config: RegistryConfig,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    attendance: BTreeMap<AttendanceId, AttendanceRecord>,
    grades: BTreeMap<GradeId, GradeRecord>,
    attendance_ids: Sequence,
    grade_ids: Sequence,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn students(&self) -> impl Iterator<Item = (StudentId, &Student)> {
        self.students
            .iter()
            .enumerate()
            .map(|(i, s)| (StudentId::new(i), s))
    }

    pub fn teachers(&self) -> impl Iterator<Item = (TeacherId, &Teacher)> {
        self.teachers
            .iter()
            .enumerate()
            .map(|(i, t)| (TeacherId::new(i), t))
    }

    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, c)| (CourseId::new(i), c))
    }

    pub fn student(&self, id: StudentId) -> AppResult<&Student> {
        self.students
            .get(id.get())
            .ok_or_else(|| AppError::argument(anyhow!("Student {} not found", id)))
    }

    pub fn teacher(&self, id: TeacherId) -> AppResult<&Teacher> {
        self.teachers
            .get(id.get())
            .ok_or_else(|| AppError::argument(anyhow!("Teacher {} not found", id)))
    }

    pub fn course(&self, id: CourseId) -> AppResult<&Course> {
        self.courses
            .get(id.get())
            .ok_or_else(|| AppError::argument(anyhow!("Course {} not found", id)))
    }

    pub fn attendance(&self, id: AttendanceId) -> AppResult<&AttendanceRecord> {
        self.attendance
            .get(&id)
            .ok_or_else(|| AppError::argument(anyhow!("Attendance record {} not found", id)))
    }

    pub fn grade(&self, id: GradeId) -> AppResult<&GradeRecord> {
        self.grades
            .get(&id)
            .ok_or_else(|| AppError::argument(anyhow!("Grade record {} not found", id)))
    }

    /// Total attendance records across every student and course.
    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Resolves record ids in the order given. Ids come from entity lists the
    /// registry maintains, so every one of them is present.
    pub fn attendance_for<'a>(
        &'a self,
        ids: &'a [AttendanceId],
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        ids.iter().filter_map(|id| self.attendance.get(id))
    }

    pub fn grades_for<'a>(&'a self, ids: &'a [GradeId]) -> impl Iterator<Item = &'a GradeRecord> + 'a {
        ids.iter().filter_map(|id| self.grades.get(id))
    }

    pub(crate) fn student_mut(&mut self, id: StudentId) -> AppResult<&mut Student> {
        self.students
            .get_mut(id.get())
            .ok_or_else(|| AppError::argument(anyhow!("Student {} not found", id)))
    }

    pub(crate) fn teacher_mut(&mut self, id: TeacherId) -> AppResult<&mut Teacher> {
        self.teachers
            .get_mut(id.get())
            .ok_or_else(|| AppError::argument(anyhow!("Teacher {} not found", id)))
    }

    pub(crate) fn attendance_mut(&mut self, id: AttendanceId) -> AppResult<&mut AttendanceRecord> {
        self.attendance
            .get_mut(&id)
            .ok_or_else(|| AppError::argument(anyhow!("Attendance record {} not found", id)))
    }

    pub(crate) fn insert_student(&mut self, student: Student) -> StudentId {
        self.students.push(student);
        StudentId::new(self.students.len() - 1)
    }

    pub(crate) fn insert_teacher(&mut self, teacher: Teacher) -> TeacherId {
        self.teachers.push(teacher);
        TeacherId::new(self.teachers.len() - 1)
    }

    pub(crate) fn insert_course(&mut self, course: Course) -> CourseId {
        self.courses.push(course);
        CourseId::new(self.courses.len() - 1)
    }

    /// Links `student` and `course` on both sides. Returns `false` when the
    /// student was already enrolled.
    pub(crate) fn link_enrollment(&mut self, student: StudentId, course: CourseId) -> AppResult<bool> {
        self.ensure_pair(student, course)?;

        let added = self.students[student.get()].add_course(course);
        self.courses[course.get()].add_student(student);
        Ok(added)
    }

    /// Removes the enrollment on both sides. Returns `false` when there was none.
    pub(crate) fn unlink_enrollment(&mut self, student: StudentId, course: CourseId) -> AppResult<bool> {
        self.ensure_pair(student, course)?;

        let removed = self.courses[course.get()].remove_student(student);
        let dropped = self.students[student.get()].remove_course(course);
        Ok(removed || dropped)
    }

    /// Adds `course` to the teacher's list and points the course's teacher
    /// slot at `teacher`, replacing any earlier assignment.
    pub(crate) fn link_assignment(&mut self, teacher: TeacherId, course: CourseId) -> AppResult<bool> {
        self.teacher(teacher)?;
        self.course(course)?;

        let added = self.teachers[teacher.get()].add_course(course);
        if added {
            self.courses[course.get()].set_teacher(teacher);
        }
        Ok(added)
    }

    /// Creates an Absent attendance record and registers it on both sides.
    pub(crate) fn register_attendance(
        &mut self,
        student: StudentId,
        course: CourseId,
        date: NaiveDate,
    ) -> AppResult<AttendanceId> {
        self.ensure_pair(student, course)?;

        let id = AttendanceId::new(self.attendance_ids.next_id());
        self.attendance
            .insert(id, AttendanceRecord::new(id, student, course, date));
        self.students[student.get()].push_attendance(id);
        self.courses[course.get()].push_attendance(id);
        Ok(id)
    }

    /// Validates and stores a grade. The sequence only advances once the
    /// record is known to be valid.
    pub(crate) fn register_grade(&mut self, dto: &NewGrade) -> AppResult<GradeId> {
        self.ensure_pair(dto.student, dto.course)?;

        let id = GradeId::new(self.grade_ids.peek());
        let record = GradeRecord::new(id, dto, self.config.grade_scale)?;
        self.grade_ids.next_id();

        self.grades.insert(id, record);
        self.students[dto.student.get()].push_grade(id);
        self.courses[dto.course.get()].push_grade(id);
        Ok(id)
    }

    fn ensure_pair(&self, student: StudentId, course: CourseId) -> AppResult<()> {
        self.student(student)?;
        self.course(course)?;
        Ok(())
    }
}
