use registrar_core::AppResult;
use registrar_models::{
    CourseId, GradeRecord, Identity, course_attendance_rate, course_average_grade,
    student_attendance_rate, student_average_grade,
};
use tracing::{debug, instrument};

use crate::modules::reports::model::{
    AttendanceEntry, AttendanceReport, CourseAttendanceReport, CourseGradeGroup, GradeEntry,
    GradeReport, StudentGradeReport, StudentSummary,
};
use crate::state::Registry;

pub struct ReportService;

impl ReportService {
    /// One summary per student, in creation order.
    #[instrument(skip(reg))]
    pub fn student_summaries(reg: &Registry) -> Vec<StudentSummary> {
        reg.students()
            .map(|(id, student)| StudentSummary {
                id,
                code: student.code().to_string(),
                full_name: student.full_name(),
                enrollment_number: student.enrollment_number.clone(),
                status: student.status,
                course_count: student.courses().len(),
                attendance_rate: student_attendance_rate(reg.attendance_for(student.attendance())),
                average_grade: student_average_grade(reg.grades_for(student.grades())),
            })
            .collect()
    }

    /// Attendance grouped by course. Courses without records are left out and
    /// entries are sorted by date, newest first.
    #[instrument(skip(reg))]
    pub fn attendance_report(reg: &Registry) -> AppResult<AttendanceReport> {
        let mut courses = Vec::new();

        for (id, course) in reg.courses() {
            if course.attendance().is_empty() {
                continue;
            }

            let mut entries = reg
                .attendance_for(course.attendance())
                .map(|record| -> AppResult<AttendanceEntry> {
                    let student = reg.student(record.student())?;
                    Ok(AttendanceEntry {
                        id: record.id(),
                        date: record.date,
                        student: record.student(),
                        student_name: student.full_name(),
                        status: record.status(),
                        note: record.note().map(str::to_string),
                    })
                })
                .collect::<AppResult<Vec<_>>>()?;
            entries.sort_by(|a, b| b.date.cmp(&a.date));

            courses.push(CourseAttendanceReport {
                course: id,
                code: course.code.clone(),
                name: course.name.clone(),
                average_attendance: course_attendance_rate(reg.attendance_for(course.attendance())),
                entries,
            });
        }

        debug!(courses = courses.len(), "Attendance report built");
        Ok(AttendanceReport {
            courses,
            total_records: reg.attendance_count(),
        })
    }

    /// Grades grouped by student, then by course in order of first
    /// appearance. Students without grades are left out.
    #[instrument(skip(reg))]
    pub fn grade_report(reg: &Registry) -> AppResult<GradeReport> {
        let mut students = Vec::new();

        for (id, student) in reg.students() {
            if student.grades().is_empty() {
                continue;
            }

            let mut groups: Vec<(CourseId, Vec<&GradeRecord>)> = Vec::new();
            for record in reg.grades_for(student.grades()) {
                match groups.iter_mut().find(|(course, _)| *course == record.course()) {
                    Some((_, records)) => records.push(record),
                    None => groups.push((record.course(), vec![record])),
                }
            }

            let courses = groups
                .into_iter()
                .map(|(course_id, records)| Self::grade_group(reg, course_id, records))
                .collect::<AppResult<Vec<_>>>()?;

            students.push(StudentGradeReport {
                student: id,
                code: student.code().to_string(),
                full_name: student.full_name(),
                average_grade: student_average_grade(reg.grades_for(student.grades())),
                courses,
            });
        }

        debug!(students = students.len(), "Grade report built");
        Ok(GradeReport {
            students,
            total_grades: reg.grade_count(),
        })
    }

    fn grade_group(
        reg: &Registry,
        course_id: CourseId,
        records: Vec<&GradeRecord>,
    ) -> AppResult<CourseGradeGroup> {
        let course = reg.course(course_id)?;

        let mut grades: Vec<GradeEntry> = records
            .iter()
            .map(|record| GradeEntry {
                id: record.id(),
                value: record.value(),
                weight: record.weight(),
                kind: record.kind(),
                passed: record.is_passing(),
                recorded_at: record.recorded_at(),
            })
            .collect();
        grades.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        Ok(CourseGradeGroup {
            course: course_id,
            code: course.code.clone(),
            name: course.name.clone(),
            average: course_average_grade(records.iter().copied()),
            grades,
        })
    }
}
