use chrono::NaiveDate;
use registrar_core::AppResult;
use registrar_models::{AttendanceId, AttendanceStatus, CourseId, StudentId};
use tracing::{debug, instrument};

use crate::state::Registry;

/// Note attached to records created directly as Justified.
pub const DEFAULT_JUSTIFICATION: &str = "Justified by system";

pub struct AttendanceService;

impl AttendanceService {
    /// Records attendance for `student` in `course` on `date`.
    ///
    /// The record starts Absent and is then moved to `status`. Recording for
    /// a student who is not enrolled in the course is allowed.
    #[instrument(skip(reg))]
    pub fn record(
        reg: &mut Registry,
        student: StudentId,
        course: CourseId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AppResult<AttendanceId> {
        let id = reg.register_attendance(student, course, date)?;
        let record = reg.attendance_mut(id)?;
        match status {
            AttendanceStatus::Present => record.mark_present(),
            AttendanceStatus::Absent => record.mark_absent(),
            AttendanceStatus::Justified => record.justify(DEFAULT_JUSTIFICATION),
            AttendanceStatus::Late => record.mark_late(),
        }

        debug!(%id, "Attendance recorded");
        Ok(id)
    }

    #[instrument(skip(reg))]
    pub fn mark_present(reg: &mut Registry, id: AttendanceId) -> AppResult<()> {
        reg.attendance_mut(id)?.mark_present();
        Ok(())
    }

    #[instrument(skip(reg))]
    pub fn mark_absent(reg: &mut Registry, id: AttendanceId) -> AppResult<()> {
        reg.attendance_mut(id)?.mark_absent();
        Ok(())
    }

    #[instrument(skip(reg))]
    pub fn mark_late(reg: &mut Registry, id: AttendanceId) -> AppResult<()> {
        reg.attendance_mut(id)?.mark_late();
        Ok(())
    }

    /// Marks the record Justified and stores `reason` as its note.
    #[instrument(skip(reg, reason))]
    pub fn justify(reg: &mut Registry, id: AttendanceId, reason: impl Into<String>) -> AppResult<()> {
        reg.attendance_mut(id)?.justify(reason);
        Ok(())
    }

    #[instrument(skip(reg, note))]
    pub fn set_note(reg: &mut Registry, id: AttendanceId, note: impl Into<String>) -> AppResult<()> {
        reg.attendance_mut(id)?.set_note(note);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_models::{NewCourse, NewPerson};

    use crate::modules::{CourseService, StudentService};

    fn setup() -> (Registry, StudentId, CourseId) {
        let mut reg = Registry::new();
        let student =
            StudentService::create(&mut reg, NewPerson::new("12345678-9", "Juan", "Pérez"))
                .unwrap();
        let course =
            CourseService::create(&mut reg, NewCourse::new("LEN101", "Language", "1st Year"))
                .unwrap();
        (reg, student, course)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn test_record_applies_initial_status() {
        let (mut reg, student, course) = setup();
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ] {
            let id = AttendanceService::record(&mut reg, student, course, day(1), status).unwrap();
            let record = reg.attendance(id).unwrap();
            assert_eq!(record.status(), status);
            assert_eq!(record.note(), None);
        }
    }

    #[test]
    fn test_record_justified_gets_default_note() {
        let (mut reg, student, course) = setup();
        let id = AttendanceService::record(
            &mut reg,
            student,
            course,
            day(2),
            AttendanceStatus::Justified,
        )
        .unwrap();
        let record = reg.attendance(id).unwrap();
        assert_eq!(record.status(), AttendanceStatus::Justified);
        assert_eq!(record.note(), Some(DEFAULT_JUSTIFICATION));
    }

    #[test]
    fn test_record_requires_known_student_and_course() {
        let (mut reg, student, course) = setup();
        let err = AttendanceService::record(
            &mut reg,
            StudentId::new(9),
            course,
            day(1),
            AttendanceStatus::Present,
        )
        .unwrap_err();
        assert!(err.is_argument());

        let err = AttendanceService::record(
            &mut reg,
            student,
            CourseId::new(9),
            day(1),
            AttendanceStatus::Present,
        )
        .unwrap_err();
        assert!(err.is_argument());
        assert_eq!(reg.attendance_count(), 0);
    }

    #[test]
    fn test_transitions() {
        let (mut reg, student, course) = setup();
        let id = AttendanceService::record(&mut reg, student, course, day(3), AttendanceStatus::Absent)
            .unwrap();

        AttendanceService::mark_present(&mut reg, id).unwrap();
        assert_eq!(reg.attendance(id).unwrap().status(), AttendanceStatus::Present);
        AttendanceService::mark_late(&mut reg, id).unwrap();
        assert_eq!(reg.attendance(id).unwrap().status(), AttendanceStatus::Late);
        AttendanceService::justify(&mut reg, id, "Medical certificate").unwrap();
        assert_eq!(reg.attendance(id).unwrap().note(), Some("Medical certificate"));
        AttendanceService::mark_absent(&mut reg, id).unwrap();
        assert_eq!(reg.attendance(id).unwrap().status(), AttendanceStatus::Absent);
    }

    #[test]
    fn test_transition_on_unknown_record_fails() {
        let mut reg = Registry::new();
        let err = AttendanceService::mark_present(&mut reg, AttendanceId::new(1)).unwrap_err();
        assert!(err.is_argument());
    }

    #[test]
    fn test_not_enrolled_student_can_be_recorded() {
        let (mut reg, student, course) = setup();
        assert!(!reg.student(student).unwrap().is_enrolled_in(course));
        let id = AttendanceService::record(&mut reg, student, course, day(4), AttendanceStatus::Present)
            .unwrap();
        assert_eq!(reg.course(course).unwrap().attendance(), &[id]);
    }
}
