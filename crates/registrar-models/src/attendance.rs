//! Attendance records and attendance-rate rules.
//!
//! A record starts as `Absent` and may move to any status at any time; only
//! the current status and note are kept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{AttendanceId, CourseId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    #[default]
    Absent,
    Justified,
    Late,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Justified => "Justified",
            Self::Late => "Late",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    id: AttendanceId,
    pub date: NaiveDate,
    status: AttendanceStatus,
    note: Option<String>,
    student: StudentId,
    course: CourseId,
}

impl AttendanceRecord {
    /// New record for the `(student, course)` pair, initially `Absent`.
    /// The date is taken as given.
    pub fn new(id: AttendanceId, student: StudentId, course: CourseId, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            status: AttendanceStatus::default(),
            note: None,
            student,
            course,
        }
    }

    pub fn id(&self) -> AttendanceId {
        self.id
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn student(&self) -> StudentId {
        self.student
    }

    pub fn course(&self) -> CourseId {
        self.course
    }

    pub fn mark_present(&mut self) {
        self.status = AttendanceStatus::Present;
    }

    pub fn mark_absent(&mut self) {
        self.status = AttendanceStatus::Absent;
    }

    pub fn mark_late(&mut self) {
        self.status = AttendanceStatus::Late;
    }

    /// Moves to `Justified` and replaces the note with `reason`.
    pub fn justify(&mut self, reason: impl Into<String>) {
        self.status = AttendanceStatus::Justified;
        self.note = Some(reason.into());
    }

    /// Direct status assignment. Leaves the note untouched.
    pub fn set_status(&mut self, status: AttendanceStatus) {
        self.status = status;
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }
}

fn rate<'a, I, F>(records: I, counts: F) -> f64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
    F: Fn(AttendanceStatus) -> bool,
{
    let mut total: usize = 0;
    let mut attended: usize = 0;
    for record in records {
        total += 1;
        if counts(record.status) {
            attended += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    (attended as f64 / total as f64) * 100.0
}

/// Student-level rate: Present and Justified count as attended. Late stays in
/// the denominator only. `0.0` with no records.
pub fn student_attendance_rate<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    rate(records, |status| {
        matches!(status, AttendanceStatus::Present | AttendanceStatus::Justified)
    })
}

/// Course-level rate: only Present counts as attended. `0.0` with no records.
pub fn course_attendance_rate<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    rate(records, |status| status == AttendanceStatus::Present)
}
