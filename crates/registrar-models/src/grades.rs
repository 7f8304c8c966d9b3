//! Grade records and grade-average rules.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use registrar_config::GradeScale;
use registrar_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{CourseId, GradeId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    #[default]
    Test,
    Homework,
    Project,
    Exam,
    Assignment,
    Presentation,
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Test => "Test",
            Self::Homework => "Homework",
            Self::Project => "Project",
            Self::Exam => "Exam",
            Self::Assignment => "Assignment",
            Self::Presentation => "Presentation",
        };
        write!(f, "{}", label)
    }
}

/// DTO for recording a grade.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGrade {
    pub student: StudentId,
    pub course: CourseId,
    pub value: f64,
    #[serde(default)]
    pub kind: EvaluationKind,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl NewGrade {
    pub fn new(student: StudentId, course: CourseId, value: f64) -> Self {
        Self {
            student,
            course,
            value,
            kind: EvaluationKind::default(),
            weight: default_weight(),
        }
    }

    pub fn kind(mut self, kind: EvaluationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    id: GradeId,
    value: f64,
    recorded_at: DateTime<Utc>,
    kind: EvaluationKind,
    weight: f64,
    student: StudentId,
    course: CourseId,
    #[serde(skip)]
    scale: GradeScale,
}

impl GradeRecord {
    /// Validates the value against `scale` and stamps the record with the
    /// current time.
    pub fn new(id: GradeId, dto: &NewGrade, scale: GradeScale) -> AppResult<Self> {
        if !scale.contains(dto.value) {
            return Err(AppError::validation(anyhow!(
                "grade must be between {:.1} and {:.1}",
                scale.min,
                scale.max
            )));
        }
        if !dto.weight.is_finite() {
            return Err(AppError::validation(anyhow!(
                "grade weight must be a finite number"
            )));
        }

        Ok(Self {
            id,
            value: dto.value,
            recorded_at: Utc::now(),
            kind: dto.kind,
            weight: dto.weight,
            student: dto.student,
            course: dto.course,
            scale,
        })
    }

    pub fn id(&self) -> GradeId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn kind(&self) -> EvaluationKind {
        self.kind
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn student(&self) -> StudentId {
        self.student
    }

    pub fn course(&self) -> CourseId {
        self.course
    }

    pub fn is_passing(&self) -> bool {
        self.scale.is_passing(self.value)
    }

    /// Raw weighted score, `value * weight`.
    pub fn contribution(&self) -> f64 {
        self.value * self.weight
    }
}

impl fmt::Display for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_passing() { "Passed" } else { "Failed" };
        write!(f, "{}: {:.1} ({})", self.kind, self.value, outcome)
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Student-level average: records are grouped by course, each group averages
/// its contributions (`value * weight`), and the result is the mean of those
/// per-course averages. Every course weighs the same regardless of how many
/// grades it holds. `0.0` with no records.
pub fn student_average_grade<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a GradeRecord>,
{
    // (course, sum of contributions, count), in order of first appearance
    let mut groups: Vec<(CourseId, f64, usize)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(course, _, _)| *course == record.course) {
            Some((_, sum, count)) => {
                *sum += record.contribution();
                *count += 1;
            }
            None => groups.push((record.course, record.contribution(), 1)),
        }
    }

    let course_means = groups
        .iter()
        .map(|(_, sum, count)| mean(*sum, *count))
        .sum::<f64>();
    mean(course_means, groups.len())
}

/// Course-level average: flat, unweighted mean of grade values. `0.0` with
/// no records.
pub fn course_average_grade<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a GradeRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.value, count + 1));
    mean(sum, count)
}
