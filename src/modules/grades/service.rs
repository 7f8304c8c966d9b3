use registrar_core::AppResult;
use registrar_models::{GradeId, NewGrade};
use tracing::{debug, instrument};

use crate::state::Registry;

pub struct GradeService;

impl GradeService {
    /// Records a grade against the registry's grade scale. The date is the
    /// current time.
    #[instrument(skip(reg))]
    pub fn record(reg: &mut Registry, dto: NewGrade) -> AppResult<GradeId> {
        let id = reg.register_grade(&dto)?;

        debug!(%id, value = dto.value, "Grade recorded");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_config::{GradeScale, RegistryConfig};
    use registrar_models::{CourseId, EvaluationKind, NewCourse, NewPerson, StudentId};

    use crate::modules::{CourseService, StudentService};

    fn setup(config: RegistryConfig) -> (Registry, StudentId, CourseId) {
        let mut reg = Registry::with_config(config);
        let student =
            StudentService::create(&mut reg, NewPerson::new("12345678-9", "Juan", "Pérez"))
                .unwrap();
        let course =
            CourseService::create(&mut reg, NewCourse::new("MAT101", "Mathematics I", "1st Year"))
                .unwrap();
        (reg, student, course)
    }

    #[test]
    fn test_record_grade() {
        let (mut reg, student, course) = setup(RegistryConfig::default());
        let id = GradeService::record(
            &mut reg,
            NewGrade::new(student, course, 6.5)
                .kind(EvaluationKind::Exam)
                .weight(0.4),
        )
        .unwrap();

        assert_eq!(id, GradeId::new(1));
        let grade = reg.grade(id).unwrap();
        assert_eq!(grade.kind(), EvaluationKind::Exam);
        assert_eq!(grade.student(), student);
        assert_eq!(grade.course(), course);
        assert!(grade.is_passing());
        assert_eq!(reg.student(student).unwrap().grades(), &[id]);
        assert_eq!(reg.course(course).unwrap().grades(), &[id]);
    }

    #[test]
    fn test_out_of_range_is_rejected_and_not_stored() {
        let (mut reg, student, course) = setup(RegistryConfig::default());
        for value in [0.5, 7.5] {
            let err = GradeService::record(&mut reg, NewGrade::new(student, course, value))
                .unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "grade must be between 1.0 and 7.0");
        }
        assert_eq!(reg.grade_count(), 0);
        assert!(reg.course(course).unwrap().grades().is_empty());
    }

    #[test]
    fn test_unknown_course_is_argument_error() {
        let (mut reg, student, _) = setup(RegistryConfig::default());
        let err = GradeService::record(&mut reg, NewGrade::new(student, CourseId::new(3), 5.0))
            .unwrap_err();
        assert!(err.is_argument());
    }

    #[test]
    fn test_configured_scale_applies() {
        let config = RegistryConfig {
            grade_scale: GradeScale::new(0.0, 10.0, 6.0).unwrap(),
            ..RegistryConfig::default()
        };
        let (mut reg, student, course) = setup(config);
        let id = GradeService::record(&mut reg, NewGrade::new(student, course, 9.5)).unwrap();
        assert!(reg.grade(id).unwrap().is_passing());

        let low = GradeService::record(&mut reg, NewGrade::new(student, course, 5.0)).unwrap();
        assert!(!reg.grade(low).unwrap().is_passing());
    }
}
