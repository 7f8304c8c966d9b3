use registrar_core::AppResult;
use registrar_models::{Course, CourseId, NewPerson, Person, Teacher, TeacherId};
use tracing::{debug, instrument};

use crate::state::Registry;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(reg, dto, specialty), fields(code = %dto.code))]
    pub fn create(
        reg: &mut Registry,
        dto: NewPerson,
        specialty: impl Into<String>,
    ) -> AppResult<TeacherId> {
        let teacher = Teacher::new(dto, specialty)?;
        let id = reg.insert_teacher(teacher);

        debug!(%id, "Teacher created");
        Ok(id)
    }

    /// Assigns `course` to `teacher`. The course's teacher slot always points
    /// at the latest assignee; earlier teachers keep the course in their list.
    #[instrument(skip(reg))]
    pub fn assign_course(reg: &mut Registry, teacher: TeacherId, course: CourseId) -> AppResult<()> {
        if reg.link_assignment(teacher, course)? {
            debug!("Course assigned");
        } else {
            debug!("Course already assigned to teacher, skipping");
        }
        Ok(())
    }

    pub fn person_mut(reg: &mut Registry, id: TeacherId) -> AppResult<&mut Person> {
        Ok(&mut reg.teacher_mut(id)?.person)
    }

    #[instrument(skip(reg))]
    pub fn set_specialty(
        reg: &mut Registry,
        id: TeacherId,
        specialty: String,
    ) -> AppResult<()> {
        reg.teacher_mut(id)?.specialty = specialty;
        Ok(())
    }

    pub fn courses(reg: &Registry, id: TeacherId) -> AppResult<Vec<&Course>> {
        reg.teacher(id)?
            .courses()
            .iter()
            .map(|course| reg.course(*course))
            .collect()
    }

    /// Sum of credits over every assigned course.
    pub fn academic_load(reg: &Registry, id: TeacherId) -> AppResult<u32> {
        Ok(Self::courses(reg, id)?
            .iter()
            .map(|course| course.credits)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_models::{Identity, NewCourse};

    use crate::modules::CourseService;

    fn teacher(reg: &mut Registry, code: &str, first: &str, last: &str) -> TeacherId {
        TeacherService::create(reg, NewPerson::new(code, first, last), "Mathematics").unwrap()
    }

    #[test]
    fn test_create_teacher() {
        let mut reg = Registry::new();
        let id = teacher(&mut reg, "12345678-9", "Roberto", "González");
        let t = reg.teacher(id).unwrap();
        assert_eq!(t.specialty, "Mathematics");
        assert_eq!(t.display_name(), "Roberto González (12345678-9)");
    }

    #[test]
    fn test_create_rejects_blank_code() {
        let mut reg = Registry::new();
        let err = TeacherService::create(&mut reg, NewPerson::new(" ", "Ana", "Soto"), "Art")
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_academic_load_sums_credits() {
        let mut reg = Registry::new();
        let t = teacher(&mut reg, "12345678-9", "Roberto", "González");
        let math =
            CourseService::create(&mut reg, NewCourse::new("MAT101", "Mathematics I", "1st Year"))
                .unwrap();
        let physics = CourseService::create(
            &mut reg,
            NewCourse::new("FIS301", "Physics", "3rd Year").credits(6),
        )
        .unwrap();

        assert_eq!(TeacherService::academic_load(&reg, t).unwrap(), 0);
        TeacherService::assign_course(&mut reg, t, math).unwrap();
        TeacherService::assign_course(&mut reg, t, physics).unwrap();
        TeacherService::assign_course(&mut reg, t, math).unwrap();

        assert_eq!(TeacherService::courses(&reg, t).unwrap().len(), 2);
        assert_eq!(TeacherService::academic_load(&reg, t).unwrap(), 10);
    }

    #[test]
    fn test_last_assignment_wins() {
        let mut reg = Registry::new();
        let first = teacher(&mut reg, "12345678-9", "Roberto", "González");
        let second = teacher(&mut reg, "98765432-1", "María", "Silva");
        let course =
            CourseService::create(&mut reg, NewCourse::new("LEN101", "Language", "1st Year"))
                .unwrap();

        TeacherService::assign_course(&mut reg, first, course).unwrap();
        TeacherService::assign_course(&mut reg, second, course).unwrap();

        assert_eq!(reg.course(course).unwrap().teacher(), Some(second));
        assert_eq!(reg.teacher(first).unwrap().courses(), &[course]);
        assert_eq!(TeacherService::academic_load(&reg, first).unwrap(), 4);
    }

    #[test]
    fn test_assign_unknown_course_fails() {
        let mut reg = Registry::new();
        let t = teacher(&mut reg, "12345678-9", "Roberto", "González");
        let err = TeacherService::assign_course(&mut reg, t, CourseId::new(7)).unwrap_err();
        assert!(err.is_argument());
        assert!(reg.teacher(t).unwrap().courses().is_empty());
    }

    #[test]
    fn test_set_specialty() {
        let mut reg = Registry::new();
        let t = teacher(&mut reg, "12345678-9", "Roberto", "González");
        TeacherService::set_specialty(&mut reg, t, "Physics".to_string()).unwrap();
        TeacherService::person_mut(&mut reg, t).unwrap().last_name = "Gómez".to_string();
        let updated = reg.teacher(t).unwrap();
        assert_eq!(updated.specialty, "Physics");
        assert_eq!(updated.full_name(), "Roberto Gómez");
    }
}
