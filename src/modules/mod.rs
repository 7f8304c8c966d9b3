pub mod attendance;
pub mod courses;
pub mod grades;
pub mod reports;
pub mod students;
pub mod teachers;

pub use self::attendance::service::AttendanceService;
pub use self::courses::service::CourseService;
pub use self::grades::service::GradeService;
pub use self::reports::service::ReportService;
pub use self::students::service::StudentService;
pub use self::teachers::service::TeacherService;
