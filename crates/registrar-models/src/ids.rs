//! Strongly-typed ID newtypes for domain entities.
//!
//! Entity ids (`StudentId`, `TeacherId`, `CourseId`) are arena indices handed
//! out by the registry in creation order. Record ids (`AttendanceId`,
//! `GradeId`) come from per-registry sequences starting at 1.
//!
//! # Example
//!
//! ```ignore
//! use registrar_models::ids::{CourseId, StudentId};
//!
//! fn enroll(student: StudentId, course: CourseId) { /* ... */ }
//!
//! enroll(StudentId::new(0), CourseId::new(0));    // OK
//! // enroll(CourseId::new(0), StudentId::new(0)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over an integer.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw value.
            #[inline]
            pub const fn new(raw: $inner) -> Self {
                Self(raw)
            }

            /// Get the raw value.
            #[inline]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(raw: $inner) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(id: $name) -> $inner {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }
    };
}

define_id!(
    /// Arena index of a Student.
    StudentId(usize)
);

define_id!(
    /// Arena index of a Teacher.
    TeacherId(usize)
);

define_id!(
    /// Arena index of a Course.
    CourseId(usize)
);

define_id!(
    /// Sequence number of an attendance record.
    AttendanceId(u64)
);

define_id!(
    /// Sequence number of a grade record.
    GradeId(u64)
);
