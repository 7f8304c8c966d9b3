//! Grade scale configuration.
//!
//! The default is the 1.0 to 7.0 scale with 4.0 as the passing mark.

use registrar_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Bounds and passing mark for grade values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    /// Lowest accepted grade (inclusive).
    pub min: f64,
    /// Highest accepted grade (inclusive).
    pub max: f64,
    /// Grades at or above this value pass.
    pub passing: f64,
}

impl GradeScale {
    pub const DEFAULT_MIN: f64 = 1.0;
    pub const DEFAULT_MAX: f64 = 7.0;
    pub const DEFAULT_PASSING: f64 = 4.0;

    /// Builds a scale, rejecting non-finite bounds and `min <= passing <= max` violations.
    pub fn new(min: f64, max: f64, passing: f64) -> AppResult<Self> {
        if !(min.is_finite() && max.is_finite() && passing.is_finite()) {
            return Err(AppError::validation(anyhow::anyhow!(
                "grade scale bounds must be finite numbers"
            )));
        }
        if min > passing || passing > max {
            return Err(AppError::validation(anyhow::anyhow!(
                "grade scale requires min <= passing <= max, got {:.1} / {:.1} / {:.1}",
                min,
                passing,
                max
            )));
        }
        Ok(Self { min, max, passing })
    }

    /// True when `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_passing(&self, value: f64) -> bool {
        value >= self.passing
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            passing: Self::DEFAULT_PASSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let scale = GradeScale::default();
        assert_eq!(scale.min, 1.0);
        assert_eq!(scale.max, 7.0);
        assert_eq!(scale.passing, 4.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let scale = GradeScale::default();
        assert!(scale.contains(1.0));
        assert!(scale.contains(7.0));
        assert!(!scale.contains(0.5));
        assert!(!scale.contains(7.5));
        assert!(!scale.contains(f64::NAN));
    }

    #[test]
    fn test_is_passing() {
        let scale = GradeScale::default();
        assert!(scale.is_passing(4.0));
        assert!(!scale.is_passing(3.9));
    }

    #[test]
    fn test_new_rejects_inconsistent_bounds() {
        assert!(GradeScale::new(1.0, 7.0, 8.0).unwrap_err().is_validation());
        assert!(GradeScale::new(5.0, 7.0, 4.0).is_err());
        assert!(GradeScale::new(1.0, f64::INFINITY, 4.0).is_err());
        assert!(GradeScale::new(0.0, 100.0, 60.0).is_ok());
    }
}
