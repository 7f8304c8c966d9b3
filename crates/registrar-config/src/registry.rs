//! Registry configuration.
//!
//! Loaded from environment variables, falling back to defaults for anything
//! missing or unparsable.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grading::GradeScale;

/// Settings the registry applies when creating courses and grades.
///
/// # Environment Variables
///
/// - `REGISTRAR_GRADE_MIN`: lowest accepted grade (default: `1.0`)
/// - `REGISTRAR_GRADE_MAX`: highest accepted grade (default: `7.0`)
/// - `REGISTRAR_PASSING_GRADE`: passing mark (default: `4.0`)
/// - `REGISTRAR_DEFAULT_CREDITS`: credits for courses created without an explicit value (default: `4`)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub grade_scale: GradeScale,
    pub default_credits: u32,
}

impl RegistryConfig {
    pub const DEFAULT_CREDITS: u32 = 4;

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_f64 = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        let min = read_f64("REGISTRAR_GRADE_MIN", GradeScale::DEFAULT_MIN);
        let max = read_f64("REGISTRAR_GRADE_MAX", GradeScale::DEFAULT_MAX);
        let passing = read_f64("REGISTRAR_PASSING_GRADE", GradeScale::DEFAULT_PASSING);

        let grade_scale = GradeScale::new(min, max, passing).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring configured grade scale, using default");
            GradeScale::default()
        });

        let default_credits = lookup("REGISTRAR_DEFAULT_CREDITS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_CREDITS);

        Self {
            grade_scale,
            default_credits,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            grade_scale: GradeScale::default(),
            default_credits: Self::DEFAULT_CREDITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RegistryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.default_credits, 4);
    }

    #[test]
    fn test_reads_overrides() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            ("REGISTRAR_GRADE_MIN", "0"),
            ("REGISTRAR_GRADE_MAX", "100"),
            ("REGISTRAR_PASSING_GRADE", "60"),
            ("REGISTRAR_DEFAULT_CREDITS", "6"),
        ]));
        assert_eq!(config.grade_scale.min, 0.0);
        assert_eq!(config.grade_scale.max, 100.0);
        assert_eq!(config.grade_scale.passing, 60.0);
        assert_eq!(config.default_credits, 6);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            ("REGISTRAR_GRADE_MAX", "seven"),
            ("REGISTRAR_DEFAULT_CREDITS", "-2"),
        ]));
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_inconsistent_scale_falls_back_to_default() {
        let config =
            RegistryConfig::from_lookup(lookup_from(&[("REGISTRAR_PASSING_GRADE", "9.0")]));
        assert_eq!(config.grade_scale, GradeScale::default());
    }
}
