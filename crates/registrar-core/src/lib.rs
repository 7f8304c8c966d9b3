//! # Registrar Core
//!
//! Core types, errors, and utilities shared by the Registrar crates.
//!
//! - [`errors`]: Error taxonomy (argument vs. validation failures)
//! - [`sequence`]: Per-aggregate monotonic identifier generator
//! - [`validation`]: Helpers for `validator`-derived DTOs
//!
//! # Example
//!
//! ```ignore
//! use registrar_core::{AppError, Sequence};
//!
//! let error = AppError::argument(anyhow::anyhow!("Student not found"));
//! assert!(error.is_argument());
//!
//! let mut ids = Sequence::new();
//! assert_eq!(ids.next_id(), 1);
//! ```

pub mod errors;
pub mod sequence;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{AppError, AppResult, ErrorBody, ErrorKind};
pub use sequence::Sequence;
pub use validation::{format_errors, not_blank};
