//! # Registrar Config
//!
//! Configuration types for Registrar, loaded from environment variables:
//!
//! - [`grading`]: Grade scale bounds and passing mark
//! - [`registry`]: Defaults applied when creating courses and grades
//! - [`logging`]: Log level and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::{LogConfig, RegistryConfig};
//!
//! let registry_config = RegistryConfig::from_env();
//! let log_config = LogConfig::from_env();
//! ```

pub mod grading;
pub mod logging;
pub mod registry;

// Re-export commonly used types at crate root
pub use grading::GradeScale;
pub use logging::LogConfig;
pub use registry::RegistryConfig;
