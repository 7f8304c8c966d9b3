//! Logging bootstrap for Registrar binaries.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_console_logging`] once at startup to decide where they go.

mod basic_logging;

pub use basic_logging::{default_directives, init_console_logging};
