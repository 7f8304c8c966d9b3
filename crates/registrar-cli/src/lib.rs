//! # Registrar CLI
//!
//! Seeding utilities for exercising Registrar with realistic data.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use registrar_cli::seeder::{seed_registry, SeedConfig};
//! use registrar_config::RegistryConfig;
//!
//! let config = SeedConfig::new(25); // 25 students with defaults
//! let registry = seed_registry(RegistryConfig::default(), config)?;
//! ```

pub mod seeder;
