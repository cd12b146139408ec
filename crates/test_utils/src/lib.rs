//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the driver rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made driver profiles and rate values
//! - `assertions`: Assertion helpers for premiums and money
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
