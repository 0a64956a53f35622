//! Deterministic, pure championship domain logic.
//!
//! Core modules are free of I/O side effects. They operate on in-memory data
//! structures and return deterministic outputs suitable for tests.

pub mod car;
pub mod driver;
pub mod race;
pub mod registry;
pub mod statistics;
