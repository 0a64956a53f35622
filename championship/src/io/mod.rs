//! I/O helpers for championship commands.

pub mod season;
