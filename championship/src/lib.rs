//! Rally championship model: drivers, cars, race results and standings.
//!
//! - **[`core`]**: Pure, deterministic domain logic (cars, drivers, races, the
//!   championship registry, statistics). No I/O.
//! - **[`io`]**: Season files on disk.
//!
//! [`season`] plays a season file through a [`core::registry::Championship`];
//! [`report`] renders the result for the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod season;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
