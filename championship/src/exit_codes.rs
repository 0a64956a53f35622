//! Stable exit codes for championship CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid season file or other errors.
pub const INVALID: i32 = 1;
/// `championship leader` found no registered drivers.
pub const NO_LEADER: i32 = 2;
