//! Unified exit codes for the dwell binary.
//! These codes are part of the public contract; scripts branch on them.

pub const SUCCESS: i32 = 0;
pub const ARTIFACT_ERROR: i32 = 1; // One or more artifacts could not be written
pub const INPUT_ERROR: i32 = 2; // Unreadable or malformed stop log, or bad invocation
