//! Process exit codes

/// Command succeeded and the `ok` envelope was printed
pub const OK: u8 = 0;

/// Usage error, or the `error` envelope was printed
pub const FAILURE: u8 = 1;
