//! Exit code constants for the promptrun CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing parameter, bad config)
//! - 2: Template failure (not found, unreadable, malformed)
//! - 3: Generation failure (model backend)
//! - 4: I/O failure (input file, result log)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing required parameter, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Template failure: missing, unreadable, or missing a required section.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Generation failure: backend unreachable, rejected the request, or returned junk.
pub const GENERATION_FAILURE: i32 = 3;

/// I/O failure outside the template store: input files and the result log.
pub const IO_FAILURE: i32 = 4;
