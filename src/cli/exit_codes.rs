//! Exit codes for the CLI
//!
//! Standard exit codes used by the content parser for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | All stages completed |
//! | 1 | `INVALID_ARGS` | Invalid or incomplete command-line arguments |
//! | -1 | `LINT_FAILURE` | An exception escaped the lint stage |
//! | 130 | `INTERRUPT` | The run was interrupted by the user |
//!
//! A non-zero return code from the enrichment pipeline is passed through
//! verbatim and is not listed here.

/// Success - every stage completed and the report was written.
pub const SUCCESS: i32 = 0;

/// Invalid arguments - the required flag combination was not given.
///
/// Used when the output directory is missing, or when neither (or both) of
/// the local directory and the repository URL are given.
pub const INVALID_ARGS: i32 = 1;

/// Sentinel for an exception thrown while running the lint engine.
///
/// The operating system reports this as 255 on Unix; the distinct sentinel
/// keeps lint failures separable from enrichment return codes in-process.
pub const LINT_FAILURE: i32 = -1;

/// Reserved code for a user interrupt (Ctrl-C), matching the lint engine's
/// own control-C convention.
pub const INTERRUPT: i32 = 130;
