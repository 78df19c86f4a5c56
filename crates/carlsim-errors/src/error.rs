//! Errors of the reporting layer itself.
//!
//! These are ordinary recoverable errors produced while parsing kind names or
//! host configuration. A violated precondition is never reported through this
//! type; it terminates the process instead (see [`crate::reporter`]).

use thiserror::Error;

/// Errors produced by the carlsim-errors crate outside the fatal path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A string did not name any [`crate::ErrorKind`].
    #[error("unknown error kind: '{name}'")]
    UnknownKind { name: String },

    /// The diagnostic channel setting was not recognized.
    #[error("invalid diagnostic channel '{value}', expected 'stderr' or 'tracing'")]
    InvalidChannel { value: String },

    /// The termination setting was neither `abort` nor an integer exit code.
    #[error("invalid exit setting '{value}', expected 'abort' or a non-zero integer")]
    InvalidExitCode { value: String },

    /// Exit code 0 would make a fatal error look like a successful run.
    #[error("exit code 0 is reserved for success")]
    SuccessExitCode,
}
