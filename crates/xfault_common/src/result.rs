//! Common result and error types for the xfault toolchain.

/// The standard result type for fallible setup-time operations.
///
/// Per the error handling policy, only setup-time invariant violations are
/// fatal: an unsupported part, a malformed fault bit list, or a missing
/// design checkpoint. Everything else (a bit in an undefined frame, a bit
/// with no database mapping, a net trace that hits a cycle) degrades to a
/// classification outcome and is never an `Err`.
pub type XFaultResult<T> = Result<T, CoreError>;

/// A fatal, setup-time error. Never raised once evaluation of bit groups begins.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The bitstream's IDCODE has no matching entry in the device database.
    #[error("unsupported part: {0}")]
    UnsupportedPart(String),

    /// The fault bit list or bitstream input could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The design-checkpoint reader produced no design.
    #[error("missing design checkpoint: {0}")]
    MissingCheckpoint(String),

    /// Underlying I/O failure while loading a database or input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
