//! Diagnostic severity levels.
//!
//! Both levels are advisory: neither one ends a run. A fatal condition
//! (`UnsupportedPart`, `MalformedInput`, `MissingCheckpoint`) is reported as
//! a [`CoreError`](xfault_common::CoreError) before evaluation begins, never
//! through this sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic message.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A `ResolverMiss`: a bit with no database mapping. Expected on real designs.
    Advisory,
    /// A `TraceOverflow`: net tracing hit a cycle or depth bound. Worth a human look.
    Warning,
}

impl Severity {
    /// Returns `true` if this severity is [`Warning`](Severity::Warning).
    pub fn is_warning(self) -> bool {
        self == Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Advisory => write!(f, "advisory"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
