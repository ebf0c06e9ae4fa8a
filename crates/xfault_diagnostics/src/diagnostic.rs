//! Structured diagnostic messages with severity, codes, and a bit-list location.

use crate::code::DiagnosticCode;
use crate::location::Location;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured, non-fatal diagnostic raised while evaluating a bit group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique error code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The bit (within the input fault bit list) this diagnostic concerns.
    pub location: Location,
}

impl Diagnostic {
    /// Creates a new advisory diagnostic (e.g. `ResolverMiss`).
    pub fn advisory(code: DiagnosticCode, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Advisory,
            code,
            message: message.into(),
            location,
        }
    }

    /// Creates a new warning diagnostic (e.g. `TraceOverflow`).
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn create_advisory() {
        let code = DiagnosticCode::new(Category::Resolver, 1);
        let diag = Diagnostic::advisory(code, "no database mapping for bit", Location::new(0, 0));
        assert_eq!(diag.severity, Severity::Advisory);
        assert_eq!(diag.message, "no database mapping for bit");
        assert_eq!(format!("{}", diag.code), "R001");
    }

    #[test]
    fn create_warning() {
        let code = DiagnosticCode::new(Category::Trace, 1);
        let diag = Diagnostic::warning(code, "trace depth bound exceeded", Location::new(2, 3));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.location, Location::new(2, 3));
    }
}
