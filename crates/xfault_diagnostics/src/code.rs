//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// A bit lies in a defined frame but has no database mapping (`ResolverMiss`).
    Resolver,
    /// Net tracing hit a cycle or exceeded the configured depth bound (`TraceOverflow`).
    Trace,
    /// Setup-time problems surfaced as diagnostics before a fatal abort.
    Setup,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Resolver => 'R',
            Category::Trace => 'T',
            Category::Setup => 'S',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the category prefix followed by a zero-padded 3-digit number,
/// e.g., `E101`, `W203`, `T305`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Resolver.prefix(), 'R');
        assert_eq!(Category::Trace.prefix(), 'T');
        assert_eq!(Category::Setup.prefix(), 'S');
    }

    #[test]
    fn display_format() {
        let code = DiagnosticCode::new(Category::Resolver, 1);
        assert_eq!(format!("{code}"), "R001");

        let code = DiagnosticCode::new(Category::Trace, 42);
        assert_eq!(format!("{code}"), "T042");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(Category::Trace, 2);
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
