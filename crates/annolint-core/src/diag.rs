//! The diagnostic code registry and the emitted record type.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::Position;

/// The fixed taxonomy of missing-annotation diagnostics.
///
/// Numbering mirrors the established ANN-series convention: 0xx for
/// arguments, 1xx for method receivers, 2xx for returns, 3xx for style
/// mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Missing annotation for an ordinary (or positional-only, or
    /// keyword-only) argument
    Ann001,
    /// Missing annotation for `*args`
    Ann002,
    /// Missing annotation for `**kwargs`
    Ann003,
    /// Missing annotation for the first argument of an instance method
    Ann101,
    /// Missing annotation for the first argument of a classmethod
    Ann102,
    /// Missing return annotation for a public function
    Ann201,
    /// Missing return annotation for a protected function
    Ann202,
    /// Missing return annotation for a private function
    Ann203,
    /// Missing return annotation for a special (dunder) method
    Ann204,
    /// Missing return annotation for a staticmethod
    Ann205,
    /// Missing return annotation for a classmethod
    Ann206,
    /// Mixed type comments and inline annotations in one definition
    Ann301,
}

impl DiagnosticCode {
    /// The wire spelling of the code, e.g. `"ANN201"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::Ann001 => "ANN001",
            DiagnosticCode::Ann002 => "ANN002",
            DiagnosticCode::Ann003 => "ANN003",
            DiagnosticCode::Ann101 => "ANN101",
            DiagnosticCode::Ann102 => "ANN102",
            DiagnosticCode::Ann201 => "ANN201",
            DiagnosticCode::Ann202 => "ANN202",
            DiagnosticCode::Ann203 => "ANN203",
            DiagnosticCode::Ann204 => "ANN204",
            DiagnosticCode::Ann205 => "ANN205",
            DiagnosticCode::Ann206 => "ANN206",
            DiagnosticCode::Ann301 => "ANN301",
        }
    }

    /// Render the human-readable message, interpolating the bound symbol
    /// where the message calls for one.
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            DiagnosticCode::Ann001 => {
                format!("Missing type annotation for function argument '{symbol}'")
            }
            DiagnosticCode::Ann002 => format!("Missing type annotation for *{symbol}"),
            DiagnosticCode::Ann003 => format!("Missing type annotation for **{symbol}"),
            DiagnosticCode::Ann101 => "Missing type annotation for self in method".to_string(),
            DiagnosticCode::Ann102 => "Missing type annotation for cls in classmethod".to_string(),
            DiagnosticCode::Ann201 => {
                "Missing return type annotation for public function".to_string()
            }
            DiagnosticCode::Ann202 => {
                "Missing return type annotation for protected function".to_string()
            }
            DiagnosticCode::Ann203 => {
                "Missing return type annotation for private function".to_string()
            }
            DiagnosticCode::Ann204 => {
                "Missing return type annotation for special method".to_string()
            }
            DiagnosticCode::Ann205 => {
                "Missing return type annotation for staticmethod".to_string()
            }
            DiagnosticCode::Ann206 => {
                "Missing return type annotation for classmethod".to_string()
            }
            DiagnosticCode::Ann301 => {
                "PEP 484 disallows both type annotations and type comments".to_string()
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One emitted diagnostic: a code bound to a source location and the symbol
/// (argument or function name) it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub position: Position,
    pub code: DiagnosticCode,
    pub symbol: String,
}

impl Diagnostic {
    pub fn new(position: Position, code: DiagnosticCode, symbol: impl Into<String>) -> Self {
        Self {
            position,
            code,
            symbol: symbol.into(),
        }
    }

    /// The full rendered message for this diagnostic.
    pub fn message(&self) -> String {
        self.code.describe(&self.symbol)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message())
    }
}
