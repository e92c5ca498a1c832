//! # annolint-core
//!
//! The parser-independent heart of annolint: the per-function semantic model,
//! the decorator matcher, the legacy type-comment aligner, the diagnostic
//! classification tables, and the per-file emission pass.
//!
//! This crate consumes plain data only. A language frontend (see
//! `annolint-python`) is responsible for turning syntax trees into
//! [`Function`] values; everything after that point lives here and is a pure
//! function of `(functions, configuration)`.

pub mod checker;
pub mod classify;
pub mod config;
pub mod decorator;
pub mod diag;
pub mod model;
pub mod type_comment;

pub use crate::checker::check_functions;
pub use crate::classify::{classify_argument, classify_return};
pub use crate::config::CheckConfig;
pub use crate::decorator::{DecoratorExpr, decorator_matches};
pub use crate::diag::{Diagnostic, DiagnosticCode};
pub use crate::model::{
    AnnotationType, Argument, ClassDecoratorType, Function, FunctionType, Position, RETURN_SLOT,
};
pub use crate::type_comment::{HintSignature, HintSlot, align_type_comment};

pub use annolint_error::{Error, ErrorKind, Result};
