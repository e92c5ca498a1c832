//! # annolint-python
//!
//! Python frontend for annolint: parses source with tree-sitter-python,
//! builds the per-function semantic model, and hands plain data to
//! `annolint-core` for checking. All tree traversal lives in this crate.

mod builder;
mod collect;
mod returns;
mod source;
mod type_comment;

pub use crate::collect::collect_functions;
pub use crate::source::{SourceFile, parse_module};

use annolint_core::{CheckConfig, Diagnostic, check_functions};
use annolint_error::Result;

/// Parse, model, and check one Python source in a single call.
///
/// The emitted diagnostics are fully ordered: functions in source order,
/// positions within a function in declaration order, return last.
pub fn check_source(source: &SourceFile, config: &CheckConfig) -> Result<Vec<Diagnostic>> {
    let tree = parse_module(source)?;
    let functions = collect_functions(source, &tree)?;
    Ok(check_functions(&functions, config))
}
