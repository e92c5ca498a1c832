//! Checker configuration.

use std::collections::HashSet;

/// Flat configuration record consumed read-only by the emission pass.
///
/// The host (CLI, editor plugin) is responsible for populating this from
/// whatever flag or file surface it exposes; [`CheckConfig::default`] matches
/// the tool's documented defaults.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Suppress return diagnostics for functions that only ever return
    /// `None` (including functions with no return statement at all).
    pub suppress_none_returning: bool,
    /// Suppress argument diagnostics for dummy arguments, defined as `_`.
    pub suppress_dummy_args: bool,
    /// Suppress all diagnostics for dynamically typed functions.
    pub allow_untyped_defs: bool,
    /// Suppress all diagnostics for dynamically typed nested functions.
    pub allow_untyped_nested: bool,
    /// Allow omitting the return hint on `__init__` when at least one
    /// argument is annotated, per mypy's convention.
    pub mypy_init_return: bool,
    /// Decorators marking a function as a generic-dispatch entry point,
    /// exempting it from annotation requirements entirely.
    pub dispatch_decorators: HashSet<String>,
    /// Decorators marking a definition as part of an overload series.
    pub overload_decorators: HashSet<String>,
}

/// Default dispatch decorator names.
pub const DEFAULT_DISPATCH_DECORATORS: [&str; 2] = ["singledispatch", "singledispatchmethod"];

/// Default overload decorator names.
pub const DEFAULT_OVERLOAD_DECORATORS: [&str; 1] = ["overload"];

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            suppress_none_returning: false,
            suppress_dummy_args: false,
            allow_untyped_defs: false,
            allow_untyped_nested: false,
            mypy_init_return: false,
            dispatch_decorators: DEFAULT_DISPATCH_DECORATORS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            overload_decorators: DEFAULT_OVERLOAD_DECORATORS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
