//! The per-file emission pass: suppression checks, mixed-style detection,
//! the overload-series state machine, and classification dispatch.

use tracing::trace;

use crate::classify::{classify_argument, classify_return};
use crate::config::CheckConfig;
use crate::diag::{Diagnostic, DiagnosticCode};
use crate::model::Function;

/// Name that marks an intentionally unused argument.
const DUMMY_ARGUMENT: &str = "_";

/// Check one file's worth of functions and produce its diagnostic stream.
///
/// `functions` must be in source order; emission order is then fully
/// deterministic: functions in source order, positions within a function in
/// declaration order, return last. The only cross-function state is the
/// pending-overload name, which lives on this call's stack and is therefore
/// scoped per file.
pub fn check_functions(functions: &[Function], config: &CheckConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    // Name of the most recent function decorated by a configured overload
    // decorator, not yet closed by a non-overload definition of the same
    // name. A series of overload-decorated definitions must be followed by
    // exactly one non-decorated definition of the same function; only that
    // closing definition is subject to per-position diagnostics.
    let mut pending_overload_name: Option<&str> = None;

    for function in functions {
        if function.is_dynamically_typed() {
            if config.allow_untyped_defs {
                continue;
            }
            if function.is_nested && config.allow_untyped_nested {
                continue;
            }
        }

        // Dispatch entry points are exempt from annotation requirements
        if function.has_decorator(&config.dispatch_decorators) {
            continue;
        }

        // Mixing legacy comments with inline annotations: emit once per
        // definition, confirmed by the first comment/inline pair found. This
        // does not suppress the remaining steps.
        let mut saw_comment_annotation = function.has_comment_annotation;
        let mut saw_inline_annotation = false;
        for argument in function.annotated_arguments() {
            if argument.has_comment_annotation {
                saw_comment_annotation = true;
            }
            if argument.has_inline_annotation {
                saw_inline_annotation = true;
            }
            if saw_comment_annotation && saw_inline_annotation {
                diagnostics.push(Diagnostic::new(
                    function.position,
                    DiagnosticCode::Ann301,
                    function.name.clone(),
                ));
                break;
            }
        }

        if pending_overload_name == Some(function.name.as_str()) {
            continue;
        }
        if function.has_decorator(&config.overload_decorators) {
            pending_overload_name = Some(function.name.as_str());
        }

        for (index, argument) in function.arguments.iter().enumerate() {
            if argument.has_type_annotation {
                continue;
            }

            if argument.is_return_slot() {
                // Return diagnostics have multiple short-circuit paths
                if config.suppress_none_returning && function.has_only_none_returns {
                    continue;
                }
                if config.mypy_init_return
                    && function.is_method
                    && function.name == "__init__"
                    && function.annotated_arguments().next().is_some()
                {
                    continue;
                }
            }

            if argument.name == DUMMY_ARGUMENT && config.suppress_dummy_args {
                continue;
            }

            let code = if argument.is_return_slot() {
                classify_return(
                    function.is_method,
                    function.class_decorator_type,
                    function.function_type,
                )
            } else {
                classify_argument(
                    function.is_method,
                    index == 0,
                    function.class_decorator_type,
                    argument.annotation_type,
                )
            };

            diagnostics.push(Diagnostic::new(
                argument.position,
                code,
                argument.name.clone(),
            ));
        }
    }

    trace!(
        functions = functions.len(),
        diagnostics = diagnostics.len(),
        "file checked"
    );

    diagnostics
}
