//! Alignment of legacy function-level type comments with built arguments.
//!
//! Legacy single-comment annotations (`# type: (int, str) -> bool`) address
//! positions by index, not name, and conventionally omit the implicit
//! receiver of methods. The aligner reproduces the implicit-receiver
//! skipping a human reader applies mentally, then marks the paired slots.

use crate::model::{ClassDecoratorType, Function};

/// One slot of a parsed hint signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintSlot {
    /// A real hint, e.g. `int` or `*str`.
    Type(String),
    /// The literal ellipsis marker `...`: contributes no annotation.
    Placeholder,
}

/// A function-level type comment resolved into plain data.
///
/// Only produced for comments that parsed successfully; a malformed comment
/// is a fatal error for the owning function's model-building step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSignature {
    pub arg_hints: Vec<HintSlot>,
    pub return_hint: String,
}

impl HintSignature {
    pub fn new(arg_hints: Vec<HintSlot>, return_hint: impl Into<String>) -> Self {
        Self {
            arg_hints,
            return_hint: return_hint.into(),
        }
    }
}

/// Align a parsed hint signature with the function's arguments, marking the
/// slots the comment annotates.
///
/// These two methods must lint equivalently:
///
/// ```python
/// def bar(self, a):
///     # type: (int) -> int
///     ...
///
/// def bar(self, a: int) -> int:
///     ...
/// ```
///
/// When the comment is matched positionally against the method's arguments
/// it would associate the `int` hint with `self` rather than `a`, so a
/// placeholder slot is injected when both hold:
///   1. the function is a method (but not a staticmethod), and
///   2. the comment hints at least one fewer slot than the function has
///      parameters.
///
/// Pairing stops at the shorter of the two sequences; unmatched trailing
/// arguments are left unannotated by this path. The return slot is always
/// marked: a function-level comment is only syntactically valid if it
/// carries a return type.
pub fn align_type_comment(function: &mut Function, signature: &HintSignature) {
    // Subtract one for the synthetic return slot
    let param_count = function.arguments.len().saturating_sub(1);

    let inject_receiver = function.is_method
        && function.class_decorator_type != Some(ClassDecoratorType::Staticmethod)
        && signature.arg_hints.len() < param_count;
    let offset = usize::from(inject_receiver);

    for (index, argument) in function.arguments[..param_count].iter_mut().enumerate() {
        let Some(hint_index) = index.checked_sub(offset) else {
            continue;
        };
        if let Some(HintSlot::Type(_)) = signature.arg_hints.get(hint_index) {
            argument.mark_comment_annotation();
        }
    }

    if let Some(return_argument) = function.arguments.last_mut() {
        return_argument.mark_comment_annotation();
        function.is_return_annotated = true;
    }
}
