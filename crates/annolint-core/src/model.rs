//! The per-function semantic model: [`Function`] and its [`Argument`] slots.
//!
//! Both types are value objects built once per function definition during a
//! single pass over a file. They stay immutable after construction, with one
//! exception: the legacy type-comment alignment pass
//! ([`crate::type_comment::align_type_comment`]) may flip annotation flags on
//! already-built arguments before the function reaches the checker.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::decorator::{DecoratorExpr, decorator_matches};

/// Reserved synthetic name for the return-type slot.
pub const RETURN_SLOT: &str = "return";

/// A (line, column) location in the source file.
///
/// Lines are 1-indexed and columns 0-indexed, matching the reporting
/// convention of Python linting hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Which kind of annotation slot an [`Argument`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum AnnotationType {
    Return,
    PosOnlyArg,
    Arg,
    Vararg,
    KwOnlyArg,
    Kwarg,
}

/// Name-derived visibility class of a function.
///
/// Derived once from the definition name; `Special` takes priority over
/// `Private` over `Protected` over `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum FunctionType {
    Public,
    Protected,
    Private,
    Special,
}

impl FunctionType {
    /// Classify a function by its name alone.
    ///
    /// Priority order:
    ///   1. Special: prefixed & suffixed by `__`
    ///   2. Private: prefixed by `__`
    ///   3. Protected: prefixed by `_`
    ///   4. Public: everything else
    pub fn from_name(name: &str) -> Self {
        if name.starts_with("__") && name.ends_with("__") {
            FunctionType::Special
        } else if name.starts_with("__") {
            FunctionType::Private
        } else if name.starts_with('_') {
            FunctionType::Protected
        } else {
            FunctionType::Public
        }
    }
}

/// Method-flavor decorator recognized on functions defined in a class body.
///
/// Only exact bare-name `classmethod`/`staticmethod` decorators count; call
/// expressions and attribute accesses are never recognized here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ClassDecoratorType {
    Classmethod,
    Staticmethod,
}

impl ClassDecoratorType {
    /// Derive the class decorator type from a decorator list.
    ///
    /// `classmethod` wins over `staticmethod` if both are present.
    pub fn from_decorators(decorators: &[DecoratorExpr]) -> Option<Self> {
        let names: Vec<&str> = decorators
            .iter()
            .filter_map(|decorator| match decorator {
                DecoratorExpr::Name(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();

        if names.contains(&"classmethod") {
            Some(ClassDecoratorType::Classmethod)
        } else if names.contains(&"staticmethod") {
            Some(ClassDecoratorType::Staticmethod)
        } else {
            None
        }
    }
}

/// One annotation slot of a function: a parameter or the return position.
///
/// Invariant: `has_type_annotation == has_inline_annotation || has_comment_annotation`.
/// Use [`Argument::mark_inline_annotation`] / [`Argument::mark_comment_annotation`]
/// to keep the flags consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub position: Position,
    pub annotation_type: AnnotationType,
    pub has_type_annotation: bool,
    pub has_inline_annotation: bool,
    pub has_comment_annotation: bool,
}

impl Argument {
    pub fn new(name: impl Into<String>, position: Position, annotation_type: AnnotationType) -> Self {
        Self {
            name: name.into(),
            position,
            annotation_type,
            has_type_annotation: false,
            has_inline_annotation: false,
            has_comment_annotation: false,
        }
    }

    /// Record an inline (signature-level) annotation on this slot.
    pub fn mark_inline_annotation(&mut self) {
        self.has_type_annotation = true;
        self.has_inline_annotation = true;
    }

    /// Record a legacy comment-style annotation on this slot.
    pub fn mark_comment_annotation(&mut self) {
        self.has_type_annotation = true;
        self.has_comment_annotation = true;
    }

    /// Whether this is the synthetic return slot.
    pub fn is_return_slot(&self) -> bool {
        self.name == RETURN_SLOT
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Argument: {}, Annotated: {}>",
            self.name, self.has_type_annotation
        )
    }
}

/// One function definition and the metadata the checker needs.
///
/// While Python differentiates between functions and methods, both are
/// modeled as `Function` here; `is_method` carries the distinction.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub position: Position,
    pub function_type: FunctionType,
    /// True if defined directly inside a class body.
    pub is_method: bool,
    pub class_decorator_type: Option<ClassDecoratorType>,
    pub is_return_annotated: bool,
    /// True if the function carries a function-level legacy type comment.
    pub has_comment_annotation: bool,
    /// True iff every explicit return in the direct body is bare or `None`.
    pub has_only_none_returns: bool,
    /// True if lexically defined inside another function.
    pub is_nested: bool,
    pub decorators: Vec<DecoratorExpr>,
    /// Declaration order: positional-only, positional-or-keyword, vararg,
    /// keyword-only, kwarg, then exactly one return slot last.
    pub arguments: Vec<Argument>,
}

impl Function {
    /// Check that every slot, including the return, is annotated.
    pub fn is_fully_annotated(&self) -> bool {
        self.arguments.iter().all(|arg| arg.has_type_annotation)
    }

    /// Determine if the function is dynamically typed, defined as completely
    /// lacking hints.
    pub fn is_dynamically_typed(&self) -> bool {
        !self.arguments.iter().any(|arg| arg.has_type_annotation)
    }

    /// Slots with missing type annotations, in declaration order.
    pub fn missing_annotations(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|arg| !arg.has_type_annotation)
    }

    /// Slots with type annotations, in declaration order.
    pub fn annotated_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|arg| arg.has_type_annotation)
    }

    /// The synthetic return slot (always the last argument).
    pub fn return_argument(&self) -> Option<&Argument> {
        self.arguments.last()
    }

    /// Determine whether the function is decorated by any of the provided
    /// decorator names.
    ///
    /// Matching is structural (bare name, final attribute of a module access,
    /// or a call wrapping either) and inspects only the first decorator in
    /// the list. Deeper inspection is deliberately not performed; existing
    /// configurations rely on this single-decorator policy.
    pub fn has_decorator(&self, check_decorators: &HashSet<String>) -> bool {
        self.decorators
            .first()
            .is_some_and(|decorator| decorator_matches(decorator, check_decorators))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "<Function: {}, Args: [{}]>", self.name, args)
    }
}
