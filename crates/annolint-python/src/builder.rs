//! Builds the semantic model for one function definition node.

use tree_sitter::Node;

use annolint_core::{
    AnnotationType, Argument, ClassDecoratorType, DecoratorExpr, Function, FunctionType, Position,
    RETURN_SLOT, align_type_comment,
};
use annolint_error::{Error, Result};

use crate::collect::ParentScope;
use crate::returns::has_only_none_returns;
use crate::source::SourceFile;
use crate::type_comment::{function_type_comment, resolve_hint_signature, type_comment_hint};

/// Build a [`Function`] from a `function_definition` node and the context it
/// was collected under.
///
/// `decorator_nodes` are the `decorator` children of an enclosing
/// `decorated_definition`, if any; an undecorated definition passes an empty
/// slice.
pub(crate) fn build_function(
    source: &SourceFile,
    node: Node<'_>,
    decorator_nodes: &[Node<'_>],
    scope: ParentScope,
) -> Result<Function> {
    let name_node = node.child_by_field_name("name").ok_or_else(|| {
        Error::malformed_node("function definition without a name")
            .with_operation("python::build_function")
    })?;
    let name = source.text(&name_node).to_string();
    let function_type = FunctionType::from_name(&name);

    let decorators = lower_decorators(source, decorator_nodes);
    let is_method = scope == ParentScope::Class;
    let class_decorator_type = if is_method {
        ClassDecoratorType::from_decorators(&decorators)
    } else {
        None
    };

    let start = node.start_position();
    let mut function = Function {
        name,
        position: Position::new(start.row + 1, start.column),
        function_type,
        is_method,
        class_decorator_type,
        is_return_annotated: false,
        has_comment_annotation: false,
        has_only_none_returns: true,
        is_nested: scope == ParentScope::Function,
        decorators,
        arguments: Vec::new(),
    };

    build_parameters(source, node, &mut function);

    let body = node.child_by_field_name("body").ok_or_else(|| {
        Error::malformed_node("function definition without a body")
            .with_operation("python::build_function")
            .with_context("function", function.name.clone())
    })?;
    let first_statement = first_body_statement(body);

    let mut return_argument = Argument::new(
        RETURN_SLOT,
        locate_def_colon(source, node, first_statement),
        AnnotationType::Return,
    );
    if node.child_by_field_name("return_type").is_some() {
        return_argument.mark_inline_annotation();
        function.is_return_annotated = true;
    }
    function.arguments.push(return_argument);

    // A function-level type comment is aligned after all slots exist; its
    // hints may flip annotation flags on the arguments built above
    if let Some(hint) = function_type_comment(source, node, body, first_statement) {
        let signature = resolve_hint_signature(&hint).map_err(|err| {
            err.with_operation("python::build_function")
                .with_context("function", function.name.clone())
                .with_context("line", function.position.line.to_string())
        })?;
        function.has_comment_annotation = true;
        align_type_comment(&mut function, &signature);
    }

    function.has_only_none_returns = has_only_none_returns(body);

    Ok(function)
}

/// How a parameter binds its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splat {
    None,
    List,
    Dict,
}

struct ParameterParts<'t> {
    name: String,
    name_node: Node<'t>,
    has_inline_annotation: bool,
    splat: Splat,
}

fn build_parameters(source: &SourceFile, node: Node<'_>, function: &mut Function) {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return;
    };

    let mut cursor = parameters.walk();
    let entries: Vec<Node> = parameters.children(&mut cursor).collect();

    // Parameters before a `/` separator are positional-only
    let positional_end = entries
        .iter()
        .position(|entry| matches!(entry.kind(), "positional_separator" | "/"));

    let mut keyword_only = false;
    // (argument index, row the parameter ends on) for comment attachment
    let mut last_parameter: Option<(usize, usize)> = None;

    for (index, entry) in entries.iter().enumerate() {
        match entry.kind() {
            "keyword_separator" | "*" => {
                keyword_only = true;
                continue;
            }
            "comment" => {
                // A `# type:` comment inside the parameter list annotates the
                // last parameter ending on its line
                let Some((argument_index, end_row)) = last_parameter else {
                    continue;
                };
                if entry.start_position().row != end_row {
                    continue;
                }
                if type_comment_hint(source.text(entry)).is_some() {
                    if let Some(argument) = function.arguments.get_mut(argument_index) {
                        argument.mark_comment_annotation();
                    }
                }
                continue;
            }
            _ => {}
        }

        let Some(parts) = parameter_parts(source, *entry) else {
            continue;
        };

        let annotation_type = match parts.splat {
            Splat::List => AnnotationType::Vararg,
            Splat::Dict => AnnotationType::Kwarg,
            Splat::None if keyword_only => AnnotationType::KwOnlyArg,
            Splat::None if positional_end.is_some_and(|end| index < end) => {
                AnnotationType::PosOnlyArg
            }
            Splat::None => AnnotationType::Arg,
        };
        if parts.splat == Splat::List {
            // Anything after *args is keyword-only
            keyword_only = true;
        }

        let name_start = parts.name_node.start_position();
        let mut argument = Argument::new(
            parts.name,
            Position::new(name_start.row + 1, name_start.column),
            annotation_type,
        );
        if parts.has_inline_annotation {
            argument.mark_inline_annotation();
        }

        last_parameter = Some((function.arguments.len(), entry.end_position().row));
        function.arguments.push(argument);
    }
}

/// Pick apart one parameter node into its name, annotation presence, and
/// splat kind. Shapes outside the grammar's parameter inventory (the bare
/// separators are handled by the caller) yield `None`.
fn parameter_parts<'t>(source: &SourceFile, node: Node<'t>) -> Option<ParameterParts<'t>> {
    match node.kind() {
        "identifier" => Some(ParameterParts {
            name: source.text(&node).to_string(),
            name_node: node,
            has_inline_annotation: false,
            splat: Splat::None,
        }),
        "typed_parameter" => {
            let inner = node.named_child(0)?;
            let mut parts = parameter_parts(source, inner)?;
            parts.has_inline_annotation = true;
            Some(parts)
        }
        "default_parameter" | "typed_default_parameter" => {
            let name_node = node.child_by_field_name("name")?;
            if name_node.kind() != "identifier" {
                return None;
            }
            Some(ParameterParts {
                name: source.text(&name_node).to_string(),
                name_node,
                has_inline_annotation: node.kind() == "typed_default_parameter",
                splat: Splat::None,
            })
        }
        "list_splat_pattern" => {
            let inner = node.named_child(0)?;
            Some(ParameterParts {
                name: source.text(&inner).to_string(),
                name_node: inner,
                has_inline_annotation: false,
                splat: Splat::List,
            })
        }
        "dictionary_splat_pattern" => {
            let inner = node.named_child(0)?;
            Some(ParameterParts {
                name: source.text(&inner).to_string(),
                name_node: inner,
                has_inline_annotation: false,
                splat: Splat::Dict,
            })
        }
        _ => None,
    }
}

/// First non-comment statement of a block. The grammar guarantees at least
/// one statement; the block itself is returned if that ever fails to hold.
fn first_body_statement(body: Node<'_>) -> Node<'_> {
    let mut cursor = body.walk();
    let statement = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    statement.unwrap_or(body)
}

/// Locate the definition's closing colon.
///
/// The position gives return-slot diagnostics an accurate column and
/// carries no semantic weight. Single-line definitions search the header
/// line strictly between the definition start and the first body statement;
/// multi-line definitions take the line immediately preceding the first
/// body statement. In both cases the *last* colon wins, skipping any
/// slice or lambda colons appearing in default values and any trailing
/// comments sharing the line.
fn locate_def_colon(source: &SourceFile, node: Node<'_>, first_statement: Node<'_>) -> Position {
    let def_start = node.start_position();
    let body_start = first_statement.start_position();

    if def_start.row == body_start.row {
        let column = source
            .line(def_start.row)
            .map(|line| {
                let bytes = line.as_bytes();
                let end = body_start.column.min(bytes.len());
                let start = def_start.column.min(end);
                bytes[start..end]
                    .iter()
                    .rposition(|&byte| byte == b':')
                    .map(|offset| start + offset)
                    .unwrap_or(0)
            })
            .unwrap_or(0);
        return Position::new(def_start.row + 1, column);
    }

    let row = body_start.row.saturating_sub(1);
    let column = source
        .line(row)
        .and_then(|line| line.bytes().rposition(|byte| byte == b':'))
        .unwrap_or(0);
    Position::new(row + 1, column)
}

fn lower_decorators(source: &SourceFile, nodes: &[Node<'_>]) -> Vec<DecoratorExpr> {
    nodes
        .iter()
        .filter_map(|node| {
            let expression = node
                .named_children(&mut node.walk())
                .find(|child| child.kind() != "comment")?;
            Some(lower_decorator_expr(source, expression))
        })
        .collect()
}

fn lower_decorator_expr(source: &SourceFile, node: Node<'_>) -> DecoratorExpr {
    match node.kind() {
        "identifier" => DecoratorExpr::Name(source.text(&node).to_string()),
        "attribute" => match node.child_by_field_name("attribute") {
            Some(attribute) => DecoratorExpr::Attribute {
                attr: source.text(&attribute).to_string(),
            },
            None => DecoratorExpr::Opaque,
        },
        "call" => match node.child_by_field_name("function") {
            Some(callee) => DecoratorExpr::Call(Box::new(lower_decorator_expr(source, callee))),
            None => DecoratorExpr::Opaque,
        },
        _ => DecoratorExpr::Opaque,
    }
}
