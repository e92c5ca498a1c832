//! Return-statement scanning for the only-`None`-returns property.

use tree_sitter::Node;

/// Scan a function body for return statements.
///
/// True iff every `return` found is bare or returns the `None` literal;
/// vacuously true for a body with no return statements at all. The scan
/// covers the direct body only: nested function and class definitions own
/// their returns and are not descended into.
pub(crate) fn has_only_none_returns(body: Node<'_>) -> bool {
    let mut stack = vec![body];

    while let Some(node) = stack.pop() {
        if node.kind() == "return_statement" {
            if let Some(value) = return_value(node) {
                if !is_none_literal(value) {
                    return false;
                }
            }
            continue;
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "function_definition" | "class_definition" | "decorated_definition" => {}
                _ => stack.push(child),
            }
        }
    }

    true
}

fn return_value(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}

fn is_none_literal(mut node: Node<'_>) -> bool {
    // Parentheses are transparent: `return (None)` still counts
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => return false,
        }
    }
    node.kind() == "none"
}
