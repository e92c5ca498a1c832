//! Collection of function definitions from a parsed module.

use tree_sitter::{Node, Tree};

use annolint_core::Function;
use annolint_error::{Error, Result};

use crate::builder::build_function;
use crate::source::SourceFile;

/// The lexical context a definition is collected under.
///
/// Only class and function scopes matter to the model; every other node
/// passes its context through unchanged, so a definition inside an `if`
/// block of a class body is still a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParentScope {
    Module,
    Class,
    Function,
}

struct FunctionCollector<'s> {
    source: &'s SourceFile,
    functions: Vec<Function>,
}

impl<'s> FunctionCollector<'s> {
    fn visit(&mut self, node: Node<'_>, scope: ParentScope) -> Result<()> {
        match node.kind() {
            "function_definition" => self.visit_function(node, &[], scope),
            "decorated_definition" => self.visit_decorated(node, scope),
            "class_definition" => self.visit_children(node, ParentScope::Class),
            _ => self.visit_children(node, scope),
        }
    }

    fn visit_function(
        &mut self,
        node: Node<'_>,
        decorators: &[Node<'_>],
        scope: ParentScope,
    ) -> Result<()> {
        let function = build_function(self.source, node, decorators, scope)?;
        self.functions.push(function);

        // Nested definitions live inside the body
        if let Some(body) = node.child_by_field_name("body") {
            self.visit_children(body, ParentScope::Function)?;
        }
        Ok(())
    }

    fn visit_decorated(&mut self, node: Node<'_>, scope: ParentScope) -> Result<()> {
        let mut cursor = node.walk();
        let decorators: Vec<Node> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .collect();

        let definition = node.child_by_field_name("definition").ok_or_else(|| {
            Error::malformed_node("decorated definition without a definition")
                .with_operation("python::collect_functions")
        })?;

        match definition.kind() {
            "function_definition" => self.visit_function(definition, &decorators, scope),
            "class_definition" => self.visit_children(definition, ParentScope::Class),
            _ => Ok(()),
        }
    }

    fn visit_children(&mut self, node: Node<'_>, scope: ParentScope) -> Result<()> {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, scope)?;
        }
        Ok(())
    }
}

/// Collect every function definition in the module, in source order.
///
/// Pre-order traversal: an outer function is recorded before the
/// definitions nested inside it.
pub fn collect_functions(source: &SourceFile, tree: &Tree) -> Result<Vec<Function>> {
    let mut collector = FunctionCollector {
        source,
        functions: Vec::new(),
    };
    collector.visit(tree.root_node(), ParentScope::Module)?;

    tracing::trace!(
        file = source.path().unwrap_or("<memory>"),
        functions = collector.functions.len(),
        "collected function definitions"
    );

    Ok(collector.functions)
}
