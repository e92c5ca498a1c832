//! Structural decorator matching.
//!
//! Decorators reach the core as a small tagged union rather than syntax
//! nodes; the frontend lowers whatever expression follows the `@` into a
//! [`DecoratorExpr`] and everything downstream stays parser-independent.

use std::collections::HashSet;

/// The shape of a decorator expression.
///
/// Decorators are assumed to be of the following form:
///   * `name` or `name()`
///   * `a.name` or `a.name()`
///
/// For the attribute form only the final attribute is kept; the qualifying
/// prefix is discarded at extraction time. `typing.overload` and `overload`
/// therefore match identically, which can false-positive on unrelated
/// same-named decorators from other modules. That is accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorExpr {
    /// Bare name: `@overload`
    Name(String),
    /// Module attribute: `@typing.overload` (final attribute only)
    Attribute { attr: String },
    /// Call wrapping either of the above: `@overload()`, `@typing.overload()`
    Call(Box<DecoratorExpr>),
    /// Anything else (subscripts, lambdas, ...): never matches
    Opaque,
}

/// Check a decorator for a match against the provided set of names.
///
/// Call expressions recurse into the called expression; call arguments are
/// ignored.
pub fn decorator_matches(decorator: &DecoratorExpr, check_decorators: &HashSet<String>) -> bool {
    match decorator {
        DecoratorExpr::Name(name) => check_decorators.contains(name),
        DecoratorExpr::Attribute { attr } => check_decorators.contains(attr),
        DecoratorExpr::Call(inner) => decorator_matches(inner, check_decorators),
        DecoratorExpr::Opaque => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> HashSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn bare_name() {
        let check = names(&["overload"]);
        assert!(decorator_matches(
            &DecoratorExpr::Name("overload".into()),
            &check
        ));
        assert!(!decorator_matches(
            &DecoratorExpr::Name("override".into()),
            &check
        ));
    }

    #[test]
    fn attribute_matches_on_final_name_only() {
        let check = names(&["overload"]);
        assert!(decorator_matches(
            &DecoratorExpr::Attribute {
                attr: "overload".into()
            },
            &check
        ));
        // The prefix is not consulted, so an unrelated module matches too
        assert!(decorator_matches(
            &DecoratorExpr::Attribute {
                attr: "overload".into()
            },
            &names(&["overload"])
        ));
    }

    #[test]
    fn call_recurses_into_callee() {
        let check = names(&["singledispatch"]);
        let call = DecoratorExpr::Call(Box::new(DecoratorExpr::Attribute {
            attr: "singledispatch".into(),
        }));
        assert!(decorator_matches(&call, &check));

        let nested = DecoratorExpr::Call(Box::new(call));
        assert!(decorator_matches(&nested, &check));
    }

    #[test]
    fn opaque_never_matches() {
        let check = names(&["overload"]);
        assert!(!decorator_matches(&DecoratorExpr::Opaque, &check));
        assert!(!decorator_matches(
            &DecoratorExpr::Call(Box::new(DecoratorExpr::Opaque)),
            &check
        ));
    }
}
