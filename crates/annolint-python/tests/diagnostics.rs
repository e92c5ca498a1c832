//! End-to-end diagnostic tests: source in, ordered ANN codes out.

use annolint_core::{CheckConfig, Diagnostic, DiagnosticCode};
use annolint_python::{SourceFile, check_source};
use pretty_assertions::assert_eq;

fn check(source: &str) -> Vec<Diagnostic> {
    check_with(source, &CheckConfig::default())
}

fn check_with(source: &str, config: &CheckConfig) -> Vec<Diagnostic> {
    let file = SourceFile::new(source);
    check_source(&file, config).expect("fixture checks")
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().map(|diagnostic| diagnostic.code).collect()
}

#[test]
fn fully_annotated_file_is_clean() {
    let diagnostics = check(
        "\
def add(a: int, b: int) -> int:
    return a + b

class Point:
    def __init__(self: \"Point\", x: int) -> None:
        self.x = x
",
    );
    assert_eq!(diagnostics, Vec::new());
}

#[test]
fn unannotated_function_reports_every_slot() {
    let diagnostics = check(
        "\
def f(a, b=1, *args, c, **kwargs):
    return a
",
    );

    assert_eq!(
        codes(&diagnostics),
        vec![
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann002,
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann003,
            DiagnosticCode::Ann201,
        ]
    );

    let symbols: Vec<&str> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["a", "b", "args", "c", "kwargs", "return"]);
}

#[test]
fn method_receiver_and_return_codes() {
    let diagnostics = check(
        "\
class Shape:
    def area(self):
        return 1

    @classmethod
    def make(cls):
        return Shape()

    @staticmethod
    def helper(x):
        return x

    def __repr__(self):
        return \"\"
",
    );

    assert_eq!(
        codes(&diagnostics),
        vec![
            DiagnosticCode::Ann101,
            DiagnosticCode::Ann201,
            DiagnosticCode::Ann102,
            DiagnosticCode::Ann206,
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann205,
            DiagnosticCode::Ann101,
            DiagnosticCode::Ann204,
        ]
    );
}

#[test]
fn name_derived_return_codes() {
    let diagnostics = check(
        "\
def pub() -> None: ...
def work(): ...
def _shy(): ...
def __hidden(): ...
def __weird__(): ...
",
    );

    assert_eq!(
        codes(&diagnostics),
        vec![
            DiagnosticCode::Ann201,
            DiagnosticCode::Ann202,
            DiagnosticCode::Ann203,
            DiagnosticCode::Ann204,
        ]
    );
}

#[test]
fn comment_and_inline_styles_classify_identically() {
    let commented = check(
        "\
class C:
    def bar(self, a):
        # type: (int) -> int
        return a
",
    );
    let inline = check(
        "\
class C:
    def bar(self, a: int) -> int:
        return a
",
    );

    assert_eq!(codes(&commented), codes(&inline));
    assert_eq!(codes(&inline), vec![DiagnosticCode::Ann101]);
}

#[test]
fn mixed_styles_emit_one_ann301() {
    let diagnostics = check(
        "\
def mixed(a: int, b):
    # type: (int, str) -> bool
    return True
",
    );

    let mixed: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.code == DiagnosticCode::Ann301)
        .collect();
    assert_eq!(mixed.len(), 1);
    assert_eq!(mixed[0].position.line, 1);
}

#[test]
fn ann301_does_not_suppress_missing_slots() {
    let diagnostics = check(
        "\
def mixed(a: int, b, c):
    # type: (int, str) -> bool
    return True
",
    );

    // b pairs with str, c is left unhinted: one mix report plus the miss
    assert_eq!(
        codes(&diagnostics),
        vec![DiagnosticCode::Ann301, DiagnosticCode::Ann001]
    );
    assert_eq!(diagnostics[1].symbol, "c");
}

#[test]
fn overload_series_only_opens_once() {
    let diagnostics = check(
        "\
from typing import overload

@overload
def frobnicate(a: int) -> int: ...

@typing.overload
def frobnicate(a: str) -> str: ...

def frobnicate(a):
    return a
",
    );

    // The closing definition is exempt even though it is unannotated
    assert_eq!(diagnostics, Vec::new());
}

#[test]
fn overload_collapse_is_name_scoped() {
    let diagnostics = check(
        "\
@overload
def f(a: int) -> int: ...

def g(a):
    return a
",
    );

    // g never matched the pending overload name, so it reports normally
    assert_eq!(
        codes(&diagnostics),
        vec![DiagnosticCode::Ann001, DiagnosticCode::Ann201]
    );
}

#[test]
fn dispatch_decorated_functions_are_exempt() {
    let diagnostics = check(
        "\
@singledispatch
def process(arg, verbose=False):
    pass

@functools.singledispatchmethod
def handle(arg):
    pass
",
    );
    assert_eq!(diagnostics, Vec::new());
}

#[test]
fn only_the_first_decorator_is_inspected() {
    let diagnostics = check(
        "\
@wraps(f)
@singledispatch
def process(arg):
    pass
",
    );

    // The dispatch marker sits second, so the exemption does not apply
    assert_eq!(
        codes(&diagnostics),
        vec![DiagnosticCode::Ann001, DiagnosticCode::Ann201]
    );
}

#[test]
fn allow_untyped_defs_skips_dynamic_functions() {
    let source = "\
def untyped(a, b):
    return a

def partial(a: int, b):
    return a
";
    let config = CheckConfig {
        allow_untyped_defs: true,
        ..CheckConfig::default()
    };

    let diagnostics = check_with(source, &config);
    // Only the partially annotated function reports
    assert!(diagnostics.iter().all(|d| d.position.line >= 4));
    assert_eq!(
        codes(&diagnostics),
        vec![DiagnosticCode::Ann001, DiagnosticCode::Ann201]
    );
}

#[test]
fn allow_untyped_nested_skips_dynamic_inner_functions() {
    let source = "\
def outer(a: int) -> int:
    def inner(x):
        return x
    return a
";

    let unrestricted = check(source);
    assert_eq!(
        codes(&unrestricted),
        vec![DiagnosticCode::Ann001, DiagnosticCode::Ann201]
    );

    let config = CheckConfig {
        allow_untyped_nested: true,
        ..CheckConfig::default()
    };
    assert_eq!(check_with(source, &config), Vec::new());
}

#[test]
fn suppress_none_returning_covers_bare_and_none_returns() {
    let source = "\
def log(msg: str):
    print(msg)

def reset(flag: bool):
    if flag:
        return
    return None

def fetch(url: str):
    return url
";
    let config = CheckConfig {
        suppress_none_returning: true,
        ..CheckConfig::default()
    };

    let diagnostics = check_with(source, &config);
    assert_eq!(codes(&diagnostics), vec![DiagnosticCode::Ann201]);
    assert_eq!(diagnostics[0].position.line, 9);
}

#[test]
fn mypy_init_return_requires_an_annotated_argument() {
    let annotated = "\
class C:
    def __init__(self, x: int):
        self.x = x
";
    let unannotated = "\
class C:
    def __init__(self, x):
        self.x = x
";
    let config = CheckConfig {
        mypy_init_return: true,
        ..CheckConfig::default()
    };

    let diagnostics = check_with(annotated, &config);
    assert_eq!(codes(&diagnostics), vec![DiagnosticCode::Ann101]);

    let diagnostics = check_with(unannotated, &config);
    assert!(diagnostics.iter().any(|d| d.code == DiagnosticCode::Ann204));
}

#[test]
fn dummy_arguments_are_suppressed_on_request() {
    let source = "\
def callback(_, value: int) -> None:
    return None
";

    let unrestricted = check(source);
    assert_eq!(codes(&unrestricted), vec![DiagnosticCode::Ann001]);
    assert_eq!(unrestricted[0].symbol, "_");

    let config = CheckConfig {
        suppress_dummy_args: true,
        ..CheckConfig::default()
    };
    assert_eq!(check_with(source, &config), Vec::new());
}

#[test]
fn diagnostics_point_at_the_missing_slot() {
    let diagnostics = check(
        "\
def f(a):
    return a
",
    );

    assert_eq!(diagnostics.len(), 2);
    // `a` sits at line 1 column 6, the closing colon at column 8
    assert_eq!(
        (diagnostics[0].position.line, diagnostics[0].position.column),
        (1, 6)
    );
    assert_eq!(
        (diagnostics[1].position.line, diagnostics[1].position.column),
        (1, 8)
    );
}

#[test]
fn rerunning_the_pipeline_is_byte_identical() {
    let source = "\
class Grid:
    def __init__(self, w, h):
        self.w = w
        self.h = h

    def resize(self, w: int, h: int):
        # type: (...) -> None
        self.w = w

def main(argv):
    return 0
";
    let config = CheckConfig::default();

    let render = |diagnostics: &[Diagnostic]| {
        diagnostics
            .iter()
            .map(|d| format!("{}:{}: {}", d.position.line, d.position.column, d))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let first = render(&check_with(source, &config));
    let second = render(&check_with(source, &config));
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
