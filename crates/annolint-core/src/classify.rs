//! Classification of a confirmed-missing annotation position into its
//! diagnostic code.
//!
//! Both functions are pure decision tables over discrete inputs; the
//! exhaustive matches double as the build-time totality guarantee, so adding
//! an enum variant without extending the table is a compile error. Callers
//! guarantee the input corresponds to a real missing position; no existence
//! checks happen here.

use crate::diag::DiagnosticCode;
use crate::model::{AnnotationType, ClassDecoratorType, FunctionType};

/// Classify a missing return-type annotation.
///
/// Decorated class methods (`@classmethod`, `@staticmethod`) have a higher
/// priority than the name-derived function type.
pub fn classify_return(
    is_method: bool,
    class_decorator_type: Option<ClassDecoratorType>,
    function_type: FunctionType,
) -> DiagnosticCode {
    if is_method {
        match class_decorator_type {
            Some(ClassDecoratorType::Classmethod) => return DiagnosticCode::Ann206,
            Some(ClassDecoratorType::Staticmethod) => return DiagnosticCode::Ann205,
            None => {}
        }
    }

    match function_type {
        FunctionType::Special => DiagnosticCode::Ann204,
        FunctionType::Private => DiagnosticCode::Ann203,
        FunctionType::Protected => DiagnosticCode::Ann202,
        FunctionType::Public => DiagnosticCode::Ann201,
    }
}

/// Classify a missing argument annotation.
///
/// The first argument of a non-static method is the receiver (`self` or
/// `cls`) and gets its own codes; everything else classifies by slot kind.
pub fn classify_argument(
    is_method: bool,
    is_first_argument: bool,
    class_decorator_type: Option<ClassDecoratorType>,
    annotation_type: AnnotationType,
) -> DiagnosticCode {
    if is_method && is_first_argument {
        match class_decorator_type {
            Some(ClassDecoratorType::Classmethod) => return DiagnosticCode::Ann102,
            Some(ClassDecoratorType::Staticmethod) => {}
            None => return DiagnosticCode::Ann101,
        }
    }

    match annotation_type {
        AnnotationType::Kwarg => DiagnosticCode::Ann003,
        AnnotationType::Vararg => DiagnosticCode::Ann002,
        // POSONLYARG, ARG, and KWONLYARG share a code
        AnnotationType::PosOnlyArg
        | AnnotationType::Arg
        | AnnotationType::KwOnlyArg
        | AnnotationType::Return => DiagnosticCode::Ann001,
    }
}
