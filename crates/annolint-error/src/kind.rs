//! Error kinds for annolint operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse source code into a tree
    ParseFailed,

    /// Invalid syntax in source file
    SyntaxError,

    /// Encoding error (invalid UTF-8, etc.)
    EncodingError,

    // =========================================================================
    // Model errors
    // =========================================================================
    /// A function-level `# type:` comment failed to resolve into a hint signature
    TypeCommentInvalid,

    /// A syntax node lacked a shape the model builder requires
    MalformedNode,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    /// Invariant violation
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(
            ErrorKind::TypeCommentInvalid.to_string(),
            "TypeCommentInvalid"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::IoFailed.is_retryable());
        assert!(!ErrorKind::ParseFailed.is_retryable());
        assert!(!ErrorKind::TypeCommentInvalid.is_retryable());
    }
}
