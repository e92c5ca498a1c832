//! # annolint-error
//!
//! Unified error handling for annolint - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ParseFailed, TypeCommentInvalid)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use annolint_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::TypeCommentInvalid, "missing return hint")
//!         .with_operation("python::resolve_type_comment")
//!         .with_context("file", "pkg/api.py")
//!         .with_context("line", "42"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, annolint_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using annolint Error
pub type Result<T> = std::result::Result<T, Error>;
