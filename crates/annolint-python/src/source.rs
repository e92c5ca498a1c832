//! Source file handling and tree-sitter parsing.

use annolint_error::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// One Python source file, kept both whole and split into lines.
///
/// The line table exists for the colon seeker, which needs to search raw
/// header lines; everything else reads node text through byte ranges.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: Option<String>,
    source: String,
    lines: Vec<String>,
}

impl SourceFile {
    /// Wrap in-memory source, e.g. stdin input or a test fixture.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let lines = source.lines().map(str::to_string).collect();
        Self {
            path: None,
            source,
            lines,
        }
    }

    /// Read a source file from disk.
    pub fn from_path(path: &str) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).with_context("path", path))?;
        let mut file = Self::new(source);
        file.path = Some(path.to_string());
        Ok(file)
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Line at a 0-indexed row, without its terminator.
    pub(crate) fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Text covered by a node. Nodes always span valid UTF-8 here since the
    /// source is a `String`.
    pub(crate) fn text(&self, node: &Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Parse one source file into a syntax tree.
///
/// tree-sitter recovers from most malformed input instead of failing, so a
/// missing tree or a tree containing error nodes is reported as fatal for
/// the file; the caller decides how to surface that.
pub fn parse_module(source: &SourceFile) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|err| {
            Error::parse_failed("failed to load the Python grammar")
                .with_operation("python::parse_module")
                .set_source(err)
        })?;

    let tree = parser.parse(source.source(), None).ok_or_else(|| {
        Error::parse_failed("tree-sitter produced no tree")
            .with_operation("python::parse_module")
            .with_context("file", source.path().unwrap_or("<memory>"))
    })?;

    if tree.root_node().has_error() {
        return Err(Error::syntax_error("source contains syntax errors")
            .with_operation("python::parse_module")
            .with_context("file", source.path().unwrap_or("<memory>")));
    }

    Ok(tree)
}
