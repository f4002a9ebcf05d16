//! Source parsing built on tree-sitter.
//!
//! The parser is an explicit handle owned by the caller and threaded
//! through materialization, not a process-wide singleton. Syntax errors in
//! the source are handled gracefully: the parser still returns a tree and
//! the affected nodes carry `has_error`.

use crate::error::{ParseError, Result};
use crate::languages::language_for_extension;
use std::fs;
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// A reusable parser handle over the registered grammars.
///
/// Holds one tree-sitter parser and switches its grammar per file based on
/// the file extension. Reuse the same handle across files to avoid
/// re-allocating parser state.
pub struct SourceParser {
    parser: Parser,
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser {
    /// Creates a new parser handle.
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Reads a file as raw bytes and parses it.
    ///
    /// Returns the tree together with the source bytes so callers can
    /// resolve node text spans against exactly the bytes that were parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its extension has no
    /// registered grammar, or the parser produces no tree.
    pub fn parse_file(&mut self, path: &Path) -> Result<(Tree, Vec<u8>)> {
        let source = fs::read(path).map_err(|e| ParseError::io(path, e))?;
        let tree = self.parse_bytes(&source, path)?;
        Ok((tree, source))
    }

    /// Parses in-memory source bytes, using `path` to pick the grammar.
    pub fn parse_bytes(&mut self, source: &[u8], path: &Path) -> Result<Tree> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.to_path_buf()))?;

        let language = language_for_extension(ext)
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.to_path_buf()))?;

        self.parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree(path.to_path_buf()))?;

        if tree.root_node().has_error() {
            tracing::debug!(path = %path.display(), "parsed with syntax errors");
        }

        Ok(tree)
    }

    /// Parses a source string directly (for tests or in-memory content).
    ///
    /// `extension` selects the grammar the same way a file extension would.
    pub fn parse_source(&mut self, source: &str, extension: &str) -> Result<Tree> {
        let path = Path::new("<memory>").with_extension(extension);
        self.parse_bytes(source.as_bytes(), &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_c_source() {
        let mut parser = SourceParser::new();
        let tree = parser.parse_source("int main() { return 0; }", "c").unwrap();

        let root = tree.root_node();
        assert_eq!(root.kind(), "translation_unit");
        assert!(!root.has_error());
    }

    #[test]
    fn test_parse_rust_source() {
        let mut parser = SourceParser::new();
        let tree = parser.parse_source("fn main() {}", "rs").unwrap();

        assert_eq!(tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_parse_python_source() {
        let mut parser = SourceParser::new();
        let tree = parser.parse_source("def f():\n    pass\n", "py").unwrap();

        assert_eq!(tree.root_node().kind(), "module");
    }

    #[test]
    fn test_syntax_errors_still_produce_tree() {
        let mut parser = SourceParser::new();
        let tree = parser.parse_source("int main( {", "c").unwrap();

        assert!(tree.root_node().has_error());
    }

    #[test]
    fn test_unsupported_extension() {
        let mut parser = SourceParser::new();
        let err = parser.parse_source("class A {}", "java").unwrap_err();

        assert!(matches!(err, ParseError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_missing_file() {
        let mut parser = SourceParser::new();
        let err = parser
            .parse_file(Path::new("/nonexistent/file.c"))
            .unwrap_err();

        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_parse_file_returns_source_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.c");
        fs::write(&path, "int x = 1;\n").unwrap();

        let mut parser = SourceParser::new();
        let (tree, source) = parser.parse_file(&path).unwrap();

        assert_eq!(source, b"int x = 1;\n");
        assert_eq!(tree.root_node().end_byte(), source.len());
    }
}
