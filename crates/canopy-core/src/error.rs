//! Error types for source access and parsing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while reading or parsing a source file.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No grammar is registered for the file's extension.
    #[error("unsupported language for {0}")]
    UnsupportedLanguage(PathBuf),

    /// The grammar could not be loaded into the parser
    /// (version mismatch between grammar and runtime).
    #[error("failed to set language: {0}")]
    Language(String),

    /// The parser returned no tree at all.
    ///
    /// Distinct from a tree that parsed with recoverable syntax errors;
    /// those are reported through the nodes' `has_error` flag.
    #[error("parser produced no tree for {0}")]
    NoTree(PathBuf),
}

impl ParseError {
    /// Creates an Io error with path context.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
