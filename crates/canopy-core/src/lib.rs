//! Canopy Core - Source access and parsing
//!
//! This crate owns the path from a file on disk to a concrete syntax tree:
//! reading raw source bytes, picking a grammar from the file extension, and
//! driving tree-sitter. Everything downstream (the syntax graph) lives in
//! `canopy-graph`.
//!
//! # Example
//!
//! ```no_run
//! use canopy_core::SourceParser;
//! use std::path::Path;
//!
//! let mut parser = SourceParser::new();
//! let (tree, source) = parser.parse_file(Path::new("main.c")).unwrap();
//! assert_eq!(tree.root_node().kind(), "translation_unit");
//! ```

mod error;
mod languages;
mod parser;

pub use error::{ParseError, Result};
pub use languages::{language_for_extension, supported_extensions};
pub use parser::SourceParser;
