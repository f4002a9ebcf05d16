//! Language registry mapping file extensions to tree-sitter grammars.

use tree_sitter::Language;

/// Extensions with a registered grammar, grouped by language.
const C_EXTENSIONS: &[&str] = &["c", "h"];
const CPP_EXTENSIONS: &[&str] = &["cpp", "hpp", "cc", "hh", "cxx"];
const PYTHON_EXTENSIONS: &[&str] = &["py"];
const RUST_EXTENSIONS: &[&str] = &["rs"];

/// Looks up the grammar for a file extension.
///
/// Returns `None` for extensions without a registered grammar; the caller
/// decides whether that is an error.
pub fn language_for_extension(ext: &str) -> Option<Language> {
    if C_EXTENSIONS.contains(&ext) {
        Some(tree_sitter_c::language())
    } else if CPP_EXTENSIONS.contains(&ext) {
        Some(tree_sitter_cpp::language())
    } else if PYTHON_EXTENSIONS.contains(&ext) {
        Some(tree_sitter_python::language())
    } else if RUST_EXTENSIONS.contains(&ext) {
        Some(tree_sitter_rust::language())
    } else {
        None
    }
}

/// All extensions the registry knows about.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    C_EXTENSIONS
        .iter()
        .chain(CPP_EXTENSIONS)
        .chain(PYTHON_EXTENSIONS)
        .chain(RUST_EXTENSIONS)
        .copied()
}
