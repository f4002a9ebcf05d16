//! Label and color classification for graph nodes.
//!
//! Labels keep a rendered graph legible: named nodes get their grammar kind
//! plus a short snippet of the source they span, anonymous tokens are
//! self-descriptive and keep the bare kind. Colors encode a three-tier
//! hierarchy: root, named, anonymous.

use serde::{Deserialize, Serialize};

/// Maximum number of characters of source kept in a label snippet.
pub const MAX_SNIPPET_LEN: usize = 27;

/// Display color for a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    /// The tree root, regardless of named status.
    Red,
    /// Named nodes (meaningful grammar productions).
    Black,
    /// Anonymous tokens such as punctuation.
    Gray,
}

impl NodeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Gray => "gray",
        }
    }
}

impl std::fmt::Display for NodeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computes the display label for a node.
///
/// Anonymous tokens keep their kind unchanged. Named nodes get the kind on
/// the first line and a snippet of their source text on the second: the
/// first line of the text, at most [`MAX_SNIPPET_LEN`] characters, with
/// `"..."` appended when the text spans multiple lines or the first line
/// was longer than the cap.
pub fn node_label(kind: &str, text: &str, is_named: bool) -> String {
    if !is_named {
        return kind.to_string();
    }

    let mut lines = text.lines();
    let snippet = match lines.next() {
        None => String::new(),
        Some(first) => {
            let mut snippet: String = first.chars().take(MAX_SNIPPET_LEN).collect();
            let over_length = first.chars().count() > MAX_SNIPPET_LEN;
            if over_length || lines.next().is_some() {
                snippet.push_str("...");
            }
            snippet
        }
    };

    format!("{}\n{}", kind, snippet)
}

/// Computes the display color for a node. Root takes priority.
pub fn node_color(is_named: bool, is_root: bool) -> NodeColor {
    if is_root {
        NodeColor::Red
    } else if is_named {
        NodeColor::Black
    } else {
        NodeColor::Gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_text_is_compressed_to_first_line() {
        let label = node_label("function_definition", "int main() {\n  return 0;\n}", true);
        assert_eq!(label, "function_definition\nint main() {...");
    }

    #[test]
    fn test_short_single_line_kept_verbatim() {
        let label = node_label("expression_statement", "x = 1;", true);
        assert_eq!(label, "expression_statement\nx = 1;");
    }

    #[test]
    fn test_long_single_line_is_truncated() {
        let text = "a".repeat(MAX_SNIPPET_LEN + 1);
        let label = node_label("declaration", &text, true);
        assert_eq!(
            label,
            format!("declaration\n{}...", "a".repeat(MAX_SNIPPET_LEN))
        );
    }

    #[test]
    fn test_exact_boundary_single_line_no_ellipsis() {
        let text = "b".repeat(MAX_SNIPPET_LEN);
        let label = node_label("declaration", &text, true);
        assert_eq!(label, format!("declaration\n{}", text));
    }

    #[test]
    fn test_exact_boundary_with_second_line_gets_ellipsis() {
        let first = "c".repeat(MAX_SNIPPET_LEN);
        let text = format!("{}\nrest", first);
        let label = node_label("declaration", &text, true);
        assert_eq!(label, format!("declaration\n{}...", first));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_SNIPPET_LEN + 3);
        let label = node_label("string_literal", &text, true);
        assert_eq!(
            label,
            format!("string_literal\n{}...", "é".repeat(MAX_SNIPPET_LEN))
        );
    }

    #[test]
    fn test_empty_text_named_node() {
        assert_eq!(node_label("string", "", true), "string\n");
    }

    #[test]
    fn test_anonymous_node_keeps_kind() {
        assert_eq!(node_label("{", "{ return 0; }", false), "{");
    }

    #[test]
    fn test_color_tiers() {
        assert_eq!(node_color(true, true), NodeColor::Red);
        assert_eq!(node_color(false, true), NodeColor::Red);
        assert_eq!(node_color(true, false), NodeColor::Black);
        assert_eq!(node_color(false, false), NodeColor::Gray);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(NodeColor::Red.to_string(), "red");
        assert_eq!(NodeColor::Black.to_string(), "black");
        assert_eq!(NodeColor::Gray.to_string(), "gray");
    }
}
