//! Graph node records projected from tree-sitter nodes.

use crate::label::{node_color, node_label, NodeColor};
use serde::{Deserialize, Serialize};
use std::str::Utf8Error;
use tree_sitter::Point;

/// A line/column position in the source file, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A materialized syntax-tree node.
///
/// The copied fields mirror what tree-sitter reports for the node; `label`,
/// `color`, and `idx` are derived at materialization time. The field set is
/// closed, so downstream consumers get a checked record instead of a
/// key-value map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Grammar symbol name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Source text spanned by the node, UTF-8 decoded.
    pub text: String,
    pub start_point: Location,
    pub start_byte: usize,
    pub end_point: Location,
    pub end_byte: usize,
    /// True for meaningful grammar productions, false for anonymous tokens.
    pub is_named: bool,
    /// True if the parser could not cleanly derive this subtree.
    pub has_error: bool,
    /// Display label: kind plus a snippet for named nodes.
    pub label: String,
    /// Display color: red root, black named, gray anonymous.
    pub color: NodeColor,
    /// 0-based position among siblings; 0 for the root.
    pub idx: usize,
}

impl SyntaxNode {
    /// Projects a tree-sitter node into a graph record.
    ///
    /// Fails if the node's text span is not valid UTF-8; the bytes are
    /// never replaced lossily, since a corrupted snippet would poison
    /// downstream analysis.
    pub fn from_tree_node(
        node: &tree_sitter::Node<'_>,
        source: &[u8],
        idx: usize,
        is_root: bool,
    ) -> Result<Self, Utf8Error> {
        let kind = node.kind().to_string();
        let text = node.utf8_text(source)?.to_string();
        let is_named = node.is_named();

        let label = node_label(&kind, &text, is_named);
        let color = node_color(is_named, is_root);

        Ok(Self {
            kind,
            text,
            start_point: node.start_position().into(),
            start_byte: node.start_byte(),
            end_point: node.end_position().into(),
            end_byte: node.end_byte(),
            is_named,
            has_error: node.has_error(),
            label,
            color,
            idx,
        })
    }
}
