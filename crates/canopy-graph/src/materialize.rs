//! Breadth-first lowering of a parse tree into a [`SyntaxGraph`].
//!
//! Identifier assignment is deterministic: nodes are numbered in strict
//! breadth-first visitation order starting at 0, so the root is always id 0
//! and every parent's id is smaller than its children's.

use crate::graph::{NodeId, SyntaxGraph};
use crate::node::SyntaxNode;
use canopy_core::{ParseError, SourceParser};
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;
use tree_sitter::{Node, Tree};

/// Errors produced while materializing a graph from a source file.
#[derive(Error, Debug)]
pub enum MaterializeError {
    /// Reading or parsing the source failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A node's text span is not valid UTF-8.
    ///
    /// Surfaced unchanged; the caller decides whether to retry with a
    /// lossy decode.
    #[error("node text is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Materializes a parse tree into a syntax graph.
///
/// Walks the tree breadth-first with an explicit work queue of
/// `(node, parent, sibling index)` records, `None` marking the root's
/// missing parent. Each dequeued node is projected into a [`SyntaxNode`],
/// assigned the next identifier, and connected to its parent; its children
/// are enqueued left-to-right.
///
/// Either the whole tree materializes or the first failure is returned;
/// no partial graph escapes.
pub fn materialize(tree: &Tree, source: &[u8]) -> Result<SyntaxGraph, MaterializeError> {
    let mut graph = SyntaxGraph::new();
    let mut queue: VecDeque<(Node<'_>, Option<NodeId>, usize)> = VecDeque::new();
    queue.push_back((tree.root_node(), None, 0));

    while let Some((node, parent, child_idx)) = queue.pop_front() {
        let record = SyntaxNode::from_tree_node(&node, source, child_idx, parent.is_none())?;
        let id = graph.add_node(record);

        match parent {
            Some(parent) => graph.add_edge(parent, id),
            None => graph.set_root(id),
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                queue.push_back((child, Some(id), i));
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "materialized syntax tree"
    );

    Ok(graph)
}

/// Reads, parses, and materializes a source file.
///
/// After construction the graph gets its one metadata patch: the file name
/// is attached and the root label is prefixed with it.
pub fn materialize_path(
    parser: &mut SourceParser,
    path: &Path,
) -> Result<SyntaxGraph, MaterializeError> {
    let (tree, source) = parser.parse_file(path)?;
    let mut graph = materialize(&tree, &source)?;
    graph.attach_file(&path.display().to_string());
    Ok(graph)
}
