//! Core graph data structure.
//!
//! The SyntaxGraph wraps petgraph and carries the two pieces of graph-level
//! metadata: the root node and, once attached, the source file name. Node
//! identifiers are petgraph indices assigned in insertion order, so the
//! materializer's breadth-first visitation order is the identifier order.

use crate::node::SyntaxNode;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// A materialized concrete syntax tree as a directed graph.
///
/// Nodes are [`SyntaxNode`] records, edges point parent → child and carry
/// no attributes. The graph is built in one pass and is immutable
/// afterwards, except for the single [`attach_file`](Self::attach_file)
/// metadata patch.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyntaxGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<SyntaxNode, ()>,

    /// Identifier of the tree root (the first node added).
    root: Option<NodeId>,

    /// Source file path, attached after construction.
    file_name: Option<String>,
}

impl Default for SyntaxGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            root: None,
            file_name: None,
        }
    }

    /// Adds a node to the graph, assigning the next identifier.
    pub fn add_node(&mut self, node: SyntaxNode) -> NodeId {
        self.graph.add_node(node)
    }

    /// Adds a parent → child edge.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        self.graph.add_edge(parent, child, ());
    }

    /// Marks the root node.
    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// The identifier of the tree root.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The attached source file name, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Attaches the source file name and prefixes the root label with it.
    ///
    /// This is the only mutation a finished graph receives. The root label
    /// becomes `filename: <path>` on its own line, followed by the label
    /// derived at materialization time.
    pub fn attach_file(&mut self, file_name: &str) {
        if let Some(root) = self.root {
            if let Some(node) = self.graph.node_weight_mut(root) {
                node.label = format!("filename: {}\n{}", file_name, node.label);
            }
        }
        self.file_name = Some(file_name.to_string());
    }

    /// Gets a node by identifier.
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.graph.node_weight(id)
    }

    /// The parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .next()
    }

    /// The children of a node, in sibling order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self
            .graph
            .neighbors_directed(id, Direction::Outgoing)
            .collect();
        children.sort_by_key(|&child| self.graph[child].idx);
        children
    }

    /// Number of incoming edges for a node.
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .count()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all nodes with their identifiers, in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.graph
            .node_indices()
            .filter_map(|id| self.graph.node_weight(id).map(|node| (id, node)))
    }

    /// Iterates over all nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.graph.node_weights()
    }

    /// Iterates over all edges as (parent, child) identifier pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target()))
    }
}

/// Graph statistics for status output.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

impl SyntaxGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }
}
