//! Canopy Graph - Syntax tree materialization
//!
//! This crate turns a concrete syntax tree into an explicit directed graph:
//! every tree node becomes a [`SyntaxNode`] with a stable integer
//! identifier, parent/child edges are preserved, and each node carries a
//! display label and color derived from its role.
//!
//! # Architecture
//!
//! The graph uses petgraph internally; identifiers are petgraph node
//! indices assigned in breadth-first visitation order, which makes
//! materialization deterministic: the root is always id 0 and re-running
//! on the same tree reproduces the same numbering.
//!
//! # Example
//!
//! ```no_run
//! use canopy_core::SourceParser;
//! use canopy_graph::materialize_path;
//! use std::path::Path;
//!
//! let mut parser = SourceParser::new();
//! let graph = materialize_path(&mut parser, Path::new("main.c")).unwrap();
//! println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//! ```

mod graph;
mod label;
mod materialize;
mod node;

pub use graph::{GraphStats, NodeId, SyntaxGraph};
pub use label::{node_color, node_label, NodeColor, MAX_SNIPPET_LEN};
pub use materialize::{materialize, materialize_path, MaterializeError};
pub use node::{Location, SyntaxNode};
