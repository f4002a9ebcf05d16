//! CLI command implementations.
//!
//! DOT and JSON rendering live here, on top of the graph's public
//! accessors; the library crates define no output format of their own.

use canopy_core::SourceParser;
use canopy_graph::{materialize_path, SyntaxGraph};
use clap::ValueEnum;
use colored::Colorize;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Export format for the graph command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Graphviz DOT text.
    Dot,
    /// JSON document with nodes, edges, and graph metadata.
    Json,
}

/// Materialize a source file and export its graph.
pub fn graph(path: &Path, output: Option<&Path>, format: Format) -> Result<()> {
    let mut parser = SourceParser::new();
    let graph = materialize_path(&mut parser, path)?;
    tracing::debug!(path = %path.display(), nodes = graph.node_count(), "materialized");

    let rendered = match format {
        Format::Dot => to_dot(&graph),
        Format::Json => serde_json::to_string_pretty(&export_json(&graph)?)?,
    };

    match output {
        Some(out_path) => {
            fs::write(out_path, rendered)?;
            println!(
                "{} Exported {} nodes to {}",
                "✓".green(),
                graph.node_count().to_string().cyan(),
                out_path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Show statistics for a source file's syntax graph.
pub fn stats(path: &Path) -> Result<()> {
    let mut parser = SourceParser::new();
    let graph = materialize_path(&mut parser, path)?;
    let stats = graph.stats();

    println!("{} {}", "file:".cyan(), path.display());
    println!(
        "  {} nodes, {} edges",
        stats.node_count.to_string().cyan(),
        stats.edge_count.to_string().cyan()
    );

    if let Some(root) = graph.root().and_then(|id| graph.get(id)) {
        println!("  root: {}", root.kind.yellow());
        if root.has_error {
            println!("  {} tree contains syntax errors", "⚠".yellow());
        }
    }

    Ok(())
}

/// Renders the graph as Graphviz DOT text.
fn to_dot(graph: &SyntaxGraph) -> String {
    let mut out = String::from("digraph cst {\n");
    for (id, node) in graph.iter() {
        out.push_str(&format!(
            "    {} [label=\"{}\", color={}];\n",
            id.index(),
            escape_dot(&node.label),
            node.color
        ));
    }
    for (parent, child) in graph.edges() {
        out.push_str(&format!("    {} -> {};\n", parent.index(), child.index()));
    }
    out.push('}');
    out
}

fn escape_dot(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Builds the JSON export document.
fn export_json(graph: &SyntaxGraph) -> Result<serde_json::Value> {
    let mut nodes = Vec::with_capacity(graph.node_count());
    for (id, node) in graph.iter() {
        let mut value = serde_json::to_value(node)?;
        if let Some(object) = value.as_object_mut() {
            object.insert("id".into(), serde_json::json!(id.index()));
        }
        nodes.push(value);
    }

    let edges: Vec<_> = graph
        .edges()
        .map(|(parent, child)| {
            serde_json::json!({
                "source": parent.index(),
                "target": child.index(),
            })
        })
        .collect();

    Ok(serde_json::json!({
        "version": "1.0",
        "file_name": graph.file_name(),
        "root_node": graph.root().map(|id| id.index()),
        "stats": {
            "nodeCount": graph.node_count(),
            "edgeCount": graph.edge_count(),
        },
        "nodes": nodes,
        "edges": edges,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("main.c");
        fs::write(&path, "int main(){return 0;}").unwrap();
        path
    }

    #[test]
    fn test_escape_dot() {
        assert_eq!(escape_dot("a\nb"), "a\\nb");
        assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_graph_command_writes_dot() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_fixture(&dir);
        let out = dir.path().join("graph.dot");

        graph(&source, Some(&out), Format::Dot).unwrap();

        let rendered = fs::read_to_string(&out).unwrap();
        assert!(rendered.starts_with("digraph cst {"));
        assert!(rendered.contains(" -> "));
        assert!(rendered.contains("filename: "));
        assert!(rendered.contains("color=red"));
    }

    #[test]
    fn test_graph_command_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_fixture(&dir);
        let out = dir.path().join("graph.json");

        graph(&source, Some(&out), Format::Json).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["root_node"], 0);
        assert_eq!(value["nodes"][0]["id"], 0);
        assert_eq!(value["nodes"][0]["type"], "translation_unit");
        assert_eq!(
            value["stats"]["edgeCount"].as_u64().unwrap() + 1,
            value["stats"]["nodeCount"].as_u64().unwrap()
        );
        assert_eq!(
            value["edges"].as_array().unwrap().len() as u64,
            value["stats"]["edgeCount"].as_u64().unwrap()
        );
    }

    #[test]
    fn test_stats_command_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_fixture(&dir);

        stats(&source).unwrap();
    }

    #[test]
    fn test_graph_command_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.zig");
        fs::write(&path, "pub fn main() void {}").unwrap();

        assert!(graph(&path, None, Format::Dot).is_err());
    }
}
