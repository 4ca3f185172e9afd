//! Graph documents
//!
//! JSON or TOML files describing a graph whose node and edge payloads are
//! attribute maps. Used by the command line to get graphs from disk.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use serde::Deserialize;

use crate::error::{DrawError, TomlParseError};
use crate::graph::{AttributeMap, DrawableGraph, EdgeIter, NodeIter};

#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub graph: AttributeMap,
    #[serde(default)]
    pub nodes: Vec<AttributeMap>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDocument {
    pub source: usize,
    pub target: usize,
    #[serde(default)]
    pub attributes: AttributeMap,
}

/// A loaded document as a petgraph graph of the right directedness
#[derive(Debug, Clone)]
pub enum DocumentGraph {
    Directed(DiGraph<AttributeMap, AttributeMap>),
    Undirected(UnGraph<AttributeMap, AttributeMap>),
}

impl GraphDocument {
    pub fn parse_file(path: &Path) -> Result<Self, DrawError> {
        let content = std::fs::read_to_string(path).map_err(|e| DrawError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::parse_toml(path, content),
            _ => Ok(serde_json::from_str(&content)?),
        }
    }

    fn parse_toml(path: &Path, content: String) -> Result<Self, DrawError> {
        toml::from_str(&content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DrawError::TomlParseError(Box::new(TomlParseError {
                file: path.display().to_string(),
                source_code: NamedSource::new(path.display().to_string(), content.clone()),
                span,
                source: e,
            }))
        })
    }

    /// Build the graph, rejecting edges that name a missing node and
    /// attribute names that are not plain DOT identifiers
    pub fn into_graph(self, path: &Path) -> Result<(DocumentGraph, AttributeMap), DrawError> {
        let node_count = self.nodes.len();
        if let Some(edge) = self
            .edges
            .iter()
            .find(|edge| edge.source >= node_count || edge.target >= node_count)
        {
            return Err(DrawError::InvalidDocument {
                path: PathBuf::from(path),
                message: format!(
                    "edge {} -> {} references a node outside 0..{}",
                    edge.source, edge.target, node_count
                ),
            });
        }

        self.check_attribute_names(path)?;

        let graph = if self.directed {
            let mut graph = DiGraph::with_capacity(node_count, self.edges.len());
            fill(&mut graph, self.nodes, self.edges);
            DocumentGraph::Directed(graph)
        } else {
            let mut graph = UnGraph::with_capacity(node_count, self.edges.len());
            fill(&mut graph, self.nodes, self.edges);
            DocumentGraph::Undirected(graph)
        };

        Ok((graph, self.graph))
    }

    fn check_attribute_names(&self, path: &Path) -> Result<(), DrawError> {
        let scopes = std::iter::once(("graph".to_string(), &self.graph))
            .chain(
                self.nodes
                    .iter()
                    .enumerate()
                    .map(|(i, attrs)| (format!("node {i}"), attrs)),
            )
            .chain(
                self.edges
                    .iter()
                    .enumerate()
                    .map(|(i, edge)| (format!("edge {i}"), &edge.attributes)),
            );

        for (scope, attrs) in scopes {
            if let Some(name) = attrs.keys().find(|name| !is_dot_id(name)) {
                return Err(DrawError::InvalidDocument {
                    path: PathBuf::from(path),
                    message: format!("attribute name {name:?} on {scope} is not a DOT identifier"),
                });
            }
        }
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, the unquoted DOT ID form
fn is_dot_id(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn fill<Ty: petgraph::EdgeType>(
    graph: &mut petgraph::Graph<AttributeMap, AttributeMap, Ty>,
    nodes: Vec<AttributeMap>,
    edges: Vec<EdgeDocument>,
) {
    for node in nodes {
        graph.add_node(node);
    }
    for edge in edges {
        graph.add_edge(
            NodeIndex::new(edge.source),
            NodeIndex::new(edge.target),
            edge.attributes,
        );
    }
}

impl DrawableGraph for DocumentGraph {
    type Node = AttributeMap;
    type Edge = AttributeMap;

    fn is_directed(&self) -> bool {
        matches!(self, DocumentGraph::Directed(_))
    }

    fn draw_nodes(&self) -> NodeIter<'_, AttributeMap> {
        match self {
            DocumentGraph::Directed(graph) => graph.draw_nodes(),
            DocumentGraph::Undirected(graph) => graph.draw_nodes(),
        }
    }

    fn draw_edges(&self) -> EdgeIter<'_, AttributeMap> {
        match self {
            DocumentGraph::Directed(graph) => graph.draw_edges(),
            DocumentGraph::Undirected(graph) => graph.draw_edges(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_json_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pair.json");
        fs::write(
            &path,
            r#"{
                "directed": true,
                "graph": {"bgcolor": "red"},
                "nodes": [{"label": "a", "color": "black"}, {}],
                "edges": [{"source": 0, "target": 1, "attributes": {"label": "1"}}]
            }"#,
        )
        .unwrap();

        let doc = GraphDocument::parse_file(&path).unwrap();
        let (graph, graph_attrs) = doc.into_graph(&path).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.draw_node_count(), 2);
        assert_eq!(graph.draw_edge_count(), 1);
        assert_eq!(graph_attrs["bgcolor"], "red");
        let first = graph.draw_nodes().next().unwrap();
        let keys: Vec<&str> = first.weight.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["label", "color"]);
    }

    #[test]
    fn test_parse_toml_document_defaults_to_undirected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pair.toml");
        fs::write(
            &path,
            r#"
[[nodes]]
label = "a"

[[nodes]]
label = "b"

[[edges]]
source = 0
target = 1
"#,
        )
        .unwrap();

        let (graph, _) = GraphDocument::parse_file(&path)
            .unwrap()
            .into_graph(&path)
            .unwrap();

        assert!(!graph.is_directed());
        assert_eq!(graph.draw_edge_count(), 1);
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "directed = \n").unwrap();

        match GraphDocument::parse_file(&path) {
            Err(DrawError::TomlParseError(err)) => assert!(err.span.is_some()),
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_edge_to_missing_node_is_rejected() {
        let doc: GraphDocument =
            serde_json::from_str(r#"{"nodes": [{}], "edges": [{"source": 0, "target": 3}]}"#)
                .unwrap();

        let err = doc.into_graph(Path::new("bad.json")).unwrap_err();

        assert!(matches!(err, DrawError::InvalidDocument { .. }));
        assert!(err.to_string().contains("0 -> 3"));
    }

    #[test]
    fn test_statement_smuggling_attribute_name_is_rejected() {
        let doc: GraphDocument = serde_json::from_str(
            r#"{"directed": true, "nodes": [{"x=\"1\"]; 99 -> 100 [y": "z"}, {}]}"#,
        )
        .unwrap();

        let err = doc.into_graph(Path::new("inj.json")).unwrap_err();

        assert!(matches!(err, DrawError::InvalidDocument { .. }));
        assert!(err.to_string().contains("node 0"));
    }

    #[test]
    fn test_non_identifier_names_are_rejected_everywhere() {
        for source in [
            r#"{"graph": {"": "red"}}"#,
            r#"{"graph": {"1abc": "red"}}"#,
            r#"{"nodes": [{"font name": "x"}]}"#,
            r#"{"nodes": [{}, {}], "edges": [{"source": 0, "target": 1, "attributes": {"a;b": "c"}}]}"#,
        ] {
            let doc: GraphDocument = serde_json::from_str(source).unwrap();
            let err = doc.into_graph(Path::new("bad.json")).unwrap_err();
            assert!(matches!(err, DrawError::InvalidDocument { .. }), "{source}");
        }
    }

    #[test]
    fn test_identifier_names_are_accepted() {
        assert!(is_dot_id("label"));
        assert!(is_dot_id("_private"));
        assert!(is_dot_id("fontname2"));
        assert!(!is_dot_id(""));
        assert!(!is_dot_id("9lives"));
        assert!(!is_dot_id("x=\"1\""));
    }
}
