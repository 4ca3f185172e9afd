//! Attribute resolution
//!
//! Applies the caller's node and edge attribute functions to every element
//! of a graph ahead of serialization.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::graph::DrawableGraph;

/// Ordered attribute name to value mapping. Insertion order is emission order.
pub type AttributeMap = IndexMap<String, String>;

/// Build an [`AttributeMap`] from string pairs
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Identifies the graph element an attribute function was called for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Node(usize),
    Edge(usize),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Node(index) => write!(f, "node {index}"),
            Element::Edge(index) => write!(f, "edge {index}"),
        }
    }
}

/// Failure of a user attribute function, carrying the error as returned
#[derive(Debug)]
pub struct AttributeError<E> {
    pub element: Element,
    pub source: E,
}

impl<E> AttributeError<E> {
    pub fn into_source(self) -> E {
        self.source
    }
}

/// Per-element attribute maps for one serialization pass
#[derive(Debug, Clone, Default)]
pub struct ResolvedAttributes {
    nodes: HashMap<usize, AttributeMap>,
    edges: HashMap<usize, AttributeMap>,
    graph: AttributeMap,
}

impl ResolvedAttributes {
    pub fn node(&self, index: usize) -> Option<&AttributeMap> {
        self.nodes.get(&index)
    }

    pub fn edge(&self, index: usize) -> Option<&AttributeMap> {
        self.edges.get(&index)
    }

    pub fn graph(&self) -> &AttributeMap {
        &self.graph
    }
}

pub type NodeAttrFn<'a, N, E> = &'a dyn Fn(&N) -> Result<AttributeMap, E>;
pub type EdgeAttrFn<'a, W, E> = &'a dyn Fn(&W) -> Result<AttributeMap, E>;

pub struct AttributeResolver;

impl AttributeResolver {
    /// Resolve attributes for every node and edge of `graph`.
    ///
    /// Elements are visited in the graph's iteration order; the first error
    /// stops resolution.
    pub fn resolve<G, E>(
        graph: &G,
        node_fn: Option<NodeAttrFn<'_, G::Node, E>>,
        edge_fn: Option<EdgeAttrFn<'_, G::Edge, E>>,
        graph_attrs: Option<&AttributeMap>,
    ) -> Result<ResolvedAttributes, AttributeError<E>>
    where
        G: DrawableGraph + ?Sized,
    {
        let mut resolved = ResolvedAttributes {
            graph: graph_attrs.cloned().unwrap_or_default(),
            ..Default::default()
        };

        if let Some(node_fn) = node_fn {
            for node in graph.draw_nodes() {
                let attrs = node_fn(node.weight).map_err(|source| AttributeError {
                    element: Element::Node(node.index),
                    source,
                })?;
                resolved.nodes.insert(node.index, attrs);
            }
        }

        if let Some(edge_fn) = edge_fn {
            for edge in graph.draw_edges() {
                let attrs = edge_fn(edge.weight).map_err(|source| AttributeError {
                    element: Element::Edge(edge.index),
                    source,
                })?;
                resolved.edges.insert(edge.index, attrs);
            }
        }

        Ok(resolved)
    }
}
