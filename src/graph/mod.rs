//! # Graph Serialization Module
//!
//! This module turns a graph plus caller supplied attributes into a DOT
//! document.
//!
//! ## Components
//!
//! ### Graph Access
//! - **DrawableGraph**: Read-only traversal implemented for petgraph's
//!   `Graph` and `StableGraph`
//! - **GraphDocument**: JSON/TOML graph files loaded into petgraph
//!
//! ### Attributes
//! - **AttributeResolver**: Applies node and edge attribute functions
//! - **AttributeMap**: Ordered name to value mapping
//!
//! ### Serialization
//! - **DotSerializer**: Streams the DOT document, escaping every value
//!
//! ## Example
//!
//! ```
//! use std::convert::Infallible;
//!
//! use dotdraw::graph::{AttributeMap, AttributeResolver, DotSerializer, attributes};
//! use petgraph::graph::UnGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = UnGraph::new_undirected();
//! let a = graph.add_node("first\nline");
//! let b = graph.add_node("say \"hi\"");
//! graph.add_edge(a, b, ());
//!
//! let label = |name: &&str| Ok::<AttributeMap, Infallible>(attributes([("label", *name)]));
//! let resolved = AttributeResolver::resolve(&graph, Some(&label), None, None)
//!     .map_err(|e| e.into_source())?;
//!
//! let dot = DotSerializer::new().to_dot_string(&graph, &resolved)?;
//! assert!(dot.contains(r#"0 [label="first\nline"];"#));
//! assert!(dot.contains(r#"1 [label="say \"hi\""];"#));
//! assert!(dot.contains("0 -- 1;"));
//! # Ok(())
//! # }
//! ```

mod attributes;
mod document;
mod serializer;
mod types;

pub use attributes::{
    AttributeError, AttributeMap, AttributeResolver, EdgeAttrFn, Element, NodeAttrFn,
    ResolvedAttributes, attributes,
};
pub use document::{DocumentGraph, EdgeDocument, GraphDocument};
pub use serializer::{DotSerializer, escape_value};
pub use types::{DrawEdge, DrawNode, DrawableGraph, EdgeIter, NodeIter};
