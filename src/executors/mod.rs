//! Command executors that handle the actual logic for each command

pub mod dot;
pub mod formats;
pub mod render;

use std::convert::Infallible;

use miette::Result;

use crate::draw::GraphvizDraw;
use crate::graph::{AttributeMap, DocumentGraph};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Draw pipeline for a loaded document.
///
/// Node payloads and edge attributes are used as-is when `use_attributes`
/// is set, otherwise the graph is drawn with bare indices.
pub(crate) fn document_draw(
    graph: &DocumentGraph,
    graph_attr: AttributeMap,
    use_attributes: bool,
) -> GraphvizDraw<'_, DocumentGraph> {
    let draw = GraphvizDraw::new(graph);
    if !use_attributes {
        return draw;
    }

    draw.with_node_attr(|node: &AttributeMap| Ok::<_, Infallible>(node.clone()))
        .with_edge_attr(|edge: &AttributeMap| Ok::<_, Infallible>(edge.clone()))
        .with_graph_attr(graph_attr)
}
