//! The draw pipeline
//!
//! [`GraphvizDraw`] ties attribute resolution, DOT serialization, engine
//! invocation and image materialization together for one graph.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::constants::engine::{DEFAULT_FORMAT, DEFAULT_LAYOUT};
use crate::error::{BoxError, DrawError};
use crate::graph::{
    AttributeError, AttributeMap, AttributeResolver, DotSerializer, DrawableGraph,
    ResolvedAttributes,
};
use crate::render::{
    GraphvizEngine, LayoutAlgorithm, LayoutEngine, OutputFormat, RenderInvoker, RenderRequest,
    Rendered, materialize,
};

type AttrFn<'g, T> = Box<dyn Fn(&T) -> Result<AttributeMap, BoxError> + 'g>;

/// Draws one graph through Graphviz.
///
/// Without attribute functions nodes are labelled by index only. The layout
/// method defaults to `dot` and the image type to `png`.
pub struct GraphvizDraw<'g, G: DrawableGraph + ?Sized> {
    graph: &'g G,
    node_attr: Option<AttrFn<'g, G::Node>>,
    edge_attr: Option<AttrFn<'g, G::Edge>>,
    graph_attr: Option<AttributeMap>,
    method: String,
    image_type: String,
    filename: Option<PathBuf>,
}

impl<'g, G: DrawableGraph + ?Sized> GraphvizDraw<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            node_attr: None,
            edge_attr: None,
            graph_attr: None,
            method: DEFAULT_LAYOUT.to_string(),
            image_type: DEFAULT_FORMAT.to_string(),
            filename: None,
        }
    }

    pub fn with_node_attr<F, E>(mut self, node_attr: F) -> Self
    where
        F: Fn(&G::Node) -> Result<AttributeMap, E> + 'g,
        E: Into<BoxError>,
    {
        self.node_attr = Some(Box::new(move |node| node_attr(node).map_err(Into::into)));
        self
    }

    pub fn with_edge_attr<F, E>(mut self, edge_attr: F) -> Self
    where
        F: Fn(&G::Edge) -> Result<AttributeMap, E> + 'g,
        E: Into<BoxError>,
    {
        self.edge_attr = Some(Box::new(move |edge| edge_attr(edge).map_err(Into::into)));
        self
    }

    pub fn with_graph_attr(mut self, graph_attr: AttributeMap) -> Self {
        self.graph_attr = Some(graph_attr);
        self
    }

    /// Layout algorithm name, e.g. `neato` or `sfdp`
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    /// Output format name, e.g. `png` or `svg`
    pub fn with_image_type(mut self, image_type: &str) -> Self {
        self.image_type = image_type.to_string();
        self
    }

    /// Have the engine write the output to `filename` instead of returning it
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Stream the DOT document for this graph into `output`
    pub fn write_dot(&self, output: &mut dyn Write) -> Result<(), DrawError> {
        let resolved = self.resolve()?;
        DotSerializer::new().write_dot(self.graph, &resolved, output)
    }

    pub fn to_dot(&self) -> Result<String, DrawError> {
        let resolved = self.resolve()?;
        DotSerializer::new().to_dot_string(self.graph, &resolved)
    }

    /// Render with the Graphviz `dot` binary found on PATH
    pub fn draw(&self) -> Result<Rendered, DrawError> {
        self.draw_with(&GraphvizEngine::default())
    }

    pub fn draw_with(&self, engine: &dyn LayoutEngine) -> Result<Rendered, DrawError> {
        // Selectors are checked before any user code or process runs
        let algorithm: LayoutAlgorithm = self.method.parse()?;
        let format: OutputFormat = self.image_type.parse()?;

        let dot = self.to_dot()?;
        debug!(
            nodes = self.graph.draw_node_count(),
            edges = self.graph.draw_edge_count(),
            dot_bytes = dot.len(),
            "serialized graph"
        );

        let request = RenderRequest::new(dot, algorithm, format, self.filename.clone());
        let result = RenderInvoker::new(engine).render(request)?;
        materialize(result, format)
    }

    fn resolve(&self) -> Result<ResolvedAttributes, DrawError> {
        AttributeResolver::resolve(
            self.graph,
            self.node_attr.as_deref(),
            self.edge_attr.as_deref(),
            self.graph_attr.as_ref(),
        )
        .map_err(|AttributeError { element, source }| DrawError::AttributeFunction {
            element: element.to_string(),
            source,
        })
    }
}
