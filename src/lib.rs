//! # dotdraw - Draw Graphs with Graphviz
//!
//! dotdraw turns in-memory graphs into DOT documents and renders them with
//! an external Graphviz layout engine. Raster output is decoded into an
//! image; every other format comes back as bytes or a written file.
//!
//! ## Main Components
//!
//! - **Graph**: Attribute resolution, DOT serialization and escaping
//! - **Render**: Layout/format selectors, the engine process and image
//!   materialization
//! - **Draw**: The [`GraphvizDraw`](draw::GraphvizDraw) pipeline tying both
//!   together
//!
//! ## Usage
//!
//! ### Example: Serializing a Graph
//!
//! ```
//! use std::convert::Infallible;
//!
//! use dotdraw::draw::GraphvizDraw;
//! use dotdraw::graph::attributes;
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> Result<(), dotdraw::error::DrawError> {
//! let mut graph = DiGraph::new();
//! let parser = graph.add_node("parser");
//! let lexer = graph.add_node("lexer");
//! graph.add_edge(parser, lexer, 1);
//!
//! let dot = GraphvizDraw::new(&graph)
//!     .with_node_attr(|name: &&str| Ok::<_, Infallible>(attributes([("label", *name)])))
//!     .with_edge_attr(|weight: &i32| Ok::<_, Infallible>(attributes([("weight", weight.to_string())])))
//!     .with_graph_attr(attributes([("rankdir", "LR")]))
//!     .to_dot()?;
//!
//! assert_eq!(
//!     dot,
//!     "digraph {\n    rankdir=\"LR\";\n    0 [label=\"parser\"];\n    1 [label=\"lexer\"];\n    0 -> 1 [weight=\"1\"];\n}\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rendering an Image
//!
//! ```no_run
//! use dotdraw::draw::GraphvizDraw;
//! use petgraph::graph::UnGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
//!
//! // PNG output is decoded into an image
//! let rendered = GraphvizDraw::new(&graph).with_method("circo").draw()?;
//! let image = rendered.image().expect("png output decodes to an image");
//! println!("{}x{}", image.width(), image.height());
//!
//! // Other formats can be written straight to a file by the engine
//! GraphvizDraw::new(&graph)
//!     .with_image_type("svg")
//!     .with_filename("triangle.svg")
//!     .draw()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod draw;
pub mod error;
pub mod executors;
pub mod graph;
pub mod render;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
