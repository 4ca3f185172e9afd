//! # Rendering Module
//!
//! Hands DOT documents to the Graphviz layout engine and turns what comes
//! back into images, bytes or files.
//!
//! ## Components
//!
//! - **LayoutAlgorithm / OutputFormat**: Validated `-K` and `-T` selectors
//! - **RenderRequest**: One DOT document plus selectors and an optional
//!   output path
//! - **LayoutEngine**: Process port; **GraphvizEngine** spawns the binary
//! - **RenderInvoker**: Runs requests and maps exit status to errors
//! - **materialize**: Decodes raster output into a **RenderedImage**
//!
//! ## Example
//!
//! ```no_run
//! use dotdraw::render::{GraphvizEngine, OutputFormat, RenderInvoker, materialize};
//!
//! # fn main() -> Result<(), dotdraw::error::DrawError> {
//! let engine = GraphvizEngine::default();
//! let invoker = RenderInvoker::new(&engine);
//!
//! let result = invoker.render_with("digraph {\n    0 -> 1;\n}\n", "dot", "png", None)?;
//! let rendered = materialize(result, OutputFormat::Png)?;
//! let image = rendered.image().expect("png decodes to an image");
//! assert!(image.width() > 0);
//! # Ok(())
//! # }
//! ```

mod engine;
mod invoker;
mod raster;
mod request;
mod selectors;

pub use engine::{
    CancelToken, EngineInvocation, EngineOutput, EngineStatus, GraphvizEngine, LayoutEngine,
};
pub use invoker::RenderInvoker;
pub use raster::{Rendered, RenderedImage, materialize};
pub use request::{RenderRequest, RenderRequestBuilder, RenderResult};
pub use selectors::{LayoutAlgorithm, OutputFormat};
