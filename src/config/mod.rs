//! # Configuration Module
//!
//! Configuration structures for the dotdraw commands. Each command has its
//! own config module with a builder that validates the raw CLI values.
//!
//! ## Command Configurations
//!
//! - **RenderConfig**: Configuration for the `render` command
//! - **DotConfig**: Configuration for the `dot` command
//! - **FormatsConfig**: Configuration for the `formats` command
//!
//! ## Example
//!
//! ```
//! use dotdraw::common::ConfigBuilder;
//! use dotdraw::config::RenderConfig;
//! use dotdraw::render::OutputFormat;
//!
//! let config = RenderConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_layout("dot")
//!     .with_format("svg")
//!     .with_output_dir(None)
//!     .with_program("dot")
//!     .with_timeout_secs(None)
//!     .with_use_attributes(true)
//!     .with_fail_fast(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.format, OutputFormat::Svg);
//! ```

pub mod dot;
pub mod formats;
pub mod render;

pub use dot::DotConfig;
pub use formats::FormatsConfig;
pub use render::RenderConfig;
