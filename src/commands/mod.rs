//! Command implementations for the dotdraw CLI
//!
//! - render: Render graph documents through the layout engine
//! - dot: Print the DOT document for one graph document
//! - formats: List layout algorithms and output formats

pub mod dot;
pub mod formats;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Dot { .. } => dot::execute_dot_command(command),
        Commands::Formats { .. } => formats::execute_formats_command(command),
    }
}
