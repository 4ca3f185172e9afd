//! Dot command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DotConfig;
use crate::error::DrawError;

impl FromCommand for DotConfig {
    fn from_command(command: Commands) -> Result<Self, DrawError> {
        match command {
            Commands::Dot {
                path,
                output,
                attributes,
            } => DotConfig::builder()
                .with_path(path)
                .with_output(output)
                .with_use_attributes(!attributes.no_attributes)
                .build(),
            _ => Err(DrawError::ConfigurationError {
                message: "Invalid command type for DotConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DotConfig);

/// Execute the dot command for printing a DOT document
pub fn execute_dot_command(command: Commands) -> Result<()> {
    let config =
        DotConfig::from_command(command).wrap_err("Failed to parse dot command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::dot::DotExecutor;
    DotExecutor::execute(config)
}
