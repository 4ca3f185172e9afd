//! Formats command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::FormatsConfig;
use crate::error::DrawError;

impl FromCommand for FormatsConfig {
    fn from_command(command: Commands) -> Result<Self, DrawError> {
        match command {
            Commands::Formats { format } => FormatsConfig::builder().with_format(format).build(),
            _ => Err(DrawError::ConfigurationError {
                message: "Invalid command type for FormatsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FormatsConfig);

/// Execute the formats command for listing selectors
pub fn execute_formats_command(command: Commands) -> Result<()> {
    let config = FormatsConfig::from_command(command)
        .wrap_err("Failed to parse formats command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::formats::FormatsExecutor;
    FormatsExecutor::execute(config)
}
