//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::DrawError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, DrawError> {
        match command {
            Commands::Render {
                paths,
                selectors,
                output_dir,
                engine,
                attributes,
                fail_fast,
            } => RenderConfig::builder()
                .with_paths(paths)
                .with_layout(&selectors.layout)
                .with_format(&selectors.format)
                .with_output_dir(output_dir)
                .with_program(&engine.engine)
                .with_timeout_secs(engine.timeout)
                .with_use_attributes(!attributes.no_attributes)
                .with_fail_fast(fail_fast)
                .build(),
            _ => Err(DrawError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for turning graph documents into images
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config =
        RenderConfig::from_command(command).wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::render::{LayoutAlgorithm, OutputFormat};

    #[test]
    fn test_render_command_converts_to_config() {
        let cli = Cli::try_parse_from([
            "dotdraw",
            "render",
            "grid.json",
            "-K",
            "neato",
            "-T",
            "svg",
            "--no-attributes",
        ])
        .unwrap();

        let config = RenderConfig::try_from(cli.command).unwrap();

        assert_eq!(config.layout, LayoutAlgorithm::Neato);
        assert_eq!(config.format, OutputFormat::Svg);
        assert!(!config.use_attributes);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_unknown_layout_fails_conversion() {
        let cli = Cli::try_parse_from(["dotdraw", "render", "grid.json", "-K", "special"]).unwrap();

        let err = RenderConfig::try_from(cli.command).unwrap_err();

        assert!(matches!(err, DrawError::InvalidArgument { .. }));
    }

    #[test]
    fn test_other_command_is_rejected() {
        let cli = Cli::try_parse_from(["dotdraw", "formats"]).unwrap();

        assert!(RenderConfig::try_from(cli.command).is_err());
    }
}
