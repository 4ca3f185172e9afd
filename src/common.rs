//! Common functionality shared across commands

use clap::Args;

use crate::constants::engine::{DEFAULT_FORMAT, DEFAULT_LAYOUT, DEFAULT_PROGRAM};

/// Layout and output format selectors
#[derive(Args, Debug, Clone)]
pub struct SelectorArgs {
    /// Layout algorithm (see `dotdraw formats`)
    #[arg(short = 'K', long, default_value = DEFAULT_LAYOUT, env = "DOTDRAW_LAYOUT")]
    pub layout: String,

    /// Output format (see `dotdraw formats`)
    #[arg(short = 'T', long, default_value = DEFAULT_FORMAT, env = "DOTDRAW_FORMAT")]
    pub format: String,
}

/// Layout engine process arguments
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Graphviz program to run
    #[arg(long, default_value = DEFAULT_PROGRAM, env = "DOTDRAW_ENGINE")]
    pub engine: String,

    /// Kill a render that takes longer than this many seconds
    #[arg(long, value_name = "SECS", env = "DOTDRAW_TIMEOUT")]
    pub timeout: Option<u64>,
}

/// Attribute handling for graph documents
#[derive(Args, Debug, Clone)]
pub struct AttributeArgs {
    /// Ignore node, edge and graph attributes in the documents
    #[arg(long, env = "DOTDRAW_NO_ATTRIBUTES")]
    pub no_attributes: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DrawError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DrawError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DrawError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        selectors: SelectorArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        attributes: AttributeArgs,
    }

    #[test]
    fn test_defaults_come_from_constants() {
        let harness = Harness::try_parse_from(["harness"]).unwrap();

        assert_eq!(harness.selectors.layout, DEFAULT_LAYOUT);
        assert_eq!(harness.selectors.format, DEFAULT_FORMAT);
        assert_eq!(harness.engine.engine, DEFAULT_PROGRAM);
        assert_eq!(harness.engine.timeout, None);
        assert!(!harness.attributes.no_attributes);
    }

    #[test]
    fn test_short_selector_flags_match_graphviz() {
        let harness =
            Harness::try_parse_from(["harness", "-K", "neato", "-T", "svg", "--timeout", "5"])
                .unwrap();

        assert_eq!(harness.selectors.layout, "neato");
        assert_eq!(harness.selectors.format, "svg");
        assert_eq!(harness.engine.timeout, Some(5));
    }
}
