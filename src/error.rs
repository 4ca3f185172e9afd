use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed error returned by user supplied attribute functions
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(dotdraw::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DrawError {
    #[error("Invalid {parameter} '{value}'")]
    #[diagnostic(
        code(dotdraw::invalid_argument),
        help("Supported values: {expected}")
    )]
    InvalidArgument {
        parameter: &'static str,
        value: String,
        expected: String,
    },

    #[error("Attribute function failed for {element}")]
    #[diagnostic(
        code(dotdraw::attribute_function),
        help("The attribute callback returned an error; no DOT document was produced")
    )]
    AttributeFunction {
        element: String,
        #[source]
        source: BoxError,
    },

    #[error("Layout engine '{program}' failed: {reason}")]
    #[diagnostic(
        code(dotdraw::render_failure),
        help("Make sure Graphviz is installed and on PATH. Engine output:\n{stderr}")
    )]
    RenderFailure {
        program: String,
        reason: String,
        stderr: String,
    },

    #[error("Layout engine '{program}' was stopped: {reason}")]
    #[diagnostic(
        code(dotdraw::cancelled),
        help("Raise the timeout or pick a faster layout such as sfdp for large graphs")
    )]
    Cancelled { program: String, reason: String },

    #[error("Output is not a valid {format} image")]
    #[diagnostic(
        code(dotdraw::decode_error),
        help("The layout engine produced bytes that do not match the requested format")
    )]
    Decode {
        format: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dotdraw::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid graph document '{path}': {message}")]
    #[diagnostic(
        code(dotdraw::invalid_document),
        help("Edges reference nodes by position in `nodes`; attribute names must match [A-Za-z_][A-Za-z0-9_]*")
    )]
    InvalidDocument { path: PathBuf, message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(dotdraw::json_error),
        help("Check the JSON syntax of the graph document")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(dotdraw::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dotdraw::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dotdraw::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl DrawError {
    pub(crate) fn invalid_argument(
        parameter: &'static str,
        value: &str,
        expected: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        DrawError::InvalidArgument {
            parameter,
            value: value.to_string(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// True for failures of the external engine process itself
    pub fn is_render_failure(&self) -> bool {
        matches!(self, DrawError::RenderFailure { .. })
    }
}
