use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::common::ConfigBuilder;
use crate::error::DrawError;
use crate::render::{LayoutAlgorithm, OutputFormat};

/// Everything one engine invocation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    dot: String,
    algorithm: LayoutAlgorithm,
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl RenderRequest {
    pub fn new(
        dot: String,
        algorithm: LayoutAlgorithm,
        format: OutputFormat,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            dot,
            algorithm,
            format,
            output,
        }
    }

    pub fn builder() -> RenderRequestBuilder {
        RenderRequestBuilder::new()
    }

    pub fn dot(&self) -> &str {
        &self.dot
    }

    pub fn algorithm(&self) -> LayoutAlgorithm {
        self.algorithm
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Engine arguments, excluding the program itself
    pub fn engine_args(&self) -> Vec<OsString> {
        let mut args = vec![
            OsString::from(format!("-K{}", self.algorithm)),
            OsString::from(format!("-T{}", self.format)),
        ];
        if let Some(output) = &self.output {
            args.push(OsString::from("-o"));
            args.push(output.clone().into_os_string());
        }
        args
    }

    pub(crate) fn into_parts(self) -> (String, LayoutAlgorithm, OutputFormat, Option<PathBuf>) {
        (self.dot, self.algorithm, self.format, self.output)
    }
}

/// What came back from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// Engine standard output, when no output file was requested
    Bytes(Vec<u8>),
    /// The engine wrote the named file
    File(PathBuf),
}

/// Builds a [`RenderRequest`] from selector strings, rejecting unknown ones
#[derive(Default)]
pub struct RenderRequestBuilder {
    dot: Option<String>,
    algorithm: Option<String>,
    format: Option<String>,
    output: Option<PathBuf>,
}

impl RenderRequestBuilder {
    pub fn new() -> Self {
        Self {
            dot: None,
            algorithm: None,
            format: None,
            output: None,
        }
    }

    pub fn with_dot(mut self, dot: impl Into<String>) -> Self {
        self.dot = Some(dot.into());
        self
    }

    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

impl ConfigBuilder for RenderRequestBuilder {
    type Config = RenderRequest;

    fn build(self) -> Result<Self::Config, DrawError> {
        let algorithm = match self.algorithm {
            Some(algorithm) => algorithm.parse()?,
            None => LayoutAlgorithm::default(),
        };
        let format = match self.format {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };

        Ok(RenderRequest {
            dot: self.dot.ok_or_else(|| DrawError::ConfigurationError {
                message: "Missing required field: dot".to_string(),
            })?,
            algorithm,
            format,
            output: self.output,
        })
    }
}
