//! Dot command configuration

use std::path::PathBuf;

use crate::error::DrawError;

#[derive(Debug, Clone)]
pub struct DotConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub use_attributes: bool,
}

impl DotConfig {
    pub fn builder() -> DotConfigBuilder {
        DotConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DotConfigBuilder {
    path: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    use_attributes: Option<bool>,
}

impl DotConfigBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            output: None,
            use_attributes: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_use_attributes(mut self, use_attributes: bool) -> Self {
        self.use_attributes = Some(use_attributes);
        self
    }
}

impl crate::common::ConfigBuilder for DotConfigBuilder {
    type Config = DotConfig;

    fn build(self) -> Result<Self::Config, DrawError> {
        Ok(DotConfig {
            path: self.path.ok_or_else(|| DrawError::ConfigurationError {
                message: "Missing required field: path".to_string(),
            })?,
            output: self.output.ok_or_else(|| DrawError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            })?,
            use_attributes: self
                .use_attributes
                .ok_or_else(|| DrawError::ConfigurationError {
                    message: "Missing required field: use_attributes".to_string(),
                })?,
        })
    }
}
