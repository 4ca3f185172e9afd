//! Formats command configuration

use crate::cli::ListingFormat;
use crate::error::DrawError;

#[derive(Debug, Clone)]
pub struct FormatsConfig {
    pub format: ListingFormat,
}

impl FormatsConfig {
    pub fn builder() -> FormatsConfigBuilder {
        FormatsConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct FormatsConfigBuilder {
    format: Option<ListingFormat>,
}

impl FormatsConfigBuilder {
    pub fn with_format(mut self, format: ListingFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for FormatsConfigBuilder {
    type Config = FormatsConfig;

    fn build(self) -> Result<Self::Config, DrawError> {
        Ok(FormatsConfig {
            format: self.format.ok_or_else(|| DrawError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
        })
    }
}
