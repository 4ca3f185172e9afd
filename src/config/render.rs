//! Render command configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::ConfigBuilder;
use crate::error::DrawError;
use crate::render::{LayoutAlgorithm, OutputFormat};

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub paths: Vec<PathBuf>,
    pub layout: LayoutAlgorithm,
    pub format: OutputFormat,
    pub output_dir: Option<PathBuf>,
    pub program: String,
    pub timeout: Option<Duration>,
    pub use_attributes: bool,
    pub fail_fast: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Where the rendering of `document` is written
    pub fn output_path(&self, document: &Path) -> PathBuf {
        let stem = document
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_string());
        let file_name = format!("{stem}.{}", self.format.extension());

        match (&self.output_dir, document.parent()) {
            (Some(dir), _) => dir.join(file_name),
            (None, Some(parent)) => parent.join(file_name),
            (None, None) => PathBuf::from(file_name),
        }
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    layout: Option<String>,
    format: Option<String>,
    output_dir: Option<Option<PathBuf>>,
    program: Option<String>,
    timeout: Option<Option<u64>>,
    use_attributes: Option<bool>,
    fail_fast: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            paths: None,
            layout: None,
            format: None,
            output_dir: None,
            program: None,
            timeout: None,
            use_attributes: None,
            fail_fast: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_layout(mut self, layout: &str) -> Self {
        self.layout = Some(layout.to_string());
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.program = Some(program.to_string());
        self
    }

    pub fn with_timeout_secs(mut self, timeout: Option<u64>) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_use_attributes(mut self, use_attributes: bool) -> Self {
        self.use_attributes = Some(use_attributes);
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }
}

fn missing(field: &str) -> DrawError {
    DrawError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, DrawError> {
        let paths = self.paths.ok_or_else(|| missing("paths"))?;
        if paths.is_empty() {
            return Err(DrawError::ConfigurationError {
                message: "At least one input path is required".to_string(),
            });
        }

        let timeout = match self.timeout.ok_or_else(|| missing("timeout"))? {
            Some(0) => {
                return Err(DrawError::ConfigurationError {
                    message: "Timeout must be at least one second".to_string(),
                });
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(RenderConfig {
            paths,
            layout: self.layout.ok_or_else(|| missing("layout"))?.parse()?,
            format: self.format.ok_or_else(|| missing("format"))?.parse()?,
            output_dir: self.output_dir.ok_or_else(|| missing("output_dir"))?,
            program: self.program.ok_or_else(|| missing("program"))?,
            timeout,
            use_attributes: self.use_attributes.ok_or_else(|| missing("use_attributes"))?,
            fail_fast: self.fail_fast.ok_or_else(|| missing("fail_fast"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RenderConfigBuilder {
        RenderConfig::builder()
            .with_paths(vec![PathBuf::from("graphs/grid.json")])
            .with_layout("neato")
            .with_format("svg")
            .with_output_dir(None)
            .with_program("dot")
            .with_timeout_secs(Some(30))
            .with_use_attributes(true)
            .with_fail_fast(false)
    }

    #[test]
    fn test_build_parses_selectors() {
        let config = complete().build().unwrap();

        assert_eq!(config.layout, LayoutAlgorithm::Neato);
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_unknown_format_is_invalid_argument() {
        let err = complete().with_format("raw").build().unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument { .. }));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let err = RenderConfig::builder()
            .with_paths(vec![PathBuf::from("a.json")])
            .with_timeout_secs(None)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: layout"
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = complete().with_timeout_secs(Some(0)).build().unwrap_err();
        assert!(matches!(err, DrawError::ConfigurationError { .. }));
    }

    #[test]
    fn test_output_path_next_to_document() {
        let config = complete().build().unwrap();

        assert_eq!(
            config.output_path(Path::new("graphs/grid.json")),
            PathBuf::from("graphs/grid.svg")
        );
    }

    #[test]
    fn test_output_path_in_output_dir_uses_format_extension() {
        let config = complete()
            .with_format("plain")
            .with_output_dir(Some(PathBuf::from("out")))
            .build()
            .unwrap();

        assert_eq!(
            config.output_path(Path::new("graphs/grid.toml")),
            PathBuf::from("out/grid.txt")
        );
    }
}
