//! Image materialization of engine output

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::DrawError;
use crate::render::{OutputFormat, RenderResult};

/// A decoded raster rendering
#[derive(Debug, Clone)]
pub struct RenderedImage {
    format: OutputFormat,
    image: DynamicImage,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Encode to `path` in the format the engine rendered
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DrawError> {
        let path = path.as_ref();
        let saved = match self.format.image_format() {
            Some(image_format) => self.image.save_with_format(path, image_format),
            None => self.image.save(path),
        };
        saved.map_err(|e| match e {
            image::ImageError::IoError(io) => DrawError::Io(io),
            other => DrawError::Decode {
                format: path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_else(|| self.format.to_string()),
                source: other,
            },
        })
    }
}

/// Final outcome of a draw
#[derive(Debug, Clone)]
pub enum Rendered {
    Image(RenderedImage),
    Bytes { format: OutputFormat, data: Vec<u8> },
    File(PathBuf),
}

impl Rendered {
    pub fn image(&self) -> Option<&RenderedImage> {
        match self {
            Rendered::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<RenderedImage> {
        match self {
            Rendered::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        match self {
            Rendered::File(path) => Some(path),
            _ => None,
        }
    }
}

/// Decode raster bytes into an image; pass files and other formats through
pub fn materialize(result: RenderResult, format: OutputFormat) -> Result<Rendered, DrawError> {
    match (result, format.image_format()) {
        (RenderResult::File(path), _) => Ok(Rendered::File(path)),
        (RenderResult::Bytes(data), Some(image_format)) => {
            let image = image::load_from_memory_with_format(&data, image_format).map_err(
                |source| DrawError::Decode {
                    format: format.to_string(),
                    source,
                },
            )?;
            Ok(Rendered::Image(RenderedImage { format, image }))
        }
        (RenderResult::Bytes(data), None) => Ok(Rendered::Bytes { format, data }),
    }
}
