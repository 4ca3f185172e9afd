//! Formats command executor

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::ListingFormat;
use crate::config::FormatsConfig;
use crate::executors::CommandExecutor;
use crate::render::{LayoutAlgorithm, OutputFormat};

pub struct FormatsExecutor;

#[derive(Debug, Serialize)]
struct FormatListing {
    layouts: Vec<&'static str>,
    formats: Vec<FormatEntry>,
}

#[derive(Debug, Serialize)]
struct FormatEntry {
    name: &'static str,
    extension: &'static str,
    image: bool,
    vector: bool,
}

impl FormatListing {
    fn collect() -> Self {
        Self {
            layouts: LayoutAlgorithm::names().collect(),
            formats: OutputFormat::ALL
                .iter()
                .map(|format| FormatEntry {
                    name: format.as_str(),
                    extension: format.extension(),
                    image: format.is_raster_image(),
                    vector: format.is_vector(),
                })
                .collect(),
        }
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", style("Layout algorithms").bold()));
        for layout in &self.layouts {
            out.push_str(&format!("  {layout}\n"));
        }

        out.push_str(&format!("\n{}\n", style("Output formats").bold()));
        for format in &self.formats {
            let marker = if format.image {
                style("image").green().to_string()
            } else if format.vector {
                style("vector").cyan().to_string()
            } else {
                style("bytes").dim().to_string()
            };
            out.push_str(&format!("  {:<12} {marker}\n", format.name));
        }
        out
    }
}

impl CommandExecutor for FormatsExecutor {
    type Config = FormatsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let listing = FormatListing::collect();

        match config.format {
            ListingFormat::Human => print!("{}", listing.to_human()),
            ListingFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&listing).into_diagnostic()?)
            }
        }

        Ok(())
    }
}
