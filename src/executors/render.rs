//! Render command executor

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ParallelProgressIterator, ProgressBar};
use miette::{IntoDiagnostic, Report, Result, WrapErr, miette};
use rayon::prelude::*;
use tracing::debug;

use crate::config::RenderConfig;
use crate::discovery::DocumentDiscovery;
use crate::error::DrawError;
use crate::executors::{CommandExecutor, document_draw};
use crate::graph::GraphDocument;
use crate::progress::ProgressReporter;
use crate::render::{CancelToken, GraphvizEngine, LayoutEngine, Rendered};
use crate::utils::string::pluralize;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering graph documents with {} as {}...",
            style("🎨").cyan(),
            style(config.layout).bold(),
            style(config.format).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let progress = ProgressReporter::for_terminal();

        let documents = DocumentDiscovery::new().discover_all(&config.paths, progress.as_ref());
        if let Some(p) = progress.as_ref() {
            p.finish_discovery(documents.len());
        }
        if documents.is_empty() {
            eprintln!("{} No graph documents found to render", style("ℹ").blue());
            return Ok(());
        }

        if let Some(dir) = config.output_dir.as_ref() {
            fs::create_dir_all(dir)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create output directory '{}'", dir.display()))?;
        }

        let cancel = CancelToken::new();
        let engine = GraphvizEngine::new(config.program.as_str())
            .with_timeout(config.timeout)
            .with_cancel_token(cancel.clone());
        if !engine.is_available() {
            return Err(DrawError::RenderFailure {
                program: config.program.clone(),
                reason: "not found on PATH".to_string(),
                stderr: String::new(),
            }
            .into());
        }

        let bar = progress
            .as_ref()
            .map(|p| p.start_rendering(documents.len()))
            .unwrap_or_else(ProgressBar::hidden);

        let outcomes: Vec<(PathBuf, Result<PathBuf, DrawError>)> = plan_outputs(&config, documents)
            .into_par_iter()
            .progress_with(bar.clone())
            .map(|(document, planned)| {
                let outcome =
                    planned.and_then(|output| render_document(&config, &engine, &document, output));
                if outcome.is_err() && config.fail_fast {
                    cancel.cancel();
                }
                (document, outcome)
            })
            .collect();
        bar.finish_and_clear();

        report_outcomes(outcomes)
    }
}

/// Pair each document with its output path.
///
/// Documents that would write the same output file all fail instead of
/// overwriting each other.
fn plan_outputs(
    config: &RenderConfig,
    documents: Vec<PathBuf>,
) -> Vec<(PathBuf, Result<PathBuf, DrawError>)> {
    let mut writers: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
    for document in &documents {
        writers
            .entry(config.output_path(document))
            .or_default()
            .push(document.clone());
    }

    documents
        .into_iter()
        .map(|document| {
            let output = config.output_path(&document);
            let planned = match writers.get(&output) {
                Some(owners) if owners.len() > 1 => Err(DrawError::ConfigurationError {
                    message: format!(
                        "'{}' would be written by {} documents: {}",
                        output.display(),
                        owners.len(),
                        owners
                            .iter()
                            .map(|owner| owner.display().to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                }),
                _ => Ok(output),
            };
            (document, planned)
        })
        .collect()
}

/// Render one document to `output`
fn render_document(
    config: &RenderConfig,
    engine: &dyn LayoutEngine,
    document: &Path,
    output: PathBuf,
) -> Result<PathBuf, DrawError> {
    let (graph, graph_attr) = GraphDocument::parse_file(document)?.into_graph(document)?;

    let mut draw = document_draw(&graph, graph_attr, config.use_attributes)
        .with_method(config.layout.as_str())
        .with_image_type(config.format.as_str());
    // Raster output is decoded in memory before it is written out
    if !config.format.is_raster_image() {
        draw = draw.with_filename(output.clone());
    }

    match draw.draw_with(engine)? {
        Rendered::Image(image) => {
            debug!(
                document = %document.display(),
                width = image.width(),
                height = image.height(),
                "decoded rendered image"
            );
            image.save(&output)?;
        }
        Rendered::Bytes { data, .. } => fs::write(&output, data)?,
        Rendered::File(_) => {}
    }

    Ok(output)
}

fn report_outcomes(outcomes: Vec<(PathBuf, Result<PathBuf, DrawError>)>) -> Result<()> {
    let total = outcomes.len();
    let mut failed = 0;

    for (document, outcome) in outcomes {
        match outcome {
            Ok(output) => eprintln!(
                "{} {} {} {}",
                style("✓").green(),
                document.display(),
                style("→").dim(),
                style(output.display()).bold()
            ),
            Err(DrawError::Cancelled { reason, .. }) => {
                failed += 1;
                eprintln!(
                    "{} {} {}",
                    style("⊘").yellow(),
                    document.display(),
                    style(reason).dim()
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} {}", style("✗").red(), document.display());
                eprintln!("{:?}", Report::new(e));
            }
        }
    }

    if failed > 0 {
        return Err(miette!(
            "{failed} of {total} {} failed to render",
            pluralize("document", total)
        ));
    }

    eprintln!(
        "\n{} Rendered {} {}",
        style("✓").green().bold(),
        style(total).yellow().bold(),
        pluralize("document", total)
    );
    Ok(())
}
