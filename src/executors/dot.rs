//! Dot command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::DotConfig;
use crate::executors::{CommandExecutor, document_draw};
use crate::graph::GraphDocument;

pub struct DotExecutor;

impl CommandExecutor for DotExecutor {
    type Config = DotConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let (graph, graph_attr) = GraphDocument::parse_file(&config.path)
            .and_then(|document| document.into_graph(&config.path))
            .wrap_err_with(|| format!("Failed to load '{}'", config.path.display()))?;

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout().lock())
        };

        document_draw(&graph, graph_attr, config.use_attributes)
            .write_dot(output_writer.as_mut())
            .wrap_err("Failed to write DOT document")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush DOT document")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} DOT written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_writes_dot_file_with_attributes() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("pair.json");
        let output = temp.path().join("pair.dot");
        fs::write(
            &input,
            r#"{
                "directed": true,
                "graph": { "rankdir": "LR" },
                "nodes": [ { "label": "a" }, {} ],
                "edges": [ { "source": 0, "target": 1, "attributes": { "label": "x\ny" } } ]
            }"#,
        )
        .unwrap();

        let config = DotConfig::builder()
            .with_path(input)
            .with_output(Some(output.clone()))
            .with_use_attributes(true)
            .build()
            .unwrap();
        DotExecutor::execute(config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "digraph {\n    rankdir=\"LR\";\n    0 [label=\"a\"];\n    1;\n    0 -> 1 [label=\"x\\ny\"];\n}\n"
        );
    }

    #[test]
    fn test_no_attributes_draws_indices_only() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("pair.toml");
        let output = temp.path().join("pair.dot");
        fs::write(
            &input,
            r#"
[graph]
bgcolor = "red"

[[nodes]]
label = "a"

[[nodes]]
label = "b"

[[edges]]
source = 0
target = 1
"#,
        )
        .unwrap();

        let config = DotConfig::builder()
            .with_path(input)
            .with_output(Some(output.clone()))
            .with_use_attributes(false)
            .build()
            .unwrap();
        DotExecutor::execute(config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "graph {\n    0;\n    1;\n    0 -- 1;\n}\n"
        );
    }

    #[test]
    fn test_dangling_edge_is_rejected() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("broken.json");
        fs::write(
            &input,
            r#"{ "nodes": [ {} ], "edges": [ { "source": 0, "target": 4 } ] }"#,
        )
        .unwrap();

        let config = DotConfig::builder()
            .with_path(input)
            .with_output(Some(temp.path().join("broken.dot")))
            .with_use_attributes(true)
            .build()
            .unwrap();

        assert!(DotExecutor::execute(config).is_err());
    }
}
