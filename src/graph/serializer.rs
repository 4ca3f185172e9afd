use std::io::Write;

use crate::error::DrawError;
use crate::graph::{AttributeMap, DrawableGraph, ResolvedAttributes};

// Helper macro for write operations that converts IO errors
macro_rules! write_out {
    ($dst:expr, $($arg:tt)*) => {
        write!($dst, $($arg)*).map_err(DrawError::from)
    };
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DrawError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DrawError::from)
    };
}

const INDENT: &str = "    ";

/// Escape an attribute value for use inside a double-quoted DOT string.
///
/// Backslash and double quote are escaped with a backslash; newline,
/// carriage return, tab, backspace and form feed become their two-character
/// escape sequences. Single quotes are not special in DOT and pass through.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Writes a graph and its resolved attributes as a DOT document
#[derive(Debug, Default, Clone, Copy)]
pub struct DotSerializer;

impl DotSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Stream the document into `output` statement by statement
    pub fn write_dot<G>(
        &self,
        graph: &G,
        attrs: &ResolvedAttributes,
        output: &mut dyn Write,
    ) -> Result<(), DrawError>
    where
        G: DrawableGraph + ?Sized,
    {
        let (keyword, edge_op) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln_out!(output, "{keyword} {{")?;

        for (name, value) in attrs.graph() {
            writeln_out!(output, "{INDENT}{}=\"{}\";", name, escape_value(value))?;
        }

        for node in graph.draw_nodes() {
            write_out!(output, "{INDENT}{}", node.index)?;
            self.write_attr_list(attrs.node(node.index), output)?;
            writeln_out!(output, ";")?;
        }

        for edge in graph.draw_edges() {
            write_out!(output, "{INDENT}{} {edge_op} {}", edge.source, edge.target)?;
            self.write_attr_list(attrs.edge(edge.index), output)?;
            writeln_out!(output, ";")?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Build the whole document in memory
    pub fn to_dot_string<G>(&self, graph: &G, attrs: &ResolvedAttributes) -> Result<String, DrawError>
    where
        G: DrawableGraph + ?Sized,
    {
        let mut buffer = Vec::new();
        self.write_dot(graph, attrs, &mut buffer)?;
        // Only UTF-8 strings are ever written
        String::from_utf8(buffer).map_err(|e| DrawError::ConfigurationError {
            message: format!("DOT document is not valid UTF-8: {e}"),
        })
    }

    fn write_attr_list(
        &self,
        attrs: Option<&AttributeMap>,
        output: &mut dyn Write,
    ) -> Result<(), DrawError> {
        let Some(attrs) = attrs.filter(|attrs| !attrs.is_empty()) else {
            return Ok(());
        };

        write_out!(output, " [")?;
        for (i, (name, value)) in attrs.iter().enumerate() {
            if i > 0 {
                write_out!(output, ", ")?;
            }
            write_out!(output, "{}=\"{}\"", name, escape_value(value))?;
        }
        write_out!(output, "]")
    }
}
