//! Human and machine readable reports of parsed graphs.

use anyhow::Result;
use fg_parser::{Argument, FilterNode};

use crate::config::{OutputConfig, OutputFormat};

/// Render a graph in the configured output format.
pub fn render(graph: &[Vec<FilterNode>], output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(graph)),
        OutputFormat::Json => render_json(graph, output.pretty),
    }
}

/// Indented tree, one block per branch and chain.
pub fn render_text(graph: &[Vec<FilterNode>]) -> String {
    let mut out = String::new();

    for (b, branch) in graph.iter().enumerate() {
        out.push_str(&format!("branch {}\n", b));
        for (c, node) in branch.iter().enumerate() {
            let name = if node.name.is_empty() { "(none)" } else { node.name.as_str() };
            out.push_str(&format!("  chain {}: {}\n", c, name));
            if !node.source_labels.is_empty() {
                out.push_str(&format!("    sources: {}\n", labels(&node.source_labels)));
            }
            if !node.arguments.is_empty() {
                let args: Vec<String> = node.arguments.iter().map(argument).collect();
                out.push_str(&format!("    arguments: {}\n", args.join(", ")));
            }
            if !node.destination_labels.is_empty() {
                out.push_str(&format!(
                    "    destinations: {}\n",
                    labels(&node.destination_labels)
                ));
            }
        }
    }

    out
}

/// JSON array of branches, each an array of nodes.
pub fn render_json(graph: &[Vec<FilterNode>], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)?
    } else {
        serde_json::to_string(graph)?
    };
    Ok(json)
}

/// One-line count summary.
pub fn summary(graph: &[Vec<FilterNode>]) -> String {
    let chains: usize = graph.iter().map(Vec::len).sum();
    format!(
        "{} {}, {} {}",
        graph.len(),
        plural(graph.len(), "branch", "branches"),
        chains,
        plural(chains, "chain", "chains")
    )
}

fn labels(labels: &[String]) -> String {
    labels.iter().map(|l| format!("[{}]", l)).collect()
}

fn argument(argument: &Argument) -> String {
    match &argument.value {
        Some(value) => format!("{}={}", argument.key, value),
        None => argument.key.clone(),
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
