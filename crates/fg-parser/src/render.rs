//! Rendering parsed definitions back into filter-graph text.
//!
//! Extracted strings keep their escapes and quotes, so rendering a parsed
//! graph and parsing it again yields the same definitions.

use crate::types::{Argument, FilterNode};

/// Render one node as `[src]...name=args[dst]...`.
pub fn render_chain(node: &FilterNode) -> String {
    let mut out = String::new();

    for label in &node.source_labels {
        push_label(&mut out, label);
    }

    out.push_str(&node.name);
    if !node.arguments.is_empty() {
        out.push('=');
        for (i, argument) in node.arguments.iter().enumerate() {
            if i > 0 {
                out.push(':');
            }
            push_argument(&mut out, argument);
        }
    } else if node.name.is_empty()
        && (node.source_labels.is_empty() || !node.destination_labels.is_empty())
    {
        // Without a marker the chain would vanish or its labels merge into the source run.
        out.push('=');
    }

    for label in &node.destination_labels {
        push_label(&mut out, label);
    }

    out
}

/// Render a whole graph: chains joined by `,`, branches by `;`.
///
/// A branch with no chains is written as a lone `,` so it survives a reparse.
pub fn render_graph(graph: &[Vec<FilterNode>]) -> String {
    graph
        .iter()
        .map(|branch| {
            if branch.is_empty() {
                return ",".to_string();
            }
            branch
                .iter()
                .map(render_chain)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn push_label(out: &mut String, label: &str) {
    out.push('[');
    out.push_str(label);
    out.push(']');
}

fn push_argument(out: &mut String, argument: &Argument) {
    out.push_str(&argument.key);
    if let Some(value) = &argument.value {
        out.push('=');
        out.push_str(value);
    }
}

impl std::fmt::Display for FilterNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_chain(self))
    }
}
