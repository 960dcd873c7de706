//! fg-parser: parser for the filter-graph mini-language.
//!
//! Turns expressions such as
//! `"[0:v]scale=1280:720,eq=brightness=0.1[v1];[0:a]volume=2.0[a1]"` into a
//! two-level list: one entry per branch (`;`), each holding one definition
//! per chain (`,`).
//!
//! # Quick start
//!
//! ```
//! use fg_parser::{parse, Argument};
//!
//! let graph = parse("[0:v]scale=1280:720,eq=brightness=0.1[v1];[0:a]volume=2.0[a1]").unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! let eq = &graph[0][1];
//! assert_eq!(eq.name, "eq");
//! assert_eq!(eq.arguments, vec![Argument::new("brightness", "0.1")]);
//! assert_eq!(eq.destination_labels, vec!["v1"]);
//! ```
//!
//! Parsing is a single synchronous pass. It does not check filter names or
//! option values against any registry and never interprets pad labels.

pub mod chain;
mod error;
pub mod filter;
pub mod graph;
pub mod render;
pub mod split;
pub mod tokenizer;
pub mod types;

pub use chain::{decompose, destination_labels, filter_spec, source_labels, ChainParts};
pub use error::{Error, LabelPhase, Result};
pub use filter::{parse_filter_spec, FilterSpec};
pub use graph::{FilterDefinition, FilterGraphParser};
pub use render::{render_chain, render_graph};
pub use split::{split_arguments, split_branches, split_chains};
pub use tokenizer::{render_tokens, tokenize, SemanticChar};
pub use types::{Argument, FilterNode};

/// Parse an expression into [`FilterNode`] definitions.
///
/// # Errors
///
/// Returns the first [`Error`] raised by a malformed chain.
///
/// # Examples
///
/// ```
/// let graph = fg_parser::parse("[in]hflip,vflip[out]").unwrap();
/// assert_eq!(graph[0].len(), 2);
/// assert_eq!(graph[0][0].source_labels, vec!["in"]);
/// assert_eq!(graph[0][1].destination_labels, vec!["out"]);
/// ```
pub fn parse(input: &str) -> Result<Vec<Vec<FilterNode>>> {
    FilterGraphParser::new(input).parse()
}

/// Parse an expression into caller-defined definitions.
///
/// `factory` is called once per chain to obtain a fresh definition.
///
/// # Errors
///
/// Returns the first [`Error`] raised by a malformed chain.
pub fn parse_with<D, F>(input: &str, factory: F) -> Result<Vec<Vec<D>>>
where
    D: FilterDefinition,
    F: FnMut() -> D,
{
    FilterGraphParser::new(input).parse_with(factory)
}
