//! Graph assembly: folds branches and chains into caller-defined definitions.

use crate::chain::decompose;
use crate::error::Result;
use crate::filter::parse_filter_spec;
use crate::split::{split_branches, split_chains};
use crate::tokenizer::{tokenize, SemanticChar};
use crate::types::Argument;

/// Sink populated once per chain of a parsed graph.
///
/// The parser only hands over structural shape; what the labels, name and
/// arguments mean is up to the implementor.
pub trait FilterDefinition {
    /// Labels of the pads feeding the filter.
    fn set_source_labels(&mut self, labels: Vec<String>);
    /// Labels of the pads the filter writes to.
    fn set_destination_labels(&mut self, labels: Vec<String>);
    /// The filter name.
    fn set_filter_name(&mut self, name: String);
    /// The filter arguments, in textual order.
    fn set_arguments(&mut self, arguments: Vec<Argument>);
}

/// Parser over a single filter-graph expression.
///
/// The expression is tokenized once on construction. Each stage is exposed
/// separately so callers can inspect intermediate results.
///
/// # Examples
///
/// ```
/// use fg_parser::{FilterGraphParser, FilterNode};
///
/// let parser = FilterGraphParser::new("[0:v]split[a][b];[a]hflip[l]");
/// assert_eq!(parser.branches().len(), 2);
///
/// let graph = parser.parse::<FilterNode>().unwrap();
/// assert_eq!(graph[0][0].destination_labels, vec!["a", "b"]);
/// assert_eq!(graph[1][0].name, "hflip");
/// ```
#[derive(Debug, Clone)]
pub struct FilterGraphParser<'src> {
    input: &'src str,
    tokens: Vec<SemanticChar<'src>>,
}

impl<'src> FilterGraphParser<'src> {
    /// Tokenize `input` and prepare it for parsing.
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            tokens: tokenize(input),
        }
    }

    /// The expression this parser was built from.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// The cleaned token stream.
    pub fn tokens(&self) -> &[SemanticChar<'src>] {
        &self.tokens
    }

    /// Non-empty branches, in order.
    pub fn branches(&self) -> Vec<&[SemanticChar<'src>]> {
        split_branches(&self.tokens)
    }

    /// Non-empty chains of every branch, in order.
    pub fn chains(&self) -> Vec<Vec<&[SemanticChar<'src>]>> {
        self.branches().into_iter().map(split_chains).collect()
    }

    /// Parse into definitions built by `D::default()`.
    ///
    /// # Errors
    ///
    /// The first malformed chain aborts the parse; see [`crate::Error`].
    pub fn parse<D>(&self) -> Result<Vec<Vec<D>>>
    where
        D: FilterDefinition + Default,
    {
        self.parse_with(D::default)
    }

    /// Parse into definitions produced by `factory`, one call per chain.
    ///
    /// # Errors
    ///
    /// The first malformed chain aborts the parse; no partial graph is
    /// returned.
    pub fn parse_with<D, F>(&self, mut factory: F) -> Result<Vec<Vec<D>>>
    where
        D: FilterDefinition,
        F: FnMut() -> D,
    {
        let branches = self.branches();
        let mut graph = Vec::with_capacity(branches.len());
        let mut chain_count = 0usize;

        for (branch_index, branch) in branches.into_iter().enumerate() {
            let chains = split_chains(branch);
            let mut definitions = Vec::with_capacity(chains.len());

            for chain in chains {
                let parts = decompose(chain)?;
                let spec = parse_filter_spec(parts.filter);
                tracing::trace!(
                    branch = branch_index,
                    filter = %spec.name,
                    sources = parts.source_labels.len(),
                    destinations = parts.destination_labels.len(),
                    arguments = spec.arguments.len(),
                    "decomposed chain"
                );

                let mut definition = factory();
                definition.set_source_labels(parts.source_labels);
                definition.set_destination_labels(parts.destination_labels);
                definition.set_filter_name(spec.name);
                definition.set_arguments(spec.arguments);
                definitions.push(definition);
            }

            chain_count += definitions.len();
            graph.push(definitions);
        }

        tracing::debug!(
            branches = graph.len(),
            chains = chain_count,
            "parsed filter graph"
        );
        Ok(graph)
    }
}
