//! Chain decomposition into pad labels and a filter specification.
//!
//! A chain reads `[src]...[src]filter[dst]...[dst]`. The decomposer runs in
//! three phases:
//! 1. Collect leading `[label]` pairs as source labels.
//! 2. Take everything up to the next plain `[` as the filter specification.
//! 3. Collect the remaining `[label]` pairs as destination labels; anything
//!    else after that point is an error.

use crate::error::{Error, LabelPhase, Result};
use crate::tokenizer::{render_tokens, SemanticChar};

const OPEN: char = '[';
const CLOSE: char = ']';

/// A chain split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParts<'a, 'src> {
    /// Leading pad labels.
    pub source_labels: Vec<String>,
    /// The filter specification, borrowed from the chain.
    pub filter: &'a [SemanticChar<'src>],
    /// Trailing pad labels.
    pub destination_labels: Vec<String>,
}

/// Leading pad labels of a chain.
///
/// # Errors
///
/// [`Error::UnmatchedBracket`] if a `]` appears outside a label or a label
/// is still open at the end of the chain.
pub fn source_labels(chain: &[SemanticChar<'_>]) -> Result<Vec<String>> {
    scan_source_labels(chain).map(|(labels, _)| labels)
}

/// Filter specification of a chain.
///
/// # Errors
///
/// Fails like [`source_labels`], since the filter starts where the source
/// labels end.
pub fn filter_spec<'a, 'src>(chain: &'a [SemanticChar<'src>]) -> Result<&'a [SemanticChar<'src>]> {
    let (_, start) = scan_source_labels(chain)?;
    Ok(&chain[start..filter_end(chain, start)])
}

/// Trailing pad labels of a chain.
///
/// # Errors
///
/// Fails like [`source_labels`], and additionally with
/// [`Error::TrailingContentAfterLabels`] or [`Error::UnmatchedBracket`] for
/// malformed destination labels.
pub fn destination_labels(chain: &[SemanticChar<'_>]) -> Result<Vec<String>> {
    decompose(chain).map(|parts| parts.destination_labels)
}

/// Run all three phases over a chain.
///
/// # Errors
///
/// Any error from [`source_labels`] or [`destination_labels`].
pub fn decompose<'a, 'src>(chain: &'a [SemanticChar<'src>]) -> Result<ChainParts<'a, 'src>> {
    let (source_labels, start) = scan_source_labels(chain)?;
    let end = filter_end(chain, start);
    let destination_labels = scan_destination_labels(chain, end)?;

    Ok(ChainParts {
        source_labels,
        filter: &chain[start..end],
        destination_labels,
    })
}

/// Collect leading labels and return them with the index where the filter
/// specification begins.
fn scan_source_labels(chain: &[SemanticChar<'_>]) -> Result<(Vec<String>, usize)> {
    let mut labels = Vec::new();
    let mut label: Option<String> = None;

    for (i, token) in chain.iter().enumerate() {
        match label.as_mut() {
            Some(buf) => {
                if token.is(CLOSE) {
                    labels.push(std::mem::take(buf));
                    label = None;
                } else if token.is(OPEN) {
                    return Err(Error::unmatched_bracket(LabelPhase::Source, render_tokens(chain)));
                } else {
                    token.write_to(buf);
                }
            }
            None => {
                if token.is(OPEN) {
                    label = Some(String::new());
                } else if token.is(CLOSE) {
                    return Err(Error::unmatched_bracket(LabelPhase::Source, render_tokens(chain)));
                } else {
                    return Ok((labels, i));
                }
            }
        }
    }

    if label.is_some() {
        return Err(Error::unmatched_bracket(LabelPhase::Source, render_tokens(chain)));
    }
    Ok((labels, chain.len()))
}

/// Index of the first plain `[` at or after `start`, or the chain length.
fn filter_end(chain: &[SemanticChar<'_>], start: usize) -> usize {
    chain[start..]
        .iter()
        .position(|t| t.is(OPEN))
        .map_or(chain.len(), |offset| start + offset)
}

fn scan_destination_labels(chain: &[SemanticChar<'_>], start: usize) -> Result<Vec<String>> {
    let mut labels = Vec::new();
    let mut label: Option<String> = None;

    for token in &chain[start..] {
        match label.as_mut() {
            Some(buf) => {
                if token.is(CLOSE) {
                    labels.push(std::mem::take(buf));
                    label = None;
                } else if token.is(OPEN) {
                    return Err(Error::unmatched_bracket(
                        LabelPhase::Destination,
                        render_tokens(chain),
                    ));
                } else {
                    token.write_to(buf);
                }
            }
            None => {
                if token.is(OPEN) {
                    label = Some(String::new());
                } else if token.is(CLOSE) {
                    return Err(Error::unmatched_bracket(
                        LabelPhase::Destination,
                        render_tokens(chain),
                    ));
                } else {
                    return Err(Error::trailing_content(render_tokens(chain), token.to_string()));
                }
            }
        }
    }

    if label.is_some() {
        return Err(Error::unmatched_bracket(LabelPhase::Destination, render_tokens(chain)));
    }
    Ok(labels)
}
