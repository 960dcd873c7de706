//! Filter name and argument extraction.
//!
//! A filter specification is `name` or `name=arg:arg:...`, where each
//! argument is `key` or `key=value`. Only plain `=` and `:` are structural.

use crate::split::split_arguments;
use crate::tokenizer::{render_tokens, SemanticChar};
use crate::types::Argument;

const ASSIGN: char = '=';

/// A filter name with its ordered arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Filter name, possibly empty.
    pub name: String,
    /// Arguments in textual order.
    pub arguments: Vec<Argument>,
}

/// Parse the filter part of a chain into a name and arguments.
///
/// The name runs up to the first plain `=`. Everything after it is split on
/// plain `:` and each run reduced to one [`Argument`].
pub fn parse_filter_spec(tokens: &[SemanticChar<'_>]) -> FilterSpec {
    let Some(eq) = tokens.iter().position(|t| t.is(ASSIGN)) else {
        return FilterSpec {
            name: render_tokens(tokens),
            arguments: Vec::new(),
        };
    };

    let arguments = split_arguments(&tokens[eq + 1..])
        .into_iter()
        .filter_map(reduce_argument)
        .collect();

    FilterSpec {
        name: render_tokens(&tokens[..eq]),
        arguments,
    }
}

/// Reduce one argument run to a key and optional value.
///
/// Each plain `=` closes the buffered text: the first non-empty buffer
/// becomes the key, later ones overwrite the value. Empty buffers are
/// skipped, so a leading `=` is dropped. A run that never yields a key
/// (such as a lone `=`) produces nothing.
fn reduce_argument(run: &[SemanticChar<'_>]) -> Option<Argument> {
    let mut key: Option<String> = None;
    let mut value: Option<String> = None;
    let mut buf = String::new();

    for token in run {
        if !token.is(ASSIGN) {
            token.write_to(&mut buf);
            continue;
        }
        if buf.is_empty() {
            continue;
        }
        let text = std::mem::take(&mut buf);
        if key.is_none() {
            key = Some(text);
        } else {
            value = Some(text);
        }
    }

    if !buf.is_empty() {
        if key.is_none() {
            key = Some(buf);
        } else {
            value = Some(buf);
        }
    }

    key.map(|key| Argument { key, value })
}
