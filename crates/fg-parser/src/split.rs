//! Separator splitting shared by the branch, chain and argument levels.
//!
//! All three levels use the same rule: split on the unescaped separator and
//! drop empty runs, so doubled, leading or trailing separators never yield
//! empty parts. Parts borrow from the token buffer; nothing is copied.

use crate::tokenizer::SemanticChar;

/// Separates graph branches.
pub const BRANCH_SEPARATOR: char = ';';
/// Separates chains within a branch.
pub const CHAIN_SEPARATOR: char = ',';
/// Separates filter arguments.
pub const ARGUMENT_SEPARATOR: char = ':';

/// Split `tokens` on every plain `separator`, dropping empty runs.
pub fn split_on<'a, 'src>(
    tokens: &'a [SemanticChar<'src>],
    separator: char,
) -> Vec<&'a [SemanticChar<'src>]> {
    tokens
        .split(|t| t.is(separator))
        .filter(|run| !run.is_empty())
        .collect()
}

/// Split a token stream into graph branches.
pub fn split_branches<'a, 'src>(tokens: &'a [SemanticChar<'src>]) -> Vec<&'a [SemanticChar<'src>]> {
    split_on(tokens, BRANCH_SEPARATOR)
}

/// Split one branch into its chains.
pub fn split_chains<'a, 'src>(branch: &'a [SemanticChar<'src>]) -> Vec<&'a [SemanticChar<'src>]> {
    split_on(branch, CHAIN_SEPARATOR)
}

/// Split the argument part of a filter specification.
pub fn split_arguments<'a, 'src>(
    arguments: &'a [SemanticChar<'src>],
) -> Vec<&'a [SemanticChar<'src>]> {
    split_on(arguments, ARGUMENT_SEPARATOR)
}
