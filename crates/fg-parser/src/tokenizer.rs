//! Logos-based tokenizer for filter-graph expressions.
//!
//! The raw lexer recognizes four shapes: a quoted span, a backslash escape,
//! insignificant whitespace (skipped) and any other single character. The
//! public [`tokenize`] function folds those into [`SemanticChar`] values,
//! the unit every later stage works on.

use std::fmt;

use logos::Logos;

/// Raw token types emitted by the Logos lexer.
///
/// Only space and newline are insignificant; tabs and carriage returns are
/// ordinary characters.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \n]+")]
enum RawToken<'src> {
    /// A closed `'...'` span. Backslash pairs inside are kept verbatim.
    #[regex(r"'([^'\\]|\\(.|\n))*'", |lex| lex.slice(), priority = 5)]
    Quoted(&'src str),

    /// A `'` that is never closed before end of input, including a final lone `\`.
    #[regex(r"'([^'\\]|\\(.|\n))*\\?", |lex| lex.slice(), priority = 4)]
    UnterminatedQuote(&'src str),

    /// A backslash followed by the character it escapes.
    #[regex(r"\\(.|\n)", |lex| lex.slice(), priority = 4)]
    Escape(&'src str),

    /// Any other character. A lone `\` only lands here at end of input.
    #[regex(r"[^ \n]", |lex| lex.slice(), priority = 1)]
    Char(&'src str),
}

/// One logical character of a cleaned filter-graph expression.
///
/// Only [`SemanticChar::Plain`] values carry structural meaning; escaped
/// characters and quoted spans can never act as delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticChar<'src> {
    /// An ordinary character, possibly a delimiter (`;`, `,`, `:`, `=`, `[`, `]`).
    Plain(char),
    /// A character that followed a backslash.
    Escaped(char),
    /// A whole quoted span, enclosing quotes included.
    Quoted(&'src str),
}

impl<'src> SemanticChar<'src> {
    /// Whether this is the unescaped, unquoted character `c`.
    pub fn is(&self, c: char) -> bool {
        matches!(self, SemanticChar::Plain(p) if *p == c)
    }

    /// Whether this character came from an escape sequence.
    pub fn is_escaped(&self) -> bool {
        matches!(self, SemanticChar::Escaped(_))
    }

    /// Whether this is an opaque quoted span.
    pub fn is_quoted(&self) -> bool {
        matches!(self, SemanticChar::Quoted(_))
    }

    /// Append the textual form of this character to `out`.
    ///
    /// Escaped characters regain their leading backslash and quoted spans
    /// are written as they appeared in the input.
    pub fn write_to(&self, out: &mut String) {
        match self {
            SemanticChar::Plain(c) => out.push(*c),
            SemanticChar::Escaped(c) => {
                out.push('\\');
                out.push(*c);
            }
            SemanticChar::Quoted(span) => out.push_str(span),
        }
    }
}

impl fmt::Display for SemanticChar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_to(&mut buf);
        f.write_str(&buf)
    }
}

/// Tokenize an expression into semantic characters.
///
/// Runs in a single forward pass. Spaces and newlines outside quotes are
/// dropped; a dangling backslash at end of input is dropped too, and an
/// unterminated quote is kept as one opaque span.
pub fn tokenize(input: &str) -> Vec<SemanticChar<'_>> {
    let mut tokens = Vec::with_capacity(input.len());

    for raw in RawToken::lexer(input).flatten() {
        match raw {
            RawToken::Quoted(span) => tokens.push(SemanticChar::Quoted(span)),
            RawToken::UnterminatedQuote(span) => {
                tracing::debug!(quoted = span, "unterminated quote kept as an opaque span");
                tokens.push(SemanticChar::Quoted(span));
            }
            RawToken::Escape(pair) => {
                if let Some(c) = pair.chars().nth(1) {
                    tokens.push(SemanticChar::Escaped(c));
                }
            }
            RawToken::Char("\\") => {
                tracing::debug!("dangling escape at end of input dropped");
            }
            RawToken::Char(s) => {
                if let Some(c) = s.chars().next() {
                    tokens.push(SemanticChar::Plain(c));
                }
            }
        }
    }

    tokens
}

/// Render a run of semantic characters back to text.
pub fn render_tokens(tokens: &[SemanticChar<'_>]) -> String {
    let mut out = String::with_capacity(tokens.len());
    for token in tokens {
        token.write_to(&mut out);
    }
    out
}
