//! Reading expressions and guarding their size before parsing.

use anyhow::{Context, Result};
use fg_parser::FilterNode;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::ParserConfig;

/// Resolve the expression to parse.
///
/// A file path wins over an inline expression; an inline `-` reads stdin.
/// Files and stdin are read at most one byte past `parser.max_input_len`.
pub fn read_expression(
    inline: Option<&str>,
    file: Option<&Path>,
    config: &ParserConfig,
) -> Result<String> {
    if let Some(path) = file {
        let f = File::open(path)
            .with_context(|| format!("Failed to read expression file: {:?}", path))?;
        return read_limited(f, config)
            .with_context(|| format!("Failed to read expression file: {:?}", path));
    }

    match inline {
        Some("-") => read_limited(std::io::stdin().lock(), config)
            .context("Failed to read expression from stdin"),
        Some(expr) => Ok(expr.to_string()),
        None => anyhow::bail!("No expression given (pass one inline, `-` for stdin, or --file)"),
    }
}

/// Read from `reader`, stopping once the size limit is exceeded.
fn read_limited<R: Read>(reader: R, config: &ParserConfig) -> Result<String> {
    let limit = config.max_input_len as u64;
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        anyhow::bail!(
            "Expression is over the {} byte limit (parser.max_input_len)",
            config.max_input_len
        );
    }
    String::from_utf8(buf).context("Expression is not valid UTF-8")
}

/// Reject expressions longer than the configured limit.
pub fn check_length(expr: &str, config: &ParserConfig) -> Result<()> {
    if expr.len() > config.max_input_len {
        anyhow::bail!(
            "Expression is {} bytes, over the {} byte limit (parser.max_input_len)",
            expr.len(),
            config.max_input_len
        );
    }
    Ok(())
}

/// Size-check and parse an expression.
pub fn parse_expression(expr: &str, config: &ParserConfig) -> Result<Vec<Vec<FilterNode>>> {
    check_length(expr, config)?;
    let graph = fg_parser::parse(expr).context("Invalid filter graph")?;
    Ok(graph)
}
