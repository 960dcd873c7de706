//! Error types for fg-parser.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which bracket-label run of a chain was being scanned when an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPhase {
    /// Leading `[label]` pairs, before the filter specification.
    Source,
    /// Trailing `[label]` pairs, after the filter specification.
    Destination,
}

impl std::fmt::Display for LabelPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelPhase::Source => f.write_str("source"),
            LabelPhase::Destination => f.write_str("destination"),
        }
    }
}

/// Errors raised while decomposing a filter chain.
///
/// Both variants are input-driven: the same text always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `]` with no open label, or a `[` never closed before the chain ends.
    #[error("unmatched bracket in {phase} labels of chain `{chain}`")]
    UnmatchedBracket {
        /// Label run being scanned.
        phase: LabelPhase,
        /// Rendered text of the offending chain.
        chain: String,
    },

    /// Non-label content found after the destination labels began.
    #[error("unexpected content `{content}` after destination labels of chain `{chain}`")]
    TrailingContentAfterLabels {
        /// Rendered text of the offending chain.
        chain: String,
        /// The stray character, rendered.
        content: String,
    },
}

impl Error {
    /// Create an unmatched bracket error.
    pub fn unmatched_bracket(phase: LabelPhase, chain: impl Into<String>) -> Self {
        Self::UnmatchedBracket {
            phase,
            chain: chain.into(),
        }
    }

    /// Create a trailing content error.
    pub fn trailing_content(chain: impl Into<String>, content: impl Into<String>) -> Self {
        Self::TrailingContentAfterLabels {
            chain: chain.into(),
            content: content.into(),
        }
    }

    /// The label run that raised this error.
    pub fn phase(&self) -> LabelPhase {
        match self {
            Error::UnmatchedBracket { phase, .. } => *phase,
            Error::TrailingContentAfterLabels { .. } => LabelPhase::Destination,
        }
    }

    /// Rendered text of the chain that failed.
    pub fn chain(&self) -> &str {
        match self {
            Error::UnmatchedBracket { chain, .. } | Error::TrailingContentAfterLabels { chain, .. } => {
                chain
            }
        }
    }
}
