/// Errors that can occur while building a [`Transformer`](crate::Transformer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformerError {
    /// An uppercase word could not be turned into a matcher.
    #[error("invalid uppercase word {word:?}: {kind}")]
    InvalidPattern {
        /// The offending word, as supplied.
        word: String,
        /// Why the word was rejected.
        kind: PatternErrorKind,
    },
}

impl TransformerError {
    pub(crate) fn invalid(word: &str, kind: PatternErrorKind) -> Self {
        Self::InvalidPattern { word: word.to_owned(), kind }
    }

    /// The word that caused the error.
    pub fn word(&self) -> &str {
        match self {
            Self::InvalidPattern { word, .. } => word,
        }
    }
}

/// The reason an uppercase word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PatternErrorKind {
    #[error("word is empty")]
    Empty,
    #[error("underscore at byte {0}, words must be a single segment")]
    Underscore(usize),
    #[error("unsupported character {ch:?} at byte {index}")]
    Character { ch: char, index: usize },
    #[error("word starts with a digit and would never match")]
    LeadingDigit,
    #[error("word is listed more than once")]
    Duplicate,
}
