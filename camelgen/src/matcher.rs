use crate::error::{PatternErrorKind, TransformerError};

/// The separator between words in a snake_case identifier.
pub(crate) const SEPARATOR: u8 = b'_';

/// Matches a single uppercase word at the start of the remaining input.
///
/// A match requires the word as a literal prefix, immediately followed by the end of the input
/// or a [`SEPARATOR`]. The separator itself is never part of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordMatcher {
    word: String,
}

impl WordMatcher {
    /// Compile a matcher for `word`, rejecting words that could never match a single segment.
    pub(crate) fn compile(word: &str) -> Result<Self, TransformerError> {
        let bytes = word.as_bytes();

        let Some(first) = bytes.first() else {
            return Err(TransformerError::invalid(word, PatternErrorKind::Empty));
        };

        if first.is_ascii_digit() {
            return Err(TransformerError::invalid(word, PatternErrorKind::LeadingDigit));
        }

        for (index, ch) in word.char_indices() {
            if ch == char::from(SEPARATOR) {
                return Err(TransformerError::invalid(word, PatternErrorKind::Underscore(index)));
            }

            if !ch.is_ascii_alphanumeric() {
                return Err(TransformerError::invalid(
                    word,
                    PatternErrorKind::Character { ch, index },
                ));
            }
        }

        Ok(Self { word: word.to_owned() })
    }

    pub(crate) fn word(&self) -> &str {
        &self.word
    }

    /// Returns the length of the match at the start of `rest`, if any.
    pub(crate) fn match_len(&self, rest: &[u8]) -> Option<usize> {
        let len = self.word.len();
        if !rest.starts_with(self.word.as_bytes()) {
            return None;
        }

        match rest.get(len) {
            None | Some(&SEPARATOR) => Some(len),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_at_end_of_input() {
        let matcher = WordMatcher::compile("id").unwrap();
        assert_eq!(matcher.match_len(b"id"), Some(2));
    }

    #[test]
    fn matches_before_separator_without_consuming_it() {
        let matcher = WordMatcher::compile("id").unwrap();
        assert_eq!(matcher.match_len(b"id_middle"), Some(2));
    }

    #[test]
    fn rejects_longer_segment() {
        let matcher = WordMatcher::compile("id").unwrap();
        assert_eq!(matcher.match_len(b"idle"), None);
        assert_eq!(matcher.match_len(b"iD"), None);
        assert_eq!(matcher.match_len(b"i"), None);
        assert_eq!(matcher.match_len(b""), None);
    }

    #[test]
    fn compile_rejects_degenerate_words() {
        let cases = [
            ("", PatternErrorKind::Empty),
            ("user_id", PatternErrorKind::Underscore(4)),
            ("2fa", PatternErrorKind::LeadingDigit),
            ("i(d", PatternErrorKind::Character { ch: '(', index: 1 }),
            ("ïd", PatternErrorKind::Character { ch: 'ï', index: 0 }),
        ];

        for (word, kind) in cases {
            let err = WordMatcher::compile(word).unwrap_err();
            assert_eq!(err, TransformerError::invalid(word, kind), "word {word:?}");
        }
    }

    #[test]
    fn compile_accepts_alphanumeric_words() {
        for word in ["id", "url", "v2", "HTTP"] {
            assert_eq!(WordMatcher::compile(word).unwrap().word(), word);
        }
    }
}
