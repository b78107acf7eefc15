use crate::{
    error::{PatternErrorKind, TransformerError},
    matcher::{SEPARATOR, WordMatcher},
};

/// The capital emitted in place of a leading underscore, since an exported identifier must
/// start with an upper-case letter.
const LEADING_UNDERSCORE_SUBSTITUTE: char = 'X';

/// Converts snake_case identifiers to Go-style camel case.
///
/// Words in the configured uppercase set are rendered fully upper-case (`user_id` becomes
/// `UserID` with `id` configured), every other word is title-cased. A transformer is immutable
/// once built, so a single instance can be shared across threads and reused for any number of
/// conversions.
///
/// ```
/// let transformer = camelgen::Transformer::new(["id", "url"]).unwrap();
///
/// assert_eq!(transformer.convert("avatar_url"), "AvatarURL");
/// assert_eq!(transformer.convert("some_id_middle"), "SomeIDMiddle");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    matchers: Vec<WordMatcher>,
}

impl Transformer {
    /// Build a transformer from a list of words that must always be upper-cased.
    ///
    /// Words are matched in the given order and the first match wins. Each word must be
    /// non-empty ASCII alphanumeric, must not start with a digit and must not repeat.
    pub fn new<I, S>(uppercase: I) -> Result<Self, TransformerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers: Vec<WordMatcher> = Vec::new();

        for word in uppercase {
            let word = word.as_ref();

            let matcher = WordMatcher::compile(word).and_then(|matcher| {
                if matchers.iter().any(|existing| existing.word() == word) {
                    Err(TransformerError::invalid(word, PatternErrorKind::Duplicate))
                } else {
                    Ok(matcher)
                }
            });

            match matcher {
                Ok(matcher) => matchers.push(matcher),
                Err(err) => {
                    tracing::trace!(word, %err, "rejected uppercase word");
                    return Err(err);
                }
            }
        }

        tracing::debug!(
            count = matchers.len(),
            words = ?matchers.iter().map(WordMatcher::word).collect::<Vec<_>>(),
            "built identifier transformer"
        );

        Ok(Self { matchers })
    }

    /// The configured uppercase words, in match order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(WordMatcher::word)
    }

    /// Convert `input` to camel case.
    ///
    /// This never fails. Input that isn't a well-formed snake_case identifier is converted on a
    /// best-effort basis: stray underscores and unexpected characters are copied through.
    pub fn convert(&self, input: &str) -> String {
        let bytes = input.as_bytes();
        let mut output = String::with_capacity(input.len() + 1);
        let mut i = 0;

        if bytes.first() == Some(&SEPARATOR) {
            output.push(LEADING_UNDERSCORE_SUBSTITUTE);
            i += 1;
        }

        // Invariant: at the top of the loop we're at the start of a word, so a lower-case letter
        // here must be upper-cased. Words are delimited by underscores or anything that isn't a
        // lower-case letter. Digits are words of their own.
        while i < bytes.len() {
            let c = bytes[i];

            if c == SEPARATOR && bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase) {
                i += 1;
                continue;
            }

            if c.is_ascii_digit() {
                output.push(char::from(c));
                i += 1;
                continue;
            }

            if let Some(len) = self.match_uppercase(&bytes[i..]) {
                output.extend(bytes[i..i + len].iter().map(|b| char::from(b.to_ascii_uppercase())));
                i += len;
                continue;
            }

            // `i` only ever advances by whole characters, so it sits on a char boundary.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            output.push(ch.to_ascii_uppercase());
            i += ch.len_utf8();

            while let Some(&next) = bytes.get(i).filter(|b| b.is_ascii_lowercase()) {
                output.push(char::from(next));
                i += 1;
            }
        }

        output
    }

    /// Returns the length of the first uppercase word matching at the start of `rest`.
    fn match_uppercase(&self, rest: &[u8]) -> Option<usize> {
        self.matchers.iter().find_map(|matcher| matcher.match_len(rest))
    }
}

/// Convert `input` to camel case without any uppercase words.
///
/// Equivalent to `Transformer::default().convert(input)`.
pub fn camel_case(input: &str) -> String {
    Transformer::default().convert(input)
}
