use camelgen::{PatternErrorKind, Transformer, TransformerError};
use syn::{LitStr, Result};

/// Build a transformer from the `uppercase = [...]` literals of a macro invocation.
///
/// Errors point at the offending literal.
pub(crate) fn transformer(uppercase: Option<&[LitStr]>) -> Result<Transformer> {
    let Some(literals) = uppercase else {
        return Ok(Transformer::default());
    };

    let words: Vec<String> = literals.iter().map(LitStr::value).collect();

    Transformer::new(&words).map_err(|err| {
        let mut matching = literals.iter().filter(|lit| lit.value() == err.word());
        // Duplicates are reported on the repeated occurrence.
        let offending = if matches!(
            err,
            TransformerError::InvalidPattern { kind: PatternErrorKind::Duplicate, .. }
        ) {
            matching.next_back()
        } else {
            matching.next()
        };

        match offending {
            Some(lit) => syn::Error::new_spanned(lit, err),
            None => syn::Error::new(proc_macro2::Span::call_site(), err),
        }
    })
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;

    use super::*;

    fn literals(words: &[&str]) -> Vec<LitStr> {
        words.iter().map(|word| LitStr::new(word, Span::call_site())).collect()
    }

    #[test]
    fn no_words_is_classic() {
        let transformer = transformer(None).unwrap();
        assert_eq!(transformer.words().count(), 0);
        assert_eq!(transformer.convert("new_id"), "NewId");
    }

    #[test]
    fn words_are_kept_in_order() {
        let words = literals(&["url", "id"]);
        let transformer = transformer(Some(&words)).unwrap();
        assert_eq!(transformer.words().collect::<Vec<_>>(), ["url", "id"]);
    }

    #[test]
    fn invalid_word_is_a_compile_error() {
        let words = literals(&["id", "a-b"]);
        let err = transformer(Some(&words)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid uppercase word \"a-b\": unsupported character '-' at byte 1"
        );
    }

    #[test]
    fn duplicate_word_is_a_compile_error() {
        let words = literals(&["id", "id"]);
        let err = transformer(Some(&words)).unwrap_err();
        assert_eq!(err.to_string(), "invalid uppercase word \"id\": word is listed more than once");
    }
}
