use crate::{Transformer, TransformerError};

/// Configuration for a [`Transformer`], typically embedded in a code generator's own config.
///
/// ```
/// let config = camelgen::TransformerConfig::new(["id", "url"]);
/// let transformer = config.build().unwrap();
///
/// assert_eq!(transformer.convert("profile_url"), "ProfileURL");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TransformerConfig {
    /// Words that are rendered fully upper-case when they form a whole segment.
    pub uppercase: Vec<String>,
}

impl TransformerConfig {
    /// Create a new config with the given uppercase words.
    pub fn new<I, S>(uppercase: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { uppercase: uppercase.into_iter().map(Into::into).collect() }
    }

    /// Add an uppercase word. Words are matched in insertion order.
    pub fn with_uppercase(mut self, word: impl Into<String>) -> Self {
        self.uppercase.push(word.into());
        self
    }

    /// Build the transformer described by this config.
    pub fn build(&self) -> Result<Transformer, TransformerError> {
        Transformer::new(&self.uppercase)
    }
}

impl TryFrom<TransformerConfig> for Transformer {
    type Error = TransformerError;

    fn try_from(config: TransformerConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl TryFrom<&TransformerConfig> for Transformer {
    type Error = TransformerError;

    fn try_from(config: &TransformerConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let config = TransformerConfig::default().with_uppercase("url").with_uppercase("id");
        assert_eq!(config, TransformerConfig::new(["url", "id"]));

        let transformer = Transformer::try_from(&config).unwrap();
        assert_eq!(transformer.words().collect::<Vec<_>>(), ["url", "id"]);
    }

    #[test]
    fn invalid_word_fails_build() {
        let config = TransformerConfig::new(["id", ""]);
        let err = Transformer::try_from(config).unwrap_err();
        assert_eq!(err.word(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_config() {
        let config: TransformerConfig =
            serde_json::from_str(r#"{ "uppercase": ["id", "url"] }"#).unwrap();
        assert_eq!(config.build().unwrap().convert("user_id"), "UserID");

        let empty: TransformerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TransformerConfig::default());

        assert!(serde_json::from_str::<TransformerConfig>(r#"{ "upper": [] }"#).is_err());
    }
}
