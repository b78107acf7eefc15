//! Go-style camel-case conversion for generated identifiers.
//!
//! Converts snake_case names such as `user_id` into exported identifiers such as `UserID`. Words
//! listed as uppercase (initialisms like `id` or `url`) are rendered fully upper-case whenever they
//! form a whole underscore-delimited segment, everything else is title-cased.
//! - [`Transformer`]: the configured converter.
//! - [`TransformerConfig`]: deserializable configuration for a transformer.
//! - [`camel_case`]: conversion without uppercase words.
//!
//! ```
//! use camelgen::{Transformer, camel_case};
//!
//! assert_eq!(camel_case("_my_field_name_2"), "XMyFieldName_2");
//!
//! let transformer = Transformer::new(["id"]).unwrap();
//! assert_eq!(transformer.convert("id_begins"), "IDBegins");
//! ```

mod config;
pub use config::TransformerConfig;

mod error;
pub use error::{PatternErrorKind, TransformerError};

mod matcher;

mod transformer;
pub use transformer::{Transformer, camel_case};
