//! Compile-time Go-style identifier conversion, built on [`camelgen`].
//!
//! - [`GoNames`]: derive the Go identifiers of a struct's fields.
//! - [`go_ident!`]: convert a single name to a string literal.

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::{expand::GoNamesInput, ident::GoIdentArgs};

mod expand;
mod ident;
mod utils;

/// This macro generates Go-style identifiers for the named fields of a struct.
///
/// It adds an associated `GO_FIELD_NAMES` constant, pairing each Rust field name with its Go
/// identifier in declaration order, and a `go_field_name` lookup function.
///
/// - `#[go_names(uppercase = ["id", "url"])]` on the struct lists words to render fully
///   upper-case.
/// - `#[go_names(rename = "Name")]` on a field overrides the converted name.
/// - `#[go_names(skip)]` on a field leaves it out.
#[proc_macro_derive(GoNames, attributes(go_names))]
pub fn derive_go_names(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let input = match GoNamesInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => {
            return e.write_errors().into();
        }
    };

    expand::expand(input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}

/// This macro converts a snake_case name to a Go-style identifier string literal.
///
/// `go_ident!(name = "user_id", uppercase = ["id"])` expands to `"UserID"`.
#[proc_macro]
pub fn go_ident(input: TokenStream) -> TokenStream {
    let args: GoIdentArgs = match syn::parse(input) {
        Ok(v) => v,
        Err(e) => {
            return e.to_compile_error().into();
        }
    };

    ident::expand(args)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
