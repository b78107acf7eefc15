use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Generics, Ident, LitStr, Result, Visibility, ext::IdentExt};

use crate::utils::transformer;

#[derive(FromDeriveInput)]
#[darling(attributes(go_names), supports(struct_named))]
pub(super) struct GoNamesInput {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<Ignored, GoNamesField>,
    /// Words to render fully upper-case in every field name.
    uppercase: Option<Vec<LitStr>>,
}

#[derive(FromField)]
#[darling(attributes(go_names))]
struct GoNamesField {
    /// The identifier of the field.
    ident: Option<Ident>,
    /// The Go name to use instead of the converted field name.
    rename: Option<LitStr>,
    /// Leave the field out of the generated names.
    #[darling(default)]
    skip: bool,
}

/// A Rust field name and the Go identifier it maps to.
struct FieldName {
    rust: String,
    go: String,
}

pub(super) fn expand(input: GoNamesInput) -> Result<TokenStream> {
    let transformer = transformer(input.uppercase.as_deref())?;

    let Some(fields) = input.data.take_struct() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "GoNames can only be derived for structs with named fields",
        ));
    };

    let mut names: Vec<FieldName> = Vec::with_capacity(fields.len());

    for field in fields.into_iter().filter(|field| !field.skip) {
        let ident = field
            .ident
            .ok_or_else(|| syn::Error::new(Span::call_site(), "Expected a named field"))?;

        let rust = ident.unraw().to_string();

        let go = match &field.rename {
            Some(rename) if rename.value().is_empty() => {
                return Err(syn::Error::new_spanned(rename, "Go name cannot be empty"));
            }
            Some(rename) => rename.value(),
            None => transformer.convert(&rust),
        };

        if let Some(existing) = names.iter().find(|name| name.go == go) {
            return Err(syn::Error::new_spanned(
                &ident,
                format!(
                    "fields `{}` and `{}` both map to Go name `{}`",
                    existing.rust, rust, go
                ),
            ));
        }

        names.push(FieldName { rust, go });
    }

    let ident = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let rust_names: Vec<&str> = names.iter().map(|name| name.rust.as_str()).collect();
    let go_names: Vec<&str> = names.iter().map(|name| name.go.as_str()).collect();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Rust field names paired with their Go identifiers, in declaration order.
            #vis const GO_FIELD_NAMES: &'static [(&'static str, &'static str)] = &[
                #((#rust_names, #go_names)),*
            ];

            /// Look up the Go identifier for a Rust field name.
            #vis fn go_field_name(field: &str) -> ::core::option::Option<&'static str> {
                match field {
                    #(#rust_names => ::core::option::Option::Some(#go_names),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
