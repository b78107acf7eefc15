use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{LitStr, Result};

use crate::utils::transformer;

#[derive(FromMeta, Debug)]
#[darling(derive_syn_parse)]
pub(super) struct GoIdentArgs {
    /// The snake_case name to convert.
    name: LitStr,
    /// Words to render fully upper-case.
    uppercase: Option<Vec<LitStr>>,
}

pub(super) fn expand(args: GoIdentArgs) -> Result<TokenStream> {
    let transformer = transformer(args.uppercase.as_deref())?;
    let converted = transformer.convert(&args.name.value());

    Ok(LitStr::new(&converted, args.name.span()).into_token_stream())
}
