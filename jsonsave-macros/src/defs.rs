#![allow(non_upper_case_globals)]
#![allow(clippy::declare_interior_mutable_const)]

use proc_macro2::TokenStream;
use std::cell::LazyCell;
use quote::ToTokens;

/// Absolute paths emitted into generated code. `quote!` can't run in a const
/// initializer, so each path is built on first use.
pub(crate) struct LazyTokens(LazyCell<TokenStream>);

impl LazyTokens {

    const fn new(func: fn() -> TokenStream) -> Self {
        LazyTokens(LazyCell::new(func))
    }

}

impl ToTokens for LazyTokens {

    fn to_tokens(&self, stream: &mut TokenStream) {
        let content = self.0.clone();
        content.to_tokens(stream)
    }

}

macro_rules! define_const_token_streams {
    ($( $ident:ident = { $($tt:tt)* } ;)*) => {
        $(
            pub(crate) const $ident: crate::defs::LazyTokens =
                crate::defs::LazyTokens::new(|| ::quote::quote!{ $($tt)* });
        )*
    }
}

define_const_token_streams! {

    ResultOk = { ::std::result::Result::Ok };

    JsonSave = { ::jsonsave_core::JsonSave };
    TaggedField = { ::jsonsave_core::TaggedField };
    FieldType = { ::jsonsave_core::FieldType };
    ValueKind = { ::jsonsave_core::ValueKind };

}
