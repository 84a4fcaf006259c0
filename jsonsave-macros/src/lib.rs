use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::{parse_macro_input, DeriveInput};

mod defs;
mod json_save;

/// Derives `jsonsave_core::JsonSave` from `#[json_save]` field attributes.
///
/// ```ignore
/// #[derive(JsonSave)]
/// struct Settings {
///     #[json_save(kind = String)]
///     name: String,
///     #[json_save(kind = Int)]
///     volume: i32,
///     #[json_save]
///     extra: serde_json::Value,
///     cache: Vec<u8>,
/// }
/// ```
///
/// A bare `#[json_save]` means kind `Object`. The JSON key is the field name.
#[proc_macro_error]
#[proc_macro_derive(JsonSave, attributes(json_save))]
pub fn derive_json_save(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    json_save::JsonSaveInfo::process(input)
        .generate()
        .into()
}
