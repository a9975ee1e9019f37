//! Procedural macros for samir
//!
//! Provides `#[derive(ToValue)]`, which converts user structs into
//! `samir::Value` trees so they can be hashed.

use proc_macro::TokenStream;

mod to_value;

/// Derive `samir::ToValue` for a struct.
///
/// ```ignore
/// #[derive(ToValue)]
/// struct User {
///     #[samir(rename = "userName")]
///     name: String,
///     #[samir(hidden)]
///     session: u64,
///     #[samir(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Named fields become object properties, tuple fields array elements, and a
/// unit struct an empty object.
#[proc_macro_derive(ToValue, attributes(samir))]
pub fn derive_to_value(input: TokenStream) -> TokenStream {
    to_value::expand(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
