//! `#[derive(Tare)]`. Use it through the `tare` crate, which re-exports it
//! next to the trait of the same name.

/// Derives `tare::Tare` and `tare::PokeStruct` for a struct.
///
/// Field attributes, inside `#[tare(...)]`:
///
/// - `default = "literal"`: value assigned while the field is zero. `"-"`
///   opts the field out of defaulting and recursion.
/// - `unset = "-"` or `unset = "walk"`: never clear, or clear by recursing.
/// - `rename = "Name"`: name used in error paths and by the literal decoder.
/// - `skip`: the engines never touch the field; its type needs only `Default`.
#[proc_macro_derive(Tare, attributes(tare))]
pub fn tare_macros(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    tare_macros_impl::derive_tare(input.into()).into()
}
