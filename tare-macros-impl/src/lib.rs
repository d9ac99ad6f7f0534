#![warn(missing_docs)]
//! Implementation of `#[derive(Tare)]`.
//!
//! Kept as a normal library so the parser and the emitter can be unit tested
//! on `proc_macro2` token streams. The `tare-macros` crate is a thin shim
//! over [`derive_tare`].

mod emit;
mod parsed;

pub use emit::derive_tare;
pub use parsed::{
    DefaultLiteral, Member, PAttrs, PField, PStruct, PStructKind, ParseError, UnsetMode,
    parse_struct,
};
