#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
//! Core reflection model for `tare`.
//!
//! A type takes part in defaulting by implementing [`Tare`], usually through
//! `#[derive(Tare)]`. The trait answers three questions for the engines:
//! is the value at its zero state, how is it reset, and what [`Poke`] view
//! gives mutable, kind-specific access to its storage.
//!
//! Structs expose their [`Field`] table through [`PokeStruct`]. Each entry
//! carries the field's [`DefaultSpec`] and [`UnsetSpec`], computed at compile
//! time.

extern crate alloc;

mod decode;
mod error;
mod field;
mod hooks;
mod impls;
mod path;
mod reflect;
mod scalar;

pub mod spez;

pub use decode::{DecodeError, DecodeErrorKind, LiteralDecoder};
pub use error::TareError;
pub use field::{DefaultSpec, Field, UnsetSpec};
pub use hooks::{HookError, SetDefaults, SetTaggedDefaults};
pub use path::{Path, PathStep};
pub use reflect::{
    MapKey, MapVisitor, Poke, PokeList, PokeMap, PokeOption, PokeScalar, PokeStruct, ScalarType,
    Tare,
};
pub use scalar::{ScalarError, parse_bool, parse_duration, parse_int};
