use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{DecodeError, Field, ScalarError, SetDefaults, SetTaggedDefaults, TareError};

/// A type the defaulting engines can walk.
///
/// Implemented for std scalars, `Option`, `Box`, `Vec`, `HashMap` and
/// `BTreeMap`, derived for structs with `#[derive(Tare)]`, and generated for
/// `FromStr` types by [`text_scalar!`](crate::text_scalar).
///
/// The trait is object safe: the engines only ever see `&mut dyn Tare`.
pub trait Tare {
    /// Zero-value oracle: true iff `self` equals the zero-initialized value
    /// of its type. For `Option`, zero means `None`.
    fn is_zero(&self) -> bool;

    /// Resets `self` to the zero value.
    fn set_zero(&mut self);

    /// The zero value.
    fn zero() -> Self
    where
        Self: Sized;

    /// Mutable, kind-specific view of this value.
    fn poke(&mut self) -> Poke<'_>;

    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// `Some` if the type implements [`SetDefaults`].
    fn as_set_defaults(&mut self) -> Option<&mut dyn SetDefaults> {
        None
    }

    /// `Some` if the type implements [`SetTaggedDefaults`].
    fn as_set_tagged_defaults(&mut self) -> Option<&mut dyn SetTaggedDefaults> {
        None
    }
}

/// A mutable view of a reflected value, by kind.
pub enum Poke<'a> {
    /// Parsed from literal text.
    Scalar(&'a mut dyn PokeScalar),
    /// A nullable reference.
    Option(&'a mut dyn PokeOption),
    /// A growable sequence.
    List(&'a mut dyn PokeList),
    /// An associative container.
    Map(&'a mut dyn PokeMap),
    /// A record with a field table.
    Struct(&'a mut dyn PokeStruct),
}

impl Poke<'_> {
    /// Short name of the kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Poke::Scalar(scalar) => scalar.scalar_type().name(),
            Poke::Option(_) => "option",
            Poke::List(_) => "sequence",
            Poke::Map(_) => "map",
            Poke::Struct(_) => "struct",
        }
    }
}

/// Which literal forms a scalar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `bool`
    Bool,
    /// Signed or unsigned integers of any width.
    Int,
    /// `f32`, `f64`
    Float,
    /// `char`
    Char,
    /// `String`
    String,
    /// `std::time::Duration`
    Duration,
    /// Any other type parsed with `FromStr`.
    Text,
}

impl ScalarType {
    /// Lowercase name, for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Int => "integer",
            ScalarType::Float => "float",
            ScalarType::Char => "char",
            ScalarType::String => "string",
            ScalarType::Duration => "duration",
            ScalarType::Text => "text",
        }
    }
}

/// A value parsed from literal text.
pub trait PokeScalar {
    /// Literal forms this scalar accepts.
    fn scalar_type(&self) -> ScalarType;

    /// Replaces the value with the one parsed from `literal`.
    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError>;
}

/// A nullable reference to one value.
pub trait PokeOption {
    /// The pointee, if present.
    fn inner_mut(&mut self) -> Option<&mut dyn Tare>;

    /// The pointee, binding a fresh zero value first if absent.
    fn get_or_init(&mut self) -> &mut dyn Tare;

    /// Drops the pointee.
    fn set_none(&mut self);
}

/// A growable sequence.
pub trait PokeList {
    /// Number of elements.
    fn len(&self) -> usize;

    /// True if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Tare>;

    /// Appends a zero element and returns it.
    fn push_zero(&mut self) -> &mut dyn Tare;
}

/// Visitor over detached map values; receives the key for diagnostics.
pub type MapVisitor<'v> =
    dyn FnMut(&dyn fmt::Display, &mut dyn Tare) -> Result<(), TareError> + 'v;

/// An associative container.
///
/// Values are never handed out in place. Walks detach every entry, visit the
/// owned value, and insert it back under its key.
pub trait PokeMap {
    /// Number of entries.
    fn len(&self) -> usize;

    /// True if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every value by copy-out, visit, copy-in. Every entry is written
    /// back even after the visitor fails; visiting stops at the first error.
    ///
    /// Entries are visited in the map's iteration order. For `HashMap` that
    /// order is unspecified, so after an error which entries were already
    /// visited can differ between runs.
    fn walk_values(&mut self, visit: &mut MapVisitor<'_>) -> Result<(), TareError>;

    /// Parses `key`, lets `fill` populate a zero value, and inserts it.
    fn insert_with(
        &mut self,
        key: &str,
        fill: &mut dyn FnMut(&mut dyn Tare) -> Result<(), DecodeError>,
    ) -> Result<(), DecodeError>;
}

/// A record with a static field table.
pub trait PokeStruct {
    /// Field descriptors, in declaration order.
    fn fields(&self) -> &'static [Field];

    /// Handle for the field at `index`. `None` for skipped fields.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Tare>;

    /// Lets `fill` populate a detached zero instance, then moves its
    /// non-skipped fields into `self`. On error `self` is left as it was.
    fn fill_staged(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn Tare) -> Result<(), DecodeError>,
    ) -> Result<(), DecodeError>;

    /// Index of the field named `name`: exact match first, then ASCII
    /// case-insensitive.
    fn field_index(&self, name: &str) -> Option<usize> {
        let fields = self.fields();
        fields
            .iter()
            .position(|field| field.name == name)
            .or_else(|| {
                fields
                    .iter()
                    .position(|field| field.name.eq_ignore_ascii_case(name))
            })
    }
}

/// A map key that can be parsed from a structured-text object key.
pub trait MapKey: Sized + fmt::Display {
    /// Parses the key text.
    fn parse_key(key: &str) -> Result<Self, String>;
}

impl<K> MapKey for K
where
    K: FromStr + fmt::Display,
    K::Err: fmt::Display,
{
    fn parse_key(key: &str) -> Result<Self, String> {
        key.parse().map_err(|err: K::Err| err.to_string())
    }
}
