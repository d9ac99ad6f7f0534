//! Autoderef specialization for detecting hook impls on concrete types.
//!
//! Generated code calls `(&&SpezEmpty::<T>::SPEZ).spez_set_defaults()` with
//! both traits of a pair in scope. Method resolution picks the `Yes` impl
//! (on `&SpezEmpty<T>`) when `T` implements the hook, and falls through one
//! auto-deref to the `No` impl (on `SpezEmpty<T>`) otherwise. The answer is a
//! function pointer that re-borrows a `&mut T` as the hook trait object.
//!
//! This only works where `T` is a concrete type, which is why the derive
//! rejects generic structs.

use core::marker::PhantomData;

use crate::{SetDefaults, SetTaggedDefaults};

/// Zero-sized specialization marker for `T`.
pub struct SpezEmpty<T>(PhantomData<fn(T)>);

impl<T> SpezEmpty<T> {
    /// The marker value.
    pub const SPEZ: Self = Self(PhantomData);
}

/// Casts `&mut T` to `&mut dyn SetDefaults`.
pub type SetDefaultsCast<T> = fn(&mut T) -> &mut dyn SetDefaults;

/// Casts `&mut T` to `&mut dyn SetTaggedDefaults`.
pub type SetTaggedDefaultsCast<T> = fn(&mut T) -> &mut dyn SetTaggedDefaults;

fn cast_set_defaults<T: SetDefaults>(value: &mut T) -> &mut dyn SetDefaults {
    value
}

fn cast_set_tagged_defaults<T: SetTaggedDefaults>(value: &mut T) -> &mut dyn SetTaggedDefaults {
    value
}

//////////////////////////////////////////////////////////////////////////////////////
// SetDefaults
//////////////////////////////////////////////////////////////////////////////////////

/// Selected when `T: SetDefaults`.
pub trait SpezSetDefaultsYes<T> {
    /// Returns the cast.
    fn spez_set_defaults(&self) -> Option<SetDefaultsCast<T>>;
}

impl<T: SetDefaults> SpezSetDefaultsYes<T> for &SpezEmpty<T> {
    fn spez_set_defaults(&self) -> Option<SetDefaultsCast<T>> {
        Some(cast_set_defaults::<T>)
    }
}

/// Fallback when `T` has no [`SetDefaults`] impl.
pub trait SpezSetDefaultsNo<T> {
    /// Returns `None`.
    fn spez_set_defaults(&self) -> Option<SetDefaultsCast<T>>;
}

impl<T> SpezSetDefaultsNo<T> for SpezEmpty<T> {
    fn spez_set_defaults(&self) -> Option<SetDefaultsCast<T>> {
        None
    }
}

//////////////////////////////////////////////////////////////////////////////////////
// SetTaggedDefaults
//////////////////////////////////////////////////////////////////////////////////////

/// Selected when `T: SetTaggedDefaults`.
pub trait SpezSetTaggedDefaultsYes<T> {
    /// Returns the cast.
    fn spez_set_tagged_defaults(&self) -> Option<SetTaggedDefaultsCast<T>>;
}

impl<T: SetTaggedDefaults> SpezSetTaggedDefaultsYes<T> for &SpezEmpty<T> {
    fn spez_set_tagged_defaults(&self) -> Option<SetTaggedDefaultsCast<T>> {
        Some(cast_set_tagged_defaults::<T>)
    }
}

/// Fallback when `T` has no [`SetTaggedDefaults`] impl.
pub trait SpezSetTaggedDefaultsNo<T> {
    /// Returns `None`.
    fn spez_set_tagged_defaults(&self) -> Option<SetTaggedDefaultsCast<T>>;
}

impl<T> SpezSetTaggedDefaultsNo<T> for SpezEmpty<T> {
    fn spez_set_tagged_defaults(&self) -> Option<SetTaggedDefaultsCast<T>> {
        None
    }
}
