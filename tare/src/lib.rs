#![warn(missing_docs)]
//! Fill and clear struct defaults from field annotations.
//!
//! ```ignore
//! use tare::Tare;
//!
//! #[derive(Tare, Debug)]
//! struct Server {
//!     #[tare(default = "8080")]
//!     port: u16,
//!     #[tare(default = "30s")]
//!     timeout: std::time::Duration,
//!     #[tare(default = r#"["localhost"]"#, unset = "walk")]
//!     hosts: Vec<String>,
//!     #[tare(default = "{}")]
//!     tls: Option<Box<Tls>>,
//! }
//!
//! let mut server = Server::zero();
//! tare::apply_defaults(&mut server)?;
//! assert_eq!(server.port, 8080);
//! ```
//!
//! [`apply_defaults`] assigns a field's literal only while the field is at
//! its zero value, and always recurses into nested structs, `Option`s, `Vec`s
//! and map values. [`remove_defaults`] resets fields back to zero, either
//! wholesale or (with `unset = "walk"`) by recursing into them.
//!
//! Types customize defaulting by implementing [`SetDefaults`] (called after
//! every traversal) or [`SetTaggedDefaults`] (receives the raw literal).

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod apply;
mod defaulter;
mod remove;

pub use tare_core::*;
pub use tare_json::JsonDecoder;
pub use tare_macros::Tare;

pub use defaulter::{DEFAULT_MAX_DEPTH, Defaulter};

/// Fills zero-valued fields of `value` from their `default` literals, and
/// recurses into every nested value.
///
/// Fails with [`TareError::InvalidTarget`] if `T` is not a struct. Any decode
/// or hook error aborts the traversal; fields before the failing one keep
/// their new values.
pub fn apply_defaults<T: Tare>(value: &mut T) -> Result<(), TareError> {
    Defaulter::new().apply(value)
}

/// Like [`apply_defaults`], but panics on error.
///
/// # Panics
///
/// Panics with the error message if defaulting fails.
#[track_caller]
pub fn must_apply_defaults<T: Tare>(value: &mut T) {
    if let Err(err) = apply_defaults(value) {
        panic!("{err}");
    }
}

/// Resets fields of `value` to zero according to their `unset` annotations.
///
/// Accepts a struct or an `Option` chain that ends in one.
pub fn remove_defaults<T: Tare>(value: &mut T) -> Result<(), TareError> {
    Defaulter::new().remove(value)
}

/// Like [`remove_defaults`], but panics on error.
///
/// # Panics
///
/// Panics with the error message if clearing fails.
#[track_caller]
pub fn must_remove_defaults<T: Tare>(value: &mut T) {
    if let Err(err) = remove_defaults(value) {
        panic!("{err}");
    }
}

/// True iff `value` equals the zero value of its type.
///
/// Meant for [`SetDefaults`] and [`SetTaggedDefaults`] impls that must not
/// overwrite caller-supplied values.
pub fn is_zero<T: Tare + ?Sized>(value: &T) -> bool {
    value.is_zero()
}
