#![warn(missing_docs)]
//! JSON literal decoder for `tare`.
//!
//! [`JsonDecoder`] parses a default literal with `serde_json` and writes the
//! document into a reflected value through [`Poke`]:
//!
//! - objects fill structs (by field name) and maps (keys parsed with `FromStr`),
//! - arrays fill sequences,
//! - bools, numbers and strings fill scalars of a matching kind,
//! - a `Duration` takes a string like `"1h30m"` or an integer count of
//!   nanoseconds,
//! - `null` clears an `Option` and leaves anything else untouched.

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

mod decoder;

pub use decoder::{JsonDecoder, from_str};
