use alloc::string::String;
use core::fmt;

use crate::{ScalarError, Tare};

/// Decodes structured literal text into a reflected value.
///
/// The engine calls this for sequence, map and struct fields whose literal is
/// not an empty-container sentinel. Implementations drive the target through
/// [`Tare::poke`]; see `tare_json::JsonDecoder` for the default one.
pub trait LiteralDecoder: Send + Sync {
    /// Populates `target` from `literal`.
    fn decode_into(&self, literal: &str, target: &mut dyn Tare) -> Result<(), DecodeError>;
}

/// A literal that did not fit its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Location inside the literal, as a JSON-pointer-like string (`/items/0`).
    /// Empty at the top level.
    pub pointer: String,
    /// What went wrong.
    pub kind: DecodeErrorKind,
}

/// The kind of [`DecodeError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The text is not well-formed.
    Syntax(String),
    /// A scalar inside the literal did not parse.
    Scalar(ScalarError),
    /// The literal's shape does not match the target kind.
    Mismatch {
        /// Kind of the target.
        expected: &'static str,
        /// Kind found in the literal.
        found: &'static str,
    },
    /// A map key could not be parsed into the key type.
    InvalidKey {
        /// The key text.
        key: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl DecodeError {
    /// An error at the top level of the literal.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            pointer: String::new(),
            kind,
        }
    }

    /// Prefixes the pointer with one more segment, while unwinding.
    pub fn within(mut self, segment: &str) -> Self {
        self.pointer = alloc::format!("/{segment}{}", self.pointer);
        self
    }
}

impl From<ScalarError> for DecodeError {
    fn from(err: ScalarError) -> Self {
        Self::new(DecodeErrorKind::Scalar(err))
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::Syntax(msg) => write!(f, "syntax error: {msg}"),
            DecodeErrorKind::Scalar(err) => write!(f, "{err}"),
            DecodeErrorKind::Mismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            DecodeErrorKind::InvalidKey { key, reason } => {
                write!(f, "invalid map key {key:?}: {reason}")
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at {}", self.kind, self.pointer)
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::Scalar(err) => Some(err),
            _ => None,
        }
    }
}
