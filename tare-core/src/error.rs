use alloc::string::String;
use core::fmt;

use crate::{DecodeError, HookError, Path};

/// Errors returned by the defaulting engines.
#[derive(Debug)]
pub enum TareError {
    /// The root value is not a struct. Traversal never began.
    InvalidTarget {
        /// The offending type.
        type_name: &'static str,
    },

    /// A default literal did not fit its field. The traversal was aborted.
    Decode {
        /// Field whose literal failed.
        path: Path,
        /// The literal text.
        literal: String,
        /// Decoder or scalar parser error.
        source: DecodeError,
    },

    /// A [`SetTaggedDefaults`](crate::SetTaggedDefaults) hook rejected its
    /// literal. Displays as the hook's own message.
    Setter {
        /// Field whose hook failed.
        path: Path,
        /// The hook's error.
        source: HookError,
    },

    /// Recursion went deeper than the configured limit. Usually a
    /// self-referential type with a default literal on its back-reference.
    DepthLimitExceeded {
        /// Where the limit was hit.
        path: Path,
        /// The configured limit.
        limit: usize,
    },
}

impl TareError {
    /// Location of the failing field, if the error has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TareError::InvalidTarget { .. } => None,
            TareError::Decode { path, .. }
            | TareError::Setter { path, .. }
            | TareError::DepthLimitExceeded { path, .. } => Some(path),
        }
    }
}

impl fmt::Display for TareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TareError::InvalidTarget { type_name } => {
                write!(f, "expected a struct, got {type_name}")
            }
            TareError::Decode {
                path,
                literal,
                source,
            } => write!(f, "invalid default {literal:?} for {path}: {source}"),
            TareError::Setter { source, .. } => write!(f, "{source}"),
            TareError::DepthLimitExceeded { path, limit } => {
                write!(f, "recursion depth limit of {limit} exceeded at {path}")
            }
        }
    }
}

impl core::error::Error for TareError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TareError::Decode { source, .. } => Some(source),
            TareError::Setter { source, .. } => Some(&**source),
            _ => None,
        }
    }
}
