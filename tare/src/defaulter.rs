use tare_core::{LiteralDecoder, Poke, Tare, TareError};
use tare_json::JsonDecoder;

use crate::apply::Applier;
use crate::remove::Remover;

/// Default recursion limit of a [`Defaulter`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

const JSON: &JsonDecoder = &JsonDecoder;

/// Configured entry point for both engines.
///
/// The free functions [`apply_defaults`](crate::apply_defaults) and
/// [`remove_defaults`](crate::remove_defaults) use `Defaulter::new()`.
///
/// ```ignore
/// let defaulter = tare::Defaulter::new().max_depth(16).decoder(&MyYamlDecoder);
/// defaulter.apply(&mut config)?;
/// ```
#[derive(Clone, Copy)]
pub struct Defaulter<'d> {
    decoder: &'d dyn LiteralDecoder,
    max_depth: usize,
}

impl Default for Defaulter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Defaulter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Defaulter")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<'d> Defaulter<'d> {
    /// JSON literals, depth limit of [`DEFAULT_MAX_DEPTH`].
    pub const fn new() -> Self {
        Self {
            decoder: JSON,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Decoder for sequence, map and struct literals.
    pub const fn decoder(mut self, decoder: &'d dyn LiteralDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Maximum nesting depth before [`TareError::DepthLimitExceeded`].
    /// Bounds runaway allocation through self-referential types.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Fills zero-valued fields from their `default` literals. See
    /// [`apply_defaults`](crate::apply_defaults).
    pub fn apply<T: Tare>(&self, value: &mut T) -> Result<(), TareError> {
        let root: &mut dyn Tare = value;
        if !matches!(root.poke(), Poke::Struct(_)) {
            return Err(TareError::InvalidTarget {
                type_name: root.type_name(),
            });
        }
        debug!("applying defaults to {}", root.type_name());
        Applier::new(self.decoder, self.max_depth).apply_value(root, None)
    }

    /// Resets fields according to their `unset` annotations. See
    /// [`remove_defaults`](crate::remove_defaults).
    pub fn remove<T: Tare>(&self, value: &mut T) -> Result<(), TareError> {
        let type_name = value.type_name();
        debug!("removing defaults from {type_name}");
        Remover::new(self.max_depth).remove_root(value, type_name)
    }
}
