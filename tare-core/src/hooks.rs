use alloc::boxed::Box;

/// Error returned by a [`SetTaggedDefaults`] hook.
pub type HookError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Defaulting logic that cannot be expressed as a literal.
///
/// Called after every traversal of an instance of the implementing type,
/// once its fields have been processed. The engine calls it unconditionally:
/// check [`Tare::is_zero`](crate::Tare::is_zero) on a field before
/// overwriting it.
///
/// For `#[derive(Tare)]` structs the impl is detected automatically.
pub trait SetDefaults {
    /// Fills in computed defaults.
    fn set_defaults(&mut self);
}

/// A type that interprets its own default literal.
///
/// When a field's type implements this, the engine does not decode the
/// literal itself. It hands the raw text to the hook after recursion, and
/// surfaces any error as [`TareError::Setter`](crate::TareError::Setter).
pub trait SetTaggedDefaults {
    /// Applies the literal from the field's `#[tare(default = "...")]`.
    fn set_tagged_defaults(&mut self, tag: &str) -> Result<(), HookError>;
}
