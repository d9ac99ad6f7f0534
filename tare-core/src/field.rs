/// What `#[tare(default = "...")]` says about a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultSpec {
    /// No literal. The field is never assigned, but still recursed into.
    None,
    /// The `-` opt-out. No assignment, no recursion, no hooks.
    Skip,
    /// Literal text, interpreted according to the field's type.
    Literal(&'static str),
}

impl DefaultSpec {
    /// Classifies raw annotation text: `""` is [`DefaultSpec::None`], `"-"` is
    /// [`DefaultSpec::Skip`], anything else is a literal.
    pub const fn parse(text: &'static str) -> Self {
        match text.as_bytes() {
            [] => DefaultSpec::None,
            [b'-'] => DefaultSpec::Skip,
            _ => DefaultSpec::Literal(text),
        }
    }

    /// The literal text, if any.
    pub const fn literal(&self) -> Option<&'static str> {
        match self {
            DefaultSpec::Literal(text) => Some(text),
            _ => None,
        }
    }
}

/// What `#[tare(unset = "...")]` says about a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnsetSpec {
    /// Reset a non-zero value wholesale.
    #[default]
    Zero,
    /// The `-` opt-out. Never cleared.
    Skip,
    /// The `walk` sentinel. Clear by recursing into the value's structure.
    Walk,
}

impl UnsetSpec {
    /// Classifies raw annotation text. Anything other than `"-"` and `"walk"`
    /// means a wholesale reset.
    pub const fn parse(text: &str) -> Self {
        match text.as_bytes() {
            [b'-'] => UnsetSpec::Skip,
            b"walk" => UnsetSpec::Walk,
            _ => UnsetSpec::Zero,
        }
    }
}

/// One declared member of a struct, as seen by the engines.
///
/// Tables of these are `const` data emitted by `#[derive(Tare)]`, one per
/// type, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Effective name: the `rename` value, or the Rust identifier (the index
    /// for tuple structs).
    pub name: &'static str,
    /// Default literal handling.
    pub default: DefaultSpec,
    /// Clearing behavior.
    pub unset: UnsetSpec,
    /// Field is marked `#[tare(skip)]` and has no handle.
    pub skip: bool,
}

impl Field {
    /// A field with no annotations.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: DefaultSpec::None,
            unset: UnsetSpec::Zero,
            skip: false,
        }
    }

    /// Sets the default literal handling.
    pub const fn with_default(mut self, default: DefaultSpec) -> Self {
        self.default = default;
        self
    }

    /// Sets the clearing behavior.
    pub const fn with_unset(mut self, unset: UnsetSpec) -> Self {
        self.unset = unset;
        self
    }

    /// Marks the field as inaccessible to the engines.
    pub const fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}
