use alloc::boxed::Box;

use crate::{Poke, SetDefaults, SetTaggedDefaults, Tare};

// Transparent: a box is never null, so it reflects as its pointee. Use
// `Option<Box<T>>` for a nullable reference.
impl<T: Tare> Tare for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn set_zero(&mut self) {
        (**self).set_zero();
    }

    fn zero() -> Self {
        Box::new(T::zero())
    }

    fn poke(&mut self) -> Poke<'_> {
        (**self).poke()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_set_defaults(&mut self) -> Option<&mut dyn SetDefaults> {
        (**self).as_set_defaults()
    }

    fn as_set_tagged_defaults(&mut self) -> Option<&mut dyn SetTaggedDefaults> {
        (**self).as_set_tagged_defaults()
    }
}
