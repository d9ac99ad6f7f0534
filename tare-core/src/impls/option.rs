use crate::{Poke, PokeOption, Tare};

impl<T: Tare> Tare for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn set_zero(&mut self) {
        *self = None;
    }

    fn zero() -> Self {
        None
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Option(self)
    }
}

impl<T: Tare> PokeOption for Option<T> {
    fn inner_mut(&mut self) -> Option<&mut dyn Tare> {
        self.as_mut().map(|value| value as &mut dyn Tare)
    }

    fn get_or_init(&mut self) -> &mut dyn Tare {
        self.get_or_insert_with(T::zero)
    }

    fn set_none(&mut self) {
        *self = None;
    }
}
