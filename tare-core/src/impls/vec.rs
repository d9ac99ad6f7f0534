use alloc::vec::Vec;

use crate::{Poke, PokeList, Tare};

impl<T: Tare> Tare for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn set_zero(&mut self) {
        *self = Vec::new();
    }

    fn zero() -> Self {
        Vec::new()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::List(self)
    }
}

impl<T: Tare> PokeList for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Tare> {
        self.get_mut(index).map(|value| value as &mut dyn Tare)
    }

    fn push_zero(&mut self) -> &mut dyn Tare {
        self.push(T::zero());
        let last = Vec::len(self) - 1;
        &mut self[last]
    }
}
