//! Associative containers. Values are walked detached: every entry is taken
//! out, visited as an owned value, and inserted back.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{DecodeError, DecodeErrorKind, MapKey, MapVisitor, Poke, PokeMap, Tare, TareError};

macro_rules! impl_tare_for_map {
    ($map:ident<K, V $(, $hasher:ident)?> where K: $($key_bound:path),+ $(; $($extra:tt)*)?) => {
        impl<K, V $(, $hasher)?> Tare for $map<K, V $(, $hasher)?>
        where
            K: MapKey $(+ $key_bound)+,
            V: Tare,
            $($($extra)*)?
        {
            fn is_zero(&self) -> bool {
                self.is_empty()
            }

            fn set_zero(&mut self) {
                *self = Default::default();
            }

            fn zero() -> Self {
                Default::default()
            }

            fn poke(&mut self) -> Poke<'_> {
                Poke::Map(self)
            }
        }

        impl<K, V $(, $hasher)?> PokeMap for $map<K, V $(, $hasher)?>
        where
            K: MapKey $(+ $key_bound)+,
            V: Tare,
            $($($extra)*)?
        {
            fn len(&self) -> usize {
                $map::len(self)
            }

            fn walk_values(&mut self, visit: &mut MapVisitor<'_>) -> Result<(), TareError> {
                let entries = core::mem::take(self);
                let mut outcome = Ok(());
                for (key, mut value) in entries {
                    if outcome.is_ok() {
                        outcome = visit(&key, &mut value);
                    }
                    self.insert(key, value);
                }
                outcome
            }

            fn insert_with(
                &mut self,
                key: &str,
                fill: &mut dyn FnMut(&mut dyn Tare) -> Result<(), DecodeError>,
            ) -> Result<(), DecodeError> {
                let parsed = K::parse_key(key).map_err(|reason| {
                    DecodeError::new(DecodeErrorKind::InvalidKey {
                        key: key.to_string(),
                        reason,
                    })
                })?;
                let mut value = V::zero();
                fill(&mut value)?;
                self.insert(parsed, value);
                Ok(())
            }
        }
    };
}

impl_tare_for_map!(HashMap<K, V, S> where K: Eq, Hash; S: BuildHasher + Default);
impl_tare_for_map!(BTreeMap<K, V> where K: Ord);
