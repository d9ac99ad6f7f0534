//! Default removal: reset fields to zero according to their `unset` mode.

use tare_core::{Path, PathStep, Poke, PokeStruct, Tare, TareError, UnsetSpec};

pub(crate) struct Remover {
    max_depth: usize,
    depth: usize,
    path: Path,
}

impl Remover {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
            path: Path::new(),
        }
    }

    /// Follows bound `Option`s down to a struct and clears its fields.
    pub(crate) fn remove_root(
        &mut self,
        value: &mut dyn Tare,
        type_name: &'static str,
    ) -> Result<(), TareError> {
        match value.poke() {
            Poke::Struct(record) => self.remove_struct(record),
            Poke::Option(option) => match option.inner_mut() {
                Some(inner) => self.remove_root(inner, type_name),
                None => Err(TareError::InvalidTarget { type_name }),
            },
            _ => Err(TareError::InvalidTarget { type_name }),
        }
    }

    fn remove_struct(&mut self, record: &mut dyn PokeStruct) -> Result<(), TareError> {
        for (index, field) in record.fields().iter().enumerate() {
            let walk = match field.unset {
                UnsetSpec::Skip => {
                    trace!("{}.{}: opted out", self.path, field.name);
                    continue;
                }
                UnsetSpec::Zero => false,
                UnsetSpec::Walk => true,
            };
            let Some(value) = record.field_mut(index) else {
                continue;
            };
            self.path.push(PathStep::Field(field.name));
            let result = self.remove_value(value, walk);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn remove_value(&mut self, value: &mut dyn Tare, walk: bool) -> Result<(), TareError> {
        if self.depth >= self.max_depth {
            return Err(TareError::DepthLimitExceeded {
                path: self.path.clone(),
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.remove_value_inner(value, walk);
        self.depth -= 1;
        result
    }

    fn remove_value_inner(&mut self, value: &mut dyn Tare, walk: bool) -> Result<(), TareError> {
        if value.is_zero() {
            return Ok(());
        }
        if !walk {
            trace!("{}: reset to zero", self.path);
            value.set_zero();
            return Ok(());
        }

        match value.poke() {
            Poke::Option(option) => match option.inner_mut() {
                Some(inner) => self.remove_value(inner, true),
                None => Ok(()),
            },
            Poke::Struct(record) => self.remove_struct(record),
            Poke::List(list) => {
                for index in 0..list.len() {
                    let Some(element) = list.element_mut(index) else {
                        continue;
                    };
                    self.path.push(PathStep::Index(index));
                    let result = self.remove_value(element, true);
                    self.path.pop();
                    result?;
                }
                Ok(())
            }
            Poke::Map(map) => map.walk_values(&mut |key, entry| {
                self.path.push(PathStep::Key(key.to_string()));
                let result = if matches!(entry.poke(), Poke::Scalar(_)) {
                    entry.set_zero();
                    Ok(())
                } else {
                    self.remove_value(entry, true)
                };
                self.path.pop();
                result
            }),
            Poke::Scalar(_) => {
                value.set_zero();
                Ok(())
            }
        }
    }
}
