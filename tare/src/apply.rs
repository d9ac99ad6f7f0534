//! Default application: assign literals to zero-valued fields, recurse into
//! everything, then run hooks.

use tare_core::{DefaultSpec, LiteralDecoder, Path, PathStep, Poke, PokeStruct, Tare, TareError};

/// Literal that allocates a sequence without decoding anything.
const EMPTY_LIST: &str = "[]";

/// Literal that allocates a map or struct without decoding anything.
const EMPTY_OBJECT: &str = "{}";

pub(crate) struct Applier<'d> {
    decoder: &'d dyn LiteralDecoder,
    max_depth: usize,
    depth: usize,
    path: Path,
}

impl<'d> Applier<'d> {
    pub(crate) fn new(decoder: &'d dyn LiteralDecoder, max_depth: usize) -> Self {
        Self {
            decoder,
            max_depth,
            depth: 0,
            path: Path::new(),
        }
    }

    /// Applies one value: assign the literal if the value is zero, recurse,
    /// then call hooks.
    pub(crate) fn apply_value(
        &mut self,
        value: &mut dyn Tare,
        literal: Option<&str>,
    ) -> Result<(), TareError> {
        if self.depth >= self.max_depth {
            return Err(TareError::DepthLimitExceeded {
                path: self.path.clone(),
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.apply_value_inner(value, literal);
        self.depth -= 1;
        result
    }

    fn apply_value_inner(
        &mut self,
        value: &mut dyn Tare,
        literal: Option<&str>,
    ) -> Result<(), TareError> {
        // Types with a tagged hook interpret their literal themselves.
        let self_interpreting = value.as_set_tagged_defaults().is_some();

        let mut fresh = false;
        if let Some(literal) = literal {
            if self_interpreting {
                trace!("{}: literal left to the tagged hook", self.path);
            } else if value.is_zero() {
                trace!("{}: assigning {literal:?}", self.path);
                if let Err(err) = self.assign(value, literal) {
                    self.roll_back(value);
                    return Err(err);
                }
                fresh = true;
            } else {
                trace!("{}: non-zero, keeping value", self.path);
            }
        }

        // A just-allocated pointee still needs the literal.
        let descended = self.descend(value, if fresh { literal } else { None });
        if descended.is_err() && fresh {
            self.roll_back(value);
        }
        descended?;

        if let Some(hook) = value.as_set_defaults() {
            trace!("{}: calling set_defaults", self.path);
            hook.set_defaults();
        }
        if let Some(literal) = literal
            && let Some(hook) = value.as_set_tagged_defaults()
        {
            trace!("{}: calling set_tagged_defaults({literal:?})", self.path);
            hook.set_tagged_defaults(literal)
                .map_err(|source| TareError::Setter {
                    path: self.path.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Builds a value from `literal` into a zero `value`. Structs are decoded
    /// into a staged copy; other containers are rolled back by the caller.
    fn assign(&mut self, value: &mut dyn Tare, literal: &str) -> Result<(), TareError> {
        let decoder = self.decoder;
        let decoded = match value.poke() {
            Poke::Scalar(scalar) => scalar.parse_literal(literal).map_err(Into::into),
            Poke::Option(option) => {
                option.get_or_init();
                Ok(())
            }
            Poke::List(_) if literal == EMPTY_LIST => Ok(()),
            Poke::Map(_) | Poke::Struct(_) if literal == EMPTY_OBJECT => Ok(()),
            Poke::Struct(record) => {
                record.fill_staged(&mut |staged| decoder.decode_into(literal, staged))
            }
            Poke::List(_) | Poke::Map(_) => decoder.decode_into(literal, value),
        };
        decoded.map_err(|source| TareError::Decode {
            path: self.path.clone(),
            literal: literal.to_string(),
            source,
        })
    }

    /// Returns a value that was zero before its literal was assigned back to
    /// zero. Structs are skipped: their decode is staged, and a wholesale
    /// reset would clear their skipped fields.
    fn roll_back(&self, value: &mut dyn Tare) {
        if matches!(value.poke(), Poke::Option(_) | Poke::List(_) | Poke::Map(_)) {
            trace!("{}: rolling back", self.path);
            value.set_zero();
        }
    }

    fn descend(&mut self, value: &mut dyn Tare, literal: Option<&str>) -> Result<(), TareError> {
        match value.poke() {
            Poke::Scalar(_) => Ok(()),
            Poke::Option(option) => match option.inner_mut() {
                Some(inner) => self.apply_value(inner, literal),
                None => Ok(()),
            },
            Poke::List(list) => {
                for index in 0..list.len() {
                    let Some(element) = list.element_mut(index) else {
                        continue;
                    };
                    self.path.push(PathStep::Index(index));
                    let result = self.apply_value(element, None);
                    self.path.pop();
                    result?;
                }
                Ok(())
            }
            Poke::Map(map) => map.walk_values(&mut |key, entry| {
                self.path.push(PathStep::Key(key.to_string()));
                let result = self.apply_value(entry, None);
                self.path.pop();
                result
            }),
            Poke::Struct(record) => self.apply_struct(record),
        }
    }

    fn apply_struct(&mut self, record: &mut dyn PokeStruct) -> Result<(), TareError> {
        for (index, field) in record.fields().iter().enumerate() {
            let literal = match field.default {
                DefaultSpec::Skip => {
                    trace!("{}.{}: opted out", self.path, field.name);
                    continue;
                }
                DefaultSpec::None => None,
                DefaultSpec::Literal(literal) => Some(literal),
            };
            let Some(value) = record.field_mut(index) else {
                continue;
            };
            self.path.push(PathStep::Field(field.name));
            let result = self.apply_value(value, literal);
            self.path.pop();
            result?;
        }
        Ok(())
    }
}
