use std::borrow::Cow;

use serde_json::Value;
use tare_core::{
    DecodeError, DecodeErrorKind, LiteralDecoder, Poke, PokeScalar, ScalarType, Tare,
};

/// Decodes JSON literals. The default decoder of `tare::Defaulter`.
///
/// Object keys are matched to struct fields by effective name, exactly
/// first and then ignoring ASCII case. Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl LiteralDecoder for JsonDecoder {
    fn decode_into(&self, literal: &str, target: &mut dyn Tare) -> Result<(), DecodeError> {
        let document: Value = serde_json::from_str(literal)
            .map_err(|err| DecodeError::new(DecodeErrorKind::Syntax(err.to_string())))?;
        fill(&document, target)
    }
}

/// Decodes `input` into a fresh zero value of `T`.
pub fn from_str<T: Tare>(input: &str) -> Result<T, DecodeError> {
    let mut value = T::zero();
    JsonDecoder.decode_into(input, &mut value)?;
    Ok(value)
}

fn json_kind(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, node: &Value) -> DecodeError {
    DecodeError::new(DecodeErrorKind::Mismatch {
        expected,
        found: json_kind(node),
    })
}

fn fill(node: &Value, target: &mut dyn Tare) -> Result<(), DecodeError> {
    match (node, target.poke()) {
        (Value::Null, Poke::Option(option)) => {
            option.set_none();
            Ok(())
        }
        (Value::Null, _) => Ok(()),
        (_, Poke::Option(option)) => fill(node, option.get_or_init()),
        (_, Poke::Scalar(scalar)) => fill_scalar(node, scalar),
        (Value::Array(items), Poke::List(list)) => {
            for (index, item) in items.iter().enumerate() {
                fill(item, list.push_zero()).map_err(|err| err.within(&index.to_string()))?;
            }
            Ok(())
        }
        (Value::Object(entries), Poke::Map(map)) => {
            for (key, value) in entries {
                map.insert_with(key, &mut |slot| fill(value, slot))
                    .map_err(|err| err.within(key))?;
            }
            Ok(())
        }
        (Value::Object(entries), Poke::Struct(record)) => {
            for (key, value) in entries {
                let Some(index) = record.field_index(key) else {
                    trace!("ignoring unknown key {key:?}");
                    continue;
                };
                let Some(field) = record.field_mut(index) else {
                    trace!("ignoring key {key:?} of a skipped field");
                    continue;
                };
                fill(value, field).map_err(|err| err.within(key))?;
            }
            Ok(())
        }
        (node, poke) => Err(mismatch(poke.kind(), node)),
    }
}

fn fill_scalar(node: &Value, scalar: &mut dyn PokeScalar) -> Result<(), DecodeError> {
    let scalar_type = scalar.scalar_type();
    let text: Cow<'_, str> = match (node, scalar_type) {
        (Value::Bool(b), ScalarType::Bool) => Cow::Borrowed(if *b { "true" } else { "false" }),
        (Value::Number(n), ScalarType::Int | ScalarType::Float) => Cow::Owned(n.to_string()),
        // Bare numbers count nanoseconds.
        (Value::Number(n), ScalarType::Duration) => match n.as_i64() {
            Some(nanos) => Cow::Owned(format!("{nanos}ns")),
            None => return Err(mismatch("integer nanoseconds", node)),
        },
        (
            Value::String(s),
            ScalarType::String | ScalarType::Char | ScalarType::Duration | ScalarType::Text,
        ) => Cow::Borrowed(s.as_str()),
        _ => return Err(mismatch(scalar_type.name(), node)),
    };
    scalar.parse_literal(&text)?;
    Ok(())
}
