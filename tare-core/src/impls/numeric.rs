//! `bool`, integers, floats and `char`.

use crate::{Poke, PokeScalar, ScalarError, ScalarType, Tare, parse_bool, parse_duration, parse_int};

macro_rules! impl_tare_for_scalar {
    ($type:ty, $zero:expr, |$value:ident| $is_zero:expr) => {
        impl Tare for $type {
            fn is_zero(&self) -> bool {
                let $value = self;
                $is_zero
            }

            fn set_zero(&mut self) {
                *self = $zero;
            }

            fn zero() -> Self {
                $zero
            }

            fn poke(&mut self) -> Poke<'_> {
                Poke::Scalar(self)
            }
        }
    };
}

macro_rules! impl_tare_for_int {
    ($($type:ty),* $(,)?) => {
        $(
            impl_tare_for_scalar!($type, 0, |value| *value == 0);

            impl PokeScalar for $type {
                fn scalar_type(&self) -> ScalarType {
                    ScalarType::Int
                }

                fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
                    *self = parse_int(literal)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_tare_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i128, isize);

// i64 doubles as a nanosecond count: literals that are not bare integers
// are tried as durations.
impl_tare_for_scalar!(i64, 0, |value| *value == 0);

impl PokeScalar for i64 {
    fn scalar_type(&self) -> ScalarType {
        ScalarType::Int
    }

    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
        let int_err = match parse_int(literal) {
            Ok(value) => {
                *self = value;
                return Ok(());
            }
            Err(err) => err,
        };
        let Ok(duration) = parse_duration(literal) else {
            return Err(int_err);
        };
        *self = i64::try_from(duration.as_nanos())
            .map_err(|_| ScalarError::new("i64", literal, "duration overflows nanoseconds"))?;
        Ok(())
    }
}

macro_rules! impl_tare_for_float {
    ($($type:ty),* $(,)?) => {
        $(
            // -0.0 is not the zero value
            impl_tare_for_scalar!($type, 0.0, |value| value.to_bits() == 0);

            impl PokeScalar for $type {
                fn scalar_type(&self) -> ScalarType {
                    ScalarType::Float
                }

                fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
                    *self = literal
                        .parse()
                        .map_err(|err| ScalarError::new(stringify!($type), literal, err))?;
                    Ok(())
                }
            }
        )*
    };
}

impl_tare_for_float!(f32, f64);

impl_tare_for_scalar!(bool, false, |value| !*value);

impl PokeScalar for bool {
    fn scalar_type(&self) -> ScalarType {
        ScalarType::Bool
    }

    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
        *self = parse_bool(literal)?;
        Ok(())
    }
}

impl_tare_for_scalar!(char, '\0', |value| *value == '\0');

impl PokeScalar for char {
    fn scalar_type(&self) -> ScalarType {
        ScalarType::Char
    }

    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                *self = c;
                Ok(())
            }
            _ => Err(ScalarError::new("char", literal, "expected exactly one character")),
        }
    }
}
