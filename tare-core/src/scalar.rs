//! Scalar literal parsing.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::any::type_name;
use core::fmt;

use jiff::SignedDuration;

/// A scalar literal that could not be parsed for its target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarError {
    /// Target type.
    pub type_name: &'static str,
    /// The offending literal.
    pub literal: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ScalarError {
    /// Builds an error for `literal` as `type_name`.
    pub fn new(type_name: &'static str, literal: &str, reason: impl fmt::Display) -> Self {
        Self {
            type_name,
            literal: literal.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse {:?} as {}: {}",
            self.literal, self.type_name, self.reason
        )
    }
}

impl core::error::Error for ScalarError {}

/// Parses an integer, detecting the base from its prefix.
///
/// Accepts an optional `+`/`-` sign, then `0x`/`0X` (hex), `0o`/`0O` (octal),
/// `0b`/`0B` (binary), a bare leading `0` (octal), or plain decimal. Single
/// `_` separators may appear between digits.
pub fn parse_int<T>(literal: &str) -> Result<T, ScalarError>
where
    T: TryFrom<i128> + TryFrom<u128>,
{
    let fail = |reason: &str| ScalarError::new(type_name::<T>(), literal, reason);

    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let (radix, digits) = split_radix(unsigned);
    let digits = strip_separators(digits).ok_or_else(|| fail("misplaced digit separator"))?;
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(fail("invalid digit"));
    }

    let magnitude = u128::from_str_radix(&digits, radix).map_err(|err| fail(&err.to_string()))?;
    if negative {
        let value = 0i128
            .checked_sub_unsigned(magnitude)
            .ok_or_else(|| fail("number too small"))?;
        T::try_from(value).map_err(|_| fail("out of range"))
    } else {
        T::try_from(magnitude).map_err(|_| fail("out of range"))
    }
}

fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => (16, &text[2..]),
        [b'0', b'o' | b'O', ..] => (8, &text[2..]),
        [b'0', b'b' | b'B', ..] => (2, &text[2..]),
        [b'0', _, ..] => (8, &text[1..]),
        _ => (10, text),
    }
}

fn strip_separators(digits: &str) -> Option<Cow<'_, str>> {
    if !digits.contains('_') {
        return Some(Cow::Borrowed(digits));
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(Cow::Owned(digits.replace('_', "")))
}

/// Parses a boolean: `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn parse_bool(literal: &str) -> Result<bool, ScalarError> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ScalarError::new("bool", literal, "expected true or false")),
    }
}

/// Parses a duration literal such as `10s`, `1h30m`, `300ms` or `-1.5h`.
///
/// A bare `0` is accepted as zero.
pub fn parse_duration(literal: &str) -> Result<SignedDuration, ScalarError> {
    if literal == "0" {
        return Ok(SignedDuration::ZERO);
    }
    literal
        .parse::<SignedDuration>()
        .map_err(|err| ScalarError::new("duration", literal, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_signs() {
        assert_eq!(parse_int::<i32>("42"), Ok(42));
        assert_eq!(parse_int::<i32>("-42"), Ok(-42));
        assert_eq!(parse_int::<i32>("+42"), Ok(42));
        assert_eq!(parse_int::<u64>("1_000_000"), Ok(1_000_000));
        assert_eq!(parse_int::<i8>("-128"), Ok(i8::MIN));
        assert_eq!(parse_int::<i128>("-170141183460469231731687303715884105728"), Ok(i128::MIN));
    }

    #[test]
    fn base_prefixes() {
        assert_eq!(parse_int::<i32>("0x1F"), Ok(31));
        assert_eq!(parse_int::<i32>("0X1f"), Ok(31));
        assert_eq!(parse_int::<u8>("0o17"), Ok(15));
        assert_eq!(parse_int::<u8>("017"), Ok(15));
        assert_eq!(parse_int::<u8>("0b1010"), Ok(10));
        assert_eq!(parse_int::<i16>("-0x10"), Ok(-16));
        assert_eq!(parse_int::<u32>("0"), Ok(0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_int::<u8>("256").is_err());
        assert!(parse_int::<u8>("-1").is_err());
        assert!(parse_int::<i32>("").is_err());
        assert!(parse_int::<i32>("-").is_err());
        assert!(parse_int::<i32>("--1").is_err());
        assert!(parse_int::<i32>("+-1").is_err());
        assert!(parse_int::<i32>("1__0").is_err());
        assert!(parse_int::<i32>("_10").is_err());
        assert!(parse_int::<i32>("08").is_err());
        assert!(parse_int::<i32>("12abc").is_err());
    }

    #[test]
    fn error_message() {
        let err = parse_int::<u8>("300").unwrap_err();
        insta::assert_snapshot!(err, @r#"cannot parse "300" as u8: out of range"#);
    }

    #[test]
    fn booleans() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(text), Ok(true), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(text), Ok(false), "{text}");
        }
        assert!(parse_bool("yes").is_err());
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("10s"), Ok(SignedDuration::from_secs(10)));
        assert_eq!(parse_duration("1h30m"), Ok(SignedDuration::from_mins(90)));
        assert_eq!(parse_duration("300ms"), Ok(SignedDuration::from_millis(300)));
        assert_eq!(parse_duration("0"), Ok(SignedDuration::ZERO));
        assert!(parse_duration("ten seconds please").is_err());
    }
}
