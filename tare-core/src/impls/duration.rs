use core::time::Duration;

use crate::{Poke, PokeScalar, ScalarError, ScalarType, Tare, parse_duration};

impl Tare for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }

    fn set_zero(&mut self) {
        *self = Duration::ZERO;
    }

    fn zero() -> Self {
        Duration::ZERO
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Scalar(self)
    }
}

impl PokeScalar for Duration {
    fn scalar_type(&self) -> ScalarType {
        ScalarType::Duration
    }

    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
        let signed = parse_duration(literal)?;
        *self = Duration::try_from(signed)
            .map_err(|err| ScalarError::new("Duration", literal, err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_friendly_durations() {
        let mut d = Duration::ZERO;
        assert!(Tare::is_zero(&d));
        d.parse_literal("1m30s").unwrap();
        assert_eq!(d, Duration::from_secs(90));
        d.parse_literal("250ms").unwrap();
        assert_eq!(d, Duration::from_millis(250));
    }

    #[test]
    fn rejects_negative() {
        let mut d = Duration::ZERO;
        let err = d.parse_literal("-5s").unwrap_err();
        assert_eq!(err.type_name, "Duration");
        assert_eq!(d, Duration::ZERO);
    }
}
