//! Text-like scalars: `String`, `PathBuf`, network addresses, and user
//! `FromStr` types through [`text_scalar!`](crate::text_scalar).

use alloc::string::String;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::path::PathBuf;

use crate::{Poke, PokeScalar, ScalarError, ScalarType, Tare};

impl Tare for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn set_zero(&mut self) {
        self.clear();
    }

    fn zero() -> Self {
        String::new()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Scalar(self)
    }
}

impl PokeScalar for String {
    fn scalar_type(&self) -> ScalarType {
        ScalarType::String
    }

    fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
        self.clear();
        self.push_str(literal);
        Ok(())
    }
}

/// Implements [`Tare`] for `FromStr + Default + PartialEq` types, treating
/// them as text scalars.
///
/// The zero value is `Default::default()`; literals are parsed with
/// `FromStr`. Hook impls ([`SetDefaults`](crate::SetDefaults),
/// [`SetTaggedDefaults`](crate::SetTaggedDefaults)) on the type are picked up.
///
/// `FromStr` always receives the raw literal text. A type whose literal is
/// itself encoded (say `"\"one\""`) should implement `SetTaggedDefaults` and
/// decode the tag there.
///
/// ```ignore
/// #[derive(Debug, Default, PartialEq)]
/// enum Level { #[default] Off, Info, Debug }
///
/// impl core::str::FromStr for Level { /* ... */ }
///
/// tare::text_scalar!(Level);
/// ```
#[macro_export]
macro_rules! text_scalar {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::Tare for $type {
                fn is_zero(&self) -> bool {
                    *self == <$type as ::core::default::Default>::default()
                }

                fn set_zero(&mut self) {
                    *self = <$type as ::core::default::Default>::default();
                }

                fn zero() -> Self {
                    <$type as ::core::default::Default>::default()
                }

                fn poke(&mut self) -> $crate::Poke<'_> {
                    $crate::Poke::Scalar(self)
                }

                fn as_set_defaults(&mut self) -> ::core::option::Option<&mut dyn $crate::SetDefaults> {
                    use $crate::spez::*;
                    match (&&SpezEmpty::<$type>::SPEZ).spez_set_defaults() {
                        ::core::option::Option::Some(cast) => ::core::option::Option::Some(cast(self)),
                        ::core::option::Option::None => ::core::option::Option::None,
                    }
                }

                fn as_set_tagged_defaults(
                    &mut self,
                ) -> ::core::option::Option<&mut dyn $crate::SetTaggedDefaults> {
                    use $crate::spez::*;
                    match (&&SpezEmpty::<$type>::SPEZ).spez_set_tagged_defaults() {
                        ::core::option::Option::Some(cast) => ::core::option::Option::Some(cast(self)),
                        ::core::option::Option::None => ::core::option::Option::None,
                    }
                }
            }

            impl $crate::PokeScalar for $type {
                fn scalar_type(&self) -> $crate::ScalarType {
                    $crate::ScalarType::Text
                }

                fn parse_literal(&mut self, literal: &str) -> ::core::result::Result<(), $crate::ScalarError> {
                    *self = literal.parse::<$type>().map_err(|err| {
                        $crate::ScalarError::new(::core::any::type_name::<$type>(), literal, err)
                    })?;
                    ::core::result::Result::Ok(())
                }
            }
        )+
    };
}

macro_rules! impl_tare_for_std_text {
    ($($type:ty => $zero:expr),* $(,)?) => {
        $(
            impl Tare for $type {
                fn is_zero(&self) -> bool {
                    *self == $zero
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

            impl PokeScalar for $type {
                fn scalar_type(&self) -> ScalarType {
                    ScalarType::Text
                }

                fn parse_literal(&mut self, literal: &str) -> Result<(), ScalarError> {
                    *self = literal
                        .parse::<$type>()
                        .map_err(|err| ScalarError::new(stringify!($type), literal, err))?;
                    Ok(())
                }
            }
        )*
    };
}

impl_tare_for_std_text!(
    PathBuf => PathBuf::new(),
    IpAddr => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    Ipv4Addr => Ipv4Addr::UNSPECIFIED,
    Ipv6Addr => Ipv6Addr::UNSPECIFIED,
    SocketAddr => SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)),
    SocketAddrV4 => SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0),
    SocketAddrV6 => SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_is_verbatim() {
        let mut s = String::from("old");
        s.parse_literal(" spaced, \"quoted\" ").unwrap();
        assert_eq!(s, " spaced, \"quoted\" ");
        assert!(!s.is_zero());
        s.set_zero();
        assert!(s.is_zero());
    }

    #[test]
    fn addresses() {
        let mut addr = SocketAddr::zero();
        assert!(addr.is_zero());
        addr.parse_literal("127.0.0.1:8080").unwrap();
        assert_eq!(addr.port(), 8080);

        let mut ip = IpAddr::zero();
        let err = ip.parse_literal("localhost").unwrap_err();
        assert_eq!(err.type_name, "IpAddr");
    }

    #[test]
    fn paths() {
        let mut path = PathBuf::zero();
        assert!(path.is_zero());
        path.parse_literal("/var/lib/app").unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/app"));
    }
}
