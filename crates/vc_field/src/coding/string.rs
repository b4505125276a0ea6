use alloc::string::{String, ToString};
use core::fmt::{self, Display};
use core::marker::PhantomData;
use core::str::FromStr;

use serde_core::de::{Error, Visitor};
use serde_core::{Deserializer, Serializer};

use super::{ConvertError, StaticDecoder, StaticEncoder, make_de_error};

/// Codes a value through its string form.
///
/// Encoding writes the [`Display`] output of the value, decoding parses a
/// string with [`FromStr`]. Input that does not parse fails with
/// [`ConvertError::Parse`], which carries the offending string.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use vc_field::{Coded, coding::Stringified};
///
/// let addr = Coded::<Stringified<Ipv4Addr>>::new(Ipv4Addr::LOCALHOST);
/// assert_eq!(serde_json::to_string(&addr).unwrap(), r#""127.0.0.1""#);
///
/// let back: Coded<Stringified<Ipv4Addr>> = serde_json::from_str(r#""10.0.0.1""#).unwrap();
/// assert_eq!(*back, Ipv4Addr::new(10, 0, 0, 1));
/// ```
pub struct Stringified<T>(PhantomData<fn() -> T>);

impl<T: Display> StaticEncoder for Stringified<T> {
    type Value = T;

    #[inline]
    fn encode<S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }
}

impl<T> StaticDecoder for Stringified<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = T;

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_str(StringifiedVisitor(PhantomData))
    }
}

struct StringifiedVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T> Visitor<'de> for StringifiedVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<T, E> {
        value.parse::<T>().map_err(|err| {
            make_de_error(ConvertError::Parse {
                input: value.to_string(),
                target: core::any::type_name::<T>(),
                reason: err.to_string(),
            })
        })
    }

    #[inline]
    fn visit_string<E: Error>(self, value: String) -> Result<T, E> {
        self.visit_str(&value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Stringified;
    use crate::Coded;

    #[test]
    fn number_as_string() {
        let port = Coded::<Stringified<u16>>::new(8080);
        assert_eq!(serde_json::to_string(&port).unwrap(), r#""8080""#);
        assert_eq!(ron::to_string(&port).unwrap(), r#""8080""#);

        let back: Coded<Stringified<u16>> = serde_json::from_str(r#""443""#).unwrap();
        assert_eq!(back.into_inner(), 443);
    }

    #[test]
    fn bad_input_names_the_string() {
        let err = serde_json::from_str::<Coded<Stringified<u16>>>(r#""eighty""#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cannot parse `eighty` as u16"), "{msg}");
    }

    #[test]
    fn wrong_shape_is_a_type_error() {
        let err = serde_json::from_str::<Coded<Stringified<u16>>>("8080").unwrap_err();
        assert!(err.to_string().contains("expected a string"), "{err}");
    }
}
