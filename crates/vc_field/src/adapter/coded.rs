use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coding::{Native, StaticDecoder, StaticEncoder};
use crate::keyed::FieldPresence;

/// A field coded through static converters instead of its own
/// `Serialize`/`Deserialize`.
///
/// `E` writes the payload and `D` reads it; both default to the same
/// converter. The adapter adds no structure of its own: its wire form is
/// whatever `E` writes.
///
/// Only the customized side needs a converter. The other side is
/// [`Native`], which requires the payload to implement the matching serde
/// trait, so a field can never end up with a side that does not know how to
/// code its payload:
///
/// - [`EncodedWith<E>`]: custom encode, native decode.
/// - [`DecodedWith<D>`]: native encode, custom decode.
///
/// Constructing the adapter performs no conversion.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use vc_field::{Coded, coding::EpochSeconds};
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Event {
///     date: Coded<EpochSeconds>,
/// }
///
/// let event = Event {
///     date: Coded::new(UNIX_EPOCH + Duration::from_secs(590277534)),
/// };
/// assert_eq!(serde_json::to_string(&event).unwrap(), r#"{"date":590277534}"#);
/// ```
pub struct Coded<E, D = E>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
    value: E::Value,
    _coders: PhantomData<fn() -> (E, D)>,
}

/// A field with a custom encoder and the payload's native decoder.
pub type EncodedWith<E> = Coded<E, Native<<E as StaticEncoder>::Value>>;

/// A field with the payload's native encoder and a custom decoder.
pub type DecodedWith<D> = Coded<Native<<D as StaticDecoder>::Value>, D>;

impl<E, D> Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
    #[inline]
    pub const fn new(value: E::Value) -> Self {
        Self {
            value,
            _coders: PhantomData,
        }
    }

    #[inline]
    pub const fn get(&self) -> &E::Value {
        &self.value
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut E::Value {
        &mut self.value
    }

    #[inline]
    pub fn into_inner(self) -> E::Value {
        self.value
    }
}

// -----------------------------------------------------------------------------
// Coding

impl<E, D> Serialize for Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        E::encode(&self.value, serializer)
    }
}

impl<'de, E, D> Deserialize<'de> for Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
    #[inline]
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        D::decode(deserializer).map(Self::new)
    }
}

impl<E, D> FieldPresence for Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
}

// -----------------------------------------------------------------------------
// Conversions

impl<E, D> Deref for Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
{
    type Target = E::Value;

    #[inline]
    fn deref(&self) -> &E::Value {
        &self.value
    }
}

// -----------------------------------------------------------------------------
// Payload-gated traits

macro_rules! impl_payload_trait {
    ($($tr:ident { $($body:tt)* })*) => {
        $(
            impl<E, D> $tr for Coded<E, D>
            where
                E: StaticEncoder,
                D: StaticDecoder<Value = E::Value>,
                E::Value: $tr,
            {
                $($body)*
            }
        )*
    };
}

impl_payload_trait! {
    Clone {
        #[inline]
        fn clone(&self) -> Self {
            Self::new(self.value.clone())
        }
    }

    Copy {}

    PartialEq {
        #[inline]
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    Eq {}

    PartialOrd {
        #[inline]
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.value.partial_cmp(&other.value)
        }
    }

    Ord {
        #[inline]
        fn cmp(&self, other: &Self) -> Ordering {
            self.value.cmp(&other.value)
        }
    }

    Hash {
        #[inline]
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.value.hash(state);
        }
    }

    Default {
        #[inline]
        fn default() -> Self {
            Self::new(Default::default())
        }
    }
}

impl<E, D> fmt::Debug for Coded<E, D>
where
    E: StaticEncoder,
    D: StaticDecoder<Value = E::Value>,
    E::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coded").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Coded, DecodedWith, EncodedWith};
    use crate::coding::{StaticDecoder, StaticEncoder};

    /// Upper-cases on the way out.
    struct Shout;

    impl StaticEncoder for Shout {
        type Value = String;

        fn encode<S: Serializer>(value: &String, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.to_uppercase())
        }
    }

    /// Lower-cases on the way in.
    struct Whisper;

    impl StaticDecoder for Whisper {
        type Value = String;

        fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
            String::deserialize(deserializer).map(|s| s.to_lowercase())
        }
    }

    #[test]
    fn symmetric_pair() {
        type Loud = Coded<Shout, Whisper>;

        let field = Loud::new("Hello".to_string());
        assert_eq!(serde_json::to_string(&field).unwrap(), r#""HELLO""#);

        let back: Loud = serde_json::from_str(r#""HeLLo""#).unwrap();
        assert_eq!(back.get(), "hello");
    }

    #[test]
    fn encode_only_decodes_natively() {
        let field = EncodedWith::<Shout>::new("Hello".to_string());
        assert_eq!(serde_json::to_string(&field).unwrap(), r#""HELLO""#);

        let back: EncodedWith<Shout> = serde_json::from_str(r#""HeLLo""#).unwrap();
        assert_eq!(*back, "HeLLo");
    }

    #[test]
    fn decode_only_encodes_natively() {
        let field = DecodedWith::<Whisper>::new("Hello".to_string());
        assert_eq!(serde_json::to_string(&field).unwrap(), r#""Hello""#);
        assert_eq!(
            ron::to_string(&field).unwrap(),
            ron::to_string(&"Hello").unwrap()
        );

        let back: DecodedWith<Whisper> = ron::from_str(r#""HeLLo""#).unwrap();
        assert_eq!(back.into_inner(), "hello");
    }

    #[test]
    fn decode_errors_propagate() {
        let err = serde_json::from_str::<DecodedWith<Whisper>>("42").unwrap_err();
        assert!(err.to_string().contains("expected a string"), "{err}");
    }

    #[test]
    fn payload_gated_traits() {
        let a = EncodedWith::<Shout>::new("a".to_string());
        let b = a.clone();
        assert_eq!(a, b);
        assert!(a < EncodedWith::<Shout>::new("b".to_string()));
        assert_eq!(alloc::format!("{a:?}"), r#"Coded("a")"#);
        assert_eq!(EncodedWith::<Shout>::default().get(), "");
    }
}
