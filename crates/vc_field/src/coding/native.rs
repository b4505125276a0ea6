use core::fmt;
use core::marker::PhantomData;

use serde_core::de::DeserializeOwned;
use serde_core::{Deserializer, Serialize, Serializer};

use super::{StaticDecoder, StaticEncoder};

/// The native conversion of `T`, usable wherever a converter is expected.
///
/// [`Native<T>`] encodes through `T: Serialize` and decodes through
/// `T: DeserializeOwned`. It is what the untouched side of an asymmetric
/// [`Coded`](crate::Coded) adapter uses, which is why
/// [`EncodedWith`](crate::EncodedWith) requires its value to be
/// deserializable and [`DecodedWith`](crate::DecodedWith) requires it to be
/// serializable.
pub struct Native<T>(PhantomData<fn() -> T>);

impl<T> fmt::Debug for Native<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native<{}>", core::any::type_name::<T>())
    }
}

impl<T: Serialize> StaticEncoder for Native<T> {
    type Value = T;

    #[inline]
    fn encode<S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }
}

impl<T: DeserializeOwned> StaticDecoder for Native<T> {
    type Value = T;

    #[inline]
    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        T::deserialize(deserializer)
    }
}
