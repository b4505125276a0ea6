use core::ops::Deref;

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::keyed::FieldPresence;

/// A field that can only be assigned at construction.
///
/// There is no mutable access to the payload. Coding is transparent: the
/// wire form is exactly the payload's, and the [`FieldPresence`] of the
/// payload is forwarded, so `Immutable<Optional<T>>` still leaves out its key
/// when absent.
///
/// # Examples
///
/// ```
/// use vc_field::Immutable;
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Account {
///     id: Immutable<u64>,
/// }
///
/// let account: Account = serde_json::from_str(r#"{"id":7}"#).unwrap();
/// assert_eq!(*account.id, 7);
/// assert_eq!(serde_json::to_string(&account).unwrap(), r#"{"id":7}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Immutable<T>(T);

impl<T> Immutable<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Serialize for Immutable<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Immutable<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self)
    }
}

impl<T: FieldPresence> FieldPresence for Immutable<T> {
    #[inline]
    fn is_omitted(&self) -> bool {
        self.0.is_omitted()
    }

    #[inline]
    fn when_missing() -> Option<Self> {
        T::when_missing().map(Self)
    }
}

impl<T> Deref for Immutable<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Immutable<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Immutable<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}
