use alloc::string::{String, ToString};
use core::fmt;

use serde_core::de::{Error, IgnoredAny, MapAccess, Visitor};
use serde_core::{Deserialize, Deserializer};

use super::FieldPresence;

// -----------------------------------------------------------------------------
// Field key

/// A map key decoded as a field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey(String);

impl FieldKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldKeyVisitor;

        impl<'de> Visitor<'de> for FieldKeyVisitor {
            type Value = FieldKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("field identifier")
            }

            #[inline]
            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FieldKey(value.to_string()))
            }

            #[inline]
            fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(FieldKey(value))
            }

            fn visit_bytes<E: Error>(self, value: &[u8]) -> Result<Self::Value, E> {
                match core::str::from_utf8(value) {
                    Ok(value) => self.visit_str(value),
                    Err(_) => Err(E::invalid_value(
                        serde_core::de::Unexpected::Bytes(value),
                        &self,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(FieldKeyVisitor)
    }
}

/// Consumes the value of a key the record does not know.
///
/// Unknown keys are ignored, as serde derive does by default.
#[inline]
pub fn skip_value<'de, A: MapAccess<'de>>(map: &mut A) -> Result<(), A::Error> {
    map.next_value::<IgnoredAny>()?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Field slot

/// Collects one field of a record while its map is visited.
///
/// A slot is created per field before the keys are read, filled when its key
/// comes up, and turned into the field value afterwards by either
/// [`require`](Self::require) (the key must have been present) or
/// [`finish`](Self::finish) (the field's [`FieldPresence`] decides what a
/// missing key means).
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
/// use vc_field::{FieldSlot, Optional};
/// use vc_field::keyed::{FieldKey, skip_value};
///
/// struct Profile {
///     name: String,
///     nickname: Optional<String>,
/// }
///
/// impl<'de> Deserialize<'de> for Profile {
///     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
///         struct ProfileVisitor;
///
///         impl<'de> Visitor<'de> for ProfileVisitor {
///             type Value = Profile;
///
///             fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
///                 f.write_str("struct Profile")
///             }
///
///             fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Profile, A::Error> {
///                 let mut name = FieldSlot::<String>::new("name");
///                 let mut nickname = FieldSlot::<Optional<String>>::new("nickname");
///                 while let Some(key) = map.next_key::<FieldKey>()? {
///                     match key.as_str() {
///                         "name" => name.fill(&mut map)?,
///                         "nickname" => nickname.fill(&mut map)?,
///                         _ => skip_value(&mut map)?,
///                     }
///                 }
///                 Ok(Profile {
///                     name: name.require::<A::Error>()?,
///                     nickname: nickname.finish::<A::Error>()?,
///                 })
///             }
///         }
///
///         deserializer.deserialize_struct("Profile", &["name", "nickname"], ProfileVisitor)
///     }
/// }
///
/// let profile: Profile = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
/// assert!(profile.nickname.is_absent());
///
/// let err = serde_json::from_str::<Profile>(r#"{"nickname":"A"}"#).err().unwrap();
/// assert!(err.to_string().starts_with("missing field `name`"));
/// ```
pub struct FieldSlot<T> {
    key: &'static str,
    value: Option<T>,
}

impl<T> FieldSlot<T> {
    #[inline]
    pub const fn new(key: &'static str) -> Self {
        Self { key, value: None }
    }

    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[inline]
    pub const fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Reads the value of the current map entry into this slot.
    ///
    /// A key that shows up twice is rejected with
    /// [`Error::duplicate_field`].
    pub fn fill<'de, A>(&mut self, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
        T: Deserialize<'de>,
    {
        if self.value.is_some() {
            return Err(A::Error::duplicate_field(self.key));
        }

        let value = crate::cfg::debug! {
            if {
                super::with_key(self.key, || map.next_value::<T>())?
            } else {
                map.next_value::<T>()?
            }
        };
        self.value = Some(value);
        Ok(())
    }

    /// The field value, failing with [`Error::missing_field`] if the key was
    /// never seen.
    #[inline]
    pub fn require<E: Error>(self) -> Result<T, E> {
        self.value.ok_or_else(|| E::missing_field(self.key))
    }

    /// The field value, asking [`FieldPresence::when_missing`] for one if the
    /// key was never seen.
    ///
    /// Fails with [`Error::missing_field`] only when the field requires its
    /// key.
    pub fn finish<E: Error>(self) -> Result<T, E>
    where
        T: FieldPresence,
    {
        if let Some(value) = self.value {
            return Ok(value);
        }

        match T::when_missing() {
            Some(value) => {
                log::trace!("field `{}` is missing, decoded as absent", self.key);
                Ok(value)
            }
            None => Err(E::missing_field(self.key)),
        }
    }
}
