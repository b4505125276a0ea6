use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use super::FieldPresence;

/// A struct encoder that honors the [`FieldPresence`] of its fields.
///
/// `len` passed to [`begin`](Self::begin) is the number of fields that will
/// actually be written, i.e. it excludes omitted fields. Self-describing
/// formats ignore it, others rely on it.
///
/// # Examples
///
/// ```
/// use serde::{Serialize, Serializer};
/// use vc_field::{FieldPresence, KeyedEncoder, Optional};
///
/// struct Profile {
///     name: String,
///     nickname: Optional<String>,
/// }
///
/// impl Serialize for Profile {
///     fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
///         let len = 1 + usize::from(!self.nickname.is_omitted());
///         let mut encoder = KeyedEncoder::begin(serializer, "Profile", len)?;
///         encoder.encode("name", &self.name)?;
///         encoder.encode_field("nickname", &self.nickname)?;
///         encoder.end()
///     }
/// }
///
/// let profile = Profile { name: "Ada".to_string(), nickname: Optional::none() };
/// assert_eq!(serde_json::to_string(&profile).unwrap(), r#"{"name":"Ada"}"#);
/// ```
pub struct KeyedEncoder<S: SerializeStruct> {
    state: S,
}

impl<S: SerializeStruct> KeyedEncoder<S> {
    /// Opens a struct named `name` holding `len` written fields.
    #[inline]
    pub fn begin<T>(serializer: T, name: &'static str, len: usize) -> Result<Self, T::Error>
    where
        T: Serializer<SerializeStruct = S>,
    {
        Ok(Self {
            state: serializer.serialize_struct(name, len)?,
        })
    }

    /// Writes `value` under `key` unconditionally.
    #[inline]
    pub fn encode<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), S::Error> {
        self.write(key, value)
    }

    /// Writes `field` under `key` unless the field is omitted, in which case
    /// the key is skipped entirely.
    pub fn encode_field<T>(&mut self, key: &'static str, field: &T) -> Result<(), S::Error>
    where
        T: Serialize + FieldPresence,
    {
        if field.is_omitted() {
            log::trace!("omitting field `{key}`");
            return self.state.skip_field(key);
        }
        self.write(key, field)
    }

    /// Closes the struct.
    #[inline]
    pub fn end(self) -> Result<S::Ok, S::Error> {
        self.state.end()
    }

    fn write<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), S::Error> {
        crate::cfg::debug! {
            if {
                super::with_key(key, || self.state.serialize_field(key, value))
            } else {
                self.state.serialize_field(key, value)
            }
        }
    }
}
