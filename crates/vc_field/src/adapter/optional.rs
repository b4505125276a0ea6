use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use serde_core::de::IgnoredAny;
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use super::presence::{OmitWhenAbsent, Presence, PresencePolicy};
use crate::keyed::FieldPresence;

/// An optional field whose key presence follows the policy `P`.
///
/// The payload is an [`Option<T>`] and the adapter codes exactly like it:
/// `Some(v)` goes through [`Serializer::serialize_some`], absence through
/// [`Serializer::serialize_none`]. What the policy changes is whether the key
/// shows up at all, which is decided by the keyed hook through
/// [`FieldPresence`]:
///
/// | policy             | encode, absent | encode, present | decode, key missing | decode, key present |
/// |--------------------|----------------|-----------------|---------------------|---------------------|
/// | [`Always`]         | `null`         | value           | error               | value               |
/// | [`OmitWhenAbsent`] | no key         | value           | absent              | value               |
/// | [`NeverEncode`]    | no key         | no key          | absent              | absent              |
///
/// A present payload can itself be any adapter, e.g.
/// `Optional<Coded<EpochSeconds>>`.
///
/// # Examples
///
/// ```
/// use vc_field::{FieldPresence, Optional};
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Note {
///     #[serde(default, skip_serializing_if = "FieldPresence::is_omitted")]
///     value: Optional<String>,
/// }
///
/// let note = Note { value: Optional::none() };
/// assert_eq!(serde_json::to_string(&note).unwrap(), "{}");
///
/// let note: Note = serde_json::from_str(r#"{"value":"hi"}"#).unwrap();
/// assert_eq!(note.value.get().map(String::as_str), Some("hi"));
/// ```
///
/// [`Always`]: super::Always
/// [`NeverEncode`]: super::NeverEncode
pub struct Optional<T, P: PresencePolicy = OmitWhenAbsent> {
    value: Option<T>,
    _policy: PhantomData<fn() -> P>,
}

impl<T, P: PresencePolicy> Optional<T, P> {
    /// The presence rule of this field type.
    pub const PRESENCE: Presence = P::PRESENCE;

    #[inline]
    pub const fn new(value: Option<T>) -> Self {
        Self {
            value,
            _policy: PhantomData,
        }
    }

    #[inline]
    pub const fn some(value: T) -> Self {
        Self::new(Some(value))
    }

    #[inline]
    pub const fn none() -> Self {
        Self::new(None)
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    #[inline]
    pub const fn as_option(&self) -> &Option<T> {
        &self.value
    }

    /// Replaces the payload, returning the previous one.
    #[inline]
    pub fn replace(&mut self, value: Option<T>) -> Option<T> {
        core::mem::replace(&mut self.value, value)
    }

    /// Takes the payload out, leaving the field absent.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

// -----------------------------------------------------------------------------
// Coding

impl<T: Serialize, P: PresencePolicy> Serialize for Optional<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.value {
            Some(value) if P::PRESENCE.reads() => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>, P: PresencePolicy> Deserialize<'de> for Optional<T, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if P::PRESENCE.reads() {
            Option::<T>::deserialize(deserializer).map(Self::new)
        } else {
            IgnoredAny::deserialize(deserializer)?;
            log::debug!(
                "discarded input of a never-encoded `{}` field",
                core::any::type_name::<T>()
            );
            Ok(Self::none())
        }
    }
}

impl<T, P: PresencePolicy> FieldPresence for Optional<T, P> {
    #[inline]
    fn is_omitted(&self) -> bool {
        !P::PRESENCE.writes(self.value.is_some())
    }

    #[inline]
    fn when_missing() -> Option<Self> {
        P::PRESENCE.tolerates_missing().then(Self::none)
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl<T, P: PresencePolicy> Default for Optional<T, P> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T, P: PresencePolicy> From<Option<T>> for Optional<T, P> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T, P: PresencePolicy> From<Optional<T, P>> for Option<T> {
    #[inline]
    fn from(value: Optional<T, P>) -> Self {
        value.value
    }
}

// -----------------------------------------------------------------------------
// Payload-gated traits

impl<T: fmt::Debug, P: PresencePolicy> fmt::Debug for Optional<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Optional")
            .field(&self.value)
            .field(&P::PRESENCE)
            .finish()
    }
}

impl<T: Clone, P: PresencePolicy> Clone for Optional<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, P: PresencePolicy> Copy for Optional<T, P> {}

impl<T: PartialEq, P: PresencePolicy> PartialEq for Optional<T, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: PresencePolicy> Eq for Optional<T, P> {}

impl<T: PartialOrd, P: PresencePolicy> PartialOrd for Optional<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: PresencePolicy> Ord for Optional<T, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: PresencePolicy> Hash for Optional<T, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
