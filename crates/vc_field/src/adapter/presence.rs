//! Type-level presence policies.
//!
//! A policy is a zero-sized marker chosen per field at compile time; its
//! runtime reflection is [`Presence`].

mod seal {
    pub trait Sealed {}
}

use seal::Sealed;

/// The presence rule of an [`Optional`](super::Optional) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The key is always written, as `null`/`None` when absent, and a
    /// missing key is an error.
    Always,
    /// The key is written only when a value is present, and a missing key
    /// decodes as absent.
    OmitWhenAbsent,
    /// The key is never written, and decoding always yields absent, even
    /// when the input carries a value for the key.
    Never,
}

impl Presence {
    /// Whether a field with this rule writes its key.
    #[inline]
    pub const fn writes(self, present: bool) -> bool {
        match self {
            Presence::Always => true,
            Presence::OmitWhenAbsent => present,
            Presence::Never => false,
        }
    }

    /// Whether a missing key decodes as an absent value.
    #[inline]
    pub const fn tolerates_missing(self) -> bool {
        !matches!(self, Presence::Always)
    }

    /// Whether a value found under the key is kept.
    #[inline]
    pub const fn reads(self) -> bool {
        !matches!(self, Presence::Never)
    }
}

/// A marker type selecting a [`Presence`] rule.
///
/// This trait is sealed; the available policies are [`Always`],
/// [`OmitWhenAbsent`] and [`NeverEncode`].
pub trait PresencePolicy: Sealed + 'static {
    const PRESENCE: Presence;
}

/// Selects [`Presence::Always`].
pub struct Always;

/// Selects [`Presence::OmitWhenAbsent`].
pub struct OmitWhenAbsent;

/// Selects [`Presence::Never`].
pub struct NeverEncode;

impl Sealed for Always {}
impl Sealed for OmitWhenAbsent {}
impl Sealed for NeverEncode {}

impl PresencePolicy for Always {
    const PRESENCE: Presence = Presence::Always;
}

impl PresencePolicy for OmitWhenAbsent {
    const PRESENCE: Presence = Presence::OmitWhenAbsent;
}

impl PresencePolicy for NeverEncode {
    const PRESENCE: Presence = Presence::Never;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies() {
        assert_eq!(<Always as PresencePolicy>::PRESENCE, Presence::Always);
        assert_eq!(<OmitWhenAbsent as PresencePolicy>::PRESENCE, Presence::OmitWhenAbsent);
        assert_eq!(<NeverEncode as PresencePolicy>::PRESENCE, Presence::Never);
    }

    #[test]
    fn rules() {
        assert!(Presence::Always.writes(false));
        assert!(Presence::OmitWhenAbsent.writes(true));
        assert!(!Presence::OmitWhenAbsent.writes(false));
        assert!(!Presence::Never.writes(true));

        assert!(!Presence::Always.tolerates_missing());
        assert!(Presence::OmitWhenAbsent.tolerates_missing());
        assert!(Presence::Never.tolerates_missing());

        assert!(Presence::OmitWhenAbsent.reads());
        assert!(!Presence::Never.reads());
    }
}
