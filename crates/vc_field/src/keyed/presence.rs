/// The omit capability of a field type.
///
/// The keyed hook consults this trait instead of assuming that every field
/// writes its key and requires it back. The defaults describe an ordinary
/// field: always written, required on input.
///
/// Implemented by [`Optional`] (according to its policy), forwarded by
/// [`Immutable`], left at the defaults by [`Coded`], and implemented for
/// [`Option<T>`] the way serde derive treats it: written as `null` when
/// absent, `None` when the key is missing.
///
/// [`Optional`]: crate::Optional
/// [`Immutable`]: crate::Immutable
/// [`Coded`]: crate::Coded
pub trait FieldPresence: Sized {
    /// Whether the field's key is left out of the output.
    #[inline]
    fn is_omitted(&self) -> bool {
        false
    }

    /// The value of a field whose key is missing from the input.
    ///
    /// `None` means the key is required and its absence is an error.
    #[inline]
    fn when_missing() -> Option<Self> {
        None
    }
}

impl<T> FieldPresence for Option<T> {
    #[inline]
    fn when_missing() -> Option<Self> {
        Some(None)
    }
}
