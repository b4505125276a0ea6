use alloc::string::String;
use core::fmt::Display;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A failure raised by a static converter.
///
/// Converters report these through the error type of the active serializer
/// or deserializer, so callers see them as ordinary format errors whose
/// message is the [`Display`] output of this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The value cannot be represented in the target type.
    #[error("value `{value}` is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// The input could not be interpreted as the target type.
    #[error("cannot parse `{input}` as {target}: {reason}")]
    Parse {
        input: String,
        target: &'static str,
        reason: String,
    },

    /// A floating point input was NaN or infinite.
    #[error("expected a finite number, found `{value}`")]
    NonFinite { value: String },
}

/// A helper function for generating a custom serializer error message.
///
/// This function should be preferred over [`ser::Error::custom`] as it will
/// include the key path of the field being coded when the `debug` feature is
/// active.
///
/// [`ser::Error::custom`]: serde_core::ser::Error::custom
#[inline]
pub(crate) fn make_ser_error<E: serde_core::ser::Error>(msg: impl Display) -> E {
    crate::cfg::debug! {
        if {
            match crate::keyed::key_path() {
                Some(path) => E::custom(format_args!("{msg} (field: `{path}`)")),
                None => E::custom(msg),
            }
        } else {
            E::custom(msg)
        }
    }
}

/// Deserializer counterpart of [`make_ser_error`].
#[inline]
pub(crate) fn make_de_error<E: serde_core::de::Error>(msg: impl Display) -> E {
    crate::cfg::debug! {
        if {
            match crate::keyed::key_path() {
                Some(path) => E::custom(format_args!("{msg} (field: `{path}`)")),
                None => E::custom(msg),
            }
        } else {
            E::custom(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ConvertError;

    #[test]
    fn display() {
        let err = ConvertError::OutOfRange {
            value: "1e30".to_string(),
            target: "i64 milliseconds",
        };
        assert_eq!(err.to_string(), "value `1e30` is out of range for i64 milliseconds");

        let err = ConvertError::Parse {
            input: "eighty".to_string(),
            target: "u16",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse `eighty` as u16: invalid digit found in string"
        );
    }
}
