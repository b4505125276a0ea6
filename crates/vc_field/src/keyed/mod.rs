//! The keyed-context hook.
//!
//! Serde's struct encoding writes every field it is handed and its struct
//! decoding fails on every missing key. The items here put a field's
//! [`FieldPresence`] in charge of both decisions:
//!
//! - [`KeyedEncoder`] wraps a [`SerializeStruct`]. [`encode`] is the default
//!   path; [`encode_field`] asks the field whether it is omitted and, if so,
//!   calls [`SerializeStruct::skip_field`] instead of writing the key.
//! - [`FieldSlot`] collects one field while a map is visited. [`require`] is
//!   the default path (a missing key is an error); [`finish`] lets the field
//!   supply a value for a missing key.
//!
//! The choice between the two paths is made per field where the record's
//! coding is written, so it is resolved at compile time. [`impl_keyed_serde!`]
//! writes that code for plain records.
//!
//! Records using `#[derive(Serialize, Deserialize)]` get the same behavior
//! from the attributes
//! `#[serde(default, skip_serializing_if = "FieldPresence::is_omitted")]`,
//! except that `default` also tolerates a missing key for fields that require
//! it, such as `Optional<T, Always>`.
//!
//! [`SerializeStruct`]: serde_core::ser::SerializeStruct
//! [`SerializeStruct::skip_field`]: serde_core::ser::SerializeStruct::skip_field
//! [`encode`]: KeyedEncoder::encode
//! [`encode_field`]: KeyedEncoder::encode_field
//! [`require`]: FieldSlot::require
//! [`finish`]: FieldSlot::finish
//! [`impl_keyed_serde!`]: crate::impl_keyed_serde

// -----------------------------------------------------------------------------
// Debug utils

crate::cfg::debug! {
    mod key_stack;
    pub(crate) use key_stack::{key_path, with_key};
}

// -----------------------------------------------------------------------------
// Modules

mod decoder;
mod encoder;
mod macros;
mod presence;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use decoder::{FieldKey, FieldSlot, skip_value};
pub use encoder::KeyedEncoder;
pub use presence::FieldPresence;
