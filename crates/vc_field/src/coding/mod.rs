//! Static coding protocols.
//!
//! A static converter is a stateless type that knows how to write a value of
//! a fixed type into a [`Serializer`], how to read one back from a
//! [`Deserializer`], or both. Field adapters bind converters by type, so no
//! converter instance is ever stored.
//!
//! - [`StaticEncoder`]: `Value` -> serializer.
//! - [`StaticDecoder`]: deserializer -> `Value`.
//! - [`StaticCoder`]: both, over the same `Value`.
//! - [`Native`]: the value's own `Serialize` / `Deserialize`, as a converter.
//!
//! # Contract
//!
//! A converter must write and read exactly what a native conversion of the
//! value would: it may choose a different representation (a number instead
//! of a struct), but it must not open a container around that
//! representation. Every adapter in [`crate::adapter`] relies on this to keep
//! a single level between a record and the wire form of its fields.
//!
//! # Examples
//!
//! ```
//! use serde::{Deserialize, Deserializer, Serializer};
//! use vc_field::{Coded, StaticDecoder, StaticEncoder};
//!
//! /// Celsius on the wire, Kelvin in memory.
//! struct Celsius;
//!
//! impl StaticEncoder for Celsius {
//!     type Value = f64;
//!
//!     fn encode<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
//!         serializer.serialize_f64(*value - 273.15)
//!     }
//! }
//!
//! impl StaticDecoder for Celsius {
//!     type Value = f64;
//!
//!     fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
//!         f64::deserialize(deserializer).map(|c| c + 273.15)
//!     }
//! }
//!
//! let kelvin = Coded::<Celsius>::new(300.0);
//! let text = serde_json::to_string(&kelvin).unwrap();
//! assert!(text.starts_with("26.85"));
//! ```
//!
//! [`Serializer`]: serde_core::Serializer
//! [`Deserializer`]: serde_core::Deserializer

// -----------------------------------------------------------------------------
// Modules

mod error;
mod native;
mod string;

crate::cfg::std! {
    mod epoch;
    pub use epoch::{EpochMillis, EpochSeconds};
}

// -----------------------------------------------------------------------------
// Exports

pub use error::ConvertError;
pub(crate) use error::{make_de_error, make_ser_error};
pub use native::Native;
pub use string::Stringified;

use serde_core::{Deserializer, Serializer};

/// A stateless converter that writes a `Value` into a serializer.
///
/// See the [module-level documentation](self) for the contract.
pub trait StaticEncoder {
    /// The type this converter writes.
    type Value;

    /// Writes `value` into `serializer`.
    ///
    /// Errors raised by the serializer, or by the converter through
    /// [`serde_core::ser::Error::custom`], are returned unchanged.
    fn encode<S: Serializer>(value: &Self::Value, serializer: S) -> Result<S::Ok, S::Error>;
}

/// A stateless converter that reads a `Value` from a deserializer.
///
/// See the [module-level documentation](self) for the contract.
pub trait StaticDecoder {
    /// The type this converter produces.
    type Value;

    /// Reads a value from `deserializer`.
    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self::Value, D::Error>;
}

/// A converter that both encodes and decodes the same `Value`.
///
/// Implemented for every type that implements [`StaticEncoder`] and
/// [`StaticDecoder`] with matching value types.
pub trait StaticCoder:
    StaticEncoder + StaticDecoder<Value = <Self as StaticEncoder>::Value>
{
}

impl<C> StaticCoder for C where C: StaticEncoder + StaticDecoder<Value = <C as StaticEncoder>::Value> {}
