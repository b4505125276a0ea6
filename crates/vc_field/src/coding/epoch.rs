use alloc::string::ToString;
use core::fmt;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_core::de::{Error, Visitor};
use serde_core::{Deserialize, Deserializer, Serializer};

use super::{ConvertError, StaticDecoder, StaticEncoder, make_de_error, make_ser_error};

// Integers up to 2^53 survive an `f64` round trip exactly.
const MAX_EXACT_SECONDS: f64 = 9_007_199_254_740_992.0;

// -----------------------------------------------------------------------------
// EpochSeconds

/// Codes a [`SystemTime`] as seconds since the Unix epoch.
///
/// A whole number of seconds is written as an integer, anything else as a
/// float, so `590277534` stays `590277534` on the wire. Times before the epoch
/// are negative.
///
/// Decoding accepts integers and floats. The precision of a round trip is the
/// precision of an `f64` holding the seconds, well under a microsecond for
/// present-day times.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use vc_field::{Coded, coding::EpochSeconds};
///
/// let date = Coded::<EpochSeconds>::new(UNIX_EPOCH + Duration::from_secs(590277534));
/// assert_eq!(serde_json::to_string(&date).unwrap(), "590277534");
/// ```
pub struct EpochSeconds;

impl StaticEncoder for EpochSeconds {
    type Value = SystemTime;

    fn encode<S: Serializer>(value: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let seconds = match value.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        };

        if seconds.fract() == 0.0 && seconds.abs() <= MAX_EXACT_SECONDS {
            serializer.serialize_i64(seconds as i64)
        } else {
            serializer.serialize_f64(seconds)
        }
    }
}

impl StaticDecoder for EpochSeconds {
    type Value = SystemTime;

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        deserializer.deserialize_f64(SecondsVisitor)
    }
}

struct SecondsVisitor;

impl<'de> Visitor<'de> for SecondsVisitor {
    type Value = SystemTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("seconds since the Unix epoch")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<SystemTime, E> {
        let offset = Duration::from_secs(value.unsigned_abs());
        shift_epoch(value < 0, offset).ok_or_else(|| out_of_range(value, "SystemTime"))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<SystemTime, E> {
        shift_epoch(false, Duration::from_secs(value))
            .ok_or_else(|| out_of_range(value, "SystemTime"))
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<SystemTime, E> {
        if !value.is_finite() {
            return Err(make_de_error(ConvertError::NonFinite {
                value: value.to_string(),
            }));
        }

        Duration::try_from_secs_f64(value.abs())
            .ok()
            .and_then(|offset| shift_epoch(value < 0.0, offset))
            .ok_or_else(|| out_of_range(value, "SystemTime"))
    }
}

// -----------------------------------------------------------------------------
// EpochMillis

/// Codes a [`SystemTime`] as integral milliseconds since the Unix epoch.
///
/// Sub-millisecond precision is truncated toward the epoch. A time whose
/// millisecond count does not fit an `i64` fails to encode.
pub struct EpochMillis;

impl StaticEncoder for EpochMillis {
    type Value = SystemTime;

    fn encode<S: Serializer>(value: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = match value.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).ok(),
            Err(before) => i64::try_from(before.duration().as_millis())
                .ok()
                .map(|millis| -millis),
        };

        match millis {
            Some(millis) => serializer.serialize_i64(millis),
            None => Err(make_ser_error(ConvertError::OutOfRange {
                value: alloc::format!("{value:?}"),
                target: "i64 milliseconds",
            })),
        }
    }
}

impl StaticDecoder for EpochMillis {
    type Value = SystemTime;

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        let offset = Duration::from_millis(millis.unsigned_abs());
        shift_epoch(millis < 0, offset).ok_or_else(|| out_of_range(millis, "SystemTime"))
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn shift_epoch(before: bool, offset: Duration) -> Option<SystemTime> {
    if before {
        UNIX_EPOCH.checked_sub(offset)
    } else {
        UNIX_EPOCH.checked_add(offset)
    }
}

#[cold]
fn out_of_range<E: Error>(value: impl fmt::Display, target: &'static str) -> E {
    make_de_error(ConvertError::OutOfRange {
        value: value.to_string(),
        target,
    })
}
