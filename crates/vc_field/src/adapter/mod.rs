//! Field adapters.
//!
//! Each adapter owns exactly one payload and customizes how that field is
//! coded, without adding a nesting level of its own:
//!
//! - [`Optional`]: whether the key is written and whether it is required,
//!   chosen by a [`PresencePolicy`].
//! - [`Coded`]: conversion through [static converters](crate::coding),
//!   symmetric or on one side only ([`EncodedWith`], [`DecodedWith`]).
//! - [`Immutable`]: a read-only payload.
//!
//! Adapters compose by nesting. The outer adapter codes exactly like the
//! inner one, so `Immutable<Optional<Coded<EpochSeconds>>>` is a read-only
//! date written as a number and left out when absent.
//!
//! Traits such as `PartialEq`, `Hash` or `Clone` are implemented for an
//! adapter whenever its payload implements them.
//!
//! [`EpochSeconds`]: crate::coding::EpochSeconds

// -----------------------------------------------------------------------------
// Modules

mod coded;
mod immutable;
mod optional;
mod presence;

// -----------------------------------------------------------------------------
// Exports

pub use coded::{Coded, DecodedWith, EncodedWith};
pub use immutable::Immutable;
pub use optional::Optional;
pub use presence::{Always, NeverEncode, OmitWhenAbsent, Presence, PresencePolicy};
