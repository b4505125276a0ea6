//! Paths used by the code that `impl_keyed_serde!` generates in other crates.

pub use serde_core;
