#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    vc_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(all(debug_assertions, feature = "debug", feature = "std"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod adapter;
pub mod coding;
pub mod keyed;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use adapter::{Coded, DecodedWith, EncodedWith, Immutable, Optional};
pub use coding::{ConvertError, Native, StaticCoder, StaticDecoder, StaticEncoder};
pub use keyed::{FieldPresence, FieldSlot, KeyedEncoder};
