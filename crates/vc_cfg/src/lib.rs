#![doc = include_str!("../README.md")]
#![no_std]

/// Expands its input as-is.
///
/// This is what an alias defined by [`define_alias`] becomes when its
/// configuration predicate holds.
///
/// The `if { .. } else { .. }` form keeps the first block.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards its input.
///
/// This is what an alias defined by [`define_alias`] becomes when its
/// configuration predicate does not hold.
///
/// The `if { .. } else { .. }` form keeps the second block.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines macro aliases for `#[cfg]` predicates.
///
/// Every alias is either [`enabled`] or [`disabled`], so the code passed to
/// it is kept or dropped as a whole.
///
/// # Examples
///
/// ```
/// mod cfg {
///     vc_cfg::define_alias! {
///         #[cfg(debug_assertions)] => debug,
///         #[cfg(feature = "never_set")] => never,
///     }
/// }
///
/// cfg::never! {
///     compile_error!("dropped");
/// }
///
/// let checked = cfg::debug! {
///     if { "debug" } else { "release" }
/// };
/// assert!(checked == "debug" || checked == "release");
/// assert!(!cfg::never!());
/// ```
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $alias:ident),+ $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc(inline)]
            #[allow(unused_imports)]
            pub use $crate::enabled as $alias;

            #[cfg(not($meta))]
            #[doc(inline)]
            #[allow(unused_imports)]
            pub use $crate::disabled as $alias;
        )+
    };
}
