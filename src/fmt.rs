//! Logging macros that forward to `defmt` on device builds.
//!
//! Host builds have no global `defmt` logger to link against, so the macros
//! expand to nothing there (arguments are still type-checked).
//!
//! Pulled in with `#[macro_use]` ahead of every other module in `lib.rs`.
#![allow(unused_macros)]

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::defmt::debug!($($arg)*)
    };
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! info {
    ($($arg:tt)*) => {
        ::defmt::info!($($arg)*)
    };
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(all(feature = "defmt", not(feature = "host")))]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::defmt::warn!($($arg)*)
    };
}

#[cfg(not(all(feature = "defmt", not(feature = "host"))))]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}
