//! Logging shims
//!
//! Forward to `defmt` or `log` depending on the enabled feature. With
//! neither feature the macros expand to nothing. `defmt` wins if both are
//! enabled.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! error {
    ($($arg:tt)*) => { log::error!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! error {
    ($($arg:tt)*) => {{}};
}
