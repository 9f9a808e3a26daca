//! Device abstraction for the PewPew LED matrix: a grid of LEDs multiplexed
//! over row and column pins, plus one button line shared by every column.
//!
//! [`PewPew`] validates a display buffer and a set of caller-owned pins, then
//! hands them to a [`Scanner`] that does the actual multiplexing.
//!
//! # Glossary
//!
//! - **Pin handle:** a caller-owned digital I/O line that can report its
//!   [`PinKind`] and whether it has been deinitialized. See [`PinHandle`].
//! - **Scanning:** timer or interrupt driven multiplexing of rows and columns,
//!   done by a [`Scanner`] implementation.
//! - **Pressed mask:** one bit per column, set by the scanner when the button
//!   line reads active while that column is driven. See [`Pressed`].
#![cfg_attr(not(feature = "host"), no_std)]

// Logging macros; must come before any module that logs.
#[macro_use]
mod fmt;

mod error;
#[cfg(feature = "host")]
pub mod host;
pub mod pew_pew;
pub mod pin;
pub mod scanner;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
pub use crate::pew_pew::{PewPew, PewPewConfig, Pressed};
pub use crate::pin::{DigitalInOut, DigitalInOutError, PinHandle, PinKind, PinRole};
pub use crate::scanner::{ScanTarget, Scanner};
