//! Error and result types shared across the crate.

use derive_more::{Display, Error};

use crate::pin::{PinKind, PinRole};

/// Errors reported while configuring a [`PewPew`](crate::pew_pew::PewPew).
///
/// Every variant is returned before the driver handle is touched, so a failed
/// call never leaves a half-applied configuration behind.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The display buffer length is not `rows * cols`.
    #[display("mismatched dimensions: buffer holds {buffer_len} bytes, {rows}x{cols} matrix needs {}", rows.saturating_mul(*cols))]
    MismatchedDimensions {
        /// Length of the buffer that was passed in.
        buffer_len: usize,
        /// Number of row pins.
        rows: usize,
        /// Number of column pins.
        cols: usize,
    },

    /// A pin handle is not a digital in/out pin.
    #[display("{role} pin {index} is {kind}, expected a digital in/out pin")]
    NotDigitalInOut {
        /// Which argument the pin came from.
        role: PinRole,
        /// Position within `rows`/`cols` (always 0 for the button).
        index: usize,
        /// What the pin actually is.
        kind: PinKind,
    },

    /// A pin handle was deinitialized before it was handed over.
    #[display("deinitialized {role} pin {index} used")]
    DeinitializedPin {
        /// Which argument the pin came from.
        role: PinRole,
        /// Position within `rows`/`cols` (always 0 for the button).
        index: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
