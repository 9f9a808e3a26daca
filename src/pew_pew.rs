//! A device abstraction for the PewPew LED matrix and its shared button line.
//!
//! See [`PewPew`] for usage.

use portable_atomic::{AtomicU8, Ordering};

use crate::pin::{PinHandle, PinKind, PinRole};
use crate::scanner::{ScanTarget, Scanner};
use crate::{Error, Result};

// ============================================================================
// PewPewConfig - the named constructor inputs
// ============================================================================

/// Buffer, pins and pressed mask handed to [`PewPew::new`] and
/// [`PewPew::reconfigure`].
///
/// Nothing is copied. The buffer and pressed mask stay shared between the
/// caller, the handle and the scanner; the pins go to the scanner. On a device
/// the buffer and mask are usually `static`s so an interrupt-driven scanner
/// can reach them.
#[derive(Debug)]
pub struct PewPewConfig<'a, P> {
    /// Display buffer, one cell per LED. Its length must be `rows.len() * cols.len()`.
    pub buffer: &'a [AtomicU8],
    /// Row pins, in order.
    pub rows: &'a mut [P],
    /// Column pins, in order.
    pub cols: &'a mut [P],
    /// The button line, sampled once per column.
    pub buttons: &'a mut P,
    /// Pressed mask the scanner writes into. Cleared on every configuration.
    pub pressed: &'a AtomicU8,
}

impl<P: PinHandle> PewPewConfig<'_, P> {
    /// Checks the size invariant, then every pin (rows, then columns, then the
    /// button), reporting the first failure.
    fn validate(&self) -> Result<()> {
        let rows = self.rows.len();
        let cols = self.cols.len();
        if rows.checked_mul(cols) != Some(self.buffer.len()) {
            return Err(Error::MismatchedDimensions {
                buffer_len: self.buffer.len(),
                rows,
                cols,
            });
        }

        for (index, pin) in self.rows.iter().enumerate() {
            check_pin(pin, PinRole::Row, index)?;
        }
        for (index, pin) in self.cols.iter().enumerate() {
            check_pin(pin, PinRole::Col, index)?;
        }
        check_pin(&*self.buttons, PinRole::Button, 0)
    }
}

fn check_pin<P: PinHandle>(pin: &P, role: PinRole, index: usize) -> Result<()> {
    let kind = pin.kind();
    if kind != PinKind::DigitalInOut {
        return Err(Error::NotDigitalInOut { role, index, kind });
    }
    if pin.is_deinited() {
        return Err(Error::DeinitializedPin { role, index });
    }
    Ok(())
}

// ============================================================================
// Pressed - the per-column button mask
// ============================================================================

/// Buttons seen pressed by the scanner, one bit per column.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, derive_more::From)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pressed(u8);

impl Pressed {
    /// Nothing pressed.
    pub const NONE: Self = Self(0);

    /// Wraps a raw mask.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no button is pressed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the button on `column` was seen pressed. Columns past the width
    /// of the mask are never pressed.
    #[must_use]
    pub const fn contains(self, column: usize) -> bool {
        column < u8::BITS as usize && self.0 & (1u8 << column) != 0
    }

    /// Indices of the pressed columns, lowest first.
    pub fn columns(self) -> impl Iterator<Item = usize> {
        (0..u8::BITS as usize).filter(move |&column| self.contains(column))
    }
}

impl From<Pressed> for u8 {
    fn from(pressed: Pressed) -> Self {
        pressed.0
    }
}

// ============================================================================
// PewPew - the driver handle
// ============================================================================

/// Driver handle for an LED matrix multiplexed over row and column pins, with
/// one button line shared across the columns.
///
/// Construction validates the configuration and immediately starts the
/// [`Scanner`], handing it the pins and shared borrows of the buffer and
/// pressed mask. From then on the scanner owns the timing: it reads the buffer
/// and sets bits in the pressed mask from its own context. The handle writes
/// frames into the same buffer and reads the mask back.
///
/// # Example
///
/// ```rust,ignore
/// use portable_atomic::AtomicU8;
/// use pew_matrix::{PewPew, PewPewConfig};
///
/// static BUFFER: [AtomicU8; 8 * 8] = [const { AtomicU8::new(0) }; 8 * 8];
/// static PRESSED: AtomicU8 = AtomicU8::new(0);
///
/// let pew_pew = PewPew::new(
///     PewPewConfig {
///         buffer: &BUFFER,
///         rows: &mut rows,   // 8 row pins
///         cols: &mut cols,   // 8 column pins
///         buttons: &mut buttons,
///         pressed: &PRESSED,
///     },
///     scanner,
/// )?;
///
/// // The running scanner picks the new frame up on its next pass.
/// pew_pew.write_frame(&frame)?;
/// let pressed = pew_pew.take_pressed();
/// if pressed.contains(0) {
///     // ...
/// }
/// ```
///
/// Calling [`reconfigure`](Self::reconfigure) re-points the same handle and the
/// same scanner at a new buffer and pin set. The scanner is started again
/// without being stopped first.
#[derive(Debug)]
pub struct PewPew<'a, S> {
    buffer: &'a [AtomicU8],
    pressed: &'a AtomicU8,
    rows: usize,
    cols: usize,
    scanner: S,
}

impl<'a, S> PewPew<'a, S> {
    /// Validates `config` and starts `scanner` against it.
    ///
    /// # Errors
    ///
    /// - [`Error::MismatchedDimensions`] if `buffer.len() != rows.len() * cols.len()`.
    /// - [`Error::NotDigitalInOut`] if any pin is not a digital in/out pin.
    /// - [`Error::DeinitializedPin`] if any pin has been deinitialized.
    pub fn new<P>(config: PewPewConfig<'a, P>, scanner: S) -> Result<Self>
    where
        P: PinHandle + 'a,
        S: Scanner<'a, P>,
    {
        if let Err(err) = config.validate() {
            debug!("PewPew::new: rejected configuration: {}", err);
            return Err(err);
        }

        let mut pew_pew = Self {
            buffer: config.buffer,
            pressed: config.pressed,
            rows: config.rows.len(),
            cols: config.cols.len(),
            scanner,
        };
        info!(
            "PewPew::new: scanning {}x{} matrix",
            pew_pew.rows,
            pew_pew.cols
        );
        pew_pew.start_scanning(config);
        Ok(pew_pew)
    }

    /// Re-points this handle at a new buffer, pin set and pressed mask.
    ///
    /// On success the new pressed mask is cleared and the same scanner is
    /// started again. The previous scanning session is not stopped first.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new). On error the handle is left exactly as it
    /// was: same buffer, same pressed mask, scanner not restarted.
    pub fn reconfigure<P>(&mut self, config: PewPewConfig<'a, P>) -> Result<()>
    where
        P: PinHandle + 'a,
        S: Scanner<'a, P>,
    {
        if let Err(err) = config.validate() {
            debug!("PewPew::reconfigure: rejected configuration: {}", err);
            return Err(err);
        }

        warn!(
            "PewPew::reconfigure: restarting scan on {}x{} matrix without stopping the previous session",
            config.rows.len(),
            config.cols.len()
        );
        self.start_scanning(config);
        Ok(())
    }

    fn start_scanning<P>(&mut self, config: PewPewConfig<'a, P>)
    where
        P: 'a,
        S: Scanner<'a, P>,
    {
        let PewPewConfig {
            buffer,
            rows,
            cols,
            buttons,
            pressed,
        } = config;
        self.buffer = buffer;
        self.pressed = pressed;
        self.rows = rows.len();
        self.cols = cols.len();
        pressed.store(0, Ordering::SeqCst);
        self.scanner.start(ScanTarget {
            buffer,
            rows,
            cols,
            buttons,
            pressed,
        });
    }

    /// Number of rows and columns.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The display buffer shared with the scanner.
    #[must_use]
    pub fn buffer(&self) -> &'a [AtomicU8] {
        self.buffer
    }

    /// Copies `frame` into the display buffer.
    ///
    /// # Errors
    ///
    /// [`Error::MismatchedDimensions`] if `frame` is not `rows * cols` bytes.
    pub fn write_frame(&self, frame: &[u8]) -> Result<()> {
        self.check_frame_len(frame.len())?;
        for (cell, &value) in self.buffer.iter().zip(frame) {
            cell.store(value, Ordering::SeqCst);
        }
        Ok(())
    }

    /// Copies the display buffer into `frame`.
    ///
    /// # Errors
    ///
    /// [`Error::MismatchedDimensions`] if `frame` is not `rows * cols` bytes.
    pub fn read_frame(&self, frame: &mut [u8]) -> Result<()> {
        self.check_frame_len(frame.len())?;
        for (value, cell) in frame.iter_mut().zip(self.buffer) {
            *value = cell.load(Ordering::SeqCst);
        }
        Ok(())
    }

    /// Sets every cell of the display buffer to `value`.
    pub fn fill(&self, value: u8) {
        for cell in self.buffer {
            cell.store(value, Ordering::SeqCst);
        }
    }

    fn check_frame_len(&self, len: usize) -> Result<()> {
        if len == self.buffer.len() {
            Ok(())
        } else {
            Err(Error::MismatchedDimensions {
                buffer_len: len,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Buttons pressed since the mask was last cleared.
    #[must_use]
    pub fn pressed(&self) -> Pressed {
        Pressed(self.pressed.load(Ordering::SeqCst))
    }

    /// Returns the pressed mask and clears it in one step.
    pub fn take_pressed(&self) -> Pressed {
        Pressed(self.pressed.swap(0, Ordering::SeqCst))
    }

    /// The scanner this handle started.
    #[must_use]
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Mutable access to the scanner.
    pub fn scanner_mut(&mut self) -> &mut S {
        &mut self.scanner
    }

    /// Gives back the scanner. It keeps whatever it borrowed on its last start.
    #[must_use]
    pub fn into_scanner(self) -> S {
        self.scanner
    }
}
