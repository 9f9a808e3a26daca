#![cfg(feature = "host")]
//! Stand-ins for real pins and a real scanner, for testing on the host.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use portable_atomic::{AtomicU8, Ordering};

use crate::pin::{PinHandle, PinKind};
use crate::scanner::{ScanTarget, Scanner};

// ============================================================================
// HostPin
// ============================================================================

/// An in-memory pin of any [`PinKind`] with a level and a liveness flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HostPin {
    kind: PinKind,
    deinited: bool,
    high: bool,
}

impl HostPin {
    /// A live digital in/out pin, initially low.
    #[must_use]
    pub const fn digital_in_out() -> Self {
        Self::of_kind(PinKind::DigitalInOut)
    }

    /// A live pin of the given kind, initially low.
    #[must_use]
    pub const fn of_kind(kind: PinKind) -> Self {
        Self {
            kind,
            deinited: false,
            high: false,
        }
    }

    /// Marks the pin as released.
    pub fn deinit(&mut self) {
        self.deinited = true;
    }

    /// Returns this pin already released.
    #[must_use]
    pub const fn deinited(mut self) -> Self {
        self.deinited = true;
        self
    }
}

impl PinHandle for HostPin {
    fn kind(&self) -> PinKind {
        self.kind
    }

    fn is_deinited(&self) -> bool {
        self.deinited
    }
}

impl ErrorType for HostPin {
    type Error = Infallible;
}

impl InputPin for HostPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

impl OutputPin for HostPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for HostPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

// ============================================================================
// RecordingScanner
// ============================================================================

/// What a [`RecordingScanner`] saw on one call to [`Scanner::start`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanStart {
    /// Address of the display buffer, to tell buffers apart.
    pub buffer_addr: usize,
    /// Address of the pressed mask, to tell masks apart.
    pub pressed_addr: usize,
    /// Copy of the display buffer at start time.
    pub buffer: Vec<u8>,
    /// Number of row pins.
    pub rows: usize,
    /// Number of column pins.
    pub cols: usize,
}

/// A [`Scanner`] that records every start and keeps the latest target, the way
/// an interrupt-driven scanner would, so presses and frame reads can be
/// simulated after `start` has returned.
#[derive(Debug)]
pub struct RecordingScanner<'a, P> {
    starts: Vec<ScanStart>,
    target: Option<ScanTarget<'a, P>>,
}

impl<'a, P> RecordingScanner<'a, P> {
    /// A scanner that has not been started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starts: Vec::new(),
            target: None,
        }
    }

    /// Every start seen so far, oldest first.
    #[must_use]
    pub fn starts(&self) -> &[ScanStart] {
        &self.starts
    }

    /// Number of times scanning was started.
    #[must_use]
    pub fn start_count(&self) -> usize {
        self.starts.len()
    }

    /// Sets `bits` in the current pressed mask, as one scan pass would when
    /// those columns' buttons are held. Returns `false` if never started.
    pub fn press(&self, bits: u8) -> bool {
        match &self.target {
            Some(target) => {
                target.pressed.fetch_or(bits, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }

    /// The display buffer as the scanner currently sees it.
    #[must_use]
    pub fn frame(&self) -> Option<Vec<u8>> {
        self.target.as_ref().map(|target| snapshot(target.buffer))
    }

    /// The pins of the current session: rows, cols, button.
    #[must_use]
    pub fn pins(&self) -> Option<(&[P], &[P], &P)> {
        self.target
            .as_ref()
            .map(|target| (&*target.rows, &*target.cols, &*target.buttons))
    }
}

impl<P> Default for RecordingScanner<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P: 'a> Scanner<'a, P> for RecordingScanner<'a, P> {
    fn start(&mut self, target: ScanTarget<'a, P>) {
        self.starts.push(ScanStart {
            buffer_addr: target.buffer.as_ptr() as usize,
            pressed_addr: core::ptr::from_ref(target.pressed) as usize,
            buffer: snapshot(target.buffer),
            rows: target.rows.len(),
            cols: target.cols.len(),
        });
        self.target = Some(target);
    }
}

fn snapshot(buffer: &[AtomicU8]) -> Vec<u8> {
    buffer
        .iter()
        .map(|cell| cell.load(Ordering::SeqCst))
        .collect()
}

/// A zeroed display buffer for host tests.
#[must_use]
pub fn buffer(len: usize) -> Vec<AtomicU8> {
    (0..len).map(|_| AtomicU8::new(0)).collect()
}
