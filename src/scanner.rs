//! The seam between the driver handle and whatever multiplexes the matrix.
//!
//! A [`Scanner`] is typically timer or interrupt driven: once started it
//! lights rows and columns from the display buffer and samples the shared
//! button line, setting one bit of the pressed mask per column.

use portable_atomic::AtomicU8;

/// Everything a scanner needs to (re)start multiplexing.
///
/// The borrows last for `'a`, so a scanner keeps them after
/// [`Scanner::start`] returns and keeps using them from its own context.
/// The buffer and pressed mask are shared with the
/// [`PewPew`](crate::pew_pew::PewPew) handle; the pins are handed over.
#[derive(Debug)]
pub struct ScanTarget<'a, P> {
    /// Display buffer, `rows.len() * cols.len()` cells.
    pub buffer: &'a [AtomicU8],
    /// Row pins, in order.
    pub rows: &'a mut [P],
    /// Column pins, in order.
    pub cols: &'a mut [P],
    /// Shared button line.
    pub buttons: &'a mut P,
    /// Pressed mask, one bit per column. Cleared before every start.
    pub pressed: &'a AtomicU8,
}

/// Starts hardware scanning against a freshly validated configuration.
///
/// `start` is called once per successful configuration. It is not preceded by
/// any stop call, so implementations must tolerate being re-pointed at a new
/// buffer and pin set while a previous session may still be running.
pub trait Scanner<'a, P: 'a> {
    /// Begins (or restarts) scanning `target`.
    fn start(&mut self, target: ScanTarget<'a, P>);
}

impl<'a, P: 'a, S: Scanner<'a, P> + ?Sized> Scanner<'a, P> for &mut S {
    #[inline]
    fn start(&mut self, target: ScanTarget<'a, P>) {
        (**self).start(target);
    }
}
