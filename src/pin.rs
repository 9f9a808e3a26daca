//! Pin handles as seen by the matrix driver.
//!
//! The driver never owns a pin. It only needs to ask two things of each handle
//! it is given: what kind of pin it is, and whether it has been deinitialized.
//! [`PinHandle`] captures exactly that, and [`DigitalInOut`] adapts any
//! [`embedded-hal`](https://docs.rs/embedded-hal) pin that can both drive and
//! read a line.

use derive_more::Display;
use embedded_hal::digital::{self, ErrorType, InputPin, OutputPin, StatefulOutputPin};

// ============================================================================
// PinKind / PinRole
// ============================================================================

/// The capability a pin handle was configured with.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    /// Bidirectional digital pin. The only kind the matrix accepts.
    #[display("a digital in/out pin")]
    DigitalInOut,
    /// Digital input only.
    #[display("a digital input")]
    DigitalIn,
    /// Digital output only.
    #[display("a digital output")]
    DigitalOut,
    /// Analog input (ADC channel).
    #[display("an analog input")]
    AnalogIn,
    /// Analog output (DAC channel).
    #[display("an analog output")]
    AnalogOut,
    /// PWM output.
    #[display("a PWM output")]
    PwmOut,
}

/// Which constructor argument a pin was passed as.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// An entry of `rows`.
    #[display("row")]
    Row,
    /// An entry of `cols`.
    #[display("col")]
    Col,
    /// The shared `buttons` line.
    #[display("button")]
    Button,
}

// ============================================================================
// PinHandle
// ============================================================================

/// A caller-owned pin, inspected (never consumed) by the matrix driver.
pub trait PinHandle {
    /// Reports what kind of pin this handle is.
    fn kind(&self) -> PinKind;

    /// Returns `true` once the pin has been released and must not be used.
    fn is_deinited(&self) -> bool;
}

impl<T: PinHandle + ?Sized> PinHandle for &T {
    #[inline]
    fn kind(&self) -> PinKind {
        (**self).kind()
    }

    #[inline]
    fn is_deinited(&self) -> bool {
        (**self).is_deinited()
    }
}

impl<T: PinHandle + ?Sized> PinHandle for &mut T {
    #[inline]
    fn kind(&self) -> PinKind {
        (**self).kind()
    }

    #[inline]
    fn is_deinited(&self) -> bool {
        (**self).is_deinited()
    }
}

// ============================================================================
// DigitalInOut - embedded-hal adapter
// ============================================================================

/// A digital in/out pin handle wrapping an `embedded-hal` pin.
///
/// Calling [`deinit`](Self::deinit) gives the inner pin back and leaves the
/// handle in a released state: the matrix driver rejects it and every I/O call
/// fails with [`DigitalInOutError::Deinitialized`].
#[derive(Debug)]
pub struct DigitalInOut<T> {
    pin: Option<T>,
}

impl<T> DigitalInOut<T> {
    /// Wraps a pin.
    #[must_use]
    pub const fn new(pin: T) -> Self {
        Self { pin: Some(pin) }
    }

    /// Releases the inner pin. Returns `None` if it was already released.
    pub fn deinit(&mut self) -> Option<T> {
        self.pin.take()
    }
}

impl<T> PinHandle for DigitalInOut<T> {
    fn kind(&self) -> PinKind {
        PinKind::DigitalInOut
    }

    fn is_deinited(&self) -> bool {
        self.pin.is_none()
    }
}

/// Error from I/O on a [`DigitalInOut`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DigitalInOutError<E> {
    /// The handle was released with [`DigitalInOut::deinit`].
    Deinitialized,
    /// The inner pin reported an error.
    Pin(E),
}

impl<E: digital::Error> digital::Error for DigitalInOutError<E> {
    fn kind(&self) -> digital::ErrorKind {
        match self {
            Self::Deinitialized => digital::ErrorKind::Other,
            Self::Pin(err) => err.kind(),
        }
    }
}

impl<T: ErrorType> ErrorType for DigitalInOut<T> {
    type Error = DigitalInOutError<T::Error>;
}

impl<T: ErrorType> DigitalInOut<T> {
    fn pin_mut(&mut self) -> Result<&mut T, DigitalInOutError<T::Error>> {
        self.pin.as_mut().ok_or(DigitalInOutError::Deinitialized)
    }
}

impl<T: InputPin> InputPin for DigitalInOut<T> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin_mut()?.is_high().map_err(DigitalInOutError::Pin)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin_mut()?.is_low().map_err(DigitalInOutError::Pin)
    }
}

impl<T: OutputPin> OutputPin for DigitalInOut<T> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin_mut()?.set_low().map_err(DigitalInOutError::Pin)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin_mut()?.set_high().map_err(DigitalInOutError::Pin)
    }
}

impl<T: StatefulOutputPin> StatefulOutputPin for DigitalInOut<T> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.pin_mut()?.is_set_high().map_err(DigitalInOutError::Pin)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.pin_mut()?.is_set_low().map_err(DigitalInOutError::Pin)
    }
}
