//! GPIO reset line over an `embedded-hal` output pin

use embedded_hal::digital::{OutputPin, PinState};
use lcd_panel_hal::ResetPin;

/// Reset line backed by an `embedded-hal` output pin
///
/// A typed `embedded-hal` output is already configured by the chip HAL
/// that produced it, and goes back to that HAL when dropped, so
/// `configure_output` and `release` have nothing to do.
pub struct GpioResetPin<P> {
    pin: P,
}

impl<P: OutputPin> GpioResetPin<P> {
    /// Wrap an output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Unwrap the output pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetPin for GpioResetPin<P> {
    type Error = P::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        self.pin.set_state(PinState::from(high))
    }

    fn release(&mut self) {}
}
