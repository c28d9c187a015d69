//! GPIO reset line abstraction
//!
//! Panel controllers usually expose a RESX pin. Boards that do not wire it
//! fall back to the controller's software reset command, so the driver holds
//! the pin as an `Option` and never assumes one exists.

use core::convert::Infallible;

/// Hardware reset line of a panel controller
///
/// Implementations own exactly one physical pin. The driver configures it
/// once when it is created and releases it once when it is deleted.
pub trait ResetPin {
    /// Error type for pin operations
    type Error;

    /// Configure the pin as a push-pull digital output
    fn configure_output(&mut self) -> Result<(), Self::Error>;

    /// Drive the pin to a logic level (`true` = high)
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Return the pin to its default (unconfigured) state
    fn release(&mut self);
}

impl<T: ResetPin + ?Sized> ResetPin for &mut T {
    type Error = T::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        T::configure_output(self)
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        T::set_level(self, high)
    }

    fn release(&mut self) {
        T::release(self)
    }
}

/// Placeholder for boards without a reset line
///
/// Used as the pin type of drivers created without a reset pin, so that
/// `None::<NoResetPin>` names a concrete type. It is never actually driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoResetPin;

impl ResetPin for NoResetPin {
    type Error = Infallible;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, _high: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn release(&mut self) {}
}
