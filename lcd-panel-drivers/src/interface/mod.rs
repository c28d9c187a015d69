//! `embedded-hal` adapters for the panel HAL traits

pub mod gpio;
pub mod spi;

pub use gpio::GpioResetPin;
pub use spi::{SpiIoError, SpiPanelIo};
