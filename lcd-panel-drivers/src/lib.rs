//! LCD panel driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! lcd-panel-core and lcd-panel-hal:
//!
//! - Panel controllers ([`st7789::St7789`])
//! - Bus and GPIO adapters onto `embedded-hal` ([`interface`])

#![no_std]
#![deny(unsafe_code)]

pub mod interface;
pub mod st7789;

pub use interface::{GpioResetPin, SpiIoError, SpiPanelIo};
pub use st7789::{Gamma, St7789};
