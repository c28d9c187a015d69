//! Panel device configuration
//!
//! Describes how a particular glass is wired to its controller. The values
//! are board constants; they are checked once when a driver is created.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

use crate::traits::PanelError;

/// Order of the color elements on the panel's color filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RgbOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red
    Bgr,
}

/// Raw element order value that names no known [`RgbOrder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownRgbOrder(pub u8);

impl fmt::Display for UnknownRgbOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rgb element order {}", self.0)
    }
}

impl<IO, PIN> From<UnknownRgbOrder> for PanelError<IO, PIN> {
    fn from(_: UnknownRgbOrder) -> Self {
        PanelError::NotSupported
    }
}

impl TryFrom<u8> for RgbOrder {
    type Error = UnknownRgbOrder;

    /// Decode the raw element order used by numeric configuration sources
    /// (0 = RGB, 1 = BGR).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Bgr),
            other => Err(UnknownRgbOrder(other)),
        }
    }
}

/// Panel device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelDevConfig {
    /// Color element order of the panel
    pub rgb_order: RgbOrder,
    /// Color depth in bits per pixel as seen by the controller (e.g. 16, 18)
    pub bits_per_pixel: u8,
    /// Reset line is active-high (most panels reset on low)
    pub reset_active_high: bool,
}

impl PanelDevConfig {
    /// Create a config for the given color order and depth, active-low reset
    pub const fn new(rgb_order: RgbOrder, bits_per_pixel: u8) -> Self {
        Self {
            rgb_order,
            bits_per_pixel,
            reset_active_high: false,
        }
    }

    /// RGB565 panel with RGB element order
    pub const fn rgb565() -> Self {
        Self::new(RgbOrder::Rgb, 16)
    }

    /// RGB666 panel with RGB element order
    pub const fn rgb666() -> Self {
        Self::new(RgbOrder::Rgb, 18)
    }

    /// Same config with a different element order
    pub const fn with_rgb_order(mut self, rgb_order: RgbOrder) -> Self {
        self.rgb_order = rgb_order;
        self
    }

    /// Same config with the reset polarity changed
    pub const fn with_reset_active_high(mut self, active_high: bool) -> Self {
        self.reset_active_high = active_high;
        self
    }
}

impl Default for PanelDevConfig {
    fn default() -> Self {
        Self::rgb565()
    }
}
