//! Panel trait for TFT/LCD controller drivers

use core::convert::Infallible;
use core::fmt;

/// Errors that can occur while driving a panel
///
/// `IO` is the error of the bus transport and `PIN` the error of the reset
/// line. Drivers never retry; every error reaches the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<IO, PIN = Infallible> {
    /// Argument outside what the controller can address
    InvalidArgument,
    /// Color order or pixel depth the controller cannot produce
    NotSupported,
    /// Bus transfer failed
    Io(IO),
    /// Reset pin could not be configured or driven
    Pin(PIN),
}

impl<IO: fmt::Debug, PIN: fmt::Debug> fmt::Display for PanelError<IO, PIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::NotSupported => write!(f, "unsupported panel configuration"),
            Self::Io(e) => write!(f, "panel io transfer failed: {e:?}"),
            Self::Pin(e) => write!(f, "reset pin error: {e:?}"),
        }
    }
}

/// Fixed operation set of a panel controller driver
///
/// This is what a generic panel-handle framework holds, either as a type
/// parameter or as `&mut dyn Panel<Error = E>`. Calls other than
/// [`reset`](Panel::reset) and [`set_gap`](Panel::set_gap) assume
/// [`init`](Panel::init) has run; this is not checked.
pub trait Panel {
    /// Error type for panel operations
    type Error;

    /// Reset the controller (hardware line if wired, software reset otherwise)
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Run the controller initialization sequence
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Write a block of pixels
    ///
    /// - `x_start`, `y_start`: top-left corner, inclusive
    /// - `x_end`, `y_end`: bottom-right corner, exclusive
    /// - `color_data`: pixels in the controller's native format, row-major
    ///
    /// # Panics
    /// If `x_start >= x_end` or `y_start >= y_end`.
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        color_data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Invert the color of every pixel (bit-wise, in the controller)
    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error>;

    /// Mirror the X and/or Y axis
    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error>;

    /// Swap the X and Y axes
    fn swap_xy(&mut self, swap: bool) -> Result<(), Self::Error>;

    /// Offset every drawn window by `(x_gap, y_gap)`
    ///
    /// Compensates for glass that is smaller than the controller's frame
    /// memory. Takes effect on the next draw; no bus traffic.
    fn set_gap(&mut self, x_gap: u16, y_gap: u16);

    /// Turn the display output on or off
    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Delete the panel, releasing the resources it holds
    fn delete(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

/// Display rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Native orientation
    #[default]
    Deg0,
    /// 90 degrees (landscape on portrait glass)
    Deg90,
    /// 180 degrees
    Deg180,
    /// 270 degrees
    Deg270,
}

impl Rotation {
    /// `(swap_xy, mirror_x, mirror_y)` that produce this rotation
    pub const fn transform(self) -> (bool, bool, bool) {
        match self {
            Rotation::Deg0 => (false, false, false),
            Rotation::Deg90 => (true, true, false),
            Rotation::Deg180 => (false, true, true),
            Rotation::Deg270 => (true, false, true),
        }
    }
}

/// Helpers built on the fixed operation set
pub trait PanelExt: Panel {
    /// Rotate the scan direction
    ///
    /// Overrides any mirror/swap state set before.
    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        let (swap, mirror_x, mirror_y) = rotation.transform();
        self.swap_xy(swap)?;
        self.mirror(mirror_x, mirror_y)
    }
}

// Blanket implementation for all Panel types
impl<T: Panel + ?Sized> PanelExt for T {}
