//! ST7789 TFT controller driver
//!
//! The ST7789 drives up to 240x320 RGB panels over SPI or an 8/16-bit
//! parallel bus. This driver only issues controller commands; the bus is
//! whatever [`PanelIo`] it is given.
//!
//! # Command Sequence
//!
//! - `reset`: RESX pulse (10 ms low, 10 ms high) or `SWRESET` + 20 ms
//! - `init`: `SLPOUT` + 100 ms, `MADCTL`, `COLMOD`, then optional [`Gamma`]
//! - `draw_bitmap`: `CASET`, `RASET`, `RAMWR` + pixels
//!
//! # Pixel Formats
//!
//! | Depth | `COLMOD` | Bytes per pixel |
//! |-------|----------|-----------------|
//! | 16    | 0x55     | 2 (RGB565)      |
//! | 18    | 0x66     | 3 (RGB666, each channel in the 6 high bits of a byte) |

pub mod gamma;

pub use gamma::{AnalogGamma, DigitalGamma, Gamma, GammaCurve};

use embedded_hal::delay::DelayNs;
use lcd_panel_core::commands::{self, address_range, madctl};
use lcd_panel_core::{Panel, PanelDevConfig, PanelError, RgbOrder};
use lcd_panel_hal::{NoResetPin, PanelIo, ResetPin};

/// Hold time for each half of the hardware reset pulse
const RESET_PULSE_MS: u32 = 10;
/// Wait after `SWRESET` (datasheet minimum is 5 ms)
const SWRESET_WAIT_MS: u32 = 20;
/// Wait after `SLPOUT` for the supply and oscillator to settle
const SLPOUT_WAIT_MS: u32 = 100;

/// `COLMOD` value for 16-bit RGB565
const COLMOD_RGB565: u8 = 0x55;
/// `COLMOD` value for 18-bit RGB666
const COLMOD_RGB666: u8 = 0x66;

/// Error type of [`St7789`] for a given bus and reset pin
pub type St7789Error<IO, RST> =
    PanelError<<IO as PanelIo>::Error, <RST as ResetPin>::Error>;

/// Map a controller color depth to `(COLMOD, framebuffer bits per pixel)`
const fn pixel_format(bits_per_pixel: u8) -> Option<(u8, u8)> {
    match bits_per_pixel {
        16 => Some((COLMOD_RGB565, 16)),
        18 => Some((COLMOD_RGB666, 24)),
        _ => None,
    }
}

/// Offset a half-open `[start, end)` range by `gap`
///
/// Returns the inclusive `(start, end)` pair the controller addresses, or
/// `None` if it does not fit in 16 bits.
fn window(start: u16, end: u16, gap: u16) -> Option<(u16, u16)> {
    Some((start.checked_add(gap)?, (end - 1).checked_add(gap)?))
}

/// ST7789 panel driver
///
/// Owns the bus handle, the optional reset pin and a delay source. The
/// reset pin is released when the driver is dropped or deleted.
pub struct St7789<IO, RST: ResetPin, D> {
    io: IO,
    reset: Option<RST>,
    /// Level that holds the controller in reset
    reset_active_high: bool,
    delay: D,
    x_gap: u16,
    y_gap: u16,
    /// Bits each pixel occupies in `color_data`
    fb_bits_per_pixel: u8,
    /// Shadow of the `MADCTL` register
    madctl: u8,
    /// Shadow of the `COLMOD` register
    colmod: u8,
    gamma: Gamma,
}

impl<IO, RST, D> St7789<IO, RST, D>
where
    IO: PanelIo,
    RST: ResetPin,
    D: DelayNs,
{
    /// Create a new ST7789 driver
    ///
    /// # Arguments
    /// - `io`: Bus the controller is attached to
    /// - `config`: Panel color order, depth and reset polarity
    /// - `reset`: Reset pin, or `None` to use the software reset command
    /// - `delay`: Delay source for reset and wake-up timing
    ///
    /// No bus traffic happens here. Fails with
    /// [`PanelError::NotSupported`] for depths other than 16 and 18, and with
    /// [`PanelError::Pin`] if the reset pin cannot be configured. On failure
    /// the reset pin has already been released.
    pub fn new(
        io: IO,
        config: &PanelDevConfig,
        reset: Option<RST>,
        delay: D,
    ) -> Result<Self, St7789Error<IO, RST>> {
        let mut panel = Self {
            io,
            reset,
            reset_active_high: config.reset_active_high,
            delay,
            x_gap: 0,
            y_gap: 0,
            fb_bits_per_pixel: 0,
            madctl: 0,
            colmod: 0,
            gamma: Gamma::None,
        };

        // From here on an early return drops `panel`, which releases the pin.
        if let Some(pin) = panel.reset.as_mut() {
            pin.configure_output().map_err(PanelError::Pin)?;
        }

        match config.rgb_order {
            RgbOrder::Rgb => {}
            RgbOrder::Bgr => panel.madctl |= madctl::BGR,
        }

        let (colmod, fb_bits_per_pixel) =
            pixel_format(config.bits_per_pixel).ok_or(PanelError::NotSupported)?;
        panel.colmod = colmod;
        panel.fb_bits_per_pixel = fb_bits_per_pixel;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "new st7789 panel: colmod={=u8:#x} madctl={=u8:#x} hw_reset={=bool}",
            panel.colmod,
            panel.madctl,
            panel.reset.is_some()
        );

        Ok(panel)
    }

    /// Select the gamma calibration sent at the end of [`Panel::init`]
    pub fn with_gamma(mut self, gamma: Gamma) -> Self {
        self.gamma = gamma;
        self
    }

    /// Current `MADCTL` value (color order and orientation bits)
    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    /// `COLMOD` value sent during init
    pub fn colmod(&self) -> u8 {
        self.colmod
    }

    /// Bits each pixel occupies in the buffer passed to `draw_bitmap`
    pub fn bits_per_pixel(&self) -> u8 {
        self.fb_bits_per_pixel
    }

    /// Current `(x_gap, y_gap)` offset
    pub fn gap(&self) -> (u16, u16) {
        (self.x_gap, self.y_gap)
    }

    /// Send a parameter-only command
    fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), St7789Error<IO, RST>> {
        self.io.tx_param(cmd, params).map_err(PanelError::Io)
    }

    /// Set or clear one `MADCTL` bit, leaving the others untouched
    fn update_madctl(&mut self, bit: u8, set: bool) {
        if set {
            self.madctl |= bit;
        } else {
            self.madctl &= !bit;
        }
    }

    fn write_madctl(&mut self) -> Result<(), St7789Error<IO, RST>> {
        let value = self.madctl;
        self.command(commands::MADCTL, &[value])
    }
}

impl<IO, D> St7789<IO, NoResetPin, D>
where
    IO: PanelIo,
    D: DelayNs,
{
    /// Create a driver for a board without a reset line
    ///
    /// [`Panel::reset`] will use the software reset command.
    pub fn without_reset(
        io: IO,
        config: &PanelDevConfig,
        delay: D,
    ) -> Result<Self, St7789Error<IO, NoResetPin>> {
        Self::new(io, config, None, delay)
    }
}

impl<IO, RST, D> Panel for St7789<IO, RST, D>
where
    IO: PanelIo,
    RST: ResetPin,
    D: DelayNs,
{
    type Error = St7789Error<IO, RST>;

    fn reset(&mut self) -> Result<(), Self::Error> {
        let active = self.reset_active_high;

        #[cfg(feature = "defmt")]
        defmt::debug!("st7789 reset: hw={=bool}", self.reset.is_some());

        if let Some(pin) = self.reset.as_mut() {
            pin.set_level(active).map_err(PanelError::Pin)?;
            self.delay.delay_ms(RESET_PULSE_MS);
            pin.set_level(!active).map_err(PanelError::Pin)?;
            self.delay.delay_ms(RESET_PULSE_MS);
        } else {
            self.command(commands::SWRESET, &[])?;
            self.delay.delay_ms(SWRESET_WAIT_MS);
        }
        Ok(())
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        // The controller powers up asleep with the display off
        self.command(commands::SLPOUT, &[])?;
        self.delay.delay_ms(SLPOUT_WAIT_MS);
        self.write_madctl()?;
        let colmod = self.colmod;
        self.command(commands::COLMOD, &[colmod])?;

        // Best-effort: rejected gamma commands are logged and skipped
        let _rejected = self.gamma.apply(&mut self.io);

        #[cfg(feature = "defmt")]
        defmt::debug!("st7789 init done, gamma rejected={=usize}", _rejected);
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        color_data: &[u8],
    ) -> Result<(), Self::Error> {
        assert!(
            x_start < x_end && y_start < y_end,
            "start position must be smaller than end position"
        );

        let (col_start, col_end) =
            window(x_start, x_end, self.x_gap).ok_or(PanelError::InvalidArgument)?;
        let (row_start, row_end) =
            window(y_start, y_end, self.y_gap).ok_or(PanelError::InvalidArgument)?;

        let len = usize::from(x_end - x_start)
            .checked_mul(usize::from(y_end - y_start))
            .and_then(|pixels| pixels.checked_mul(usize::from(self.fb_bits_per_pixel)))
            .map(|bits| bits / 8)
            .ok_or(PanelError::InvalidArgument)?;
        let pixels = color_data.get(..len).ok_or(PanelError::InvalidArgument)?;

        // Define the frame memory window the MCU writes into
        self.command(commands::CASET, &address_range(col_start, col_end))?;
        self.command(commands::RASET, &address_range(row_start, row_end))?;
        self.io
            .tx_color(commands::RAMWR, pixels)
            .map_err(PanelError::Io)
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error> {
        let cmd = if invert {
            commands::INVON
        } else {
            commands::INVOFF
        };
        self.command(cmd, &[])
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error> {
        self.update_madctl(madctl::MX, mirror_x);
        self.update_madctl(madctl::MY, mirror_y);
        self.write_madctl()
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), Self::Error> {
        self.update_madctl(madctl::MV, swap);
        self.write_madctl()
    }

    fn set_gap(&mut self, x_gap: u16, y_gap: u16) {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
    }

    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error> {
        let cmd = if on {
            commands::DISPON
        } else {
            commands::DISPOFF
        };
        self.command(cmd, &[])
    }
}

impl<IO, RST: ResetPin, D> Drop for St7789<IO, RST, D> {
    fn drop(&mut self) {
        if let Some(pin) = self.reset.as_mut() {
            pin.release();
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("del st7789 panel");
    }
}
