//! 8-bit RGB color samples.
//!
//! [`ColorSample`] is the color type stored per LED. It converts losslessly
//! to and from `palette::Srgb<u8>` and into the `Srgb<f32>` form used by
//! palette-based color code.

use palette::Srgb;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorSample {
    /// Creates a color from its channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from floating-point channels.
    ///
    /// Each channel is clamped to `[0, 255]` before rounding to the nearest
    /// integer, so the result is always in range.
    #[inline]
    pub fn from_f32_clamped(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red: channel_from_f32(red),
            green: channel_from_f32(green),
            blue: channel_from_f32(blue),
        }
    }
}

#[inline]
fn channel_from_f32(value: f32) -> u8 {
    // NaN survives the clamp and casts to 0.
    libm::roundf(value.clamp(0.0, 255.0)) as u8
}

impl From<Srgb<u8>> for ColorSample {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<ColorSample> for Srgb<u8> {
    fn from(color: ColorSample) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

impl From<ColorSample> for Srgb {
    fn from(color: ColorSample) -> Self {
        Srgb::<u8>::from(color).into_format()
    }
}

impl From<(u8, u8, u8)> for ColorSample {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

pub const BLACK: ColorSample = ColorSample::new(0, 0, 0);
pub const WHITE: ColorSample = ColorSample::new(255, 255, 255);
pub const RED: ColorSample = ColorSample::new(255, 0, 0);
pub const GREEN: ColorSample = ColorSample::new(0, 255, 0);
pub const BLUE: ColorSample = ColorSample::new(0, 0, 255);
