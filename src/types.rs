//! Core types shared by gradients, wave sets and the pattern controller.

use crate::colors::ColorSample;

/// A gradient control point: a color and the number of steps spent
/// transitioning from it to the next point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlPoint {
    /// Color at the start of the segment.
    pub color: ColorSample,

    /// Steps until the next control point is reached. Always at least 1.
    pub duration: u8,
}

impl ControlPoint {
    /// Creates a control point.
    ///
    /// # Errors
    /// * `InvalidDuration` - `duration` is zero
    pub fn new(color: ColorSample, duration: u8) -> Result<Self, GradientError> {
        if duration == 0 {
            return Err(GradientError::InvalidDuration);
        }
        Ok(Self { color, duration })
    }
}

/// Per-step channel change along one segment of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentDelta {
    pub dr: f32,
    pub dg: f32,
    pub db: f32,
}

impl SegmentDelta {
    /// Slope from `from` to `to` spread over `duration` steps.
    ///
    /// Channels are subtracted as signed integers, so a falling channel
    /// yields a negative delta.
    pub fn between(from: ColorSample, to: ColorSample, duration: u8) -> Self {
        let steps = f32::from(duration);
        let slope = |a: u8, b: u8| f32::from(i16::from(b) - i16::from(a)) / steps;

        Self {
            dr: slope(from.red, to.red),
            dg: slope(from.green, to.green),
            db: slope(from.blue, to.blue),
        }
    }
}

/// Animation state of a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    /// Color currently displayed.
    pub color: ColorSample,

    /// Control point whose segment the LED is traversing.
    pub point_index: u8,

    /// Steps already taken within the current segment.
    pub step_count: u8,
}

impl LedState {
    /// An LED resting at the start of the first segment.
    pub const fn new(color: ColorSample) -> Self {
        Self {
            color,
            point_index: 0,
            step_count: 0,
        }
    }
}

/// Errors returned by gradients, wave sets and the pattern controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientError {
    /// Capacity for control points, gradients or patterns is exhausted.
    CapacityExceeded,

    /// A control point with zero duration was supplied.
    InvalidDuration,

    /// An LED, gradient or pattern index is outside the valid range.
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of valid entries
        len: usize,
    },

    /// The gradient is incomplete or has not been activated for this buffer.
    NotReady,

    /// A gradient was requested with zero control points.
    EmptyGradient,

    /// The wave width is zero or wider than the LED strip.
    InvalidWaveWidth,
}

impl core::fmt::Display for GradientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GradientError::CapacityExceeded => {
                write!(f, "capacity exceeded")
            }
            GradientError::InvalidDuration => {
                write!(f, "control point duration must be at least one step")
            }
            GradientError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            GradientError::NotReady => {
                write!(f, "gradient is not ready (missing control points or not activated)")
            }
            GradientError::EmptyGradient => {
                write!(f, "gradient must have at least one control point")
            }
            GradientError::InvalidWaveWidth => {
                write!(f, "wave width must be non-zero and no wider than the LED strip")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GradientError {}

/// Bounds-checked color access on an LED buffer.
pub trait LedColors {
    /// Returns the color of the LED at `index`.
    fn color(&self, index: usize) -> Result<ColorSample, GradientError>;

    /// Returns the red channel of the LED at `index`.
    fn red(&self, index: usize) -> Result<u8, GradientError> {
        self.color(index).map(|c| c.red)
    }

    /// Returns the green channel of the LED at `index`.
    fn green(&self, index: usize) -> Result<u8, GradientError> {
        self.color(index).map(|c| c.green)
    }

    /// Returns the blue channel of the LED at `index`.
    fn blue(&self, index: usize) -> Result<u8, GradientError> {
        self.color(index).map(|c| c.blue)
    }
}

impl LedColors for [LedState] {
    fn color(&self, index: usize) -> Result<ColorSample, GradientError> {
        self.get(index)
            .map(|led| led.color)
            .ok_or(GradientError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};

    #[test]
    fn control_point_rejects_zero_duration() {
        assert_eq!(ControlPoint::new(RED, 0), Err(GradientError::InvalidDuration));
        assert!(ControlPoint::new(RED, 1).is_ok());
    }

    #[test]
    fn delta_is_signed_and_fractional() {
        let delta = SegmentDelta::between(RED, BLUE, 4);
        assert_eq!(delta.dr, -63.75);
        assert_eq!(delta.dg, 0.0);
        assert_eq!(delta.db, 63.75);
    }

    #[test]
    fn led_colors_checks_bounds() {
        let leds = [LedState::new(RED), LedState::new(BLUE)];
        assert_eq!(leds.red(0), Ok(255));
        assert_eq!(leds.blue(1), Ok(255));
        assert_eq!(
            leds.green(2),
            Err(GradientError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
