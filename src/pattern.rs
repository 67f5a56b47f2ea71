//! Pattern kinds the controller can run.
//!
//! All kinds live in one enum so the controller stores them without heap
//! allocation and dispatches with a single `match`.

use crate::colors::ColorSample;
use crate::gradient::GradientEngine;
use crate::types::{GradientError, LedState};
use crate::wave_set::WaveSet;

/// Fills every LED with one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticColor {
    color: ColorSample,
}

impl StaticColor {
    /// Creates a static color pattern.
    pub const fn new(color: ColorSample) -> Self {
        Self { color }
    }

    /// The color this pattern displays.
    pub fn color(&self) -> ColorSample {
        self.color
    }

    /// Fills the buffer.
    pub fn init(&self, leds: &mut [LedState]) {
        leds.fill(LedState::new(self.color));
    }
}

/// A pattern held by the controller.
///
/// # Type Parameters
/// * `P` - Maximum number of control points per gradient
/// * `W` - Maximum number of gradients in a wave set
#[derive(Debug, Clone)]
pub enum Pattern<const P: usize, const W: usize> {
    /// One color on every LED
    Static(StaticColor),
    /// A single traveling gradient
    Gradient(GradientEngine<P>),
    /// Several gradients, one active at a time
    WaveSet(WaveSet<P, W>),
}

impl<const P: usize, const W: usize> Pattern<P, W> {
    /// Sets up the initial LED state for this pattern.
    pub fn init(&mut self, leds: &mut [LedState]) -> Result<(), GradientError> {
        match self {
            Self::Static(pattern) => {
                pattern.init(leds);
                Ok(())
            }
            Self::Gradient(gradient) => gradient.activate(leds),
            Self::WaveSet(set) => set.init(leds),
        }
    }

    /// Advances the pattern by one frame.
    pub fn step(&mut self, leds: &mut [LedState]) -> Result<(), GradientError> {
        match self {
            Self::Static(_) => Ok(()),
            Self::Gradient(gradient) => gradient.step(leds),
            Self::WaveSet(set) => set.step(leds),
        }
    }

    /// Appends a control point to a gradient-based pattern.
    ///
    /// # Errors
    /// * `CapacityExceeded` - Static patterns take no control points
    /// * Any error from the underlying gradient or wave set
    pub fn append_control_point(
        &mut self,
        color: ColorSample,
        duration: u8,
        leds: &mut [LedState],
    ) -> Result<(), GradientError> {
        match self {
            Self::Static(_) => Err(GradientError::CapacityExceeded),
            Self::Gradient(gradient) => gradient.append_control_point(color, duration, leds),
            Self::WaveSet(set) => set.append_control_point(color, duration, leds),
        }
    }
}

impl<const P: usize, const W: usize> From<StaticColor> for Pattern<P, W> {
    fn from(pattern: StaticColor) -> Self {
        Self::Static(pattern)
    }
}

impl<const P: usize, const W: usize> From<GradientEngine<P>> for Pattern<P, W> {
    fn from(gradient: GradientEngine<P>) -> Self {
        Self::Gradient(gradient)
    }
}

impl<const P: usize, const W: usize> From<WaveSet<P, W>> for Pattern<P, W> {
    fn from(set: WaveSet<P, W>) -> Self {
        Self::WaveSet(set)
    }
}
