//! Pattern controller owning the LED buffer.
//!
//! Provides [`PatternController`], which stores a fixed number of patterns,
//! runs one of them against its LED buffer, and hands the buffer to an
//! [`LedOutput`] once per frame.

use crate::colors::ColorSample;
use crate::command::PatternAction;
use crate::pattern::Pattern;
use crate::types::{GradientError, LedColors, LedState};
use heapless::Vec;

/// Trait for abstracting LED strip hardware.
///
/// Implement this for your strip driver (SPI, RMT, PIO, bit-banged GPIO, ...)
/// so the controller can push frames to it. Handle hardware errors
/// internally; this method cannot fail.
pub trait LedOutput {
    /// Writes one frame. `leds[i]` is the state of the i-th LED on the strip.
    fn write(&mut self, leds: &[LedState]);
}

/// Runs one of several patterns on a strip of `LEDS` LEDs.
///
/// Call [`step`](Self::step) once per frame, then [`show`](Self::show) to
/// push the result to the hardware. Switching patterns re-initializes the
/// buffer for the new pattern; a rejected switch keeps the current one
/// running.
///
/// # Type Parameters
/// * `LEDS` - Number of LEDs on the strip
/// * `MAX_PATTERNS` - Maximum number of patterns
/// * `P` - Maximum number of control points per gradient
/// * `W` - Maximum number of gradients per wave set
pub struct PatternController<
    const LEDS: usize,
    const MAX_PATTERNS: usize,
    const P: usize,
    const W: usize,
> {
    leds: [LedState; LEDS],
    patterns: Vec<Pattern<P, W>, MAX_PATTERNS>,
    current: usize,
}

impl<const LEDS: usize, const MAX_PATTERNS: usize, const P: usize, const W: usize>
    PatternController<LEDS, MAX_PATTERNS, P, W>
{
    /// Creates a controller with every LED off and no patterns.
    pub fn new() -> Self {
        Self {
            leds: [LedState::default(); LEDS],
            patterns: Vec::new(),
            current: 0,
        }
    }

    /// Adds a pattern and returns its index.
    ///
    /// The pattern is not started; use [`start_pattern`](Self::start_pattern).
    ///
    /// # Errors
    /// * `CapacityExceeded` - The controller already holds `MAX_PATTERNS` patterns
    pub fn add_pattern(
        &mut self,
        pattern: impl Into<Pattern<P, W>>,
    ) -> Result<usize, GradientError> {
        self.patterns
            .push(pattern.into())
            .map_err(|_| GradientError::CapacityExceeded)?;
        Ok(self.patterns.len() - 1)
    }

    /// Appends a control point to a gradient-based pattern, using the
    /// controller's buffer for the activation that follows the last point.
    ///
    /// When the target is not the active pattern, the buffer is restored
    /// afterwards so the active pattern carries on where it was.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - No pattern with this index
    /// * Any error from [`Pattern::append_control_point`]
    pub fn append_control_point(
        &mut self,
        pattern_index: usize,
        color: ColorSample,
        duration: u8,
    ) -> Result<(), GradientError> {
        let len = self.patterns.len();
        let pattern = self
            .patterns
            .get_mut(pattern_index)
            .ok_or(GradientError::IndexOutOfRange {
                index: pattern_index,
                len,
            })?;

        if pattern_index == self.current {
            return pattern.append_control_point(color, duration, &mut self.leds);
        }

        // Completing a gradient places its LEDs; the running pattern keeps
        // its frame and phase.
        let frame = self.leds;
        let result = pattern.append_control_point(color, duration, &mut self.leds);
        self.leds = frame;
        result
    }

    /// Switches to the pattern at `index` and initializes the buffer for it.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - No pattern with this index
    /// * Any error from [`Pattern::init`]
    pub fn start_pattern(&mut self, index: usize) -> Result<(), GradientError> {
        let len = self.patterns.len();
        let Some(pattern) = self.patterns.get_mut(index) else {
            warn!("ignoring switch to pattern {} of {}", index, len);
            return Err(GradientError::IndexOutOfRange { index, len });
        };

        // Patterns validate before touching the buffer, so a failed init
        // leaves the running pattern's frame intact.
        if let Err(err) = pattern.init(&mut self.leds) {
            warn!("pattern {} failed to start: {}", index, err);
            return Err(err);
        }

        self.current = index;
        debug!("switched to pattern {}", index);
        Ok(())
    }

    /// Switches to the next pattern, wrapping after the last one.
    ///
    /// # Errors
    /// * `NotReady` - No patterns have been added
    /// * Any error from [`start_pattern`](Self::start_pattern)
    pub fn cycle_pattern(&mut self) -> Result<(), GradientError> {
        if self.patterns.is_empty() {
            return Err(GradientError::NotReady);
        }
        self.start_pattern((self.current + 1) % self.patterns.len())
    }

    /// Advances the active pattern by one frame.
    ///
    /// # Errors
    /// * `NotReady` - No patterns have been added, or the active pattern
    ///   has not been initialized
    pub fn step(&mut self) -> Result<(), GradientError> {
        let pattern = self
            .patterns
            .get_mut(self.current)
            .ok_or(GradientError::NotReady)?;
        pattern.step(&mut self.leds)
    }

    /// Handles an action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: PatternAction) -> Result<(), GradientError> {
        match action {
            PatternAction::Start(index) => self.start_pattern(index),
            PatternAction::Cycle => self.cycle_pattern(),
            PatternAction::Step => self.step(),
        }
    }

    /// Writes the current frame to `output`.
    pub fn show<O: LedOutput>(&self, output: &mut O) {
        output.write(&self.leds);
    }

    /// The LED buffer.
    pub fn leds(&self) -> &[LedState] {
        &self.leds
    }

    /// Returns the color of the LED at `index`.
    pub fn color(&self, index: usize) -> Result<ColorSample, GradientError> {
        self.leds.color(index)
    }

    /// Returns the red channel of the LED at `index`.
    pub fn red(&self, index: usize) -> Result<u8, GradientError> {
        self.leds.red(index)
    }

    /// Returns the green channel of the LED at `index`.
    pub fn green(&self, index: usize) -> Result<u8, GradientError> {
        self.leds.green(index)
    }

    /// Returns the blue channel of the LED at `index`.
    pub fn blue(&self, index: usize) -> Result<u8, GradientError> {
        self.leds.blue(index)
    }

    /// Index of the active pattern.
    pub fn current_pattern(&self) -> usize {
        self.current
    }

    /// Returns the pattern at `index`.
    pub fn pattern(&self, index: usize) -> Option<&Pattern<P, W>> {
        self.patterns.get(index)
    }

    /// Number of patterns held.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no patterns have been added.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<const LEDS: usize, const MAX_PATTERNS: usize, const P: usize, const W: usize> Default
    for PatternController<LEDS, MAX_PATTERNS, P, W>
{
    fn default() -> Self {
        Self::new()
    }
}
