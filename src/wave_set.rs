//! A fixed-capacity set of gradients sharing one LED buffer.

use crate::colors::ColorSample;
use crate::gradient::GradientEngine;
use crate::types::{GradientError, LedState};
use heapless::Vec;

/// Holds several gradients and animates one of them at a time.
///
/// Gradients are added empty and filled through
/// [`append_control_point`](Self::append_control_point), which always targets
/// the most recently added gradient. A gradient becomes the active one as
/// soon as its last control point arrives, and any complete gradient can be
/// brought back with [`start_gradient`](Self::start_gradient).
///
/// The LED buffer is owned by the caller and passed to every operation.
///
/// # Type Parameters
/// * `P` - Maximum number of control points per gradient
/// * `W` - Maximum number of gradients
#[derive(Debug, Clone)]
pub struct WaveSet<const P: usize, const W: usize> {
    gradients: Vec<GradientEngine<P>, W>,
    active: Option<usize>,
}

impl<const P: usize, const W: usize> WaveSet<P, W> {
    /// Creates an empty wave set.
    pub fn new() -> Self {
        Self {
            gradients: Vec::new(),
            active: None,
        }
    }

    /// Adds an empty gradient and returns its index.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The set already holds `W` gradients
    /// * Any error from [`GradientEngine::new`]
    pub fn add_gradient(
        &mut self,
        num_points: usize,
        wave_width: usize,
    ) -> Result<usize, GradientError> {
        if self.gradients.is_full() {
            return Err(GradientError::CapacityExceeded);
        }

        let gradient = GradientEngine::new(num_points, wave_width)?;
        self.gradients
            .push(gradient)
            .map_err(|_| GradientError::CapacityExceeded)?;

        Ok(self.gradients.len() - 1)
    }

    /// Appends a control point to the most recently added gradient.
    ///
    /// When the point completes that gradient it is activated against `leds`
    /// and becomes the active gradient.
    ///
    /// # Errors
    /// * `NotReady` - No gradient has been added yet
    /// * Any error from [`GradientEngine::append_control_point`]
    pub fn append_control_point(
        &mut self,
        color: ColorSample,
        duration: u8,
        leds: &mut [LedState],
    ) -> Result<(), GradientError> {
        let index = self
            .gradients
            .len()
            .checked_sub(1)
            .ok_or(GradientError::NotReady)?;

        let gradient = &mut self.gradients[index];
        gradient.append_control_point(color, duration, leds)?;

        if gradient.is_active() {
            self.active = Some(index);
        }

        Ok(())
    }

    /// Makes gradient `index` the active one and re-places the LEDs on it.
    ///
    /// On error the previously active gradient stays active.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - No gradient with this index
    /// * Any error from [`GradientEngine::activate`]
    pub fn start_gradient(
        &mut self,
        index: usize,
        leds: &mut [LedState],
    ) -> Result<(), GradientError> {
        let len = self.gradients.len();
        let gradient = self
            .gradients
            .get_mut(index)
            .ok_or(GradientError::IndexOutOfRange { index, len })?;

        gradient.activate(leds)?;
        self.active = Some(index);
        debug!("wave set switched to gradient {}", index);
        Ok(())
    }

    /// Re-places the LEDs on the active gradient.
    ///
    /// # Errors
    /// * `NotReady` - No gradient is active
    pub fn init(&mut self, leds: &mut [LedState]) -> Result<(), GradientError> {
        let index = self.active.ok_or(GradientError::NotReady)?;
        self.gradients[index].activate(leds)
    }

    /// Advances the active gradient by one step.
    ///
    /// # Errors
    /// * `NotReady` - No gradient is active
    /// * Any error from [`GradientEngine::step`]
    pub fn step(&self, leds: &mut [LedState]) -> Result<(), GradientError> {
        self.active_gradient()
            .ok_or(GradientError::NotReady)?
            .step(leds)
    }

    /// Returns the active gradient, if any.
    pub fn active_gradient(&self) -> Option<&GradientEngine<P>> {
        self.active.map(|index| &self.gradients[index])
    }

    /// Index of the active gradient.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the gradient at `index`.
    pub fn gradient(&self, index: usize) -> Option<&GradientEngine<P>> {
        self.gradients.get(index)
    }

    /// Number of gradients in the set.
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Returns true if the set holds no gradients.
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }
}

impl<const P: usize, const W: usize> Default for WaveSet<P, W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED, WHITE};

    fn two_gradients(leds: &mut [LedState]) -> WaveSet<4, 2> {
        let mut set = WaveSet::<4, 2>::new();

        set.add_gradient(2, 4).unwrap();
        set.append_control_point(RED, 4, leds).unwrap();
        set.append_control_point(BLUE, 4, leds).unwrap();

        set.add_gradient(2, 2).unwrap();
        set.append_control_point(GREEN, 2, leds).unwrap();
        set.append_control_point(WHITE, 2, leds).unwrap();

        set
    }

    #[test]
    fn can_create_empty_set() {
        let set = WaveSet::<4, 2>::new();
        assert!(set.is_empty());
        assert_eq!(set.active_index(), None);
    }

    #[test]
    fn rejects_gradient_when_full() {
        let mut set = WaveSet::<4, 1>::new();
        assert_eq!(set.add_gradient(2, 4), Ok(0));
        assert_eq!(set.add_gradient(2, 4), Err(GradientError::CapacityExceeded));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn append_without_gradient_is_not_ready() {
        let mut leds = [LedState::default(); 4];
        let mut set = WaveSet::<4, 2>::new();
        assert_eq!(
            set.append_control_point(RED, 4, &mut leds),
            Err(GradientError::NotReady)
        );
    }

    #[test]
    fn completed_gradient_becomes_active() {
        let mut leds = [LedState::default(); 4];
        let set = two_gradients(&mut leds);

        assert_eq!(set.active_index(), Some(1));
        assert_eq!(leds[0].color, GREEN);
        assert_eq!(leds[2].color, GREEN);
    }

    #[test]
    fn start_gradient_switches_and_replaces_leds() {
        let mut leds = [LedState::default(); 4];
        let mut set = two_gradients(&mut leds);

        set.start_gradient(0, &mut leds).unwrap();
        assert_eq!(set.active_index(), Some(0));
        assert_eq!(leds[0].color, RED);
        assert_eq!(leds[2].color, BLUE);
    }

    #[test]
    fn start_gradient_out_of_range_keeps_active() {
        let mut leds = [LedState::default(); 4];
        let mut set = two_gradients(&mut leds);

        assert_eq!(
            set.start_gradient(2, &mut leds),
            Err(GradientError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(set.active_index(), Some(1));
    }

    #[test]
    fn start_incomplete_gradient_is_not_ready() {
        let mut leds = [LedState::default(); 4];
        let mut set = WaveSet::<4, 2>::new();
        set.add_gradient(3, 4).unwrap();
        set.append_control_point(RED, 4, &mut leds).unwrap();

        assert_eq!(set.start_gradient(0, &mut leds), Err(GradientError::NotReady));
        assert_eq!(set.active_index(), None);
    }

    #[test]
    fn step_delegates_to_active_gradient() {
        let mut leds = [LedState::default(); 4];
        let mut set = two_gradients(&mut leds);
        set.start_gradient(0, &mut leds).unwrap();

        set.step(&mut leds).unwrap();
        assert_eq!(leds[0].color, ColorSample::new(191, 0, 64));
    }

    #[test]
    fn step_without_active_gradient_is_not_ready() {
        let mut leds = [LedState::default(); 4];
        let set = WaveSet::<4, 2>::new();
        assert_eq!(set.step(&mut leds), Err(GradientError::NotReady));
    }
}
