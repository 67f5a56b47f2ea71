//! Wave-gradient engine.
//!
//! A [`GradientEngine`] holds one cyclic sequence of control points and the
//! per-segment deltas derived from them. Activating it spreads the gradient
//! over an LED buffer in repeating blocks of `wave_width` LEDs, giving every
//! LED a phase proportional to its position. Each [`step`](GradientEngine::step)
//! then moves every LED one step further along the gradient, producing a
//! traveling wave.

use crate::colors::ColorSample;
use crate::types::{ControlPoint, GradientError, LedState, SegmentDelta};
use heapless::Vec;

/// Largest number of control points a gradient may hold, bounded by the
/// `u8` point index stored per LED.
pub const MAX_CONTROL_POINTS: usize = u8::MAX as usize;

/// A cyclic color gradient animated across an LED buffer.
///
/// Control points are appended one at a time. Once the configured number of
/// points is present the gradient activates itself against the buffer
/// passed with the last point, and can be stepped from then on.
///
/// # Type Parameters
/// * `P` - Maximum number of control points this gradient can hold
#[derive(Debug, Clone)]
pub struct GradientEngine<const P: usize> {
    points: Vec<ControlPoint, P>,
    deltas: Vec<SegmentDelta, P>,
    num_points: usize,
    wave_width: usize,
    active_len: Option<usize>,
}

impl<const P: usize> GradientEngine<P> {
    /// Creates an empty gradient expecting `num_points` control points.
    ///
    /// # Arguments
    /// * `num_points` - Number of control points that complete the gradient
    /// * `wave_width` - Number of LEDs spanned by one traversal of the gradient.
    ///   Should divide the LED count for exact tiling.
    ///
    /// # Errors
    /// * `EmptyGradient` - `num_points` is zero
    /// * `CapacityExceeded` - `num_points` exceeds `P` or [`MAX_CONTROL_POINTS`]
    /// * `InvalidWaveWidth` - `wave_width` is zero
    pub fn new(num_points: usize, wave_width: usize) -> Result<Self, GradientError> {
        if num_points == 0 {
            return Err(GradientError::EmptyGradient);
        }
        if num_points > P || num_points > MAX_CONTROL_POINTS {
            return Err(GradientError::CapacityExceeded);
        }
        if wave_width == 0 {
            return Err(GradientError::InvalidWaveWidth);
        }

        Ok(Self {
            points: Vec::new(),
            deltas: Vec::new(),
            num_points,
            wave_width,
            active_len: None,
        })
    }

    /// Appends a control point.
    ///
    /// When this completes the gradient, it is activated against `leds`
    /// right away. If that activation fails the point is kept and
    /// [`activate`](Self::activate) can be retried with a suitable buffer.
    ///
    /// # Errors
    /// * `CapacityExceeded` - All control points have already been supplied
    /// * `InvalidDuration` - `duration` is zero
    /// * Any error from [`activate`](Self::activate) on the final point
    pub fn append_control_point(
        &mut self,
        color: ColorSample,
        duration: u8,
        leds: &mut [LedState],
    ) -> Result<(), GradientError> {
        if self.is_complete() {
            return Err(GradientError::CapacityExceeded);
        }

        let point = ControlPoint::new(color, duration)?;
        self.points
            .push(point)
            .map_err(|_| GradientError::CapacityExceeded)?;

        if self.is_complete() {
            self.activate(leds)?;
        }

        Ok(())
    }

    /// Computes the delta table and places every LED on the gradient.
    ///
    /// The buffer is split into `leds.len() / wave_width` blocks of
    /// `leds.len() / blocks` LEDs each. When the width does not divide the
    /// LED count evenly the blocks come out longer than `wave_width` and any
    /// trailing LEDs keep their previous color and ride along from the first
    /// control point. Running this twice on the
    /// same buffer gives identical results.
    ///
    /// # Errors
    /// * `NotReady` - Not all control points have been supplied
    /// * `InvalidWaveWidth` - `wave_width` is wider than a non-empty buffer
    pub fn activate(&mut self, leds: &mut [LedState]) -> Result<(), GradientError> {
        if !self.is_complete() {
            return Err(GradientError::NotReady);
        }

        self.compute_deltas();

        if !leds.is_empty() {
            let num_waves = leds.len() / self.wave_width;
            if num_waves == 0 {
                warn!(
                    "wave width {} exceeds strip of {} LEDs",
                    self.wave_width,
                    leds.len()
                );
                return Err(GradientError::InvalidWaveWidth);
            }

            let leds_per_wave = leds.len() / num_waves;
            let (covered, trailing) = leds.split_at_mut(num_waves * leds_per_wave);
            for block in covered.chunks_exact_mut(leds_per_wave) {
                for (offset, led) in block.iter_mut().enumerate() {
                    *led = self.initial_state(offset, leds_per_wave);
                }
            }
            // Uncovered LEDs keep their color but restart at the first point.
            for led in trailing {
                *led = LedState::new(led.color);
            }
        }

        self.active_len = Some(leds.len());
        debug!(
            "gradient activated: {} points, wave width {}, {} LEDs",
            self.points.len(),
            self.wave_width,
            leds.len()
        );
        Ok(())
    }

    /// Advances every LED by one step along the gradient.
    ///
    /// An LED that finishes its segment moves to the next control point and
    /// snaps exactly to that point's color, so rounding error never carries
    /// over from one segment to the next.
    ///
    /// # Errors
    /// * `NotReady` - The gradient has not been activated for a buffer of this length
    /// * `IndexOutOfRange` - An LED refers to a control point this gradient
    ///   does not have (the buffer was rewritten since activation). The
    ///   buffer is left unchanged.
    pub fn step(&self, leds: &mut [LedState]) -> Result<(), GradientError> {
        if self.active_len != Some(leds.len()) {
            return Err(GradientError::NotReady);
        }

        let count = self.points.len();
        if let Some(led) = leds.iter().find(|led| usize::from(led.point_index) >= count) {
            return Err(GradientError::IndexOutOfRange {
                index: usize::from(led.point_index),
                len: count,
            });
        }

        for led in leds.iter_mut() {
            let index = usize::from(led.point_index);
            let point = self.points[index];
            let delta = self.deltas[index];

            led.color = ColorSample::from_f32_clamped(
                f32::from(led.color.red) + delta.dr,
                f32::from(led.color.green) + delta.dg,
                f32::from(led.color.blue) + delta.db,
            );

            if led.step_count >= point.duration - 1 {
                let next = (index + 1) % count;
                led.point_index = next as u8;
                led.step_count = 0;
                led.color = self.points[next].color;
            } else {
                led.step_count += 1;
            }
        }

        Ok(())
    }

    /// State of the LED at `offset` within a block of `leds_per_wave` LEDs.
    fn initial_state(&self, offset: usize, leds_per_wave: usize) -> LedState {
        let count = self.points.len();
        let point_pos = (offset * count) as f32 / leds_per_wave as f32;
        let index = (libm::floorf(point_pos) as usize).min(count - 1);
        let sub_point = point_pos - index as f32;

        let point = self.points[index];
        let delta = self.deltas[index];
        let step = sub_point * f32::from(point.duration);

        LedState {
            color: ColorSample::from_f32_clamped(
                f32::from(point.color.red) + step * delta.dr,
                f32::from(point.color.green) + step * delta.dg,
                f32::from(point.color.blue) + step * delta.db,
            ),
            point_index: index as u8,
            step_count: step as u8,
        }
    }

    fn compute_deltas(&mut self) {
        let count = self.points.len();
        self.deltas = self
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let next = &self.points[(i + 1) % count];
                SegmentDelta::between(point.color, next.color, point.duration)
            })
            .collect();
    }

    /// Returns true once every control point has been supplied.
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.num_points
    }

    /// Returns true if the gradient has been activated and can be stepped.
    pub fn is_active(&self) -> bool {
        self.active_len.is_some()
    }

    /// Number of control points that complete this gradient.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of control points supplied so far.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// LEDs spanned by one traversal of the gradient.
    pub fn wave_width(&self) -> usize {
        self.wave_width
    }

    /// Returns the control point at `index`, if supplied.
    pub fn control_point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Returns the delta of segment `index`. Available after activation.
    pub fn segment_delta(&self, index: usize) -> Option<&SegmentDelta> {
        self.deltas.get(index)
    }

    /// Steps needed for an LED to traverse the whole gradient once.
    pub fn cycle_length(&self) -> u32 {
        self.points.iter().map(|p| u32::from(p.duration)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED};

    fn red_blue(leds: &mut [LedState]) -> GradientEngine<4> {
        let mut gradient = GradientEngine::<4>::new(2, leds.len()).unwrap();
        gradient.append_control_point(RED, 4, leds).unwrap();
        gradient.append_control_point(BLUE, 4, leds).unwrap();
        gradient
    }

    #[test]
    fn new_validates_parameters() {
        assert_eq!(
            GradientEngine::<4>::new(0, 4).unwrap_err(),
            GradientError::EmptyGradient
        );
        assert_eq!(
            GradientEngine::<4>::new(5, 4).unwrap_err(),
            GradientError::CapacityExceeded
        );
        assert_eq!(
            GradientEngine::<4>::new(2, 0).unwrap_err(),
            GradientError::InvalidWaveWidth
        );
    }

    #[test]
    fn activates_automatically_on_last_point() {
        let mut leds = [LedState::default(); 8];
        let mut gradient = GradientEngine::<4>::new(2, 8).unwrap();

        gradient.append_control_point(RED, 4, &mut leds).unwrap();
        assert!(!gradient.is_active());
        assert_eq!(gradient.step(&mut leds), Err(GradientError::NotReady));

        gradient.append_control_point(BLUE, 4, &mut leds).unwrap();
        assert!(gradient.is_active());
        assert_eq!(leds[0].color, RED);
    }

    #[test]
    fn rejects_zero_duration_without_storing_it() {
        let mut leds = [LedState::default(); 4];
        let mut gradient = GradientEngine::<4>::new(2, 4).unwrap();

        assert_eq!(
            gradient.append_control_point(RED, 0, &mut leds),
            Err(GradientError::InvalidDuration)
        );
        assert_eq!(gradient.point_count(), 0);
    }

    #[test]
    fn wrap_segment_connects_last_point_to_first() {
        let mut leds = [LedState::default(); 6];
        let mut gradient = GradientEngine::<4>::new(3, 6).unwrap();
        gradient.append_control_point(RED, 2, &mut leds).unwrap();
        gradient.append_control_point(GREEN, 2, &mut leds).unwrap();
        gradient.append_control_point(BLUE, 5, &mut leds).unwrap();

        let wrap = gradient.segment_delta(2).unwrap();
        assert_eq!(wrap.dr, 51.0);
        assert_eq!(wrap.dg, 0.0);
        assert_eq!(wrap.db, -51.0);
    }

    #[test]
    fn places_leds_proportionally_within_a_wave() {
        let mut leds = [LedState::default(); 4];
        let _gradient = red_blue(&mut leds);

        // Positions 0, 0.5, 1.0, 1.5 along a two-point gradient.
        assert_eq!(leds[0].color, RED);
        assert_eq!(leds[0].step_count, 0);
        assert_eq!(leds[1].color, ColorSample::new(128, 0, 128));
        assert_eq!(leds[1].point_index, 0);
        assert_eq!(leds[1].step_count, 2);
        assert_eq!(leds[2].color, BLUE);
        assert_eq!(leds[2].point_index, 1);
        assert_eq!(leds[3].color, ColorSample::new(128, 0, 128));
        assert_eq!(leds[3].point_index, 1);
    }

    #[test]
    fn step_snaps_to_next_point_at_segment_end() {
        let mut leds = [LedState::default(); 1];
        let gradient = red_blue(&mut leds);

        gradient.step(&mut leds).unwrap();
        assert_eq!(leds[0].color, ColorSample::new(191, 0, 64));
        assert_eq!(leds[0].step_count, 1);

        for _ in 0..3 {
            gradient.step(&mut leds).unwrap();
        }
        assert_eq!(leds[0].color, BLUE);
        assert_eq!(leds[0].point_index, 1);
        assert_eq!(leds[0].step_count, 0);
    }

    #[test]
    fn step_requires_buffer_of_activated_length() {
        let mut leds = [LedState::default(); 4];
        let gradient = red_blue(&mut leds);

        let mut other = [LedState::default(); 3];
        assert_eq!(gradient.step(&mut other), Err(GradientError::NotReady));
    }

    #[test]
    fn step_reports_foreign_point_index() {
        let mut leds = [LedState::default(); 2];
        let gradient = red_blue(&mut leds);
        leds[1].point_index = 7;

        assert_eq!(
            gradient.step(&mut leds),
            Err(GradientError::IndexOutOfRange { index: 7, len: 2 })
        );
    }

    #[test]
    fn cycle_length_sums_durations() {
        let mut leds = [LedState::default(); 2];
        let gradient = red_blue(&mut leds);
        assert_eq!(gradient.cycle_length(), 8);
    }
}
