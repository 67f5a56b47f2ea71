//! Shared test infrastructure for led-wave-gradient integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_wave_gradient::{ColorSample, GradientEngine, LedOutput, LedState};

// ============================================================================
// Mock Output
// ============================================================================

/// Mock strip driver that keeps the last frame it was given
pub struct MockOutput {
    last_frame: heapless::Vec<ColorSample, 64>,
    frame_count: usize,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            last_frame: heapless::Vec::new(),
            frame_count: 0,
        }
    }

    pub fn last_frame(&self) -> &[ColorSample] {
        &self.last_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

impl LedOutput for MockOutput {
    fn write(&mut self, leds: &[LedState]) {
        self.last_frame.clear();
        for led in leds {
            let _ = self.last_frame.push(led.color);
        }
        self.frame_count += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use led_wave_gradient::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds and activates a gradient from `(color, duration)` pairs
pub fn build_gradient<const P: usize>(
    points: &[(ColorSample, u8)],
    wave_width: usize,
    leds: &mut [LedState],
) -> GradientEngine<P> {
    let mut gradient = GradientEngine::<P>::new(points.len(), wave_width).unwrap();
    for &(color, duration) in points {
        gradient.append_control_point(color, duration, leds).unwrap();
    }
    gradient
}

/// Steps a gradient `count` times
pub fn step_n<const P: usize>(gradient: &GradientEngine<P>, leds: &mut [LedState], count: u32) {
    for _ in 0..count {
        gradient.step(leds).unwrap();
    }
}

/// Compare two colors channel by channel with a tolerance
pub fn colors_within(a: ColorSample, b: ColorSample, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}

/// Linear interpolation between two colors, unrounded
pub fn lerp(a: ColorSample, b: ColorSample, t: f32) -> (f32, f32, f32) {
    let mix = |x: u8, y: u8| f32::from(x) + (f32::from(y) - f32::from(x)) * t;
    (mix(a.red, b.red), mix(a.green, b.green), mix(a.blue, b.blue))
}
