#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorSample`**: 8-bit RGB color stored per LED
//! - **`ControlPoint`**: A color plus the number of steps spent moving on to the next point
//! - **`GradientEngine`**: A cyclic gradient over control points, spread across the strip in
//!   repeating waves and advanced one step per frame
//! - **`WaveSet`**: Several gradients sharing one LED buffer, one of them active
//! - **`Pattern`**: Closed set of pattern kinds (`Static`, `Gradient`, `WaveSet`)
//! - **`PatternController`**: Owns the LED buffer and switches between patterns
//! - **`LedOutput`**: Trait to implement for your LED strip hardware
//! - **`PatternAction`**: Commands that can be sent to control the controller
//!
//! All storage is fixed-capacity and sized through const generics; nothing
//! allocates. Per-segment deltas are kept in `f32` so slow gradients keep
//! their fractional slope, and each LED snaps to the exact control-point
//! color whenever it enters a new segment.

#[macro_use]
mod fmt;

pub mod colors;
pub mod command;
pub mod controller;
pub mod gradient;
pub mod pattern;
pub mod types;
pub mod wave_set;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use colors::{BLACK, BLUE, ColorSample, GREEN, RED, WHITE};
pub use command::PatternAction;
pub use controller::{LedOutput, PatternController};
pub use gradient::{GradientEngine, MAX_CONTROL_POINTS};
pub use pattern::{Pattern, StaticColor};
pub use types::{ControlPoint, GradientError, LedColors, LedState, SegmentDelta};
pub use wave_set::WaveSet;
