//! Command-based control for the pattern controller.

/// Actions for controlling a [`PatternController`](crate::PatternController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternAction {
    /// Switch to the pattern at this index.
    Start(usize),
    /// Switch to the next pattern, wrapping around.
    Cycle,
    /// Advance the active pattern by one frame.
    Step,
}
