//! Gesture phases and the drag jump filter.
//!
//! Near the dial center a few pixels of pointer noise swing the resolved
//! angle wildly, and a pointer that leaves and re-enters the control can land
//! far from where it left. While dragging, [`DragGuard`] discards candidate
//! angles further than a fixed limit from the current angle. The distance is
//! the plain numeric difference, not the shortest arc: crossing the 0/360
//! boundary counts as a large jump and is rejected.

/// Default maximum accepted jump while dragging, in degrees.
pub const DEFAULT_DRAG_JUMP_LIMIT: f32 = 90.0;

/// Lifecycle of a single continuous pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down on the control.
    #[default]
    Idle,
    /// First contact.
    Pressed,
    /// Pointer moved while down.
    Dragging,
}

impl GesturePhase {
    /// Whether a pointer is currently down.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Outcome of checking a candidate angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Commit the candidate.
    Accept,
    /// Candidate equals the current angle; nothing to commit.
    Unchanged,
    /// Candidate discarded for this event.
    Reject,
}

/// Phase-aware filter for candidate angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGuard {
    max_jump: f32,
}

impl DragGuard {
    /// Create a guard with a custom jump limit (degrees, expected `> 0`).
    pub const fn new(max_jump: f32) -> Self {
        Self { max_jump }
    }

    /// Maximum accepted jump while dragging.
    #[inline]
    pub fn max_jump(&self) -> f32 {
        self.max_jump
    }

    /// Check `candidate` against `current` for the given phase.
    ///
    /// `Pressed` accepts any angle, establishing the initial position.
    /// `Dragging` accepts only `|candidate - current| <= max_jump`.
    /// `Idle` never accepts: no gesture is in progress.
    pub fn check(&self, phase: GesturePhase, candidate: f32, current: f32) -> GuardVerdict {
        if candidate == current {
            return GuardVerdict::Unchanged;
        }
        match phase {
            GesturePhase::Pressed => GuardVerdict::Accept,
            GesturePhase::Dragging if (candidate - current).abs() <= self.max_jump => {
                GuardVerdict::Accept
            }
            GesturePhase::Dragging | GesturePhase::Idle => GuardVerdict::Reject,
        }
    }
}

impl Default for DragGuard {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_JUMP_LIMIT)
    }
}
