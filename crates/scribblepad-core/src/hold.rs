//! Hold-to-confirm gesture timer for destructive actions.

use std::time::{Duration, Instant};

/// How long the clear gesture must be held by default.
pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_secs(3);

/// Result of releasing a hold gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// The hold ran its full duration; perform the action.
    Completed,
    /// Released early (or never armed); perform nothing.
    Cancelled,
}

/// A sustained-input confirmation gesture.
///
/// The destructive action fires only if the input is held for the full
/// configured duration. Timestamps are supplied by the caller, the way
/// event loops deliver them, which also keeps the timer testable.
#[derive(Debug, Clone)]
pub struct HoldToConfirm {
    duration: Duration,
    pressed_at: Option<Instant>,
}

impl HoldToConfirm {
    pub fn new(duration: Duration) -> Self {
        Self { duration, pressed_at: None }
    }

    /// Arm the gesture at `now`. Re-pressing while armed restarts it.
    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Whether the gesture is currently armed.
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Fraction of the hold elapsed at `now`, clamped to 0.0..=1.0.
    ///
    /// Drives the visible progress feedback while the user holds.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.pressed_at {
            Some(pressed) => {
                let held = now.saturating_duration_since(pressed);
                (held.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
            None => 0.0,
        }
    }

    /// Release the input at `now`, disarming the gesture.
    ///
    /// Returns [`HoldOutcome::Completed`] only if the full duration
    /// elapsed; an early release cancels with no effect.
    pub fn release(&mut self, now: Instant) -> HoldOutcome {
        let Some(pressed) = self.pressed_at.take() else {
            return HoldOutcome::Cancelled;
        };
        if now.saturating_duration_since(pressed) >= self.duration {
            HoldOutcome::Completed
        } else {
            log::debug!("hold released early, cancelled");
            HoldOutcome::Cancelled
        }
    }

    /// Disarm without evaluating the timer.
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}

impl Default for HoldToConfirm {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_press_cancels() {
        let mut hold = HoldToConfirm::default();
        assert_eq!(hold.release(Instant::now()), HoldOutcome::Cancelled);
    }

    #[test]
    fn test_early_release_cancels() {
        let mut hold = HoldToConfirm::new(Duration::from_secs(3));
        let start = Instant::now();

        hold.press(start);
        assert_eq!(hold.release(start + Duration::from_secs(1)), HoldOutcome::Cancelled);
        assert!(!hold.is_pressed());
    }

    #[test]
    fn test_full_hold_completes() {
        let mut hold = HoldToConfirm::new(Duration::from_secs(3));
        let start = Instant::now();

        hold.press(start);
        assert_eq!(hold.release(start + Duration::from_secs(3)), HoldOutcome::Completed);
    }

    #[test]
    fn test_progress_ramps_and_clamps() {
        let mut hold = HoldToConfirm::new(Duration::from_secs(4));
        let start = Instant::now();

        assert_eq!(hold.progress(start), 0.0);
        hold.press(start);
        assert!((hold.progress(start + Duration::from_secs(1)) - 0.25).abs() < 1e-9);
        assert!((hold.progress(start + Duration::from_secs(3)) - 0.75).abs() < 1e-9);
        assert_eq!(hold.progress(start + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_repress_restarts_timer() {
        let mut hold = HoldToConfirm::new(Duration::from_secs(3));
        let start = Instant::now();

        hold.press(start);
        hold.press(start + Duration::from_secs(2));
        // Only two of the required three seconds elapsed since re-press.
        assert_eq!(hold.release(start + Duration::from_secs(4)), HoldOutcome::Cancelled);
    }

    #[test]
    fn test_cancel_disarms() {
        let mut hold = HoldToConfirm::new(Duration::from_secs(3));
        let start = Instant::now();

        hold.press(start);
        hold.cancel();
        assert!(!hold.is_pressed());
        assert_eq!(hold.release(start + Duration::from_secs(10)), HoldOutcome::Cancelled);
    }
}
