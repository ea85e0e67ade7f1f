//! Unified pointer input model.
//!
//! Mouse and touch arrive from the host as one normalized
//! [`PointerEvent`] stream. [`PointerTracker`] is the gesture state
//! machine between pointer-down and pointer-up: it enforces the
//! single-active-pointer policy and absorbs the duplicate events that
//! overlapping mouse/touch handlers produce.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Host-assigned identifier for one pointer (a mouse, or one finger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The id hosts conventionally use for the mouse pointer.
    pub const MOUSE: Self = Self(0);
}

/// A normalized pointer event, mouse and touch alike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        kind: PointerKind,
        id: PointerId,
    },
    Move {
        position: Point,
        id: PointerId,
    },
    Up {
        position: Point,
        id: PointerId,
    },
}

/// What the surface should do in response to a tracked event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackedAction {
    /// Start a stroke at this point.
    Begin(Point),
    /// Extend the active stroke to this point.
    Extend(Point),
    /// Finalize the active stroke.
    End,
    /// Event belonged to a non-captured pointer; do nothing.
    Ignored,
}

/// Gesture state between pointer-down and pointer-up.
///
/// At most one pointer is captured at a time. A second simultaneous
/// touch is ignored rather than ending the first stroke, and a
/// duplicate Down from the captured pointer is absorbed so the begin
/// operation stays idempotent.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    active: Option<PointerId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pointer is currently captured.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Drop the captured pointer without emitting an end action.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed one normalized event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> TrackedAction {
        match event {
            PointerEvent::Down { position, kind, id } => {
                if let Some(active) = self.active {
                    log::debug!(
                        "ignoring {kind:?} down from pointer {id:?} while {active:?} is captured"
                    );
                    return TrackedAction::Ignored;
                }
                self.active = Some(id);
                TrackedAction::Begin(position)
            }
            PointerEvent::Move { position, id } => {
                if self.active == Some(id) {
                    TrackedAction::Extend(position)
                } else {
                    TrackedAction::Ignored
                }
            }
            PointerEvent::Up { id, .. } => {
                if self.active == Some(id) {
                    self.active = None;
                    TrackedAction::End
                } else {
                    TrackedAction::Ignored
                }
            }
        }
    }
}
