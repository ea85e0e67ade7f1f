//! Scribblepad Core Library
//!
//! Platform-agnostic data structures and logic for the Scribblepad
//! drawing surface: colors, brushes, strokes, the unified pointer input
//! model, the bounded undo history, and the hold-to-confirm gesture.

pub mod brush;
pub mod color;
pub mod history;
pub mod hold;
pub mod input;
pub mod stroke;

pub use brush::{Brush, BrushMode};
pub use color::{Rgba, CRAYON_PALETTE};
pub use history::History;
pub use hold::{HoldOutcome, HoldToConfirm};
pub use input::{PointerEvent, PointerId, PointerKind, PointerTracker, TrackedAction};
pub use stroke::Stroke;
