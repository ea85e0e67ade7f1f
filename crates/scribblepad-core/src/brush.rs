//! Brush settings: draw vs erase, color, and width.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// What a stroke does to the pixels underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BrushMode {
    /// Paint with the brush color.
    #[default]
    Draw,
    /// Paint with the surface background color.
    ///
    /// Erasing is a paint operation, not a transparency operation: an
    /// erase stroke behaves exactly like a draw stroke whose color
    /// happens to be the background.
    Erase,
}

/// Brush settings applied to new strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    /// Draw or erase.
    pub mode: BrushMode,
    /// Paint color used in [`BrushMode::Draw`].
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Brush {
    /// Default crayon width for a kid's finger.
    pub const DEFAULT_WIDTH: f64 = 6.0;

    /// Eraser strokes are wider than draw strokes so mistakes go away
    /// in a couple of swipes.
    pub const ERASER_WIDTH: f64 = 24.0;

    pub fn new(mode: BrushMode, color: Rgba, width: f64) -> Self {
        Self { mode, color, width }
    }

    /// A draw brush with the given color and the default width.
    pub fn draw(color: Rgba) -> Self {
        Self::new(BrushMode::Draw, color, Self::DEFAULT_WIDTH)
    }

    /// An erase brush at the default eraser width.
    pub fn erase() -> Self {
        Self::new(BrushMode::Erase, Rgba::white(), Self::ERASER_WIDTH)
    }

    /// The color this brush actually paints with, given the surface
    /// background.
    pub fn effective_color(&self, background: Rgba) -> Rgba {
        match self.mode {
            BrushMode::Draw => self.color,
            BrushMode::Erase => background,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::draw(Rgba::black())
    }
}
