//! The drawing surface: pointer input in, painted pixels out.

use crate::painter;
use crate::pixmap::{Pixmap, Snapshot};
use kurbo::Point;
use scribblepad_core::{
    Brush, BrushMode, History, HoldOutcome, HoldToConfirm, PointerEvent, PointerTracker, Rgba,
    Stroke, TrackedAction,
};
use scribblepad_core::history::DEFAULT_UNDO_CAP;
use scribblepad_core::hold::DEFAULT_HOLD_DURATION;
use std::time::{Duration, Instant};

/// Construction parameters for a [`DrawingSurface`].
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Logical canvas width in pixels.
    pub width: u32,
    /// Logical canvas height in pixels.
    pub height: u32,
    /// Paper color; also what the eraser paints with.
    pub background: Rgba,
    /// Initial brush.
    pub brush: Brush,
    /// Maximum number of undo snapshots kept.
    pub undo_cap: usize,
    /// How long the clear gesture must be held.
    pub hold_duration: Duration,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgba::paper(),
            brush: Brush::default(),
            undo_cap: DEFAULT_UNDO_CAP,
            hold_duration: DEFAULT_HOLD_DURATION,
        }
    }
}

/// A raster freehand drawing surface with bounded snapshot undo.
///
/// Owns the pixel grid, the in-progress stroke, the undo history, and
/// the hold-to-confirm clear gesture. All operations are local and
/// synchronous; the only "failures" are the documented no-op guards.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    pixmap: Pixmap,
    background: Rgba,
    brush: Brush,
    /// The stroke between pointer-down and pointer-up, if any.
    active: Option<Stroke>,
    /// Pre-stroke snapshot, captured at begin and pushed at end.
    pending: Option<Snapshot>,
    history: History<Snapshot>,
    tracker: PointerTracker,
    clear_hold: HoldToConfirm,
}

impl DrawingSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            pixmap: Pixmap::new(config.width, config.height, config.background),
            background: config.background,
            brush: config.brush,
            active: None,
            pending: None,
            history: History::new(config.undo_cap),
            tracker: PointerTracker::new(),
            clear_hold: HoldToConfirm::new(config.hold_duration),
        }
    }

    // --- Stroke operations ---

    /// Start a new stroke at `point` with the current brush.
    ///
    /// No-op if a stroke is already in progress; duplicate begin events
    /// from overlapping input handlers must not fork the gesture.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.active.is_some() {
            log::debug!("begin_stroke ignored, stroke already in progress");
            return;
        }
        // A stroke and the clear gesture never run together.
        self.clear_hold.cancel();

        self.pending = Some(self.pixmap.snapshot());
        let stroke = Stroke::begin(point, self.brush);
        let color = self.brush.effective_color(self.background);
        painter::paint_dot(&mut self.pixmap, point, self.brush.width, color);
        self.active = Some(stroke);
    }

    /// Append `point` to the in-progress stroke and paint the joining
    /// segment immediately. No-op if no stroke is active.
    pub fn extend_stroke(&mut self, point: Point) {
        let Some(stroke) = self.active.as_mut() else {
            log::debug!("extend_stroke ignored, no stroke in progress");
            return;
        };
        let (from, to) = stroke.push_point(point);
        let brush = stroke.brush();
        let color = brush.effective_color(self.background);
        painter::paint_segment(&mut self.pixmap, from, to, brush.width, color);
    }

    /// Finalize the current stroke, committing its pre-stroke snapshot
    /// to the undo history. No-op if no stroke is active.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.active.take() else {
            log::debug!("end_stroke ignored, no stroke in progress");
            return;
        };
        if let Some(snapshot) = self.pending.take() {
            self.history.push(snapshot);
        }
        log::debug!("stroke finished with {} points", stroke.len());
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    // --- Undo / redo ---

    /// Repaint the surface from the most recent snapshot.
    ///
    /// Returns `false` when there is nothing to undo (or while a stroke
    /// is still in progress).
    pub fn undo(&mut self) -> bool {
        if self.active.is_some() {
            log::debug!("undo ignored while a stroke is in progress");
            return false;
        }
        match self.history.undo(self.pixmap.snapshot()) {
            Some(snapshot) => {
                self.pixmap.restore(&snapshot);
                true
            }
            None => {
                log::debug!("nothing to undo");
                false
            }
        }
    }

    /// Reverse the most recent undo. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.active.is_some() {
            return false;
        }
        match self.history.redo(self.pixmap.snapshot()) {
            Some(snapshot) => {
                self.pixmap.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of undo snapshots currently held, never above the cap.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    // --- Resize ---

    /// Resize the backing surface, preserving existing work scaled to
    /// the new size. An in-progress stroke is committed first so the
    /// begin/extend/end ordering is never violated.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.active.is_some() {
            log::debug!("resize during active stroke, committing stroke first");
            self.end_stroke();
            self.tracker.reset();
        }
        self.pixmap.resize(width, height);
    }

    // --- Hold-to-confirm clear ---

    /// Start the hold-to-clear gesture at `now`.
    ///
    /// Ignored while a stroke is in progress; the gesture shares the
    /// single-active-pointer model.
    pub fn press_clear(&mut self, now: Instant) {
        if self.active.is_some() {
            log::debug!("clear press ignored while drawing");
            return;
        }
        self.clear_hold.press(now);
    }

    /// Fraction of the clear hold elapsed, for progress feedback.
    pub fn clear_progress(&self, now: Instant) -> f64 {
        self.clear_hold.progress(now)
    }

    /// Release the clear gesture at `now`.
    ///
    /// Completing the hold erases the canvas to the background color and
    /// pushes exactly one undo entry for the pre-clear state. Releasing
    /// early performs no mutation. Returns whether the clear happened.
    pub fn release_clear(&mut self, now: Instant) -> bool {
        match self.clear_hold.release(now) {
            HoldOutcome::Completed => {
                self.history.push(self.pixmap.snapshot());
                self.pixmap.fill(self.background);
                log::info!("canvas cleared");
                true
            }
            HoldOutcome::Cancelled => false,
        }
    }

    /// Abandon the clear gesture without evaluating the timer.
    pub fn cancel_clear(&mut self) {
        self.clear_hold.cancel();
    }

    // --- Input dispatch ---

    /// Feed one normalized pointer event through the single-pointer
    /// tracker to the stroke operations. Mouse and touch share this
    /// path.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match self.tracker.handle(event) {
            TrackedAction::Begin(point) => self.begin_stroke(point),
            TrackedAction::Extend(point) => self.extend_stroke(point),
            TrackedAction::End => self.end_stroke(),
            TrackedAction::Ignored => {}
        }
    }

    // --- Brush ---

    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Replace the brush. Takes effect from the next stroke; the active
    /// stroke keeps the brush it started with.
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.brush.mode = mode;
        if mode == BrushMode::Erase {
            self.brush.width = self.brush.width.max(Brush::ERASER_WIDTH);
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    pub fn set_width(&mut self, width: f64) {
        self.brush.width = width.max(1.0);
    }

    // --- Queries ---

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Read one pixel of the rendered surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixmap.pixel(x, y)
    }

    /// The backing pixel grid, for presentation and export.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribblepad_core::{PointerId, PointerKind};

    fn test_surface() -> DrawingSurface {
        DrawingSurface::new(SurfaceConfig {
            width: 64,
            height: 64,
            background: Rgba::white(),
            brush: Brush::draw(Rgba::black()),
            undo_cap: 5,
            hold_duration: Duration::from_secs(3),
        })
    }

    fn draw_l_shape(surface: &mut DrawingSurface) {
        surface.begin_stroke(Point::new(10.0, 10.0));
        surface.extend_stroke(Point::new(20.0, 10.0));
        surface.extend_stroke(Point::new(20.0, 20.0));
        surface.end_stroke();
    }

    #[test]
    fn test_l_shape_then_undo_returns_to_blank() {
        let mut surface = test_surface();
        let blank = surface.pixmap().snapshot();

        draw_l_shape(&mut surface);
        assert_eq!(surface.pixel(10, 10), Some(Rgba::black()));
        assert_eq!(surface.pixel(20, 10), Some(Rgba::black()));
        assert_eq!(surface.pixel(20, 20), Some(Rgba::black()));
        // Corner pixel of the L, on the horizontal and vertical legs.
        assert_eq!(surface.pixel(15, 10), Some(Rgba::black()));
        assert_eq!(surface.pixel(20, 15), Some(Rgba::black()));

        assert!(surface.undo());
        assert_eq!(surface.pixmap().snapshot(), blank);
    }

    #[test]
    fn test_path_passes_through_every_point_in_order() {
        let mut surface = test_surface();
        let points = [
            Point::new(5.0, 5.0),
            Point::new(15.0, 8.0),
            Point::new(25.0, 20.0),
            Point::new(40.0, 21.0),
            Point::new(50.0, 50.0),
        ];

        surface.begin_stroke(points[0]);
        for p in &points[1..] {
            surface.extend_stroke(*p);
        }
        surface.end_stroke();

        for p in &points {
            assert_eq!(
                surface.pixel(p.x as u32, p.y as u32),
                Some(Rgba::black()),
                "path missed point ({}, {})",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn test_begin_is_idempotent_while_active() {
        let mut surface = test_surface();
        surface.begin_stroke(Point::new(10.0, 10.0));
        // Duplicate start from an overlapping handler.
        surface.begin_stroke(Point::new(50.0, 50.0));

        assert!(surface.is_drawing());
        // The duplicate begin painted nothing.
        assert_eq!(surface.pixel(50, 50), Some(Rgba::white()));

        surface.end_stroke();
        // Exactly one undo entry for the single real stroke.
        assert_eq!(surface.undo_depth(), 1);
    }

    #[test]
    fn test_extend_and_end_without_begin_are_noops() {
        let mut surface = test_surface();
        let blank = surface.pixmap().snapshot();

        surface.extend_stroke(Point::new(30.0, 30.0));
        surface.end_stroke();

        assert_eq!(surface.pixmap().snapshot(), blank);
        assert_eq!(surface.undo_depth(), 0);
    }

    #[test]
    fn test_undo_with_empty_history_reports_nothing() {
        let mut surface = test_surface();
        assert!(!surface.can_undo());
        assert!(!surface.undo());
    }

    #[test]
    fn test_undo_restores_exact_pre_stroke_pixels() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let after_first = surface.pixmap().snapshot();

        surface.begin_stroke(Point::new(40.0, 40.0));
        surface.extend_stroke(Point::new(50.0, 40.0));
        surface.end_stroke();

        assert!(surface.undo());
        assert_eq!(surface.pixmap().snapshot(), after_first);
    }

    #[test]
    fn test_redo_after_undo() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let drawn = surface.pixmap().snapshot();

        assert!(surface.undo());
        assert!(surface.can_redo());
        assert!(surface.redo());
        assert_eq!(surface.pixmap().snapshot(), drawn);
    }

    #[test]
    fn test_history_never_exceeds_cap() {
        let mut surface = test_surface();
        for i in 0..20 {
            let y = f64::from(i) * 3.0 + 1.0;
            surface.begin_stroke(Point::new(5.0, y));
            surface.extend_stroke(Point::new(60.0, y));
            surface.end_stroke();
            assert!(surface.undo_depth() <= 5);
        }
        assert_eq!(surface.undo_depth(), 5);
    }

    #[test]
    fn test_erase_paints_background_color() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        assert_eq!(surface.pixel(15, 10), Some(Rgba::black()));

        surface.set_mode(BrushMode::Erase);
        surface.set_width(6.0);
        surface.begin_stroke(Point::new(10.0, 10.0));
        surface.extend_stroke(Point::new(25.0, 10.0));
        surface.end_stroke();

        // The horizontal leg is gone, painted over with background.
        assert_eq!(surface.pixel(15, 10), Some(Rgba::white()));
        // The vertical leg survives below the eraser band.
        assert_eq!(surface.pixel(20, 20), Some(Rgba::black()));
    }

    #[test]
    fn test_erase_stroke_is_undoable_like_draw() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let drawn = surface.pixmap().snapshot();

        surface.set_mode(BrushMode::Erase);
        surface.begin_stroke(Point::new(10.0, 10.0));
        surface.extend_stroke(Point::new(25.0, 10.0));
        surface.end_stroke();

        assert!(surface.undo());
        assert_eq!(surface.pixmap().snapshot(), drawn);
    }

    #[test]
    fn test_resize_preserves_content() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);

        surface.resize(128, 128);
        assert_eq!(surface.width(), 128);
        assert_eq!(surface.height(), 128);
        // The stroke scaled with the surface instead of vanishing.
        assert_eq!(surface.pixel(30, 20), Some(Rgba::black()));
    }

    #[test]
    fn test_resize_same_size_round_trips_exactly() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let before = surface.pixmap().snapshot();

        surface.resize(64, 64);
        assert_eq!(surface.pixmap().snapshot(), before);
    }

    #[test]
    fn test_resize_commits_active_stroke() {
        let mut surface = test_surface();
        surface.begin_stroke(Point::new(10.0, 10.0));
        surface.extend_stroke(Point::new(20.0, 10.0));

        surface.resize(128, 128);
        assert!(!surface.is_drawing());
        assert_eq!(surface.undo_depth(), 1);
    }

    #[test]
    fn test_cancelled_hold_leaves_canvas_unchanged() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let drawn = surface.pixmap().snapshot();
        let depth = surface.undo_depth();

        let start = Instant::now();
        surface.press_clear(start);
        assert!(surface.clear_progress(start + Duration::from_secs(1)) > 0.0);
        assert!(!surface.release_clear(start + Duration::from_secs(1)));

        assert_eq!(surface.pixmap().snapshot(), drawn);
        assert_eq!(surface.undo_depth(), depth);
    }

    #[test]
    fn test_completed_hold_clears_with_one_undo_entry() {
        let mut surface = test_surface();
        draw_l_shape(&mut surface);
        let drawn = surface.pixmap().snapshot();
        let depth = surface.undo_depth();

        let start = Instant::now();
        surface.press_clear(start);
        assert_eq!(surface.clear_progress(start + Duration::from_secs(3)), 1.0);
        assert!(surface.release_clear(start + Duration::from_secs(3)));

        // Cleared to background, exactly one new undo entry.
        assert_eq!(surface.pixel(15, 10), Some(Rgba::white()));
        assert_eq!(surface.undo_depth(), depth + 1);

        // Undo brings the drawing back.
        assert!(surface.undo());
        assert_eq!(surface.pixmap().snapshot(), drawn);
    }

    #[test]
    fn test_clear_press_ignored_while_drawing() {
        let mut surface = test_surface();
        surface.begin_stroke(Point::new(10.0, 10.0));

        let start = Instant::now();
        surface.press_clear(start);
        assert_eq!(surface.clear_progress(start + Duration::from_secs(3)), 0.0);
        assert!(!surface.release_clear(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_pointer_events_drive_strokes() {
        let mut surface = test_surface();
        let id = PointerId(7);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            kind: PointerKind::Touch,
            id,
        });
        surface.handle_pointer_event(PointerEvent::Move { position: Point::new(20.0, 10.0), id });
        surface.handle_pointer_event(PointerEvent::Move { position: Point::new(20.0, 20.0), id });
        surface.handle_pointer_event(PointerEvent::Up { position: Point::new(20.0, 20.0), id });

        assert!(!surface.is_drawing());
        assert_eq!(surface.pixel(15, 10), Some(Rgba::black()));
        assert_eq!(surface.undo_depth(), 1);
    }

    #[test]
    fn test_second_touch_does_not_fork_the_stroke() {
        let mut surface = test_surface();
        let first = PointerId(1);
        let second = PointerId(2);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            kind: PointerKind::Touch,
            id: first,
        });
        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
            kind: PointerKind::Touch,
            id: second,
        });
        surface.handle_pointer_event(PointerEvent::Move {
            position: Point::new(55.0, 55.0),
            id: second,
        });
        surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(55.0, 55.0),
            id: second,
        });

        // The second finger never painted and never ended the stroke.
        assert!(surface.is_drawing());
        assert_eq!(surface.pixel(50, 50), Some(Rgba::white()));

        surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(10.0, 10.0),
            id: first,
        });
        assert!(!surface.is_drawing());
    }

    #[test]
    fn test_brush_change_mid_stroke_does_not_affect_active_stroke() {
        let mut surface = test_surface();
        surface.begin_stroke(Point::new(10.0, 30.0));
        surface.set_color(Rgba::opaque(255, 0, 0));
        surface.extend_stroke(Point::new(30.0, 30.0));
        surface.end_stroke();

        // Painted with the brush captured at begin.
        assert_eq!(surface.pixel(20, 30), Some(Rgba::black()));

        surface.begin_stroke(Point::new(10.0, 50.0));
        surface.extend_stroke(Point::new(30.0, 50.0));
        surface.end_stroke();
        assert_eq!(surface.pixel(20, 50), Some(Rgba::opaque(255, 0, 0)));
    }
}
