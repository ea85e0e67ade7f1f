//! A single paint gesture: the ordered points between pointer-down and
//! pointer-up, plus the brush they were drawn with.

use crate::brush::Brush;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One continuous freehand stroke.
///
/// Points accumulate while the pointer is active; the stroke is never
/// mutated after the owning surface finalizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Ordered points of the path, screen coordinates.
    points: Vec<Point>,
    /// Brush settings captured at stroke start.
    brush: Brush,
}

impl Stroke {
    /// Start a stroke at its first point.
    pub fn begin(start: Point, brush: Brush) -> Self {
        Self { points: vec![start], brush }
    }

    /// Append a point, returning the segment to paint immediately.
    ///
    /// Rendering is immediate-mode: the caller paints the returned
    /// (previous, new) pair as soon as the point arrives, so fast event
    /// streams produce joined segments rather than isolated dots.
    pub fn push_point(&mut self, point: Point) -> (Point, Point) {
        let prev = *self.points.last().expect("stroke always has a start point");
        self.points.push(point);
        (prev, point)
    }

    /// The brush this stroke was started with.
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// All points supplied so far, in arrival order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Successive point pairs, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Tight bounding box of the path (without the brush width).
    pub fn bounds(&self) -> Rect {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }
}
