//! Capsule rasterization of stroke segments.
//!
//! Every pixel whose center lies within half the brush width of the
//! segment is painted, which gives round caps and joins for free: a
//! zero-length segment degenerates to a dot, and successive segments
//! overlap seamlessly at their shared endpoint.

use crate::pixmap::Pixmap;
use kurbo::{Point, Vec2};
use scribblepad_core::Rgba;

/// Paint the segment from `from` to `to` with the given width.
pub fn paint_segment(pixmap: &mut Pixmap, from: Point, to: Point, width: f64, color: Rgba) {
    let radius = (width / 2.0).max(0.5);

    let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
    let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
    let max_x = ((from.x.max(to.x) + radius).ceil() as i64).max(0) as u32;
    let max_y = ((from.y.max(to.y) + radius).ceil() as i64).max(0) as u32;
    let max_x = max_x.min(pixmap.width().saturating_sub(1));
    let max_y = max_y.min(pixmap.height().saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if distance_to_segment(center, from, to) <= radius {
                pixmap.set_pixel(x, y, color);
            }
        }
    }
}

/// Paint a single round dot (the start of a stroke).
pub fn paint_dot(pixmap: &mut Pixmap, at: Point, width: f64, color: Rgba) {
    paint_segment(pixmap, at, at, width, color);
}

/// Distance from `point` to the closest point on the segment.
fn distance_to_segment(point: Point, start: Point, end: Point) -> f64 {
    let line_vec = Vec2::new(end.x - start.x, end.y - start.y);
    let point_vec = Vec2::new(point.x - start.x, point.y - start.y);

    let line_len_sq = line_vec.hypot2();
    if line_len_sq < f64::EPSILON {
        // Segment is a point.
        return point_vec.hypot();
    }

    let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = Point::new(start.x + t * line_vec.x, start.y + t * line_vec.y);
    ((point.x - projection.x).powi(2) + (point.y - projection.y).powi(2)).sqrt()
}
