use super::straight_path;
use crate::fmt::PathData;
use crate::geom::{Point, midpoint, point};

pub const MAX_CORNER_RADIUS: f64 = 20.0;

const CORNER_RATIO: f64 = 0.1;

/// Corner rounding for a smoothstep edge spanning `dx` by `dy`.
///
/// Capped at [`MAX_CORNER_RADIUS`] and at 10% of either span so short edges do not overshoot.
pub fn corner_radius(dx: f64, dy: f64) -> f64 {
    MAX_CORNER_RADIUS
        .min(dx.abs() * CORNER_RATIO)
        .min(dy.abs() * CORNER_RATIO)
}

/// Step edge whose two bends are rounded with quadratic curves.
///
/// Each bend uses the midline corner itself as the control point, and the adjoining straight runs
/// stop [`corner_radius`] short of it. Axis-aligned edges have nothing to round and are drawn
/// straight.
pub fn smooth_step_path(source: Point, target: Point) -> String {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    if dx == 0.0 || dy == 0.0 {
        return straight_path(source, target);
    }

    let mid_x = midpoint(source.x, target.x);
    let r = corner_radius(dx, dy);
    let sx = dx.signum();
    let sy = dy.signum();

    let first_corner = point(mid_x, source.y);
    let second_corner = point(mid_x, target.y);

    let mut d = PathData::new();
    d.move_to(source)
        .line_to(point(mid_x - r * sx, source.y))
        .quad_to(first_corner, point(mid_x, source.y + r * sy))
        .line_to(point(mid_x, target.y - r * sy))
        .quad_to(second_corner, point(mid_x + r * sx, target.y))
        .line_to(target);
    d.finish()
}
