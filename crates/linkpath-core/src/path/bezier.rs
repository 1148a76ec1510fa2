use crate::fmt::PathData;
use crate::geom::{Point, direction, vector};

/// Upper bound on how far a control point is pulled away from its anchor.
pub const MAX_CURVE_OFFSET: f64 = 100.0;

const CURVATURE: f64 = 0.4;

/// Control-point distance for a cubic edge: 40% of the anchor distance, capped at
/// [`MAX_CURVE_OFFSET`].
pub fn curve_offset(source: Point, target: Point) -> f64 {
    let distance = (target.x - source.x).hypot(target.y - source.y);
    (distance * CURVATURE).min(MAX_CURVE_OFFSET)
}

/// Returns the two control points of the cubic edge from `source` to `target`.
///
/// The tangents run along the dominant axis (`|dx| > |dy|` is horizontal, ties are vertical) and
/// point in the direction of travel, so the curve leaves the source toward the target and enters
/// the target from the source's side.
pub fn curve_controls(source: Point, target: Point) -> (Point, Point) {
    let offset = curve_offset(source, target);
    let dx = (target.x - source.x).abs();
    let dy = (target.y - source.y).abs();

    let pull = if dx > dy {
        vector(offset * direction(source.x, target.x), 0.0)
    } else {
        vector(0.0, offset * direction(source.y, target.y))
    };
    (source + pull, target - pull)
}

pub fn bezier_path(source: Point, target: Point) -> String {
    let (c1, c2) = curve_controls(source, target);
    let mut d = PathData::new();
    d.move_to(source).cubic_to(c1, c2, target);
    d.finish()
}
