use crate::fmt::PathData;
use crate::geom::{Point, midpoint, point};

/// Right-angle edge that always splits at the horizontal midline: across, down/up, across.
///
/// Unlike the curved styles this does not look at the dominant axis.
pub fn step_path(source: Point, target: Point) -> String {
    let mid_x = midpoint(source.x, target.x);
    let mut d = PathData::new();
    d.move_to(source)
        .line_to(point(mid_x, source.y))
        .line_to(point(mid_x, target.y))
        .line_to(target);
    d.finish()
}
