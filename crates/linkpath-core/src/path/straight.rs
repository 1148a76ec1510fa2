use crate::fmt::PathData;
use crate::geom::Point;

pub fn straight_path(source: Point, target: Point) -> String {
    let mut d = PathData::new();
    d.move_to(source).line_to(target);
    d.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn straight_path_is_a_single_segment() {
        assert_eq!(
            straight_path(point(0.0, 0.0), point(100.0, 0.0)),
            "M 0,0 L 100,0"
        );
        assert_eq!(
            straight_path(point(-1.5, 2.25), point(-1.5, 2.25)),
            "M -1.5,2.25 L -1.5,2.25"
        );
    }
}
