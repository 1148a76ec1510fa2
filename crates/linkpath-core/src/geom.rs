#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// `a + (b - a) * 0.5`, falling back to `a * 0.5 + b * 0.5` when the span overflows `f64`.
pub fn midpoint(a: f64, b: f64) -> f64 {
    let mid = a + (b - a) * 0.5;
    if mid.is_finite() { mid } else { a * 0.5 + b * 0.5 }
}

/// Sign used to push a control point from `from` toward `to` along one axis.
///
/// Equal coordinates count as "not ahead" and yield `-1.0`; every caller multiplies the result
/// by a magnitude that is zero in that case.
pub fn direction(from: f64, to: f64) -> f64 {
    if to > from { 1.0 } else { -1.0 }
}
