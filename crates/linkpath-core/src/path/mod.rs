//! Edge path construction and style selection.
//!
//! Each style is a pure function of the two anchors. [`compute_path`] picks one from an
//! [`EdgeStyle`], and [`EdgeStyle::from_token`] maps free-form style names onto the closed set,
//! falling back to [`EdgeStyle::Bezier`] for anything it does not recognize.

mod bezier;
mod smooth_step;
mod step;
mod straight;

pub use bezier::{MAX_CURVE_OFFSET, bezier_path, curve_controls, curve_offset};
pub use smooth_step::{MAX_CORNER_RADIUS, corner_radius, smooth_step_path};
pub use step::step_path;
pub use straight::straight_path;

use crate::geom::Point;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    Straight,
    #[default]
    Bezier,
    Step,
    SmoothStep,
}

impl EdgeStyle {
    pub const ALL: [EdgeStyle; 4] = [
        EdgeStyle::Straight,
        EdgeStyle::Bezier,
        EdgeStyle::Step,
        EdgeStyle::SmoothStep,
    ];

    /// Case-insensitive lookup. Unknown, empty and malformed tokens select `Bezier`.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "straight" => EdgeStyle::Straight,
            "step" => EdgeStyle::Step,
            "smoothstep" => EdgeStyle::SmoothStep,
            _ => EdgeStyle::Bezier,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeStyle::Straight => "straight",
            EdgeStyle::Bezier => "bezier",
            EdgeStyle::Step => "step",
            EdgeStyle::SmoothStep => "smoothstep",
        }
    }
}

impl FromStr for EdgeStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the SVG path data connecting `source` to `target` in the given style.
///
/// The result always starts with `M` at `source` and ends at `target`. Both anchors must be
/// finite: the path writer cannot represent NaN or infinity and prints them as `0`, so the output
/// for non-finite input does not end at `target`. Validate untrusted input through
/// [`EdgePathRequest::anchors`](crate::EdgePathRequest::anchors) first; debug builds assert it.
pub fn compute_path(source: Point, target: Point, style: EdgeStyle) -> String {
    debug_assert!(
        source.x.is_finite() && source.y.is_finite() && target.x.is_finite() && target.y.is_finite(),
        "compute_path requires finite anchors (got {source:?} -> {target:?})"
    );
    let d = match style {
        EdgeStyle::Straight => straight_path(source, target),
        EdgeStyle::Step => step_path(source, target),
        EdgeStyle::SmoothStep => smooth_step_path(source, target),
        EdgeStyle::Bezier => bezier_path(source, target),
    };
    tracing::trace!(style = %style, d = %d, "computed edge path");
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn from_token_is_case_insensitive() {
        assert_eq!(EdgeStyle::from_token("STRAIGHT"), EdgeStyle::Straight);
        assert_eq!(EdgeStyle::from_token("Step"), EdgeStyle::Step);
        assert_eq!(EdgeStyle::from_token("SmoothStep"), EdgeStyle::SmoothStep);
        assert_eq!(EdgeStyle::from_token("bezier"), EdgeStyle::Bezier);
    }

    #[test]
    fn from_token_falls_back_to_bezier() {
        for token in ["", "smooth", "steep", " straight", "step ", "smooth-step", "🙂"] {
            assert_eq!(EdgeStyle::from_token(token), EdgeStyle::Bezier, "{token:?}");
        }
    }

    #[test]
    fn as_str_round_trips_through_from_token() {
        for style in EdgeStyle::ALL {
            assert_eq!(EdgeStyle::from_token(style.as_str()), style);
            assert_eq!(style.as_str().parse::<EdgeStyle>(), Ok(style));
        }
    }

    #[test]
    fn compute_path_dispatches_by_style() {
        let s = point(0.0, 0.0);
        let t = point(100.0, 100.0);
        assert_eq!(compute_path(s, t, EdgeStyle::Straight), "M 0,0 L 100,100");
        assert_eq!(
            compute_path(s, t, EdgeStyle::Step),
            "M 0,0 L 50,0 L 50,100 L 100,100"
        );
        assert!(compute_path(s, t, EdgeStyle::Bezier).starts_with("M 0,0 C "));
        assert!(compute_path(s, t, EdgeStyle::SmoothStep).contains(" Q "));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "finite anchors")]
    fn compute_path_rejects_non_finite_anchors_in_debug() {
        compute_path(point(0.0, 0.0), point(f64::NAN, 10.0), EdgeStyle::Straight);
    }
}
