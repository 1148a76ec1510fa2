use linkpath_core::fmt::fmt_number;
use linkpath_core::path::{MAX_CORNER_RADIUS, corner_radius, curve_offset};
use linkpath_core::{EdgeStyle, Point, compute_path, point};

fn samples() -> Vec<(Point, Point)> {
    vec![
        (point(0.0, 0.0), point(100.0, 0.0)),
        (point(0.0, 0.0), point(100.0, 100.0)),
        (point(0.0, 0.0), point(0.0, 50.0)),
        (point(250.5, -40.25), point(-13.0, 999.0)),
        (point(-1e6, 3.0), point(1e6, -3.0)),
        (point(7.0, 7.0), point(7.0, 7.0)),
        (point(0.1, 0.2), point(0.3, 0.7)),
        (point(-f64::MAX, f64::MAX), point(f64::MAX, -f64::MAX)),
    ]
}

fn pair(p: Point) -> String {
    format!("{},{}", fmt_number(p.x), fmt_number(p.y))
}

#[test]
fn every_style_starts_at_source_and_ends_at_target() {
    for (s, t) in samples() {
        for style in EdgeStyle::ALL {
            let d = compute_path(s, t, style);
            assert!(
                d.starts_with(&format!("M {}", pair(s))),
                "{style}: {d}"
            );
            assert!(d.ends_with(&pair(t)), "{style}: {d}");
        }
    }
}

#[test]
fn output_only_uses_known_commands_and_finite_numbers() {
    for (s, t) in samples() {
        for style in EdgeStyle::ALL {
            let d = compute_path(s, t, style);
            for token in d.split(' ') {
                if matches!(token, "M" | "L" | "Q" | "C") {
                    continue;
                }
                let (x, y) = token.split_once(',').expect("coordinate pair");
                let x: f64 = x.parse().expect("x");
                let y: f64 = y.parse().expect("y");
                assert!(x.is_finite() && y.is_finite(), "{style}: {d}");
            }
        }
    }
}

#[test]
fn straight_is_a_single_line() {
    assert_eq!(
        compute_path(point(0.0, 0.0), point(100.0, 0.0), EdgeStyle::Straight),
        "M 0,0 L 100,0"
    );
}

#[test]
fn step_has_two_bends_on_the_midline() {
    for (s, t) in samples().into_iter().take(7) {
        let d = compute_path(s, t, EdgeStyle::Step);
        let lines: Vec<&str> = d.split(" L ").skip(1).collect();
        assert_eq!(lines.len(), 3, "{d}");
        let mid = s.x + (t.x - s.x) * 0.5;
        let mid = fmt_number(mid);
        assert!(lines[0].starts_with(&format!("{mid},")), "{d}");
        assert!(lines[1].starts_with(&format!("{mid},")), "{d}");
    }
    assert_eq!(
        compute_path(point(0.0, 0.0), point(100.0, 100.0), EdgeStyle::Step),
        "M 0,0 L 50,0 L 50,100 L 100,100"
    );
}

#[test]
fn smooth_step_degenerates_to_straight_on_axis_aligned_edges() {
    for (s, t) in [
        (point(0.0, 0.0), point(0.0, 50.0)),
        (point(10.0, 5.0), point(-90.0, 5.0)),
    ] {
        assert_eq!(
            compute_path(s, t, EdgeStyle::SmoothStep),
            compute_path(s, t, EdgeStyle::Straight)
        );
    }
    assert_eq!(
        compute_path(point(0.0, 0.0), point(0.0, 50.0), EdgeStyle::SmoothStep),
        "M 0,0 L 0,50"
    );
}

#[test]
fn smooth_step_radius_respects_both_caps() {
    for (s, t) in samples() {
        let dx = t.x - s.x;
        let dy = t.y - s.y;
        let r = corner_radius(dx, dy);
        assert!(r <= MAX_CORNER_RADIUS);
        assert!(r <= dx.abs() * 0.1);
        assert!(r <= dy.abs() * 0.1);
    }
}

#[test]
fn bezier_offset_never_exceeds_cap() {
    for (s, t) in samples() {
        assert!(curve_offset(s, t) <= 100.0);
    }
    assert_eq!(curve_offset(point(5.0, 5.0), point(5.0, 5.0)), 0.0);
}

#[test]
fn unknown_tokens_render_as_bezier() {
    let s = point(12.0, 34.0);
    let t = point(-56.0, 78.0);
    let expected = compute_path(s, t, EdgeStyle::Bezier);
    for token in ["", "bezier", "BEZIER", "curvy", "smooth", "steep", "step-after"] {
        assert_eq!(
            compute_path(s, t, EdgeStyle::from_token(token)),
            expected,
            "{token:?}"
        );
    }
    assert_eq!(
        compute_path(s, t, EdgeStyle::from_token("STRAIGHT")),
        "M 12,34 L -56,78"
    );
}

#[test]
fn repeated_calls_are_byte_identical() {
    for (s, t) in samples() {
        for style in EdgeStyle::ALL {
            assert_eq!(compute_path(s, t, style), compute_path(s, t, style));
        }
    }
}
