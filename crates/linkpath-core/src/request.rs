//! Wire-shaped request/response records shared by the HTTP service and the CLI.

use crate::error::{Error, Result};
use crate::geom::{Point, point};
use crate::path::{EdgeStyle, compute_path};
use serde::{Deserialize, Serialize};

fn default_edge_type() -> String {
    EdgeStyle::Bezier.as_str().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePathRequest {
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    /// Free-form style token; see [`EdgeStyle::from_token`].
    #[serde(default = "default_edge_type")]
    pub edge_type: String,
}

/// A point as echoed back to the caller: `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for Anchor {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePathResponse {
    pub path: String,
    pub source: Anchor,
    pub target: Anchor,
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteCoordinate { field, value })
    }
}

impl EdgePathRequest {
    pub fn new(source: Point, target: Point, style: EdgeStyle) -> Self {
        Self {
            source_x: source.x,
            source_y: source.y,
            target_x: target.x,
            target_y: target.y,
            edge_type: style.as_str().to_string(),
        }
    }

    /// Checks that every coordinate is finite and returns the `(source, target)` anchors.
    pub fn anchors(&self) -> Result<(Point, Point)> {
        let source = point(
            finite("source_x", self.source_x)?,
            finite("source_y", self.source_y)?,
        );
        let target = point(
            finite("target_x", self.target_x)?,
            finite("target_y", self.target_y)?,
        );
        Ok((source, target))
    }

    pub fn style(&self) -> EdgeStyle {
        EdgeStyle::from_token(&self.edge_type)
    }
}

fn respond(source: Point, target: Point, style: EdgeStyle) -> EdgePathResponse {
    EdgePathResponse {
        path: compute_path(source, target, style),
        source: source.into(),
        target: target.into(),
    }
}

pub fn compute_edge_path(request: &EdgePathRequest) -> Result<EdgePathResponse> {
    let (source, target) = request.anchors()?;
    Ok(respond(source, target, request.style()))
}

/// Computes every request in order. All entries are validated before any path is built, so an
/// invalid entry yields an error and no partial output.
pub fn compute_edge_paths(requests: &[EdgePathRequest]) -> Result<Vec<EdgePathResponse>> {
    let mut validated = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        let (source, target) = request.anchors().map_err(|err| Error::Batch {
            index,
            source: Box::new(err),
        })?;
        validated.push((source, target, request.style()));
    }
    tracing::debug!(count = validated.len(), "computing edge path batch");
    Ok(validated
        .into_iter()
        .map(|(source, target, style)| respond(source, target, style))
        .collect())
}

/// Parses an `x,y` pair such as `"10,-2.5"`. Whitespace around either number is ignored.
pub fn parse_point(input: &str) -> Result<Point> {
    let invalid = || Error::InvalidPoint {
        input: input.to_string(),
    };
    let (x, y) = input.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(invalid());
    }
    Ok(point(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edge_type_defaults_to_bezier() {
        let req: EdgePathRequest = serde_json::from_value(json!({
            "source_x": 0, "source_y": 0, "target_x": 10, "target_y": 0
        }))
        .unwrap();
        assert_eq!(req.edge_type, "bezier");
        assert_eq!(req.style(), EdgeStyle::Bezier);
    }

    #[test]
    fn response_echoes_anchors() {
        let req = EdgePathRequest::new(point(1.0, 2.0), point(3.0, 4.0), EdgeStyle::Straight);
        let resp = compute_edge_path(&req).unwrap();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "path": "M 1,2 L 3,4",
                "source": { "x": 1.0, "y": 2.0 },
                "target": { "x": 3.0, "y": 4.0 }
            })
        );
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut req = EdgePathRequest::new(point(0.0, 0.0), point(1.0, 1.0), EdgeStyle::Step);
        req.target_y = f64::NAN;
        let err = compute_edge_path(&req).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteCoordinate {
                field: "target_y",
                ..
            }
        ));

        req.target_y = 1.0;
        req.source_x = f64::NEG_INFINITY;
        assert!(matches!(
            compute_edge_path(&req),
            Err(Error::NonFiniteCoordinate {
                field: "source_x",
                ..
            })
        ));
    }

    #[test]
    fn batch_reports_the_failing_index() {
        let ok = EdgePathRequest::new(point(0.0, 0.0), point(1.0, 1.0), EdgeStyle::Straight);
        let mut bad = ok.clone();
        bad.source_y = f64::INFINITY;

        let err = compute_edge_paths(&[ok.clone(), bad]).unwrap_err();
        let Error::Batch { index, source } = err else {
            panic!("expected batch error");
        };
        assert_eq!(index, 1);
        assert!(matches!(*source, Error::NonFiniteCoordinate { .. }));

        let out = compute_edge_paths(&[ok.clone(), ok]).unwrap();
        assert_eq!(out.len(), 2);
        assert!(compute_edge_paths(&[]).unwrap().is_empty());
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("10,-2.5").unwrap(), point(10.0, -2.5));
        assert_eq!(parse_point(" 1 , 2 ").unwrap(), point(1.0, 2.0));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        for input in ["", "1", "1,", ",2", "a,b", "1,2,3", "inf,0", "0,NaN"] {
            assert!(
                matches!(parse_point(input), Err(Error::InvalidPoint { .. })),
                "{input:?}"
            );
        }
    }
}
