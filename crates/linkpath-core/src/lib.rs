#![forbid(unsafe_code)]

//! Connector paths between two anchors on a diagram canvas, emitted as SVG path data.
//!
//! Design goals:
//! - pure, deterministic functions of `(source, target, style)`
//! - JavaScript-compatible number formatting so output matches browser-built paths
//! - no NaN/Infinity in the output for any finite input

pub mod error;
pub mod fmt;
pub mod geom;
pub mod path;
pub mod request;

pub use error::{Error, Result};
pub use geom::{Point, point};
pub use path::{EdgeStyle, compute_path};
pub use request::{
    Anchor, EdgePathRequest, EdgePathResponse, compute_edge_path, compute_edge_paths,
    parse_point,
};
