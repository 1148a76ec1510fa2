//! SVG path-data emission.
//!
//! Coordinates are stringified the way JavaScript's `Number#toString()` does it, so whole numbers
//! print without a `.0` suffix and the output matches what a browser-side renderer would build
//! from the same numbers.

use crate::geom::Point;

pub fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

pub fn fmt_number(v: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    js_number_to_string(v, &mut buf).to_string()
}

/// Incremental writer for the `M`/`L`/`Q`/`C` subset of SVG path data.
///
/// Commands are space separated and each coordinate pair is written as `x,y`:
/// `M 0,0 C 40,0 60,100 100,100`.
pub struct PathData {
    out: String,
    buf: ryu_js::Buffer,
}

impl Default for PathData {
    fn default() -> Self {
        Self::new()
    }
}

impl PathData {
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(96),
            buf: ryu_js::Buffer::new(),
        }
    }

    fn push_pair(&mut self, p: Point) {
        self.out.push_str(js_number_to_string(p.x, &mut self.buf));
        self.out.push(',');
        self.out.push_str(js_number_to_string(p.y, &mut self.buf));
    }

    fn push_cmd(&mut self, cmd: char) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(cmd);
        self.out.push(' ');
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.push_cmd('M');
        self.push_pair(p);
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.push_cmd('L');
        self.push_pair(p);
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, p: Point) -> &mut Self {
        self.push_cmd('Q');
        self.push_pair(ctrl);
        self.out.push(' ');
        self.push_pair(p);
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.push_cmd('C');
        self.push_pair(c1);
        self.out.push(' ');
        self.push_pair(c2);
        self.out.push(' ');
        self.push_pair(p);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
