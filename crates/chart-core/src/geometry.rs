// File: crates/chart-core/src/geometry.rs
// Summary: Surface-space points, path commands and the linear / basis-spline curve builders.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction of a path, in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// How consecutive points of a path are joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Straight segments through every point.
    Linear,
    /// Uniform cubic B-spline; approximates the points, only the ends are hit exactly.
    Basis,
}

impl Curve {
    pub fn commands(&self, points: &[Point]) -> Vec<PathCommand> {
        match self {
            Curve::Linear => linear(points),
            Curve::Basis => basis(points),
        }
    }
}

fn linear(points: &[Point]) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(points.len());
    if let Some((first, rest)) = points.split_first() {
        out.push(PathCommand::MoveTo(*first));
        out.extend(rest.iter().map(|&p| PathCommand::LineTo(p)));
    }
    out
}

/// B-spline segment ending at the weighted average of (p0, p1, p2).
#[inline]
fn basis_segment(p0: Point, p1: Point, p: Point) -> PathCommand {
    PathCommand::CubicTo(
        Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        Point::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
    )
}

fn basis(points: &[Point]) -> Vec<PathCommand> {
    match points {
        [] => Vec::new(),
        [only] => vec![PathCommand::MoveTo(*only)],
        [a, b] => vec![PathCommand::MoveTo(*a), PathCommand::LineTo(*b)],
        _ => {
            let n = points.len();
            let mut out = Vec::with_capacity(n + 2);
            let (p0, p1) = (points[0], points[1]);
            out.push(PathCommand::MoveTo(p0));
            out.push(PathCommand::LineTo(Point::new((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0)));
            for w in points.windows(3) {
                out.push(basis_segment(w[0], w[1], w[2]));
            }
            // close out with the last point doubled, then land on it
            let (prev, last) = (points[n - 2], points[n - 1]);
            out.push(basis_segment(prev, last, last));
            out.push(PathCommand::LineTo(last));
            out
        }
    }
}
