//! Stroke path synthesis
//!
//! Converts an ordered list of stroke points into a path description using
//! one of the curve strategies, and serializes it to an SVG `d` string.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;
use crate::layout::Point;

/// Catmull-Rom tension
const CATMULL_ROM_TENSION: f64 = 0.5;

/// Fractions of the chord where the cubic S-curve control points sit
const CUBIC_NEAR: f64 = 0.3;
const CUBIC_FAR: f64 = 0.7;

/// Vertical lift applied to the cubic S-curve control points
const CUBIC_LIFT: f64 = 20.0;

/// Height of the simple-curve arch above the higher endpoint
const SIMPLE_CURVE_LIFT: f64 = 15.0;

/// Interpolation used between consecutive stroke points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveStrategy {
    /// Straight lines
    #[default]
    Linear,
    /// Smooth spline through every point
    CatmullRom,
    /// Quadratic curves with the control point at the chord midpoint
    QuadraticBezier,
    /// Cubic S-curves
    CubicBezier,
    /// Quadratic arches above each pair of points
    SimpleCurve,
}

impl CurveStrategy {
    /// Every strategy, in display order
    pub const ALL: [CurveStrategy; 5] = [
        CurveStrategy::Linear,
        CurveStrategy::CatmullRom,
        CurveStrategy::QuadraticBezier,
        CurveStrategy::CubicBezier,
        CurveStrategy::SimpleCurve,
    ];

    /// The kebab-case name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CurveStrategy::Linear => "linear",
            CurveStrategy::CatmullRom => "catmull-rom",
            CurveStrategy::QuadraticBezier => "quadratic-bezier",
            CurveStrategy::CubicBezier => "cubic-bezier",
            CurveStrategy::SimpleCurve => "simple-curve",
        }
    }
}

impl fmt::Display for CurveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveStrategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CurveStrategy::ALL
            .into_iter()
            .find(|curve| curve.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = CurveStrategy::ALL.iter().map(|c| c.name()).collect();
                ParseError::unknown_curve(s, &names)
            })
    }
}

/// A single drawing command with absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
    /// Cubic Bezier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathSegment {
    /// The point the pen ends at after this command
    pub fn end(&self) -> Point {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p,
            PathSegment::QuadraticTo { end, .. } | PathSegment::CubicTo { end, .. } => *end,
        }
    }

    /// The single-letter SVG command
    pub fn command(&self) -> char {
        match self {
            PathSegment::MoveTo(_) => 'M',
            PathSegment::LineTo(_) => 'L',
            PathSegment::QuadraticTo { .. } => 'Q',
            PathSegment::CubicTo { .. } => 'C',
        }
    }
}

/// Formats a coordinate as a plain shortest decimal, with `-0` shown as `0`
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::MoveTo(p) => write!(f, "M {} {}", Num(p.x), Num(p.y)),
            PathSegment::LineTo(p) => write!(f, "L {} {}", Num(p.x), Num(p.y)),
            PathSegment::QuadraticTo { control, end } => write!(
                f,
                "Q {} {} {} {}",
                Num(control.x),
                Num(control.y),
                Num(end.x),
                Num(end.y)
            ),
            PathSegment::CubicTo {
                control1,
                control2,
                end,
            } => write!(
                f,
                "C {} {} {} {} {} {}",
                Num(control1.x),
                Num(control1.y),
                Num(control2.x),
                Num(control2.y),
                Num(end.x),
                Num(end.y)
            ),
        }
    }
}

/// An ordered sequence of drawing commands describing a signature stroke
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathDescription {
    pub segments: Vec<PathSegment>,
}

impl PathDescription {
    /// An empty path with no commands
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of drawn segments, not counting the initial move
    pub fn segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

/// Build a path through `points` using the given strategy.
///
/// No points gives an empty path and a single point gives a lone move.
/// Two points are always joined by a straight line, whatever the strategy,
/// since there is no meaningful curve through two points. From three points
/// on, each consecutive pair gets one segment of the strategy's kind.
pub fn synthesize(points: &[Point], strategy: CurveStrategy) -> PathDescription {
    let segments = match points {
        [] => Vec::new(),
        [only] => vec![PathSegment::MoveTo(*only)],
        [first, second] => vec![PathSegment::MoveTo(*first), PathSegment::LineTo(*second)],
        _ => {
            let mut segments = Vec::with_capacity(points.len());
            segments.push(PathSegment::MoveTo(points[0]));
            for i in 0..points.len() - 1 {
                let segment = match strategy {
                    CurveStrategy::Linear => PathSegment::LineTo(points[i + 1]),
                    CurveStrategy::CatmullRom => catmull_rom_segment(points, i),
                    CurveStrategy::QuadraticBezier => quadratic_segment(points[i], points[i + 1]),
                    CurveStrategy::CubicBezier => cubic_segment(points[i], points[i + 1]),
                    CurveStrategy::SimpleCurve => simple_curve_segment(points[i], points[i + 1]),
                };
                segments.push(segment);
            }
            segments
        }
    };

    PathDescription { segments }
}

/// Cubic segment from `points[i]` to `points[i + 1]` on a Catmull-Rom spline.
///
/// The neighbours before the first point and after the last point are
/// clamped to the endpoints.
fn catmull_rom_segment(points: &[Point], i: usize) -> PathSegment {
    let last = points.len() - 1;
    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points[(i + 2).min(last)];

    let control1 = Point::new(
        p1.x + ((p2.x - p0.x) * CATMULL_ROM_TENSION) / 6.0,
        p1.y + ((p2.y - p0.y) * CATMULL_ROM_TENSION) / 6.0,
    );
    let control2 = Point::new(
        p2.x - ((p3.x - p1.x) * CATMULL_ROM_TENSION) / 6.0,
        p2.y - ((p3.y - p1.y) * CATMULL_ROM_TENSION) / 6.0,
    );

    PathSegment::CubicTo {
        control1,
        control2,
        end: p2,
    }
}

fn quadratic_segment(current: Point, next: Point) -> PathSegment {
    PathSegment::QuadraticTo {
        control: current.midpoint(next),
        end: next,
    }
}

/// Cubic S-curve: the first control point is pulled up, the second pushed down
fn cubic_segment(current: Point, next: Point) -> PathSegment {
    let dx = next.x - current.x;
    let dy = next.y - current.y;

    PathSegment::CubicTo {
        control1: Point::new(
            current.x + dx * CUBIC_NEAR,
            current.y + dy * CUBIC_NEAR - CUBIC_LIFT,
        ),
        control2: Point::new(
            current.x + dx * CUBIC_FAR,
            current.y + dy * CUBIC_FAR + CUBIC_LIFT,
        ),
        end: next,
    }
}

fn simple_curve_segment(current: Point, next: Point) -> PathSegment {
    PathSegment::QuadraticTo {
        control: Point::new(
            (current.x + next.x) / 2.0,
            current.y.min(next.y) - SIMPLE_CURVE_LIFT,
        ),
        end: next,
    }
}
