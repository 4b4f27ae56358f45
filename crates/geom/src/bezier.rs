//! Line segments, quadratic and cubic bézier curves as lists of control points.

use crate::scalar::{NumCast, Scalar};
use crate::{point, Point};

use alloc::vec::Vec;
use arrayvec::ArrayVec;

/// Up to four control points: `[from, ctrl1?, ctrl2?, to]`.
pub type ControlPoints<S> = ArrayVec<Point<S>, 4>;

/// A line segment (2 points), quadratic bézier curve (3 points) or cubic bézier
/// curve (4 points), stored as its list of control points.
///
/// The first and last points are the endpoints of the curve, the ones in between
/// are the control points in order.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSegment<S> {
    points: ControlPoints<S>,
}

impl<S: Scalar> BezierSegment<S> {
    pub fn line(from: Point<S>, to: Point<S>) -> Self {
        let mut points = ArrayVec::new();
        points.push(from);
        points.push(to);
        BezierSegment { points }
    }

    pub fn quadratic(from: Point<S>, ctrl: Point<S>, to: Point<S>) -> Self {
        let mut points = ArrayVec::new();
        points.push(from);
        points.push(ctrl);
        points.push(to);
        BezierSegment { points }
    }

    pub fn cubic(from: Point<S>, ctrl1: Point<S>, ctrl2: Point<S>, to: Point<S>) -> Self {
        let mut points = ArrayVec::new();
        points.push(from);
        points.push(ctrl1);
        points.push(ctrl2);
        points.push(to);
        BezierSegment { points }
    }

    /// Creates a segment from a list of 2, 3 or 4 points.
    ///
    /// Returns `None` for any other number of points.
    pub fn from_points(points: &[Point<S>]) -> Option<Self> {
        if points.len() < 2 || points.len() > 4 {
            return None;
        }

        Some(BezierSegment {
            points: points.iter().cloned().collect(),
        })
    }

    /// The control points, endpoints included.
    #[inline]
    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    /// 1 for a line segment, 2 for a quadratic curve and 3 for a cubic curve.
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Start of the curve.
    #[inline]
    pub fn from(&self) -> Point<S> {
        self.points[0]
    }

    /// End of the curve.
    #[inline]
    pub fn to(&self) -> Point<S> {
        self.points[self.points.len() - 1]
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let mut points = self.points.clone();
        while points.len() > 1 {
            points = reduce(&points, t);
        }

        points[0]
    }

    /// Split this curve into two sub-curves using de Casteljau's algorithm.
    ///
    /// Adjacent points are linearly interpolated until a single point remains.
    /// At each step the first point belongs to the curve before `t` and the
    /// last point to the curve after `t`. The remaining point is shared by both.
    pub fn split(&self, t: S) -> (Self, Self) {
        let mut before = ArrayVec::new();
        let mut after: ControlPoints<S> = ArrayVec::new();

        let mut points = self.points.clone();
        loop {
            before.push(points[0]);
            after.push(points[points.len() - 1]);

            if points.len() == 1 {
                break;
            }

            points = reduce(&points, t);
        }

        after.reverse();

        (
            BezierSegment { points: before },
            BezierSegment { points: after },
        )
    }

    /// Split this curve into `count` sub-curves covering equal parameter intervals
    /// of the original curve.
    ///
    /// Each split happens on the remaining part of the curve, with `t` adjusted
    /// so that the split point lands at `i / count` on the original curve:
    ///
    /// ```text
    /// x-----x-----x-----x
    /// t=  0.33   0.66   1
    /// x-----o-----------x
    /// r=  0.33
    ///       x-----o-----x
    /// r=         0.5  (0.33 / (1 - 0.33))
    /// ```
    ///
    /// A `count` of zero is treated as one.
    pub fn subdivide(&self, count: usize) -> Vec<Self> {
        let count = count.max(1);
        let mut segments = Vec::with_capacity(count);

        let t_increment = S::ONE / cast(count);
        let mut remaining = self.clone();

        for i in 0..(count - 1) {
            let t_relative = t_increment / (S::ONE - t_increment * cast(i));
            let (before, after) = remaining.split(t_relative);
            segments.push(before);
            remaining = after;
        }

        // The last segment goes from the last split point to the end.
        segments.push(remaining);

        segments
    }
}

fn cast<S: Scalar>(n: usize) -> S {
    <S as NumCast>::from(n).unwrap_or(S::ZERO)
}

/// One step of de Casteljau's algorithm.
fn reduce<S: Scalar>(points: &[Point<S>], t: S) -> ControlPoints<S> {
    points.windows(2).map(|w| lerp(w[0], w[1], t)).collect()
}

#[inline]
fn lerp<S: Scalar>(a: Point<S>, b: Point<S>, t: S) -> Point<S> {
    let one_t = S::ONE - t;
    point(one_t * a.x + t * b.x, one_t * a.y + t * b.y)
}

#[cfg(test)]
fn approx_eq(a: Point<f64>, b: Point<f64>) -> bool {
    let eq = (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9;
    if !eq {
        std::println!("{a:?} != {b:?}");
    }
    eq
}

#[test]
fn split_line() {
    let line = BezierSegment::line(point(10.0, 10.0), point(20.0, 20.0));
    let (before, after) = line.split(0.5);

    assert_eq!(before.points(), &[point(10.0, 10.0), point(15.0, 15.0)]);
    assert_eq!(after.points(), &[point(15.0, 15.0), point(20.0, 20.0)]);
}

#[test]
fn split_cubic() {
    let curve = BezierSegment::cubic(
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(2.0, 2.0),
        point(4.0, 4.0),
    );
    let (before, after) = curve.split(0.5);

    assert_eq!(
        before.points(),
        &[
            point(0.0, 0.0),
            point(0.5, 0.5),
            point(1.0, 1.0),
            point(1.625, 1.625)
        ]
    );
    assert_eq!(
        after.points(),
        &[
            point(1.625, 1.625),
            point(2.25, 2.25),
            point(3.0, 3.0),
            point(4.0, 4.0)
        ]
    );
}

#[test]
fn split_preserves_shape() {
    let curve = BezierSegment::quadratic(point(0.0, 0.0), point(5.0, 10.0), point(10.0, 0.0));
    let t = 0.3;
    let (before, after) = curve.split(t);

    assert_eq!(before.degree(), 2);
    assert_eq!(after.degree(), 2);
    assert!(approx_eq(before.to(), curve.sample(t)));
    assert_eq!(before.to(), after.from());

    for i in 0..=10 {
        let u = i as f64 / 10.0;
        assert!(approx_eq(before.sample(u), curve.sample(u * t)));
        assert!(approx_eq(after.sample(u), curve.sample(t + u * (1.0 - t))));
    }
}

#[test]
fn subdivide_cubic() {
    let curve = BezierSegment::cubic(
        point(0.0, 0.0),
        point(0.0, 10.0),
        point(10.0, 10.0),
        point(10.0, 0.0),
    );
    let count = 3;
    let pieces = curve.subdivide(count);

    assert_eq!(pieces.len(), count);
    assert_eq!(pieces[0].from(), curve.from());
    assert_eq!(pieces[count - 1].to(), curve.to());

    for (i, piece) in pieces.iter().enumerate() {
        assert_eq!(piece.degree(), 3);
        if i > 0 {
            assert_eq!(pieces[i - 1].to(), piece.from());
        }
        // Each piece covers [i / count, (i + 1) / count] of the original curve.
        let mid = (i as f64 + 0.5) / count as f64;
        assert!(approx_eq(piece.sample(0.5), curve.sample(mid)));
        assert!(approx_eq(piece.to(), curve.sample((i + 1) as f64 / count as f64)));
    }
}

#[test]
fn subdivide_once() {
    let line = BezierSegment::line(point(1.0, 2.0), point(3.0, 4.0));

    assert_eq!(line.subdivide(1), std::vec![line.clone()]);
    assert_eq!(line.subdivide(0), std::vec![line.clone()]);
}

#[test]
fn from_points() {
    let p = point(0.0f32, 0.0);
    assert!(BezierSegment::from_points(&[p]).is_none());
    assert!(BezierSegment::from_points(&[p, p, p, p, p]).is_none());
    assert_eq!(BezierSegment::from_points(&[p, p, p]).map(|s| s.degree()), Some(2));
}
