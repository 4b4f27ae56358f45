//! Splitting a segment into several commands without changing its shape.

use crate::geom::{point, BezierSegment, Point};
use crate::path::{Command, Params};

/// Splits the segment from `start` to `end` into `segment_count` commands covering
/// equal parameter intervals of the curve.
///
/// `start` followed by the returned commands traces the same curve as `start`
/// followed by `end`. The pieces are lines, quadratic or cubic bézier curves
/// depending on the number of control points of `end`, always absolute.
///
/// Only the endpoint of `start` is used. If `start` is a horizontal or vertical
/// line, its missing coordinate is `NaN`.
///
/// A `segment_count` of zero is treated as one.
pub fn split_curve(start: &Command, end: &Command, segment_count: usize) -> Vec<Command> {
    control_points(start, end)
        .subdivide(segment_count)
        .iter()
        .map(segment_to_command)
        .collect()
}

fn endpoint(cmd: &Command) -> Point<f64> {
    point(cmd.x().unwrap_or(f64::NAN), cmd.y().unwrap_or(f64::NAN))
}

fn control_points(start: &Command, end: &Command) -> BezierSegment<f64> {
    let from = endpoint(start);
    let to = endpoint(end);

    match end.params {
        Params::CubicTo { x1, y1, x2, y2, .. } => {
            BezierSegment::cubic(from, point(x1, y1), point(x2, y2), to)
        }
        Params::QuadraticTo { x1, y1, .. } => BezierSegment::quadratic(from, point(x1, y1), to),
        Params::SmoothCubicTo { x2, y2, .. } => BezierSegment::quadratic(from, point(x2, y2), to),
        _ => BezierSegment::line(from, to),
    }
}

fn segment_to_command(segment: &BezierSegment<f64>) -> Command {
    match *segment.points() {
        [_, ctrl1, ctrl2, to] => Command::cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
        [_, ctrl, to] => Command::absolute(Params::QuadraticTo {
            x1: ctrl.x,
            y1: ctrl.y,
            x: to.x,
            y: to.y,
        }),
        _ => {
            let to = segment.to();
            Command::line_to(to.x, to.y)
        }
    }
}

#[test]
fn split_line() {
    let pieces = split_curve(&Command::move_to(0.0, 0.0), &Command::line_to(10.0, 10.0), 2);

    assert_eq!(
        pieces,
        vec![Command::line_to(5.0, 5.0), Command::line_to(10.0, 10.0)]
    );
}

#[test]
fn split_cubic() {
    let pieces = split_curve(
        &Command::move_to(0.0, 0.0),
        &Command::cubic_to(1.0, 1.0, 2.0, 2.0, 4.0, 4.0),
        2,
    );

    assert_eq!(
        pieces,
        vec![
            Command::cubic_to(0.5, 0.5, 1.0, 1.0, 1.625, 1.625),
            Command::cubic_to(2.25, 2.25, 3.0, 3.0, 4.0, 4.0),
        ]
    );
}

#[test]
fn split_quadratic() {
    let end = Command::absolute(Params::QuadraticTo {
        x1: 10.0,
        y1: 0.0,
        x: 10.0,
        y: 10.0,
    });
    let pieces = split_curve(&Command::line_to(0.0, 0.0), &end, 2);

    assert_eq!(pieces.len(), 2);
    assert_eq!(
        pieces[0],
        Command::absolute(Params::QuadraticTo {
            x1: 5.0,
            y1: 0.0,
            x: 7.5,
            y: 2.5,
        })
    );
    assert_eq!(
        pieces[1],
        Command::absolute(Params::QuadraticTo {
            x1: 10.0,
            y1: 5.0,
            x: 10.0,
            y: 10.0,
        })
    );
}

#[test]
fn split_in_three() {
    let pieces = split_curve(&Command::move_to(0.0, 0.0), &Command::line_to(30.0, -60.0), 3);

    assert_eq!(pieces.len(), 3);
    let expected = [(10.0, -20.0), (20.0, -40.0), (30.0, -60.0)];
    for (cmd, &(x, y)) in pieces.iter().zip(expected.iter()) {
        assert_eq!(cmd.kind(), crate::path::CommandKind::LineTo);
        assert!((cmd.x().unwrap() - x).abs() < 1e-9);
        assert!((cmd.y().unwrap() - y).abs() < 1e-9);
    }
    // The end of the last piece is the end of the segment.
    assert_eq!(pieces[2], Command::line_to(30.0, -60.0));
}

#[test]
fn split_once() {
    let end = Command::cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

    assert_eq!(split_curve(&Command::move_to(0.0, 0.0), &end, 1), vec![end]);
    assert_eq!(split_curve(&Command::move_to(0.0, 0.0), &end, 0), vec![end]);
}

#[test]
fn missing_start_coordinate() {
    let start = Command::from_letter('H', &[4.0]).unwrap();
    let pieces = split_curve(&start, &Command::line_to(8.0, 8.0), 2);

    assert_eq!(pieces[0].x(), Some(6.0));
    assert!(pieces[0].y().unwrap().is_nan());
    assert_eq!(pieces[1], Command::line_to(8.0, 8.0));
}
