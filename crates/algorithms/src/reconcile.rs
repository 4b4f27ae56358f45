//! Converting commands to the type of another command.
//!
//! Two commands can only be interpolated parameter by parameter if they have the
//! same type. A command is converted by reading each parameter of the target type
//! from the source command, in order of preference:
//!
//! - the parameter with the same name,
//! - for the arc parameters `xAxisRotation`, `largeArcFlag` and `sweepFlag`, the
//!   value of the target command,
//! - for control points, the endpoint (`x1` and `x2` read `x`, `y1` and `y2` read `y`),
//! - zero.
//!
//! For example `L0,5` converted to a cubic bézier curve becomes `C0,5,0,5,0,5`.

use crate::path::{Command, CommandKind, Params};

/// The parameters of a command, by name.
///
/// Parameters that the command does not have are `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Fields {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub x_axis_rotation: Option<f64>,
    pub large_arc_flag: Option<f64>,
    pub sweep_flag: Option<f64>,
}

impl Fields {
    pub fn new(params: &Params) -> Self {
        let mut fields = Fields {
            x: params.x(),
            y: params.y(),
            ..Fields::default()
        };

        match *params {
            Params::CubicTo { x1, y1, x2, y2, .. } => {
                fields.x1 = Some(x1);
                fields.y1 = Some(y1);
                fields.x2 = Some(x2);
                fields.y2 = Some(y2);
            }
            Params::SmoothCubicTo { x2, y2, .. } => {
                fields.x2 = Some(x2);
                fields.y2 = Some(y2);
            }
            Params::QuadraticTo { x1, y1, .. } => {
                fields.x1 = Some(x1);
                fields.y1 = Some(y1);
            }
            Params::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
                ..
            } => {
                fields.rx = Some(rx);
                fields.ry = Some(ry);
                fields.x_axis_rotation = Some(x_axis_rotation);
                fields.large_arc_flag = Some(large_arc_flag);
                fields.sweep_flag = Some(sweep_flag);
            }
            _ => {}
        }

        fields
    }

    /// Builds the parameters of a command of kind `kind` out of these fields.
    ///
    /// `target` provides the arc parameters that these fields lack.
    pub fn to_params(self, kind: CommandKind, target: &Fields) -> Params {
        let x = self.x.unwrap_or(0.0);
        let y = self.y.unwrap_or(0.0);
        let x1 = self.x1.or(self.x).unwrap_or(0.0);
        let y1 = self.y1.or(self.y).unwrap_or(0.0);
        let x2 = self.x2.or(self.x).unwrap_or(0.0);
        let y2 = self.y2.or(self.y).unwrap_or(0.0);

        match kind {
            CommandKind::MoveTo => Params::MoveTo { x, y },
            CommandKind::LineTo => Params::LineTo { x, y },
            CommandKind::HorizontalLineTo => Params::HorizontalLineTo { x },
            CommandKind::VerticalLineTo => Params::VerticalLineTo { y },
            CommandKind::CubicTo => Params::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            CommandKind::SmoothCubicTo => Params::SmoothCubicTo { x2, y2, x, y },
            CommandKind::QuadraticTo => Params::QuadraticTo { x1, y1, x, y },
            CommandKind::SmoothQuadraticTo => Params::SmoothQuadraticTo { x, y },
            CommandKind::ArcTo => Params::ArcTo {
                rx: self.rx.unwrap_or(0.0),
                ry: self.ry.unwrap_or(0.0),
                x_axis_rotation: self
                    .x_axis_rotation
                    .or(target.x_axis_rotation)
                    .unwrap_or(0.0),
                large_arc_flag: self.large_arc_flag.or(target.large_arc_flag).unwrap_or(0.0),
                sweep_flag: self.sweep_flag.or(target.sweep_flag).unwrap_or(0.0),
                x,
                y,
            },
        }
    }
}

/// Converts the parameters of `a` to the parameter shape of `b`.
///
/// Unlike [`convert_to_same_type`] this converts into move-to commands as well.
pub fn convert_params(a: &Params, b: &Params) -> Params {
    Fields::new(a).to_params(b.kind(), &Fields::new(b))
}

/// Converts `a` to the type of `b`, keeping as much of `a`'s geometry as possible.
///
/// `a` is returned as is if it already has the type of `b`, or if `b` is a move-to
/// command.
pub fn convert_to_same_type(a: &Command, b: &Command) -> Command {
    if a.has_same_type(b) || b.is_move_to() {
        return *a;
    }

    Command {
        relative: b.relative,
        params: convert_params(&a.params, &b.params),
    }
}

/// Converts each command of `a` to the type of the command of `b` at the same index.
///
/// The two sequences are expected to have the same length, extra commands of
/// either are dropped.
pub fn reconcile(a: &[Command], b: &[Command]) -> Vec<Command> {
    a.iter()
        .zip(b.iter())
        .map(|(a, b)| convert_to_same_type(a, b))
        .collect()
}

#[cfg(test)]
fn cmd(letter: char, values: &[f64]) -> Command {
    Command::from_letter(letter, values).unwrap()
}

#[test]
fn line_to_curves() {
    let line = cmd('L', &[0.0, 5.0]);

    assert_eq!(
        convert_to_same_type(&line, &cmd('C', &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0])),
        cmd('C', &[0.0, 5.0, 0.0, 5.0, 0.0, 5.0])
    );
    assert_eq!(
        convert_to_same_type(&line, &cmd('Q', &[1.0, 1.0, 2.0, 2.0])),
        cmd('Q', &[0.0, 5.0, 0.0, 5.0])
    );
    assert_eq!(
        convert_to_same_type(&line, &cmd('S', &[1.0, 1.0, 2.0, 2.0])),
        cmd('S', &[0.0, 5.0, 0.0, 5.0])
    );
    assert_eq!(
        convert_to_same_type(&line, &cmd('T', &[1.0, 1.0])),
        cmd('T', &[0.0, 5.0])
    );
}

#[test]
fn curves_to_lines() {
    let curve = cmd('C', &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(
        convert_to_same_type(&curve, &cmd('L', &[0.0, 0.0])),
        cmd('L', &[5.0, 6.0])
    );
    assert_eq!(
        convert_to_same_type(&curve, &cmd('H', &[0.0])),
        cmd('H', &[5.0])
    );
    assert_eq!(
        convert_to_same_type(&curve, &cmd('V', &[0.0])),
        cmd('V', &[6.0])
    );
    // Named parameters are kept.
    assert_eq!(
        convert_to_same_type(&curve, &cmd('S', &[0.0, 0.0, 0.0, 0.0])),
        cmd('S', &[3.0, 4.0, 5.0, 6.0])
    );
}

#[test]
fn missing_coordinates_are_zero() {
    assert_eq!(
        convert_to_same_type(&cmd('H', &[3.0]), &cmd('L', &[1.0, 1.0])),
        cmd('L', &[3.0, 0.0])
    );
    assert_eq!(
        convert_to_same_type(&cmd('V', &[5.0]), &cmd('C', &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0])),
        cmd('C', &[0.0, 5.0, 0.0, 5.0, 0.0, 5.0])
    );
}

#[test]
fn arcs() {
    let arc = cmd('A', &[10.0, 20.0, 45.0, 1.0, 0.0, 7.0, 8.0]);

    // Arc parameters missing from the source are read from the target.
    assert_eq!(
        convert_to_same_type(&cmd('L', &[1.0, 2.0]), &arc),
        cmd('A', &[0.0, 0.0, 45.0, 1.0, 0.0, 1.0, 2.0])
    );

    // And the ones the source has are kept.
    let other = cmd('a', &[1.0, 1.0, 0.0, 0.0, 1.0, 2.0, 2.0]);
    assert_eq!(
        convert_to_same_type(&other, &arc),
        cmd('A', &[1.0, 1.0, 0.0, 0.0, 1.0, 2.0, 2.0])
    );

    assert_eq!(
        convert_to_same_type(&arc, &cmd('L', &[0.0, 0.0])),
        cmd('L', &[7.0, 8.0])
    );
}

#[test]
fn unchanged() {
    let curve = cmd('C', &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(
        convert_to_same_type(&curve, &cmd('C', &[0.0; 6])),
        curve
    );
    // Nothing is converted into a move-to.
    assert_eq!(
        convert_to_same_type(&curve, &cmd('M', &[0.0, 0.0])),
        curve
    );
    assert_eq!(
        convert_to_same_type(&curve, &cmd('m', &[0.0, 0.0])),
        curve
    );
    // Unless explicitly asked.
    assert_eq!(
        convert_params(&curve.params, &Params::MoveTo { x: 0.0, y: 0.0 }),
        Params::MoveTo { x: 5.0, y: 6.0 }
    );
}

#[test]
fn relative_flag() {
    // Relative and absolute commands are different types.
    assert_eq!(
        convert_to_same_type(&cmd('l', &[1.0, 2.0]), &cmd('L', &[0.0, 0.0])),
        cmd('L', &[1.0, 2.0])
    );
    assert_eq!(
        convert_to_same_type(&cmd('L', &[1.0, 2.0]), &cmd('c', &[0.0; 6])),
        cmd('c', &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0])
    );
}

#[test]
fn pairwise() {
    let a = crate::path::parse("M2,2L3,3C4,4,4,4,4,4C5,5,5,5,5,5L6,6L7,7").unwrap();
    let b = crate::path::parse("M4,4C5,5,5,5,5,5L6,6S7,7,7,7H8V9").unwrap();

    let converted = reconcile(&a.commands, &b.commands);
    assert_eq!(
        crate::path::commands_to_string(&converted),
        "M2,2C3,3,3,3,3,3L4,4S5,5,5,5H6V7"
    );

    // Extra commands of either side are dropped.
    assert_eq!(reconcile(&a.commands, &b.commands[..2]).len(), 2);
}
