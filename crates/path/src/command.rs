//! The path command model.
//!
//! A path is a sequence of [`Command`]s. Each command is a [`Params`] payload
//! (the parameters of one of the SVG path commands, with named fields) and a
//! `relative` flag corresponding to the lower-case spelling of the command
//! letter.
//!
//! Relative commands are kept as distinct types: `l` is not converted into `L`.
//!
//! The closing `Z` command is not part of this model, see [`PathData`](crate::PathData).

use crate::geom::arrayvec::ArrayVec;

/// The kind of a path command, regardless of whether it is relative or absolute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CommandKind {
    /// `M x,y`
    MoveTo,
    /// `L x,y`
    LineTo,
    /// `H x`
    HorizontalLineTo,
    /// `V y`
    VerticalLineTo,
    /// `C x1,y1,x2,y2,x,y`
    CubicTo,
    /// `S x2,y2,x,y`
    SmoothCubicTo,
    /// `Q x1,y1,x,y`
    QuadraticTo,
    /// `T x,y`
    SmoothQuadraticTo,
    /// `A rx,ry,xAxisRotation,largeArcFlag,sweepFlag,x,y`
    ArcTo,
}

impl CommandKind {
    /// Looks up a command letter.
    ///
    /// Returns the kind and whether the letter denotes a relative command, or `None`
    /// if the character is not a command letter. The closing `Z` has no kind.
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicTo,
            'S' => CommandKind::SmoothCubicTo,
            'Q' => CommandKind::QuadraticTo,
            'T' => CommandKind::SmoothQuadraticTo,
            'A' => CommandKind::ArcTo,
            _ => {
                return None;
            }
        };

        Some((kind, letter.is_ascii_lowercase()))
    }

    pub fn letter(self, relative: bool) -> char {
        let letter = match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::QuadraticTo => 'Q',
            CommandKind::SmoothQuadraticTo => 'T',
            CommandKind::ArcTo => 'A',
        };

        if relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// Names of the parameters in the order in which they are written.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticTo => {
                &["x", "y"]
            }
            CommandKind::HorizontalLineTo => &["x"],
            CommandKind::VerticalLineTo => &["y"],
            CommandKind::CubicTo => &["x1", "y1", "x2", "y2", "x", "y"],
            CommandKind::SmoothCubicTo => &["x2", "y2", "x", "y"],
            CommandKind::QuadraticTo => &["x1", "y1", "x", "y"],
            CommandKind::ArcTo => &[
                "rx",
                "ry",
                "xAxisRotation",
                "largeArcFlag",
                "sweepFlag",
                "x",
                "y",
            ],
        }
    }

    /// Number of parameters.
    #[inline]
    pub fn arity(self) -> usize {
        self.param_names().len()
    }
}

/// Parameters of a path command.
///
/// Arc flags are stored as floating point numbers because they are
/// interpolated like every other parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Params {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    HorizontalLineTo {
        x: f64,
    },
    VerticalLineTo {
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCubicTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc_flag: f64,
        sweep_flag: f64,
        x: f64,
        y: f64,
    },
}

impl Params {
    pub fn kind(&self) -> CommandKind {
        match self {
            Params::MoveTo { .. } => CommandKind::MoveTo,
            Params::LineTo { .. } => CommandKind::LineTo,
            Params::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            Params::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            Params::CubicTo { .. } => CommandKind::CubicTo,
            Params::SmoothCubicTo { .. } => CommandKind::SmoothCubicTo,
            Params::QuadraticTo { .. } => CommandKind::QuadraticTo,
            Params::SmoothQuadraticTo { .. } => CommandKind::SmoothQuadraticTo,
            Params::ArcTo { .. } => CommandKind::ArcTo,
        }
    }

    /// Builds the parameters of a command of a given kind from its values, in the
    /// order of [`CommandKind::param_names`].
    ///
    /// Missing values are `NaN`, extra values are ignored.
    pub fn from_values(kind: CommandKind, values: &[f64]) -> Self {
        let v = |i: usize| values.get(i).cloned().unwrap_or(f64::NAN);
        match kind {
            CommandKind::MoveTo => Params::MoveTo { x: v(0), y: v(1) },
            CommandKind::LineTo => Params::LineTo { x: v(0), y: v(1) },
            CommandKind::HorizontalLineTo => Params::HorizontalLineTo { x: v(0) },
            CommandKind::VerticalLineTo => Params::VerticalLineTo { y: v(0) },
            CommandKind::CubicTo => Params::CubicTo {
                x1: v(0),
                y1: v(1),
                x2: v(2),
                y2: v(3),
                x: v(4),
                y: v(5),
            },
            CommandKind::SmoothCubicTo => Params::SmoothCubicTo {
                x2: v(0),
                y2: v(1),
                x: v(2),
                y: v(3),
            },
            CommandKind::QuadraticTo => Params::QuadraticTo {
                x1: v(0),
                y1: v(1),
                x: v(2),
                y: v(3),
            },
            CommandKind::SmoothQuadraticTo => Params::SmoothQuadraticTo { x: v(0), y: v(1) },
            CommandKind::ArcTo => Params::ArcTo {
                rx: v(0),
                ry: v(1),
                x_axis_rotation: v(2),
                large_arc_flag: v(3),
                sweep_flag: v(4),
                x: v(5),
                y: v(6),
            },
        }
    }

    /// The parameter values in the order of [`CommandKind::param_names`].
    pub fn values(&self) -> ArrayVec<f64, 7> {
        let mut values = ArrayVec::new();
        match *self {
            Params::MoveTo { x, y }
            | Params::LineTo { x, y }
            | Params::SmoothQuadraticTo { x, y } => {
                values.push(x);
                values.push(y);
            }
            Params::HorizontalLineTo { x } => values.push(x),
            Params::VerticalLineTo { y } => values.push(y),
            Params::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                values.push(x1);
                values.push(y1);
                values.push(x2);
                values.push(y2);
                values.push(x);
                values.push(y);
            }
            Params::SmoothCubicTo { x2, y2, x, y } => {
                values.push(x2);
                values.push(y2);
                values.push(x);
                values.push(y);
            }
            Params::QuadraticTo { x1, y1, x, y } => {
                values.push(x1);
                values.push(y1);
                values.push(x);
                values.push(y);
            }
            Params::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
                x,
                y,
            } => {
                values.push(rx);
                values.push(ry);
                values.push(x_axis_rotation);
                values.push(large_arc_flag);
                values.push(sweep_flag);
                values.push(x);
                values.push(y);
            }
        }

        values
    }

    /// The x coordinate of the endpoint, if the command has one.
    pub fn x(&self) -> Option<f64> {
        match *self {
            Params::VerticalLineTo { .. } => None,
            Params::MoveTo { x, .. }
            | Params::LineTo { x, .. }
            | Params::HorizontalLineTo { x }
            | Params::CubicTo { x, .. }
            | Params::SmoothCubicTo { x, .. }
            | Params::QuadraticTo { x, .. }
            | Params::SmoothQuadraticTo { x, .. }
            | Params::ArcTo { x, .. } => Some(x),
        }
    }

    /// The y coordinate of the endpoint, if the command has one.
    pub fn y(&self) -> Option<f64> {
        match *self {
            Params::HorizontalLineTo { .. } => None,
            Params::MoveTo { y, .. }
            | Params::LineTo { y, .. }
            | Params::VerticalLineTo { y }
            | Params::CubicTo { y, .. }
            | Params::SmoothCubicTo { y, .. }
            | Params::QuadraticTo { y, .. }
            | Params::SmoothQuadraticTo { y, .. }
            | Params::ArcTo { y, .. } => Some(y),
        }
    }
}

/// A single path command.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Command {
    /// Whether the command was written with a lower-case letter.
    pub relative: bool,
    pub params: Params,
}

impl Command {
    #[inline]
    pub fn absolute(params: Params) -> Self {
        Command {
            relative: false,
            params,
        }
    }

    #[inline]
    pub fn relative(params: Params) -> Self {
        Command {
            relative: true,
            params,
        }
    }

    /// `Mx,y`
    pub fn move_to(x: f64, y: f64) -> Self {
        Command::absolute(Params::MoveTo { x, y })
    }

    /// `Lx,y`
    pub fn line_to(x: f64, y: f64) -> Self {
        Command::absolute(Params::LineTo { x, y })
    }

    /// `Cx1,y1,x2,y2,x,y`
    pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        Command::absolute(Params::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        })
    }

    /// Builds a command from its letter and parameter values.
    ///
    /// Returns `None` if `letter` is not a command letter.
    pub fn from_letter(letter: char, values: &[f64]) -> Option<Self> {
        let (kind, relative) = CommandKind::from_letter(letter)?;
        Some(Command {
            relative,
            params: Params::from_values(kind, values),
        })
    }

    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.params.kind()
    }

    #[inline]
    pub fn letter(&self) -> char {
        self.kind().letter(self.relative)
    }

    /// Two commands have the same type if they have the same kind and are both
    /// relative or both absolute.
    #[inline]
    pub fn has_same_type(&self, other: &Command) -> bool {
        self.relative == other.relative && self.kind() == other.kind()
    }

    /// `M` or `m`.
    #[inline]
    pub fn is_move_to(&self) -> bool {
        self.kind() == CommandKind::MoveTo
    }

    #[inline]
    pub fn values(&self) -> ArrayVec<f64, 7> {
        self.params.values()
    }

    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.params.x()
    }

    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.params.y()
    }

    /// Turns an absolute move-to into a line-to with the same endpoint.
    ///
    /// Any other command is returned unchanged. Only the first command of a
    /// path can be a move-to when copies of a command are inserted.
    pub fn move_to_as_line_to(self) -> Self {
        match self {
            Command {
                relative: false,
                params: Params::MoveTo { x, y },
            } => Command::line_to(x, y),
            other => other,
        }
    }
}

#[test]
fn letters() {
    for &letter in &['M', 'L', 'H', 'V', 'C', 'S', 'Q', 'T', 'A'] {
        let (kind, relative) = CommandKind::from_letter(letter).unwrap();
        assert!(!relative);
        assert_eq!(kind.letter(false), letter);

        let lower = letter.to_ascii_lowercase();
        let (kind, relative) = CommandKind::from_letter(lower).unwrap();
        assert!(relative);
        assert_eq!(kind.letter(true), lower);
    }

    assert_eq!(CommandKind::from_letter('Z'), None);
    assert_eq!(CommandKind::from_letter('x'), None);
    assert_eq!(CommandKind::from_letter('e'), None);
}

#[test]
fn values_roundtrip_through_kind() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    for &letter in &['M', 'L', 'H', 'V', 'C', 'S', 'Q', 'T', 'A'] {
        let cmd = Command::from_letter(letter, &values).unwrap();
        let arity = cmd.kind().arity();
        assert_eq!(&cmd.values()[..], &values[..arity]);
        assert_eq!(cmd.letter(), letter);
    }
}

#[test]
fn missing_values_are_nan() {
    let cmd = Command::from_letter('C', &[1.0, 2.0]).unwrap();
    let values = cmd.values();
    assert_eq!(values.len(), 6);
    assert_eq!(&values[..2], &[1.0, 2.0]);
    assert!(values[2..].iter().all(|v| v.is_nan()));
}

#[test]
fn endpoints() {
    assert_eq!(Command::line_to(1.0, 2.0).x(), Some(1.0));
    assert_eq!(Command::line_to(1.0, 2.0).y(), Some(2.0));

    let h = Command::from_letter('H', &[3.0]).unwrap();
    assert_eq!(h.x(), Some(3.0));
    assert_eq!(h.y(), None);

    let v = Command::from_letter('v', &[4.0]).unwrap();
    assert_eq!(v.x(), None);
    assert_eq!(v.y(), Some(4.0));
}

#[test]
fn same_type() {
    let l = Command::line_to(0.0, 0.0);
    let rel_l = Command::relative(Params::LineTo { x: 0.0, y: 0.0 });

    assert!(l.has_same_type(&Command::line_to(5.0, 5.0)));
    assert!(!l.has_same_type(&rel_l));
    assert!(!l.has_same_type(&Command::move_to(0.0, 0.0)));
}

#[test]
fn move_to_as_line_to() {
    assert_eq!(
        Command::move_to(1.0, 2.0).move_to_as_line_to(),
        Command::line_to(1.0, 2.0)
    );

    let rel_m = Command::relative(Params::MoveTo { x: 1.0, y: 2.0 });
    assert_eq!(rel_m.move_to_as_line_to(), rel_m);

    let c = Command::cubic_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
    assert_eq!(c.move_to_as_line_to(), c);
}
