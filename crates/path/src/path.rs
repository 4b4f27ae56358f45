//! A parsed path: a sequence of commands and whether it ends with `Z`.

use crate::command::Command;
use crate::parser::{parse, ParseError};
use crate::writer::write_commands;

use core::fmt;
use core::str::FromStr;

/// A sequence of path commands.
///
/// The closing `Z` is not stored as a command: it is only meaningful at the end
/// of the path and is tracked by the `closed` flag.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathData {
    pub commands: Vec<Command>,
    pub closed: bool,
}

impl PathData {
    pub fn new() -> Self {
        PathData::default()
    }

    pub fn from_commands(commands: Vec<Command>, closed: bool) -> Self {
        PathData { commands, closed }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn first(&self) -> Option<&Command> {
        self.commands.first()
    }
}

impl<'l> IntoIterator for &'l PathData {
    type Item = &'l Command;
    type IntoIter = core::slice::Iter<'l, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for PathData {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, ParseError> {
        parse(src)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();
        write_commands(&mut output, &self.commands);
        if self.closed {
            output.push('Z');
        }

        f.write_str(&output)
    }
}

#[test]
fn display() {
    let path = PathData::from_commands(
        vec![Command::move_to(0.0, 0.0), Command::line_to(1.0, 1.0)],
        true,
    );

    assert_eq!(path.to_string(), "M0,0L1,1Z");
    assert_eq!(PathData::new().to_string(), "");
}

#[test]
fn roundtrip() {
    for &src in &[
        "M0,0L10,10L100,100",
        "M10,10L20,20Z",
        "M0,0C1,1,2,2,4,4C3,3,4,4,6,6",
        "M4,4C5,5,5,5,5,5L6,6S7,7,7,7H8V9",
        "M0,0m0,0L0,0l0,0H0V0Q0,0,0,0q0,0,0,0C0,0,0,0,0,0c0,0,0,0,0,0T0,0t0,0S0,0,0,0s0,0,0,0A0,0,0,0,0,0,0",
    ] {
        let path: PathData = src.parse().unwrap();
        assert_eq!(path.to_string(), src);
    }
}

#[test]
fn iterate() {
    let path: PathData = "M0,0L1,1L2,2".parse().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.first(), Some(&Command::move_to(0.0, 0.0)));
    assert_eq!((&path).into_iter().filter(|cmd| cmd.is_move_to()).count(), 1);
}
