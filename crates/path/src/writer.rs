//! Serializing commands back into path text.
//!
//! Commands are written as `{letter}{param1},{param2},...` without any whitespace,
//! for example `C1,2,3,4,5,6`. Numbers are written the way JavaScript's
//! `Number.prototype.toString` writes them (`0.5`, `10`, `NaN`) so that the output
//! of the interpolators can be compared as text.

use crate::command::Command;

use core::fmt;

/// Writes a number using the shortest representation that round-trips, without a
/// trailing `.0` for integers.
///
/// `-0` is written as `0`, `NaN` as `NaN` and infinities as `Infinity` and `-Infinity`.
pub fn format_number(value: f64, buffer: &mut ryu_js::Buffer) -> &str {
    if value == 0.0 {
        return "0";
    }

    buffer.format(value)
}

/// Appends the text of a command to a string.
pub fn write_command(output: &mut String, command: &Command) {
    let mut buffer = ryu_js::Buffer::new();

    output.push(command.letter());
    for (i, value) in command.values().iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(format_number(*value, &mut buffer));
    }
}

/// Appends the text of a sequence of commands to a string.
///
/// This never writes a closing `Z`.
pub fn write_commands(output: &mut String, commands: &[Command]) {
    for command in commands {
        write_command(output, command);
    }
}

/// The text of a sequence of commands, without a closing `Z`.
pub fn commands_to_string(commands: &[Command]) -> String {
    let mut output = String::new();
    write_commands(&mut output, commands);
    output
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();
        write_command(&mut output, self);
        f.write_str(&output)
    }
}

#[test]
fn numbers() {
    let mut buffer = ryu_js::Buffer::new();
    let mut fmt = |v: f64| format_number(v, &mut buffer).to_string();

    assert_eq!(fmt(0.0), "0");
    assert_eq!(fmt(-0.0), "0");
    assert_eq!(fmt(10.0), "10");
    assert_eq!(fmt(-5.0), "-5");
    assert_eq!(fmt(12.5), "12.5");
    assert_eq!(fmt(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(fmt(f64::NAN), "NaN");
    assert_eq!(fmt(f64::INFINITY), "Infinity");
}

#[test]
fn commands() {
    assert_eq!(
        commands_to_string(&[
            Command::move_to(0.0, 0.0),
            Command::cubic_to(0.5, 0.5, 1.0, 1.0, 1.625, 1.625),
            Command::line_to(-3.0, 4.0),
        ]),
        "M0,0C0.5,0.5,1,1,1.625,1.625L-3,4"
    );

    let arc = Command::from_letter('a', &[2.0, 2.0, 0.5, 0.5, 0.5, 2.0, 2.0]).unwrap();
    assert_eq!(arc.to_string(), "a2,2,0.5,0.5,0.5,2,2");

    let h = Command::from_letter('H', &[8.0]).unwrap();
    assert_eq!(h.to_string(), "H8");
}

#[test]
fn parse_then_write() {
    let src = "M2,2C3,3,3,3,3,3L4,4S5,5,5,5H6V7m1,1l2.5,-2.5q1,2,3,4t5,6a1,1,0,0,1,10,10";
    let path = crate::parser::parse(src).unwrap();
    assert_eq!(commands_to_string(&path.commands), src);
}
