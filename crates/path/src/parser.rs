//! Parsing path text into a [`PathData`].
//!
//! # Syntax
//!
//! A path is a sequence of command letters (`M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T`, `A`
//! and their relative lower-case variants), each followed by its parameters. Parameters
//! are separated by commas and/or whitespace. Whitespace is allowed anywhere between
//! tokens, including right after a command letter.
//!
//! `Z` and `z` are removed wherever they appear. They only matter at the very end of
//! the path, where they mark the path as closed.
//!
//! The parser is tolerant by default: a missing parameter, or one that is not a valid
//! number, is read as `NaN`. See [`ParserOptions::strict`] to report these as errors
//! instead. Unknown command letters are always an error.

use crate::command::{Command, CommandKind, Params};
use crate::path::PathData;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Column {column}: Invalid command {command:?}.")]
    InvalidCommand { command: char, column: usize },
    #[error("Column {column}: Command {command:?} expects {expected} parameters, got {found}.")]
    ArityMismatch {
        command: char,
        expected: usize,
        found: usize,
        column: usize,
    },
    #[error("Column {column}: Expected number, got {src:?}.")]
    Number { src: String, column: usize },
    #[error("Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo { command: char, column: usize },
}

#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Report missing parameters, invalid numbers and paths that do not begin
    /// with a move-to instead of silently reading `NaN`.
    ///
    /// Default value: `false`.
    pub strict: bool,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions { strict: false };

    pub const STRICT: ParserOptions = ParserOptions { strict: true };

    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses a path with the default (tolerant) options.
pub fn parse(src: &str) -> Result<PathData, ParseError> {
    PathParser::new().parse(&ParserOptions::DEFAULT, src)
}

/// Parses a path.
pub fn parse_with_options(src: &str, options: &ParserOptions) -> Result<PathData, ParseError> {
    PathParser::new().parse(options, src)
}

/// Whether the last non-whitespace character of the path text closes the path.
pub fn ends_with_close(src: &str) -> bool {
    src.trim_end().ends_with(|c| c == 'Z' || c == 'z')
}

struct PendingCommand {
    letter: char,
    kind: CommandKind,
    relative: bool,
    column: usize,
}

/// A context object for parsing paths.
///
/// Keeps its buffers around so that they can be reused across several paths.
#[derive(Default)]
pub struct PathParser {
    float_buffer: String,
    float_column: usize,
    values: Vec<f64>,
    current: Option<PendingCommand>,
    commands: Vec<Command>,
    strict: bool,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, options: &ParserOptions, src: &str) -> Result<PathData, ParseError> {
        self.strict = options.strict;
        self.float_buffer.clear();
        self.values.clear();
        self.current = None;
        self.commands.clear();

        for (column, c) in src.chars().enumerate() {
            if c == 'Z' || c == 'z' {
                self.end_number()?;
                continue;
            }

            if let Some((kind, relative)) = CommandKind::from_letter(c) {
                self.end_command()?;
                self.begin_command(PendingCommand {
                    letter: c,
                    kind,
                    relative,
                    column,
                })?;
                continue;
            }

            if c.is_whitespace() || c == ',' {
                self.end_number()?;
                continue;
            }

            let exponent = (c == 'e' || c == 'E') && !self.float_buffer.is_empty();
            if self.current.is_none() || (c.is_alphabetic() && !exponent) {
                return Err(ParseError::InvalidCommand { command: c, column });
            }

            if self.float_buffer.is_empty() {
                self.float_column = column;
            }
            self.float_buffer.push(c);
        }

        self.end_command()?;

        Ok(PathData {
            commands: std::mem::take(&mut self.commands),
            closed: ends_with_close(src),
        })
    }

    fn begin_command(&mut self, cmd: PendingCommand) -> Result<(), ParseError> {
        if self.strict && self.commands.is_empty() && cmd.kind != CommandKind::MoveTo {
            return Err(ParseError::MissingMoveTo {
                command: cmd.letter,
                column: cmd.column,
            });
        }

        self.current = Some(cmd);

        Ok(())
    }

    fn end_number(&mut self) -> Result<(), ParseError> {
        if self.float_buffer.is_empty() {
            return Ok(());
        }

        let value = match self.float_buffer.parse::<f64>() {
            Ok(value) => value,
            Err(_) if self.strict => {
                return Err(ParseError::Number {
                    src: std::mem::take(&mut self.float_buffer),
                    column: self.float_column,
                });
            }
            Err(_) => f64::NAN,
        };

        self.values.push(value);
        self.float_buffer.clear();

        Ok(())
    }

    fn end_command(&mut self) -> Result<(), ParseError> {
        self.end_number()?;

        let cmd = match self.current.take() {
            Some(cmd) => cmd,
            None => {
                return Ok(());
            }
        };

        let expected = cmd.kind.arity();
        if self.strict && self.values.len() != expected {
            return Err(ParseError::ArityMismatch {
                command: cmd.letter,
                expected,
                found: self.values.len(),
                column: cmd.column,
            });
        }

        self.commands.push(Command {
            relative: cmd.relative,
            params: Params::from_values(cmd.kind, &self.values),
        });
        self.values.clear();

        Ok(())
    }
}

#[test]
fn empty() {
    assert_eq!(parse("").unwrap(), PathData::new());
    assert_eq!(parse("   \n\t").unwrap(), PathData::new());
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn simple_lines() {
    let path = parse("M0,0L10,10L100,100").unwrap();
    assert_eq!(
        path.commands,
        vec![
            Command::move_to(0.0, 0.0),
            Command::line_to(10.0, 10.0),
            Command::line_to(100.0, 100.0),
        ]
    );
    assert!(!path.closed);
}

#[test]
fn whitespace() {
    let expected = parse("M0,0L10,10L100,100").unwrap();

    // Space separated parameters, spaces after the command letters.
    assert_eq!(parse("M 0 0 L 10 10 L 100 100").unwrap(), expected);
    // Leading and trailing whitespace.
    assert_eq!(parse("       M0,0L10,10L100,100").unwrap(), expected);
    assert_eq!(parse("\n\n  \tM0,0L10,10L100,100  \n").unwrap(), expected);
    // Whitespace between commands and mixed separators.
    assert_eq!(parse("M0,0 L10 , 10   L100,100").unwrap(), expected);
}

#[test]
fn relative_commands_are_preserved() {
    let path = parse("m1,2l3,4h5v6c1,2,3,4,5,6s1,2,3,4q1,2,3,4t1,2a1,2,3,0,1,4,5").unwrap();
    let letters: String = path.commands.iter().map(|cmd| cmd.letter()).collect();
    assert_eq!(letters, "mlhvcsqta");
    assert!(path.commands.iter().all(|cmd| cmd.relative));
}

#[test]
fn numbers() {
    let path = parse("M-10.5,.25L1e2,-1E-1L+3,4.").unwrap();
    assert_eq!(
        path.commands,
        vec![
            Command::move_to(-10.5, 0.25),
            Command::line_to(100.0, -0.1),
            Command::line_to(3.0, 4.0),
        ]
    );
}

#[test]
fn close() {
    let path = parse("M0,0L1,1Z").unwrap();
    assert!(path.closed);
    assert_eq!(path.commands.len(), 2);

    assert!(parse("M0,0L1,1z  ").unwrap().closed);

    // A Z in the middle of the path is removed but does not close it.
    let path = parse("M0,0L1,1ZM5,5L6,6").unwrap();
    assert!(!path.closed);
    assert_eq!(path.commands.len(), 4);
}

#[test]
fn invalid_cmd() {
    assert_eq!(
        parse("M0,0X1,1"),
        Err(ParseError::InvalidCommand {
            command: 'X',
            column: 4
        })
    );

    // Parameters before the first command.
    assert_eq!(
        parse(" 10,10L1,1"),
        Err(ParseError::InvalidCommand {
            command: '1',
            column: 1
        })
    );

    // Invalid in strict mode too.
    assert!(matches!(
        parse_with_options("M0,0 x 1 1", &ParserOptions::STRICT),
        Err(ParseError::InvalidCommand { command: 'x', .. })
    ));
}

#[test]
fn tolerant_arity() {
    let path = parse("M0L1,2,3C1,2").unwrap();

    assert_eq!(path.commands[0].x(), Some(0.0));
    assert!(path.commands[0].y().unwrap().is_nan());
    // Extra parameters are ignored.
    assert_eq!(path.commands[1], Command::line_to(1.0, 2.0));
    let values = path.commands[2].values();
    assert_eq!(&values[..2], &[1.0, 2.0]);
    assert!(values[2..].iter().all(|v| v.is_nan()));
}

#[test]
fn tolerant_numbers() {
    let path = parse("M0,--1").unwrap();
    assert_eq!(path.commands[0].x(), Some(0.0));
    assert!(path.commands[0].y().unwrap().is_nan());
}

#[test]
fn strict() {
    let options = ParserOptions::DEFAULT.with_strict(true);

    assert_eq!(
        parse_with_options("M0,0L1", &options),
        Err(ParseError::ArityMismatch {
            command: 'L',
            expected: 2,
            found: 1,
            column: 4,
        })
    );

    assert_eq!(
        parse_with_options("M0,0L1,2,3", &options),
        Err(ParseError::ArityMismatch {
            command: 'L',
            expected: 2,
            found: 3,
            column: 4,
        })
    );

    assert_eq!(
        parse_with_options("M0,1e", &options),
        Err(ParseError::Number {
            src: "1e".to_string(),
            column: 3,
        })
    );

    assert_eq!(
        parse_with_options("L0,0", &options),
        Err(ParseError::MissingMoveTo {
            command: 'L',
            column: 0,
        })
    );

    assert!(parse_with_options("m0,0l1,1Z", &options).unwrap().closed);
}

#[test]
fn error_messages() {
    let err = ParseError::InvalidCommand {
        command: 'X',
        column: 4,
    };
    assert_eq!(err.to_string(), "Column 4: Invalid command 'X'.");
}

#[test]
fn parser_reuse() {
    let mut parser = PathParser::new();
    let options = ParserOptions::DEFAULT;

    assert!(parser.parse(&options, "M0,0X").is_err());
    // State from the failed parse does not leak into the next one.
    let path = parser.parse(&options, "M1,1L2,2").unwrap();
    assert_eq!(path.commands.len(), 2);
}
