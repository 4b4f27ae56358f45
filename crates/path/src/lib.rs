#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::len_without_is_empty)]

//! Data structures to parse, store and write path descriptions (the `d` attribute
//! of SVG `<path>` elements).
//!
//! This crate is reexported in [morph](../morph/index.html).
//!
//! # Examples
//!
//! ```
//! # extern crate morph_path;
//! # fn main() {
//! use morph_path::{Command, PathData};
//!
//! let path: PathData = "M 0 0 L 10 10 C 1,2,3,4,5,6 Z".parse().unwrap();
//!
//! assert_eq!(path.commands[1], Command::line_to(10.0, 10.0));
//! assert!(path.closed);
//!
//! // Commands are written back without whitespace, parameters separated by commas.
//! assert_eq!(path.to_string(), "M0,0L10,10C1,2,3,4,5,6Z");
//! # }
//! ```

pub use morph_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod command;
pub mod parser;
pub mod path;
pub mod writer;

#[doc(inline)]
pub use crate::command::{Command, CommandKind, Params};
#[doc(inline)]
pub use crate::parser::{parse, parse_with_options, ParseError, ParserOptions};
#[doc(inline)]
pub use crate::path::PathData;
#[doc(inline)]
pub use crate::writer::{commands_to_string, format_number, write_commands};
