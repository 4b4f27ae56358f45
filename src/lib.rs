#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Smooth transitions between SVG path descriptions.
//!
//! Given two paths, possibly with a different number of commands and different
//! command types, [`interpolate_path`] returns an interpolator that produces the
//! intermediate paths of an animated transition from the first to the second.
//!
//! ```
//! use morph::interpolate_path;
//!
//! let interpolator = interpolate_path(
//!     Some("M0,0L10,10L100,100"),
//!     Some("M10,10L20,20L200,200"),
//! ).unwrap();
//!
//! assert_eq!(interpolator.sample(0.5), "M5,5L15,15L150,150");
//! ```
//!
//! # Crates
//!
//! This meta-crate (`morph`) reexports the following sub-crates for convenience:
//!
//! * **morph_geom** - Points and de Casteljau subdivision of lines and bézier curves.
//! * **morph_path** - Path command model, parser and writer.
//! * **morph_algorithms** - Curve splitting, path extension and command type reconciliation.
//!
//! Each `morph_<name>` crate is reexported as a `<name>` module in `morph`. For example:
//!
//! ```ignore
//! extern crate morph_path;
//! use morph_path::PathData;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate morph;
//! use morph::path::PathData;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Logging
//!
//! The interpolators log the command counts of the paths they match at the `debug`
//! level and the matched paths at the `trace` level, using the `log` crate.

pub extern crate morph_algorithms;
pub extern crate morph_path;

pub use morph_algorithms as algorithms;
pub use morph_path as path;
pub use morph_path::geom;

pub mod interpolate;
pub mod tween;

#[doc(inline)]
pub use crate::interpolate::{
    interpolate_path, interpolate_path_data, interpolate_path_with, InterpolationOptions,
    PathDataInterpolator, PathInterpolator,
};
#[doc(inline)]
pub use crate::path::{ParseError, ParserOptions, PathData};
