#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Algorithms to bring two paths to the same shape of command sequence so that
//! they can be interpolated parameter by parameter.
//!
//! - [`split`] subdivides a line or bézier segment into equal-parameter pieces.
//! - [`extend`] inserts points into the shorter of two paths until both have the
//!   same number of commands.
//! - [`reconcile`] converts commands to the type of their counterpart in the other
//!   path.
//!
//! This crate is reexported in [morph](../morph/index.html).

pub extern crate morph_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod extend;
pub mod reconcile;
pub mod split;

pub use crate::path::geom;
