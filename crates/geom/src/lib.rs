#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [morph](../morph/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths needed to subdivide the segments of a path
//! without changing their shape:
//!
//! - line segments, quadratic and cubic bézier curves represented as lists of
//!   control points ([`BezierSegment`]),
//! - de Casteljau's algorithm to split a curve at a given `t`,
//! - subdivision of a curve into `n` pieces covering equal parameter intervals.
//!
//! # Subdivision
//!
//! Subdividing a curve produces more endpoints while tracing the exact same shape.
//! This is what lets two paths with a different number of commands be matched
//! point by point before being interpolated.
//!
//! <svg viewBox="0 0 120 30" height="30mm" width="120mm" xmlns="http://www.w3.org/2000/svg">
//!   <path d="M5 25C25 0 45 0 55 25" fill="none" stroke="#000"/>
//!   <path d="M65 25C71.7 16.7 77.8 11.1 83.3 10.2C88.9 9.3 94 13.9 98.3 19.5C102.6 25 105 25 115 25" fill="none" stroke="#55d400"/>
//! </svg>

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

pub mod bezier;

#[doc(inline)]
pub use crate::bezier::BezierSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float + NumCast + Sized + Display + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
