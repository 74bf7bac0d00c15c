//! # Scalar Leaves
//!
//! The interop layer carries five leaf kinds: boolean, integer, real,
//! complex, and text. Four of them map onto Rust primitives. Complex values
//! get a plain two-field struct so they compare, print, and serialize the
//! same way the other leaves do.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A double-precision complex number.
///
/// Equality is component-wise and exact. Either component being NaN makes
/// the value unequal to everything, itself included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Build a complex number from its components.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// True if either component is NaN.
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}
