use std::fmt;

use nalgebra::{RealField, Scalar};

/// Scalar type a vector can hold: `f32`, `f64`, or any other copyable
/// real field.
pub trait Element: RealField + Scalar + Copy + fmt::Debug + fmt::Display {}

impl<T> Element for T where T: RealField + Scalar + Copy + fmt::Debug + fmt::Display {}
