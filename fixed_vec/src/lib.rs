//! Fixed-length numeric vectors.
//!
//! [`Vector<T, N>`] carries its length in the type; [`Vector2`], [`Vector3`]
//! and [`Vector4`] wrap it with named axes. Arithmetic comes from
//! [`FixedVector`], whose methods return the implementing type and check
//! operand lengths at runtime, and from the operator overloads, which only
//! accept operands of the same type.
//!
//! ```
//! use fixed_vec::prelude::*;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.dot(&b).unwrap(), 32.0);
//!
//! let err = Vector::from_points([1.0, 2.0])
//!     .add(&Vector::from_points([1.0, 2.0, 3.0]))
//!     .unwrap_err();
//! assert_eq!((err.lhs(), err.rhs()), (2, 3));
//! ```

// Lets `NamedAxes` expansions inside this crate resolve `::fixed_vec`.
extern crate self as fixed_vec;

mod element;
pub mod elementwise;
mod error;
mod fixed;
mod log;
mod named;
mod ops;
mod points;
mod vector;

pub use element::Element;
pub use error::{MismatchedSizeError, Result};
pub use fixed::FixedVector;
pub use fixed_vec_derive::NamedAxes;
pub use named::{Vector2, Vector3, Vector4};
pub use points::Points;
pub use vector::Vector;

pub mod prelude {
    pub use crate::{
        FixedVector, MismatchedSizeError, NamedAxes, Points, Vector, Vector2, Vector3, Vector4,
    };
}
