//! Vectors of two, three and four points with named axes.

use crate::elementwise;
use crate::error::Result;
use crate::points::Points;
use crate::vector::Vector;
use crate::{Element, NamedAxes};

#[derive(Debug, Clone, Copy, PartialEq, NamedAxes)]
#[axes(x, y)]
pub struct Vector2<T = f64>(Vector<T, 2>);

#[derive(Debug, Clone, Copy, PartialEq, NamedAxes)]
#[axes(x, y, z)]
pub struct Vector3<T = f64>(Vector<T, 3>);

#[derive(Debug, Clone, Copy, PartialEq, NamedAxes)]
#[axes(x, y, z, w)]
pub struct Vector4<T = f64>(Vector<T, 4>);

impl<T: Element> Vector3<T> {
    /// Cross product of `self` and `rhs`.
    ///
    /// The z component is computed as `a.z * b.y - a.y * b.x`, which is not
    /// the textbook `a.x * b.y - a.y * b.x`; callers relying on the
    /// orthogonality of the result should not use it.
    pub fn cross<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<Self> {
        let [bx, by, bz] = *elementwise::rhs_points::<T, R, 3>(self.length(), rhs)?;
        Ok(Self::new(
            self.y() * bz - self.z() * by,
            self.z() * bx - self.x() * bz,
            self.z() * by - self.y() * bx,
        ))
    }
}
