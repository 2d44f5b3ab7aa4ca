use std::array;

use nalgebra::SVector;

use crate::elementwise;
use crate::error::Result;
use crate::points::Points;
use crate::vector::Vector;
use crate::Element;

/// Element-wise arithmetic shared by [`Vector`] and every type deriving
/// `NamedAxes`.
///
/// Implementors only expose the wrapped `Vector<T, N>` and rebuild
/// themselves from one. The provided methods run the shared element-wise
/// engine and wrap the result in `Self`, so `Vector3::add` returns a
/// `Vector3`.
///
/// Binary methods take any [`Points`] right hand side and return
/// [`MismatchedSizeError`](crate::MismatchedSizeError) when its length
/// differs from `N`. Operator overloads are implemented on the concrete
/// types and are not part of this trait, so `v.add(&w)` stays the checked
/// method in generic code.
pub trait FixedVector<T: Element, const N: usize>: Points<T> + Copy {
    fn as_vector(&self) -> &Vector<T, N>;

    fn from_vector(vector: Vector<T, N>) -> Self;

    fn from_points(points: [T; N]) -> Self {
        Self::from_vector(Vector::from_points(points))
    }

    /// Every one of the `N` points set to `value`.
    fn from_scalar(value: T) -> Self {
        Self::from_vector(Vector::from_scalar(value))
    }

    fn add<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<Self> {
        combine(self.as_vector(), rhs, |a, b| a + b)
    }

    fn sub<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<Self> {
        combine(self.as_vector(), rhs, |a, b| a - b)
    }

    fn mul<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<Self> {
        combine(self.as_vector(), rhs, |a, b| a * b)
    }

    /// Division by a zero point yields infinities or NaN, not an error.
    fn div<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<Self> {
        combine(self.as_vector(), rhs, |a, b| a / b)
    }

    /// Raises every point to `exponent`.
    fn pow(&self, exponent: T) -> Self {
        Self::from_points(elementwise::map(self.as_vector().as_array(), |point| {
            point.powf(exponent)
        }))
    }

    fn dot<R: Points<T> + ?Sized>(&self, rhs: &R) -> Result<T> {
        let vector = self.as_vector();
        elementwise::dot(vector.as_array(), vector.length(), rhs)
    }

    /// Magnitude: the square root of the dot product with itself.
    fn size(&self) -> T {
        elementwise::magnitude(self.as_vector().as_array())
    }

    fn sum(&self) -> T {
        elementwise::sum(self.points())
    }

    /// Every point divided by [`size`](Self::size). The zero vector
    /// normalizes to NaN points.
    fn unit(&self) -> Self {
        Self::from_points(elementwise::normalize(self.as_vector().as_array()))
    }

    fn to_svector(&self) -> SVector<T, N> {
        SVector::from(*self.as_vector().as_array())
    }

    fn from_svector(v: &SVector<T, N>) -> Self {
        Self::from_points(array::from_fn(|i| v[i]))
    }
}

fn combine<V, T, R, F, const N: usize>(lhs: &Vector<T, N>, rhs: &R, f: F) -> Result<V>
where
    V: FixedVector<T, N>,
    T: Element,
    R: Points<T> + ?Sized,
    F: Fn(T, T) -> T,
{
    elementwise::zip_with(lhs.as_array(), lhs.length(), rhs, f).map(V::from_points)
}
