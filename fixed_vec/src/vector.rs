use std::fmt;
use std::ops::Index;
use std::slice;

use nalgebra::SVector;

use crate::fixed::FixedVector;
use crate::points::Points;
use crate::Element;

/// A fixed-length sequence of `N` points.
///
/// The length is stored next to the points and always equals `N`; binary
/// operations compare stored lengths before combining anything. Arithmetic
/// lives on [`FixedVector`] and returns new vectors. A `Vector` has no
/// public way to mutate a single point; the named variants add setters
/// for their axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    points: [T; N],
    length: usize,
}

impl<T, const N: usize> Vector<T, N> {
    pub fn from_points(points: [T; N]) -> Self {
        Self { points, length: N }
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.points
    }

    pub fn into_array(self) -> [T; N] {
        self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.points.iter()
    }

    // Backs the setters generated by `NamedAxes`; not part of the API.
    #[doc(hidden)]
    pub fn __axis_mut(&mut self, index: usize) -> &mut T {
        &mut self.points[index]
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    pub fn from_scalar(value: T) -> Self {
        Self::from_points([value; N])
    }
}

impl<T, const N: usize> Points<T> for Vector<T, N> {
    fn points(&self) -> &[T] {
        &self.points
    }

    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Element, const N: usize> FixedVector<T, N> for Vector<T, N> {
    fn as_vector(&self) -> &Vector<T, N> {
        self
    }

    fn from_vector(vector: Vector<T, N>) -> Self {
        vector
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.points[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(points: [T; N]) -> Self {
        Self::from_points(points)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.points
    }
}

impl<T: Element, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        Self::from_svector(&v)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(vector: Vector<T, N>) -> Self {
        vector.to_svector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_length_matches_points() {
        let v = Vector::from_points([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(v.length(), 5);
        assert_eq!(v.points().len(), v.length());
    }

    #[test]
    fn from_scalar_fills_every_point() {
        let v = Vector::<f64, 4>::from_scalar(7.5);
        assert_eq!(v.points(), &[7.5; 4]);
        assert_eq!(v.length(), 4);
    }

    #[test]
    fn index_reads_points() {
        let v = Vector::from_points([4.0, 5.0, 6.0]);
        assert_eq!(v[0], 4.0);
        assert_eq!(v[2], 6.0);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let v = Vector::from_points([4.0, 5.0]);
        let _ = v[2];
    }

    #[test]
    fn display_lists_points() {
        assert_eq!(Vector::from_points([1.0, -2.5, 3.0]).to_string(), "(1, -2.5, 3)");
        assert_eq!(Vector::<f64, 0>::from_points([]).to_string(), "()");
    }

    #[test]
    fn array_conversions() {
        let v: Vector<f64, 2> = [1.0, 2.0].into();
        let points: [f64; 2] = v.into();
        assert_eq!(points, [1.0, 2.0]);
        assert_eq!(v.into_array(), [1.0, 2.0]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn svector_conversions() {
        let v = Vector::from_points([1.0, 2.0, 3.0]);
        let s: SVector<f64, 3> = v.into();
        assert_eq!(s, SVector::<f64, 3>::new(1.0, 2.0, 3.0));
        assert_eq!(Vector::from(s), v);
    }
}
