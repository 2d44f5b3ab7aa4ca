//! The element-wise engine shared by every fixed-length vector type.
//!
//! Everything here is a pure function over a points array and the lengths
//! involved. Vector types wrap the arrays these functions return.

use std::array;

use crate::error::{MismatchedSizeError, Result};
use crate::log;
use crate::points::Points;
use crate::Element;

/// Fails with [`MismatchedSizeError`] unless both lengths agree.
pub fn ensure_same_length(lhs: usize, rhs: usize) -> Result<()> {
    if lhs != rhs {
        log::debug!(lhs, rhs, "rejecting operands with mismatched sizes");
        return Err(MismatchedSizeError::new(lhs, rhs));
    }
    Ok(())
}

/// Borrows the points of `rhs` as an array of `N` once its stored length
/// matches `lhs_length`.
///
/// A `rhs` whose slice disagrees with its own `length()` is rejected with the
/// slice length instead of being indexed out of bounds.
pub fn rhs_points<T, R, const N: usize>(lhs_length: usize, rhs: &R) -> Result<&[T; N]>
where
    T: Element,
    R: Points<T> + ?Sized,
{
    ensure_same_length(lhs_length, rhs.length())?;
    let points = rhs.points();
    points.try_into().map_err(|_| {
        log::debug!(
            reported = rhs.length(),
            actual = points.len(),
            "rejecting operand whose points disagree with its length"
        );
        MismatchedSizeError::new(lhs_length, points.len())
    })
}

/// Combines `lhs` and `rhs` pairwise after checking that `rhs` has
/// `lhs_length` points.
pub fn zip_with<T, R, F, const N: usize>(
    lhs: &[T; N],
    lhs_length: usize,
    rhs: &R,
    f: F,
) -> Result<[T; N]>
where
    T: Element,
    R: Points<T> + ?Sized,
    F: Fn(T, T) -> T,
{
    let rhs = rhs_points::<T, R, N>(lhs_length, rhs)?;
    Ok(zip_exact(lhs, rhs, f))
}

/// Pairwise combination of two arrays whose lengths agree by type.
pub fn zip_exact<T, F, const N: usize>(lhs: &[T; N], rhs: &[T; N], f: F) -> [T; N]
where
    T: Element,
    F: Fn(T, T) -> T,
{
    array::from_fn(|i| f(lhs[i], rhs[i]))
}

pub fn map<T, F, const N: usize>(points: &[T; N], f: F) -> [T; N]
where
    T: Element,
    F: Fn(T) -> T,
{
    (*points).map(f)
}

/// Folds `points` with addition starting from zero.
pub fn sum<T: Element>(points: &[T]) -> T {
    points.iter().fold(nalgebra::zero(), |acc, &point| acc + point)
}

/// Builds the element-wise product and reduces it with [`sum`].
pub fn dot<T, R, const N: usize>(lhs: &[T; N], lhs_length: usize, rhs: &R) -> Result<T>
where
    T: Element,
    R: Points<T> + ?Sized,
{
    let products = zip_with(lhs, lhs_length, rhs, |a, b| a * b)?;
    Ok(sum(&products))
}

/// Square root of the dot product of `points` with itself.
pub fn magnitude<T: Element, const N: usize>(points: &[T; N]) -> T {
    sum(&zip_exact(points, points, |a, b| a * b)).sqrt()
}

/// Divides every point by the magnitude. A zero vector gives NaN points.
pub fn normalize<T: Element, const N: usize>(points: &[T; N]) -> [T; N] {
    let size = magnitude(points);
    let zero: T = nalgebra::zero();
    if size == zero {
        log::trace!(length = N, "normalizing a zero-magnitude vector");
    }
    map(points, |point| point / size)
}
