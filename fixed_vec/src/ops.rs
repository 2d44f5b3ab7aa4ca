//! Operator overloads for [`Vector`].
//!
//! Both operands share `N` by type, so these never fail. The fallible
//! methods on [`FixedVector`](crate::FixedVector) are the ones that accept
//! right hand sides of any length.

use std::ops;

use crate::elementwise;
use crate::vector::Vector;
use crate::Element;

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element, const N: usize> ops::$trait for Vector<T, N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Vector::from_points(elementwise::zip_exact(
                    self.as_array(),
                    rhs.as_array(),
                    |a, b| a $op b,
                ))
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);
impl_elementwise_op!(Mul, mul, *);
impl_elementwise_op!(Div, div, /);

impl<T: Element, const N: usize> ops::Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Vector::from_points(elementwise::map(self.as_array(), |point| point * rhs))
    }
}

impl<T: Element, const N: usize> ops::Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Vector::from_points(elementwise::map(self.as_array(), |point| point / rhs))
    }
}

impl<T: Element, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Vector::from_points(elementwise::map(self.as_array(), |point| -point))
    }
}

impl<T: Element, const N: usize> ops::AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element, const N: usize> ops::SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element, const N: usize> ops::MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
