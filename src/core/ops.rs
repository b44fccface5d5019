use anyhow::Result;
use num_traits::One;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Array;

// --- Standard binary operations ---

macro_rules! binary_ops {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T> $trait for Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: Array<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait for &Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: &Array<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<Array<T>> for &Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: Array<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<&Array<T>> for Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: &Array<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<T> for Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: T) -> Self::Output {
                self.zip(&Array::scalar(rhs), |l, r| l $op r)
            }
        }

        impl<T> $trait<T> for &Array<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Array<T>>;
            fn $method(self, rhs: T) -> Self::Output {
                self.zip(&Array::scalar(rhs), |l, r| l $op r)
            }
        }
    };
}

binary_ops!(Add, add, +);
binary_ops!(Sub, sub, -);
binary_ops!(Mul, mul, *);
binary_ops!(Div, div, /);

// --- Negation ---

impl<T> Neg for &Array<T>
where
    T: Copy + One + Neg<Output = T> + Mul<Output = T>,
{
    type Output = Result<Array<T>>;
    fn neg(self) -> Self::Output {
        self.zip(&Array::scalar(-T::one()), |l, r| l * r)
    }
}

impl<T> Neg for Array<T>
where
    T: Copy + One + Neg<Output = T> + Mul<Output = T>,
{
    type Output = Result<Array<T>>;
    fn neg(self) -> Self::Output {
        -&self
    }
}
