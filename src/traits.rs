// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_complex::Complex;
use num_traits::{Float, Num};
use std::fmt;
use std::ops::Neg;

/// field element a polynomial's coefficients are drawn from
///
/// the root finders are written once over this trait; complex arithmetic is
/// always available through [`Coefficient::to_complex`] even when the
/// coefficients themselves are real.
pub trait Coefficient: Num + Copy + Neg<Output = Self> + fmt::Debug {
    /// the underlying float type, also the component type of the roots
    type Real: Float + fmt::Debug;
    fn from_real(value: Self::Real) -> Self;
    fn to_complex(self) -> Complex<Self::Real>;
    /// modulus (absolute value)
    fn norm(self) -> Self::Real;
    fn is_finite(self) -> bool;
}

macro_rules! impl_real_coefficient {
    ($t:ty) => {
        impl Coefficient for $t {
            type Real = $t;
            fn from_real(value: $t) -> Self {
                value
            }
            fn to_complex(self) -> Complex<$t> {
                Complex::new(self, 0.0)
            }
            fn norm(self) -> $t {
                self.abs()
            }
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_real_coefficient!(f32);
impl_real_coefficient!(f64);

macro_rules! impl_complex_coefficient {
    ($t:ty) => {
        impl Coefficient for Complex<$t> {
            type Real = $t;
            fn from_real(value: $t) -> Self {
                Complex::new(value, 0.0)
            }
            fn to_complex(self) -> Complex<$t> {
                self
            }
            fn norm(self) -> $t {
                Complex::norm(self)
            }
            fn is_finite(self) -> bool {
                Complex::is_finite(self)
            }
        }
    };
}

impl_complex_coefficient!(f32);
impl_complex_coefficient!(f64);

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}
