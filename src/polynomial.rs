// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{Coefficient, PolynomialEval};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

pub mod bairstow;
pub mod durand_kerner;
pub mod roots;

use self::roots::{FindRootsError, RootFinderConfig, Roots};

/// A single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients().last()` is either `None` or `Some(v)` where `!v.is_zero()`
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self { coefficients };
        retval.remove_extra_zeros();
        retval
    }
}

impl<T: Zero> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    fn remove_extra_zeros(&mut self)
    where
        T: Zero,
    {
        while let Some(tail) = self.coefficients.last() {
            if tail.is_zero() {
                self.coefficients.pop();
            } else {
                break;
            }
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    pub fn is_monic(&self) -> bool {
        self.coefficients.last().map_or(false, One::is_one)
    }
    /// divides every coefficient by the leading coefficient
    pub fn to_monic(&self) -> Self {
        match self.coefficients.last() {
            Some(&lead) => self.iter().map(|&coefficient| coefficient / lead).collect(),
            None => Self::default(),
        }
    }
    /// see [`roots::find_roots`]
    pub fn find_roots(&self) -> Result<Roots<T::Real>, FindRootsError> {
        roots::find_roots(&self.coefficients)
    }
    pub fn find_roots_with_config(
        &self,
        config: &RootFinderConfig,
    ) -> Result<Roots<T::Real>, FindRootsError> {
        roots::find_roots_with_config(&self.coefficients, config)
    }
    /// see [`bairstow::find_roots_bairstow`]
    pub fn find_roots_bairstow(&self) -> Result<Roots<T::Real>, FindRootsError> {
        bairstow::find_roots_bairstow(&self.coefficients)
    }
    /// see [`durand_kerner::find_roots_durand_kerner`]; the polynomial must be monic
    pub fn find_roots_durand_kerner(&self) -> Result<Roots<T::Real>, FindRootsError> {
        durand_kerner::find_roots_durand_kerner(&self.coefficients)
    }
}

/// evaluates the polynomial with the given coefficients (ascending powers) at
/// `x` using Horner's method
pub fn eval_at<T: Coefficient>(coefficients: &[T], x: Complex<T::Real>) -> Complex<T::Real> {
    let mut iter = coefficients.iter().rev();
    if let Some(last) = iter.next() {
        let mut retval = last.to_complex();
        for coefficient in iter {
            retval = retval * x + coefficient.to_complex();
        }
        retval
    } else {
        Complex::zero()
    }
}

impl<'a, T: Coefficient> PolynomialEval<Complex<T::Real>> for &'a Polynomial<T> {
    fn eval(self, x: &Complex<T::Real>) -> Complex<T::Real> {
        eval_at(&self.coefficients, *x)
    }
}

impl<'a, T: Coefficient> PolynomialEval<Complex<T::Real>> for &'a [T] {
    fn eval(self, x: &Complex<T::Real>) -> Complex<T::Real> {
        eval_at(self, *x)
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::assert_roots_near;

    #[test]
    fn test_eval() {
        let x = Complex::new(10.0f64, 0.0);
        let poly = Polynomial::<f64>::from(vec![]);
        assert_eq!(poly.eval(&x), Complex::zero());
        let poly = Polynomial::from(vec![1.0]);
        assert_eq!(poly.eval(&x), Complex::new(1.0, 0.0));
        let poly = Polynomial::from(vec![1.0, 2.0]);
        assert_eq!(poly.eval(&x), Complex::new(21.0, 0.0));
        let poly = Polynomial::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(poly.eval(&x), Complex::new(321.0, 0.0));
        let poly = Polynomial::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(poly.eval(&x), Complex::new(4321.0, 0.0));
    }

    #[test]
    fn test_eval_complex() {
        // x^2 + 1 vanishes at i
        let i = Complex::new(0.0f32, 1.0);
        assert_eq!(eval_at(&[1.0f32, 0.0, 1.0], i), Complex::zero());
        // (1 + i) + 2x at x = i
        let coefficients = [Complex::new(1.0f64, 1.0), Complex::new(2.0, 0.0)];
        assert_eq!(
            (&coefficients[..]).eval(&Complex::new(0.0, 1.0)),
            Complex::new(1.0, 3.0)
        );
        assert_eq!(eval_at::<f64>(&[], Complex::new(2.0, 0.0)), Complex::zero());
    }

    #[test]
    fn test_display() {
        let mut poly = Polynomial::<f64>::from(vec![]);
        assert_eq!(format!("{}", poly), "0");
        poly = Polynomial::from(vec![1.0]);
        assert_eq!(format!("{}", poly), "1");
        poly = Polynomial::from(vec![1.0, 2.0]);
        assert_eq!(format!("{}", poly), "1 + 2*x");
        poly = Polynomial::from(vec![1.0, 2.0, 3.5]);
        assert_eq!(format!("{}", poly), "1 + 2*x + 3.5*x^2");
        poly = Polynomial::from(vec![1.0, 2.0, 3.0, 4.0, 0.0]);
        assert_eq!(format!("{}", poly), "1 + 2*x + 3*x^2 + 4*x^3");
    }

    #[test]
    fn test_degree_and_monic() {
        let poly = Polynomial::from(vec![4.0f32, 2.0, 0.0]);
        assert_eq!(poly.len(), 2);
        assert_eq!(poly.degree(), Some(1));
        assert!(!poly.is_monic());
        let monic = poly.to_monic();
        assert!(monic.is_monic());
        assert_eq!(monic.coefficients(), [2.0, 1.0]);
        let zero = Polynomial::<f32>::from(vec![0.0, 0.0]);
        assert!(zero.is_empty());
        assert_eq!(zero.degree(), None);
        assert!(!zero.is_monic());
        assert!(zero.to_monic().is_empty());
    }

    #[test]
    fn test_find_roots_methods() {
        // 2(x - 1)(x - 2)(x - 3)
        let poly: Polynomial<f64> = vec![-12.0, 22.0, -12.0, 2.0].into_iter().collect();
        let expected = [
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(3.0, 0.0),
        ];
        assert_roots_near(poly.find_roots().unwrap().roots(), &expected, 1e-4);
        assert_roots_near(
            poly.find_roots_with_config(&RootFinderConfig::default())
                .unwrap()
                .roots(),
            &expected,
            1e-4,
        );
        assert_roots_near(poly.find_roots_bairstow().unwrap().roots(), &expected, 1e-4);
        assert_eq!(
            poly.find_roots_durand_kerner(),
            Err(FindRootsError::NotMonic)
        );
        assert_roots_near(
            poly.to_monic().find_roots_durand_kerner().unwrap().roots(),
            &expected,
            1e-4,
        );
    }
}
