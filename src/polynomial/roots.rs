// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::bairstow::find_roots_bairstow_with_config;
use crate::traits::Coefficient;
use crate::util::float_constant;
use num_complex::Complex;
use num_traits::Float;
use std::error::Error;
use std::fmt;
use std::ops::Deref;
use std::slice;
use std::vec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FindRootsError {
    /// fewer than 2 coefficients, so there is no root to find
    DegreeTooSmall { len: usize },
    /// Durand-Kerner requires the leading coefficient to be exactly one
    NotMonic,
    NonFiniteCoefficient { index: usize },
    /// the Bairstow refiner needs at least 3 coefficients
    RecursionPrecondition { len: usize },
    /// the leading coefficient of a (possibly deflated) polynomial is zero or
    /// so small that dividing by it overflows
    DegenerateLeadingCoefficient { len: usize },
    /// deflation of an odd-degree polynomial didn't end in a linear factor
    RemainderLength { len: usize },
    NoConvergence { iterations: usize },
}

impl fmt::Display for FindRootsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FindRootsError::DegreeTooSmall { len } => write!(
                f,
                "polynomial order must be greater than 0 (got {} coefficients)",
                len
            ),
            FindRootsError::NotMonic => write!(f, "leading coefficient must be equal to 1"),
            FindRootsError::NonFiniteCoefficient { index } => {
                write!(f, "coefficient {} is not finite", index)
            }
            FindRootsError::RecursionPrecondition { len } => write!(
                f,
                "invalid polynomial length for bairstow refinement: {}",
                len
            ),
            FindRootsError::DegenerateLeadingCoefficient { len } => write!(
                f,
                "leading coefficient of length {} polynomial is degenerate",
                len
            ),
            FindRootsError::RemainderLength { len } => write!(
                f,
                "deflation left a length {} remainder instead of a linear factor",
                len
            ),
            FindRootsError::NoConvergence { iterations } => {
                write!(f, "root finder did not converge after {} iterations", iterations)
            }
        }
    }
}

impl Error for FindRootsError {}

impl From<FindRootsError> for std::io::Error {
    fn from(err: FindRootsError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// iteration limits shared by both root finders
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootFinderConfig {
    /// hard cap on iterations per refinement; at least one iteration always runs
    pub max_iterations: usize,
    /// convergence threshold on the step size (Bairstow) or the normalized
    /// squared root movement (Durand-Kerner)
    pub tolerance: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-6,
        }
    }
}

impl RootFinderConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
    pub(crate) fn iteration_limit(&self) -> usize {
        self.max_iterations.max(1)
    }
    pub(crate) fn tolerance_as<R: Float>(&self) -> R {
        float_constant(self.tolerance)
    }
}

/// outcome of one iterative refinement
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Convergence {
    pub converged: bool,
    pub iterations: usize,
}

/// the roots of a polynomial together with whether the solver converged
///
/// roots are in extraction order, no ordering by magnitude or angle is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct Roots<R> {
    roots: Vec<Complex<R>>,
    converged: bool,
    iterations: usize,
}

impl<R> Roots<R> {
    pub(crate) fn new(roots: Vec<Complex<R>>, converged: bool, iterations: usize) -> Self {
        Self {
            roots,
            converged,
            iterations,
        }
    }
    pub fn roots(&self) -> &[Complex<R>] {
        &self.roots
    }
    pub fn into_roots(self) -> Vec<Complex<R>> {
        self.roots
    }
    /// `false` if any refinement stopped at the iteration cap
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// total iterations over all refinements
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn into_converged(self) -> Result<Vec<Complex<R>>, FindRootsError> {
        if self.converged {
            Ok(self.roots)
        } else {
            Err(FindRootsError::NoConvergence {
                iterations: self.iterations,
            })
        }
    }
}

impl<R> Deref for Roots<R> {
    type Target = [Complex<R>];
    fn deref(&self) -> &[Complex<R>] {
        &self.roots
    }
}

impl<R> IntoIterator for Roots<R> {
    type Item = Complex<R>;
    type IntoIter = vec::IntoIter<Complex<R>>;
    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Roots<R> {
    type Item = &'a Complex<R>;
    type IntoIter = slice::Iter<'a, Complex<R>>;
    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

pub(crate) fn check_finite<T: Coefficient>(coefficients: &[T]) -> Result<(), FindRootsError> {
    match coefficients.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(FindRootsError::NonFiniteCoefficient { index }),
        None => Ok(()),
    }
}

/// finds all complex roots of the polynomial with the given coefficients
/// (ascending powers), using Bairstow's method
pub fn find_roots<T: Coefficient>(coefficients: &[T]) -> Result<Roots<T::Real>, FindRootsError> {
    find_roots_with_config(coefficients, &RootFinderConfig::default())
}

pub fn find_roots_with_config<T: Coefficient>(
    coefficients: &[T],
    config: &RootFinderConfig,
) -> Result<Roots<T::Real>, FindRootsError> {
    find_roots_bairstow_with_config(coefficients, config)
}
