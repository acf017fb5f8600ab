// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::eval_at;
use crate::polynomial::roots::{check_finite, FindRootsError, RootFinderConfig, Roots};
use crate::traits::Coefficient;
use crate::util::float_constant;
use num_complex::Complex;
use num_traits::{Float, One, Zero};
use std::mem;

/// angle between successive initial guesses, chosen so the guesses don't
/// line up with each other
const SEED_ANGLE: f64 = 1.1526;

/// finds all complex roots of the monic polynomial `polynomial` (ascending
/// powers) using the Durand-Kerner method
pub fn find_roots_durand_kerner<T: Coefficient>(
    polynomial: &[T],
) -> Result<Roots<T::Real>, FindRootsError> {
    find_roots_durand_kerner_with_config(polynomial, &RootFinderConfig::default())
}

/// finds all complex roots of the monic polynomial `polynomial` using the
/// Durand-Kerner method
///
/// All root estimates are refined together; the iteration stops once the
/// mean squared movement of the estimates, relative to the largest
/// coefficient modulus, drops below `config.tolerance`.
pub fn find_roots_durand_kerner_with_config<T: Coefficient>(
    polynomial: &[T],
    config: &RootFinderConfig,
) -> Result<Roots<T::Real>, FindRootsError> {
    let k = polynomial.len();
    if k < 2 {
        return Err(FindRootsError::DegreeTooSmall { len: k });
    }
    if !polynomial[k - 1].is_one() {
        return Err(FindRootsError::NotMonic);
    }
    check_finite(polynomial)?;

    let num_roots = k - 1;
    let tolerance: T::Real = config.tolerance_as();
    let max_iterations = config.iteration_limit();

    // at least one for a monic polynomial
    let gmax = polynomial
        .iter()
        .map(|coefficient| coefficient.norm())
        .fold(T::Real::zero(), Float::max);

    // the guesses all lie on a circle enclosing every root, rotated by
    // SEED_ANGLE from one to the next
    let radius = float_constant::<T::Real>(0.9) * (T::Real::one() + gmax);
    let rotation = Complex::from_polar(T::Real::one(), float_constant(SEED_ANGLE));
    let mut estimates: Vec<Complex<T::Real>> = Vec::with_capacity(num_roots);
    let mut seed = Complex::new(radius, T::Real::zero());
    for _ in 0..num_roots {
        estimates.push(seed);
        seed = seed * rotation;
    }
    let mut next = estimates.clone();

    let normalization = float_constant::<T::Real>(num_roots as f64) * gmax;
    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        for (j, next_estimate) in next.iter_mut().enumerate() {
            let estimate = estimates[j];
            let value = eval_at(polynomial, estimate);
            let denominator = estimates
                .iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .fold(Complex::one(), |product, (_, &other)| {
                    product * (estimate - other)
                });
            *next_estimate = estimate - value / denominator;
        }

        let delta = estimates
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).norm_sqr())
            .fold(T::Real::zero(), |sum, distance| sum + distance)
            / normalization;
        iterations += 1;
        log::trace!("durand-kerner [{}]: delta = {:?}", iterations, delta);

        mem::swap(&mut estimates, &mut next);
        if delta < tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "durand-kerner: degree {} polynomial did not converge after {} iterations",
            num_roots,
            iterations
        );
    }
    log::debug!(
        "durand-kerner: found {} roots in {} iterations (converged: {})",
        num_roots,
        iterations,
        converged
    );
    Ok(Roots::new(estimates, converged, iterations))
}
