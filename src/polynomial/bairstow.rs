// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Bairstow's method: fit a quadratic factor `x^2 + u*x + v` to the polynomial
//! with a 2D Newton iteration, divide it out, and repeat on the quotient.

use crate::polynomial::roots::{
    check_finite, Convergence, FindRootsError, RootFinderConfig, Roots,
};
use crate::traits::Coefficient;
use crate::util::float_constant;
use num_complex::Complex;
use std::mem;

/// refines `(u, v)` until `x^2 + u*x + v` divides `polynomial`, writing the
/// quotient (`polynomial.len() - 2` coefficients) into `reduced`.
///
/// Hitting `config.max_iterations` is not an error: the returned
/// [`Convergence`] says whether the step size dropped below the tolerance.
pub fn bairstow_refine<T: Coefficient>(
    polynomial: &[T],
    reduced: &mut Vec<T>,
    u: &mut T,
    v: &mut T,
    config: &RootFinderConfig,
) -> Result<Convergence, FindRootsError> {
    let k = polynomial.len();
    if k < 3 {
        return Err(FindRootsError::RecursionPrecondition { len: k });
    }
    let p = polynomial;
    let tolerance: T::Real = config.tolerance_as();
    let max_iterations = config.iteration_limit();
    let half = T::from_real(float_constant(0.5));

    let mut u_value = *u;
    let mut v_value = *v;
    let n = k - 1;
    // b[n] and b[n - 1] (and likewise for f) stay zero
    let mut b = vec![T::zero(); k];
    let mut f = vec![T::zero(); k];

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        let (u, v) = (u_value, v_value);
        for i in (0..n - 1).rev() {
            b[i] = p[i + 2] - u * b[i + 1] - v * b[i + 2];
            f[i] = b[i + 2] - u * f[i + 1] - v * f[i + 2];
        }
        let c = p[1] - u * b[0] - v * b[1];
        let g = b[1] - u * f[0] - v * f[1];
        let d = p[0] - v * b[0];
        let h = b[0] - v * f[0];

        let q = T::one() / (v * g * g + h * (h - u * g));
        let du = -(q * (-h * c + g * d));
        let dv = -(q * (-g * v * c + (g * u - h) * d));
        iterations += 1;

        if du.is_finite() && dv.is_finite() {
            u_value = u + du;
            v_value = v + dv;
            let step = du.norm() + dv.norm();
            log::trace!(
                "bairstow [{}]: u = {:?}, v = {:?}, step = {:?}",
                iterations,
                u_value,
                v_value,
                step
            );
            if step < tolerance {
                converged = true;
                break;
            }
        } else {
            // singular step: shrink toward the origin and try again
            u_value = u * half;
            v_value = v * half;
            log::trace!("bairstow [{}]: singular step, damping u and v", iterations);
        }
    }

    reduced.clear();
    reduced.extend_from_slice(&b[..k - 2]);
    *u = u_value;
    *v = v_value;
    Ok(Convergence {
        converged,
        iterations,
    })
}

/// both roots of `x^2 + u*x + v`
fn quadratic_roots<T: Coefficient>(u: T, v: T) -> [Complex<T::Real>; 2] {
    let u = u.to_complex();
    let v = v.to_complex();
    let half: T::Real = float_constant(0.5);
    let four: T::Real = float_constant(4.0);
    let discriminant = (u * u - v * four).sqrt();
    [(-u + discriminant) * half, (-u - discriminant) * half]
}

fn linear_root<T: Coefficient>(polynomial: &[T]) -> Result<Complex<T::Real>, FindRootsError> {
    match *polynomial {
        [constant, lead] if !lead.is_zero() => Ok((-constant / lead).to_complex()),
        [_, _] => Err(FindRootsError::DegenerateLeadingCoefficient { len: 2 }),
        _ => Err(FindRootsError::RemainderLength {
            len: polynomial.len(),
        }),
    }
}

/// finds all complex roots of `polynomial` (ascending powers) by repeatedly
/// deflating quadratic factors; see [`find_roots_bairstow_with_config`].
pub fn find_roots_bairstow<T: Coefficient>(
    polynomial: &[T],
) -> Result<Roots<T::Real>, FindRootsError> {
    find_roots_bairstow_with_config(polynomial, &RootFinderConfig::default())
}

/// finds all complex roots of `polynomial` using Bairstow's method
///
/// The polynomial doesn't need to be monic. Roots come out in pairs, one pair
/// per deflated quadratic factor, followed by the root of the final linear
/// factor when the degree is odd.
///
/// Each factor is seeded from the two highest-degree coefficient ratios. When
/// both are zero and the Newton step is singular (`x^4 + 1`, `x^6 - 1`), the
/// damping fallback can't move `(u, v)` away from zero, so the result holds
/// zero roots with [`Roots::converged`] returning `false`.
pub fn find_roots_bairstow_with_config<T: Coefficient>(
    polynomial: &[T],
    config: &RootFinderConfig,
) -> Result<Roots<T::Real>, FindRootsError> {
    let k = polynomial.len();
    if k < 2 {
        return Err(FindRootsError::DegreeTooSmall { len: k });
    }
    check_finite(polynomial)?;

    let mut current = Vec::with_capacity(k);
    current.extend_from_slice(polynomial);
    let mut next = Vec::with_capacity(k);
    let mut roots = Vec::with_capacity(k - 1);
    let mut converged = true;
    let mut iterations = 0;

    let parity = k % 2;
    let half_len = (k - parity) / 2;
    for _ in 0..half_len - 1 + parity {
        let n = current.len();
        let lead = current[n - 1];
        let mut u = current[n - 2] / lead;
        let mut v = current[n - 3] / lead;
        if lead.is_zero() || !u.is_finite() || !v.is_finite() {
            return Err(FindRootsError::DegenerateLeadingCoefficient { len: n });
        }

        let status = bairstow_refine(&current, &mut next, &mut u, &mut v, config)?;
        if !status.converged {
            log::warn!(
                "bairstow: quadratic factor of length {} polynomial did not converge after {} iterations",
                n,
                status.iterations
            );
        }
        converged &= status.converged;
        iterations += status.iterations;

        let factor_roots = quadratic_roots(u, v);
        log::debug!(
            "bairstow: factor x^2 + ({:?})*x + ({:?}) has roots {:?}",
            u,
            v,
            factor_roots
        );
        roots.extend_from_slice(&factor_roots);
        mem::swap(&mut current, &mut next);
    }

    if parity == 0 {
        roots.push(linear_root(&current)?);
    }
    debug_assert_eq!(roots.len(), k - 1);
    log::debug!(
        "bairstow: found {} roots in {} iterations (converged: {})",
        roots.len(),
        iterations,
        converged
    );
    Ok(Roots::new(roots, converged, iterations))
}
