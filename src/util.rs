// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::{Float, NumCast};

/// converts a literal into the working float type
pub(crate) fn float_constant<R: Float>(value: f64) -> R {
    <R as NumCast>::from(value).expect("float constant is representable")
}

#[cfg(test)]
pub(crate) mod tests {
    use num_complex::Complex;
    use num_traits::Float;
    use std::fmt;

    /// expands `lead * (x - roots[0]) * (x - roots[1]) * ...` into ascending
    /// coefficients
    pub(crate) fn poly_from_roots<R: Float>(roots: &[Complex<R>], lead: Complex<R>) -> Vec<Complex<R>> {
        let mut coefficients = vec![lead];
        for &root in roots {
            let mut next = vec![Complex::new(R::zero(), R::zero()); coefficients.len() + 1];
            for (power, &coefficient) in coefficients.iter().enumerate() {
                next[power + 1] = next[power + 1] + coefficient;
                next[power] = next[power] - coefficient * root;
            }
            coefficients = next;
        }
        coefficients
    }

    pub(crate) fn real_poly_from_roots(roots: &[f64]) -> Vec<f64> {
        let roots: Vec<_> = roots.iter().map(|&root| Complex::new(root, 0.0)).collect();
        poly_from_roots(&roots, Complex::new(1.0, 0.0))
            .into_iter()
            .map(|coefficient| coefficient.re)
            .collect()
    }

    /// pairs every found root with the nearest not yet used expected root and
    /// returns the largest distance between paired roots
    pub(crate) fn max_root_error<R: Float>(found: &[Complex<R>], expected: &[Complex<R>]) -> R {
        assert_eq!(found.len(), expected.len(), "root count mismatch");
        let mut remaining: Vec<Complex<R>> = expected.to_vec();
        let mut max_error = R::zero();
        for root in found {
            let (index, error) = remaining
                .iter()
                .map(|candidate| (*candidate - *root).norm())
                .enumerate()
                .fold((0, R::infinity()), |best, (index, error)| {
                    if error < best.1 {
                        (index, error)
                    } else {
                        best
                    }
                });
            remaining.swap_remove(index);
            if !(error <= max_error) {
                max_error = error;
            }
        }
        max_error
    }

    #[track_caller]
    pub(crate) fn assert_roots_near<R: Float + fmt::Debug>(
        found: &[Complex<R>],
        expected: &[Complex<R>],
        tolerance: R,
    ) {
        println!("found: {:?}", found);
        println!("expected: {:?}", expected);
        let error = max_root_error(found, expected);
        assert!(
            error < tolerance,
            "max root error {:?} not below {:?}",
            error,
            tolerance
        );
    }

    #[test]
    fn test_poly_from_roots() {
        assert_eq!(real_poly_from_roots(&[1.0, 2.0, 3.0]), [-6.0, 11.0, -6.0, 1.0]);
        let i = Complex::new(0.0, 1.0);
        assert_eq!(
            poly_from_roots(&[i, -i], Complex::new(2.0, 0.0)),
            [
                Complex::new(2.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_max_root_error() {
        let expected = [Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)];
        let found = [Complex::new(2.0, 0.5), Complex::new(1.0, 0.0)];
        assert_eq!(max_root_error(&found, &expected), 0.5);
    }
}
