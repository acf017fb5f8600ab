// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

#![cfg(feature = "python")]

use crate::polynomial::bairstow::find_roots_bairstow_with_config;
use crate::polynomial::durand_kerner::find_roots_durand_kerner_with_config;
use crate::polynomial::roots::{find_roots_with_config, FindRootsError, RootFinderConfig, Roots};
use num_complex::Complex64;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn make_config(max_iterations: Option<usize>, tolerance: Option<f64>) -> RootFinderConfig {
    let mut config = RootFinderConfig::default();
    if let Some(max_iterations) = max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    config
}

fn into_py_result(result: Result<Roots<f64>, FindRootsError>) -> PyResult<Vec<Complex64>> {
    result
        .and_then(Roots::into_converged)
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// returns the complex roots of the polynomial with the given coefficients
/// (ascending powers) using Bairstow's method
#[pyfunction]
#[pyo3(text_signature = "(coefficients, max_iterations=None, tolerance=None)")]
fn find_roots(
    py: Python,
    coefficients: Vec<Complex64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
) -> PyResult<Vec<Complex64>> {
    let config = make_config(max_iterations, tolerance);
    into_py_result(py.allow_threads(|| find_roots_with_config(&coefficients, &config)))
}

#[pyfunction]
#[pyo3(text_signature = "(coefficients, max_iterations=None, tolerance=None)")]
fn find_roots_bairstow(
    py: Python,
    coefficients: Vec<Complex64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
) -> PyResult<Vec<Complex64>> {
    let config = make_config(max_iterations, tolerance);
    into_py_result(py.allow_threads(|| find_roots_bairstow_with_config(&coefficients, &config)))
}

/// the leading coefficient must be exactly 1
#[pyfunction]
#[pyo3(text_signature = "(coefficients, max_iterations=None, tolerance=None)")]
fn find_roots_durand_kerner(
    py: Python,
    coefficients: Vec<Complex64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
) -> PyResult<Vec<Complex64>> {
    let config = make_config(max_iterations, tolerance);
    into_py_result(
        py.allow_threads(|| find_roots_durand_kerner_with_config(&coefficients, &config)),
    )
}

#[pymodule]
fn findroots(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_roots, m)?)?;
    m.add_function(wrap_pyfunction!(find_roots_bairstow, m)?)?;
    m.add_function(wrap_pyfunction!(find_roots_durand_kerner, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_config() {
        assert_eq!(make_config(None, None), RootFinderConfig::default());
        let config = make_config(Some(10), Some(1e-9));
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn test_into_py_result() {
        let roots = Roots::new(vec![Complex64::new(3.0, 0.0)], true, 2);
        assert_eq!(
            into_py_result(Ok(roots)).unwrap(),
            [Complex64::new(3.0, 0.0)]
        );
    }
}
