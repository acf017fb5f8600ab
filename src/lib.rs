// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Numerical polynomial root finding.
//!
//! Finds every complex root of a polynomial with real or complex
//! coefficients, using either Bairstow's method (the default, see
//! [`find_roots`]) or the Durand-Kerner method.
//!
//! ```
//! use findroots::find_roots;
//! // (x - 1)(x - 2)(x - 3), coefficients in ascending powers
//! let roots = find_roots(&[-6.0f64, 11.0, -6.0, 1.0]).unwrap();
//! assert!(roots.converged());
//! let mut real_parts: Vec<f64> = roots.iter().map(|root| root.re).collect();
//! real_parts.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! for (found, expected) in real_parts.iter().zip(&[1.0, 2.0, 3.0]) {
//!     assert!((found - expected).abs() < 1e-4);
//! }
//! ```

pub mod polynomial;
pub mod prelude;
pub mod traits;

mod python;
pub(crate) mod util;

pub use crate::polynomial::bairstow::{
    bairstow_refine, find_roots_bairstow, find_roots_bairstow_with_config,
};
pub use crate::polynomial::durand_kerner::{
    find_roots_durand_kerner, find_roots_durand_kerner_with_config,
};
pub use crate::polynomial::eval_at;
pub use crate::polynomial::roots::{
    find_roots, find_roots_with_config, Convergence, FindRootsError, RootFinderConfig, Roots,
};
pub use crate::polynomial::Polynomial;
pub use num_complex::Complex;
